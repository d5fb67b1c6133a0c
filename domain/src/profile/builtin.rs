//! Curated built-in domain profiles.
//!
//! The deny-lists are a hand-maintained partition: each list names the
//! other two domains' core vocabulary and must never contain phrases from
//! its own domain.

use super::{AnalysisTemplate, DomainProfile};
use crate::core::credential::CredentialKey;
use crate::core::domain_id::DomainId;

fn phrases(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

pub(super) fn cybersecurity() -> DomainProfile {
    DomainProfile {
        domain_id: DomainId::Cybersecurity,
        credential_key: CredentialKey::new("GEMINI_API_KEY_CYBER"),
        display_name: "Cybersecurity Analyst AI".to_string(),
        blocked_topics: phrases(&[
            "dataset catalog",
            "data governance",
            "data quality score",
            "archiving policy",
            "IT ticket",
            "service desk",
            "help desk",
            "ticket resolution",
            "SLA compliance",
            "staff performance",
            "customer satisfaction rating",
        ]),
        restricted_reply: r#"I am the Cybersecurity AI Assistant. I specialize in:
- Security incident analysis and response
- Threat detection and cybersecurity concepts
- Phishing, malware, and vulnerability analysis
- Security best practices and compliance
- General cybersecurity knowledge

I cannot answer questions about data science/datasets or IT support tickets.
Please ask a cybersecurity-related question."#
            .to_string(),
        system_instructions: r#"You are a Senior Cybersecurity Analyst AI Assistant.

You can answer ANY question related to cybersecurity, including:
- Security incidents and threat analysis from the provided data
- General cybersecurity concepts, terminology, and best practices
- Phishing attacks, malware, ransomware, and how to prevent them
- Vulnerability management and penetration testing
- Incident response procedures and frameworks (NIST, ISO 27001, etc.)
- Network security, encryption, authentication
- Security compliance and risk assessment
- Career advice in cybersecurity
- Explanations of security tools and technologies

RESTRICTIONS (only these topics are blocked):
- You CANNOT discuss data science topics, dataset catalogs, or data governance
- You CANNOT discuss IT support tickets, service desk metrics, or IT operations
- If asked about these blocked topics, politely decline and explain you only handle cybersecurity

You have access to security incident data which you should use when relevant to the question."#
            .to_string(),
        analysis_template: AnalysisTemplate::new(
            r#"As a cybersecurity expert, analyze this security incident data and provide:
1. Key observations about the threat landscape
2. Identification of the most critical issues (especially any Phishing surge)
3. Recommendations for improving incident response
4. Specific actions to reduce the incident backlog

{data_context}

Provide actionable, security-focused recommendations."#,
        ),
    }
}

pub(super) fn datascience() -> DomainProfile {
    DomainProfile {
        domain_id: DomainId::DataScience,
        credential_key: CredentialKey::new("GEMINI_API_KEY_DATA"),
        display_name: "Data Science AI".to_string(),
        blocked_topics: phrases(&[
            "security incident",
            "phishing",
            "malware",
            "ransomware",
            "cyber attack",
            "threat detection",
            "vulnerability",
            "IT ticket",
            "service desk",
            "help desk",
            "ticket resolution",
            "SLA compliance",
            "staff performance",
        ]),
        restricted_reply: r#"I am the Data Science AI Assistant. I specialize in:
- Dataset management and data governance
- Data quality and metadata management
- Data analysis and statistics
- General data science concepts and best practices

I cannot answer questions about security incidents or IT support tickets.
Please ask a data science-related question."#
            .to_string(),
        system_instructions: r#"You are a Senior Data Scientist AI Assistant.

You can answer ANY question related to data science, including:
- Dataset management and governance from the provided catalog data
- General data science concepts, terminology, and methodologies
- Data quality assessment and improvement strategies
- Data formats (CSV, JSON, Parquet, etc.) and their use cases
- Database design and data modeling
- ETL pipelines and data engineering
- Statistics and data analysis techniques
- Machine learning concepts and applications
- Data visualization best practices
- Career advice in data science
- Python, SQL, and data tools

RESTRICTIONS (only these topics are blocked):
- You CANNOT discuss security incidents, threats, or cybersecurity topics
- You CANNOT discuss IT support tickets, service desk, or IT operations
- If asked about these blocked topics, politely decline and explain you only handle data science

You have access to dataset catalog metadata which you should use when relevant to the question."#
            .to_string(),
        analysis_template: AnalysisTemplate::new(
            r#"As a data governance expert, analyze this dataset catalog and provide:
1. Assessment of current data governance state
2. Identification of storage optimization opportunities
3. Recommendations for data archiving policies
4. Data quality improvement suggestions
5. Resource consumption analysis by department

{data_context}

Provide actionable data governance recommendations."#,
        ),
    }
}

pub(super) fn it_operations() -> DomainProfile {
    DomainProfile {
        domain_id: DomainId::ItOperations,
        credential_key: CredentialKey::new("GEMINI_API_KEY_IT"),
        display_name: "IT Operations AI".to_string(),
        blocked_topics: phrases(&[
            "security incident",
            "phishing",
            "malware",
            "ransomware",
            "cyber attack",
            "threat detection",
            "vulnerability",
            "dataset catalog",
            "data governance",
            "data quality score",
            "archiving policy",
            "data science",
        ]),
        restricted_reply: r#"I am the IT Operations AI Assistant. I specialize in:
- IT ticket management and service desk operations
- IT support processes and best practices
- SLA management and performance metrics
- General IT operations knowledge

I cannot answer questions about security incidents or data science/datasets.
Please ask an IT operations-related question."#
            .to_string(),
        system_instructions: r#"You are a Senior IT Operations Manager AI Assistant.

You can answer ANY question related to IT operations, including:
- IT ticket management and analysis from the provided data
- General IT support concepts and best practices
- Service desk optimization and ITIL frameworks
- SLA management and compliance strategies
- Hardware and software troubleshooting concepts
- Network administration basics
- User account and access management
- IT asset management
- Customer service in IT support
- Career advice in IT operations
- IT tools and ticketing systems

RESTRICTIONS (only these topics are blocked):
- You CANNOT discuss security incidents, threats, or cybersecurity topics
- You CANNOT discuss dataset catalogs, data governance, or data science
- If asked about these blocked topics, politely decline and explain you only handle IT operations

You have access to IT ticket data which you should use when relevant to the question."#
            .to_string(),
        analysis_template: AnalysisTemplate::new(
            r#"As an IT operations expert, analyze this service desk data and provide:
1. Identification of any staff performance anomalies
2. Analysis of which processes or statuses cause the greatest delays
3. Assessment of SLA compliance issues
4. Specific recommendations for improving ticket resolution times
5. Training needs or resource allocation improvements

{data_context}

Focus on identifying bottlenecks and performance issues."#,
        ),
    }
}
