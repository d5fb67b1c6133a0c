//! Assistant registry.
//!
//! Owns at most one [`DomainAssistant`] per domain for the life of the
//! process. The first `get` for a domain configures its assistant; every
//! later or concurrent `get` observes that same instance.

use crate::config::AssistantBehavior;
use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::ports::credentials::CredentialSource;
use crate::ports::model_gateway::ModelGateway;
use crate::ports::statistics::StatisticsProvider;
use crate::use_cases::domain_assistant::{AssistantStatus, DomainAssistant};
use intel_domain::{DomainId, ProfileCatalog};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

/// Lazily-configured, process-wide assistants
pub struct AssistantRegistry {
    catalog: Arc<ProfileCatalog>,
    credentials: Arc<dyn CredentialSource>,
    gateway: Arc<dyn ModelGateway>,
    statistics: Option<Arc<dyn StatisticsProvider>>,
    behavior: AssistantBehavior,
    conversation_logger: Arc<dyn ConversationLogger>,
    cybersecurity: OnceCell<Arc<DomainAssistant>>,
    datascience: OnceCell<Arc<DomainAssistant>>,
    it_operations: OnceCell<Arc<DomainAssistant>>,
}

impl AssistantRegistry {
    pub fn new(
        catalog: Arc<ProfileCatalog>,
        credentials: Arc<dyn CredentialSource>,
        gateway: Arc<dyn ModelGateway>,
    ) -> Self {
        Self {
            catalog,
            credentials,
            gateway,
            statistics: None,
            behavior: AssistantBehavior::default(),
            conversation_logger: Arc::new(NoConversationLogger),
            cybersecurity: OnceCell::new(),
            datascience: OnceCell::new(),
            it_operations: OnceCell::new(),
        }
    }

    pub fn with_behavior(mut self, behavior: AssistantBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Attach the store every chat and analysis reads its figures from.
    pub fn with_statistics(mut self, statistics: Arc<dyn StatisticsProvider>) -> Self {
        self.statistics = Some(statistics);
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    fn slot(&self, domain: DomainId) -> &OnceCell<Arc<DomainAssistant>> {
        match domain {
            DomainId::Cybersecurity => &self.cybersecurity,
            DomainId::DataScience => &self.datascience,
            DomainId::ItOperations => &self.it_operations,
        }
    }

    /// The assistant for `domain`, configuring it on first use.
    ///
    /// Concurrent first calls wait for a single configuration attempt.
    pub async fn get(&self, domain: DomainId) -> Arc<DomainAssistant> {
        let assistant = self
            .slot(domain)
            .get_or_init(|| async {
                debug!("Configuring assistant for {}", domain);
                let assistant = DomainAssistant::configure(
                    self.catalog.get(domain),
                    self.credentials.as_ref(),
                    self.gateway.as_ref(),
                    self.behavior.clone(),
                    Arc::clone(&self.conversation_logger),
                )
                .await;
                Arc::new(assistant)
            })
            .await;
        Arc::clone(assistant)
    }

    /// The assistant for `domain` if it has already been configured
    pub fn get_if_initialized(&self, domain: DomainId) -> Option<Arc<DomainAssistant>> {
        self.slot(domain).get().cloned()
    }

    /// Chat with `domain`'s assistant using the attached statistics
    pub async fn chat(&self, domain: DomainId, message: &str) -> String {
        self.get(domain)
            .await
            .chat(message, self.statistics.as_deref())
            .await
    }

    /// Auto-analysis of `domain`'s data using the attached statistics
    pub async fn analyze(&self, domain: DomainId) -> String {
        self.get(domain).await.analyze(self.statistics.as_deref()).await
    }

    /// Readiness of every domain, configuring any not yet used
    pub async fn status(&self) -> Vec<AssistantStatus> {
        let mut report = Vec::with_capacity(DomainId::ALL.len());
        for domain in DomainId::ALL {
            report.push(self.get(domain).await.status());
        }
        report
    }

    pub fn catalog(&self) -> &ProfileCatalog {
        &self.catalog
    }
}
