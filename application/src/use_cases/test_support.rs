//! Stub ports shared by the use case tests.

use crate::ports::credentials::{CredentialSource, StaticCredentials};
use crate::ports::model_gateway::{GatewayError, ModelGateway, ModelHandle};
use crate::ports::statistics::{StatisticsError, StatisticsProvider};
use async_trait::async_trait;
use intel_domain::{
    ApiCredential, CredentialKey, DatasetStats, GENERATE_CONTENT, IncidentStats, Model,
    ModelDescriptor, ModelReply, TicketStats,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What a stub handle does when asked to generate
#[derive(Clone)]
pub(crate) enum GenerateBehavior {
    Reply(ModelReply),
    Fail(fn() -> GatewayError),
    Hang,
}

/// Call-counting gateway
pub(crate) struct CountingGateway {
    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub generate_calls: Arc<AtomicUsize>,
    pub last_prompt: Arc<Mutex<Option<String>>>,
    /// `None` makes listing fail
    listed: Option<Vec<ModelDescriptor>>,
    unavailable: Vec<Model>,
    behavior: GenerateBehavior,
    list_delay: Duration,
}

impl CountingGateway {
    pub fn replying(text: &str) -> Self {
        Self::with_behavior(GenerateBehavior::Reply(ModelReply::from_text(text)))
    }

    pub fn with_behavior(behavior: GenerateBehavior) -> Self {
        Self {
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            generate_calls: Arc::new(AtomicUsize::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
            listed: Some(vec![
                ModelDescriptor::new("models/gemini-1.5-pro", &[GENERATE_CONTENT]),
                ModelDescriptor::new("models/gemini-1.5-flash", &[GENERATE_CONTENT]),
            ]),
            unavailable: Vec::new(),
            behavior,
            list_delay: Duration::ZERO,
        }
    }

    pub fn with_listing(mut self, listed: Option<Vec<ModelDescriptor>>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_unavailable(mut self, models: Vec<Model>) -> Self {
        self.unavailable = models;
        self
    }

    pub fn with_list_delay(mut self, delay: Duration) -> Self {
        self.list_delay = delay;
        self
    }

    pub fn network_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
            + self.create_calls.load(Ordering::SeqCst)
            + self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn generated(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelGateway for CountingGateway {
    async fn list_models(
        &self,
        _credential: &ApiCredential,
    ) -> Result<Vec<ModelDescriptor>, GatewayError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if !self.list_delay.is_zero() {
            tokio::time::sleep(self.list_delay).await;
        }
        self.listed
            .clone()
            .ok_or_else(|| GatewayError::ConnectionError("listing unavailable".to_string()))
    }

    async fn create_model(
        &self,
        _credential: &ApiCredential,
        model: &Model,
    ) -> Result<Box<dyn ModelHandle>, GatewayError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.contains(model) {
            return Err(GatewayError::ModelNotAvailable(model.to_string()));
        }
        Ok(Box::new(CountingHandle {
            model: model.clone(),
            behavior: self.behavior.clone(),
            calls: Arc::clone(&self.generate_calls),
            last_prompt: Arc::clone(&self.last_prompt),
        }))
    }
}

struct CountingHandle {
    model: Model,
    behavior: GenerateBehavior,
    calls: Arc<AtomicUsize>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

#[async_trait]
impl ModelHandle for CountingHandle {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<ModelReply, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.behavior {
            GenerateBehavior::Reply(reply) => Ok(reply.clone()),
            GenerateBehavior::Fail(make) => Err(make()),
            GenerateBehavior::Hang => {
                std::future::pending::<Result<ModelReply, GatewayError>>().await
            }
        }
    }
}

/// Credential source that counts lookups
pub(crate) struct CountingCredentials {
    inner: StaticCredentials,
    pub lookups: AtomicUsize,
}

impl CountingCredentials {
    pub fn new(inner: StaticCredentials) -> Self {
        Self {
            inner,
            lookups: AtomicUsize::new(0),
        }
    }
}

impl CredentialSource for CountingCredentials {
    fn lookup(&self, key: &CredentialKey) -> Option<ApiCredential> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.lookup(key)
    }
}

/// Every domain's default key set to a dummy secret
pub(crate) fn all_credentials() -> StaticCredentials {
    StaticCredentials::new()
        .with("GEMINI_API_KEY_CYBER", "cyber-secret")
        .with("GEMINI_API_KEY_DATA", "data-secret")
        .with("GEMINI_API_KEY_IT", "it-secret")
}

/// Fixed statistics, or a failing store
#[derive(Default)]
pub(crate) struct FixedStatistics {
    pub incidents: IncidentStats,
    pub datasets: DatasetStats,
    pub tickets: TicketStats,
    pub failing: bool,
    pub queries: AtomicUsize,
}

impl FixedStatistics {
    fn check(&self) -> Result<(), StatisticsError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            Err(StatisticsError::Unavailable("database is locked".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl StatisticsProvider for FixedStatistics {
    async fn incident_stats(&self) -> Result<IncidentStats, StatisticsError> {
        self.check()?;
        Ok(self.incidents.clone())
    }

    async fn dataset_stats(&self) -> Result<DatasetStats, StatisticsError> {
        self.check()?;
        Ok(self.datasets.clone())
    }

    async fn ticket_stats(&self) -> Result<TicketStats, StatisticsError> {
        self.check()?;
        Ok(self.tickets.clone())
    }
}
