//! Gemini Model Gateway implementation

use super::client::{DEFAULT_API_VERSION, DEFAULT_BASE_URL, GeminiClient};
use super::protocol::{GenerateContentRequest, GenerateContentResponse, ModelList};
use async_trait::async_trait;
use intel_application::ports::model_gateway::{GatewayError, ModelGateway, ModelHandle};
use intel_domain::{ApiCredential, Model, ModelDescriptor, ModelReply};
use std::sync::Arc;
use tracing::debug;

const PAGE_SIZE: &str = "1000";

/// Model gateway for the Gemini REST API
#[derive(Debug, Clone)]
pub struct GeminiGateway {
    client: Arc<GeminiClient>,
}

impl GeminiGateway {
    /// Gateway against the public endpoint
    pub fn new() -> Result<Self, GatewayError> {
        Self::with_endpoint(DEFAULT_BASE_URL, DEFAULT_API_VERSION)
    }

    /// Gateway against a custom endpoint (proxies, tests)
    pub fn with_endpoint(base_url: &str, api_version: &str) -> Result<Self, GatewayError> {
        let client = GeminiClient::new(base_url, api_version).map_err(GatewayError::from)?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: GeminiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    async fn list_models(
        &self,
        credential: &ApiCredential,
    ) -> Result<Vec<ModelDescriptor>, GatewayError> {
        let mut descriptors = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut query = vec![("pageSize", PAGE_SIZE)];
            if let Some(token) = page_token.as_deref() {
                query.push(("pageToken", token));
            }
            let page: ModelList = self.client.get(credential, "models", &query).await?;
            descriptors.extend(page.models.into_iter().map(ModelDescriptor::from));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }
        debug!("Gemini listed {} models", descriptors.len());
        Ok(descriptors)
    }

    /// Bind `model` to `credential` without contacting the API.
    ///
    /// A rejected key or unknown model surfaces on the first `generate`.
    async fn create_model(
        &self,
        credential: &ApiCredential,
        model: &Model,
    ) -> Result<Box<dyn ModelHandle>, GatewayError> {
        Ok(Box::new(GeminiModel {
            client: Arc::clone(&self.client),
            credential: credential.clone(),
            model: model.clone(),
        }))
    }
}

/// A Gemini model bound to one domain's credential
pub struct GeminiModel {
    client: Arc<GeminiClient>,
    credential: ApiCredential,
    model: Model,
}

#[async_trait]
impl ModelHandle for GeminiModel {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<ModelReply, GatewayError> {
        let response: GenerateContentResponse = self
            .client
            .post(
                &self.credential,
                &format!("models/{}:generateContent", self.model),
                &GenerateContentRequest::user_prompt(prompt),
            )
            .await?;
        Ok(response.into_reply()?)
    }
}
