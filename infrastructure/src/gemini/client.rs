//! HTTP client for the Generative Language REST API

use super::error::{GeminiError, Result};
use super::protocol::ErrorEnvelope;
use intel_domain::ApiCredential;
use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::trace;

/// Default service root
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default API version path segment
pub const DEFAULT_API_VERSION: &str = "v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Shared HTTP state; carries no credential
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_version: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, api_version: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self::with_http(http, base_url, api_version))
    }

    pub fn with_http(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_version: api_version.into().trim_matches('/').to_string(),
        }
    }

    /// Absolute URL for a resource path such as `models/gemini-pro`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.api_version, path)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        credential: &ApiCredential,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let request = self.http.get(self.url(path)).query(query);
        self.send(credential, request).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        credential: &ApiCredential,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.http.post(self.url(path)).json(body);
        self.send(credential, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        credential: &ApiCredential,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request
            .header(API_KEY_HEADER, credential.expose())
            .send()
            .await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    trace!("Gemini response {}: {} bytes", status, body.len());

    if !status.is_success() {
        return Err(ErrorEnvelope::into_error(status.as_u16(), &body));
    }
    serde_json::from_str(&body).map_err(|e| GeminiError::ParseError {
        error: e.to_string(),
        raw: body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_segments() {
        let client = GeminiClient::with_http(
            reqwest::Client::new(),
            "http://localhost:8080/",
            "/v1beta/",
        );
        assert_eq!(
            client.url("models/gemini-pro:generateContent"),
            "http://localhost:8080/v1beta/models/gemini-pro:generateContent"
        );
    }
}
