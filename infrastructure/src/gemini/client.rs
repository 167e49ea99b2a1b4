//! HTTP client for the Gemini REST API

use super::error::{GeminiError, Result};
use super::types::{GenerateContentRequest, GenerateContentResponse};
use medicore_domain::Model;
use std::time::Duration;
use tracing::{debug, trace};

/// Public Gemini endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub base_url: String,
    /// Whole-request timeout; `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl GeminiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Thin wrapper over `reqwest` for `generateContent` calls.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(settings: GeminiSettings) -> Result<Self> {
        if settings.api_key.trim().is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GeminiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key,
        })
    }

    /// `generateContent` URL for `model`.
    pub fn endpoint(&self, model: &Model) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            model.as_str()
        )
    }

    pub async fn generate_content(
        &self,
        model: &Model,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint(model);
        debug!(model = %model, contents = request.contents.len(), "Calling generateContent");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        trace!(bytes = body.len(), "generateContent response received");
        serde_json::from_str(&body).map_err(|e| GeminiError::ParseError {
            error: e.to_string(),
            raw: body,
        })
    }
}
