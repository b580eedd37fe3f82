use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::{error::ApiError, request::ApiRequest};
use crate::{config, state::session::Session};

/// Envelope `code` the backend uses for success.
pub const SUCCESS_CODE: i32 = 200;

/// Sends a request descriptor and resolves to the unwrapped response `data`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// `{code, message, data}` wrapper around every backend response.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub code: i32,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    pub fn into_data(self) -> Result<Value, ApiError> {
        if self.code == SUCCESS_CODE {
            return Ok(self.data);
        }
        Err(ApiError::Rejected {
            code: self.code,
            message: self
                .message
                .unwrap_or_else(|| format!("Request rejected with code {}", self.code)),
        })
    }
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Option<String>,
    timeout: Option<Duration>,
    session: Session,
}

impl HttpTransport {
    pub fn new(session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            timeout: None,
            session,
        }
    }

    pub fn new_with_base_url(session: Session, base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(config::normalize_base_url(&base_url.into())),
            ..Self::new(session)
        }
    }

    /// Overrides the runtime-config timeout for every request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    // Read per request: on wasm the configured value arrives with
    // ./config.json, after the transport was built.
    fn request_timeout(&self) -> Duration {
        self.timeout.unwrap_or_else(config::request_timeout)
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }
}

fn status_message(body: &str, fallback: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<Envelope>(body) {
        if let Some(message) = envelope.message.filter(|m| !m.is_empty()) {
            return message;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url, request.path);
        log::debug!("{} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .timeout(self.request_timeout());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            log::warn!("{} {} failed: {}", request.method, request.path, e);
            ApiError::network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = status_message(&body, status.canonical_reason().unwrap_or("Request failed"));
            log::warn!("{} {} -> {}", request.method, request.path, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;
        envelope.into_data()
    }
}
