use std::time::Duration;

use serde_json::json;

use crate::types::RejectionBody;
use crate::{FailureKind, StatusResponse, TransportError};

#[derive(Debug, Clone)]
pub struct TransportSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The four-and-a-half calls the server understands. Everything is
/// fire-and-forget from the caller's perspective except `fetch_status`,
/// whose payload is consumed structurally, and `register`, whose rejection
/// text is surfaced.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn fetch_status(&self, last_counter: u64) -> Result<StatusResponse, TransportError>;
    async fn register(&self, username: &str) -> Result<(), TransportError>;
    async fn choose(&self, value: &str) -> Result<(), TransportError>;
    async fn reveal(&self) -> Result<(), TransportError>;
    async fn clear(&self) -> Result<(), TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    base: reqwest::Url,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: &str, settings: TransportSettings) -> Result<Self, TransportError> {
        let mut base = reqwest::Url::parse(base_url)
            .map_err(|err| TransportError::new(FailureKind::InvalidUrl, err.to_string()))?;
        // Endpoint names join relative to the session path.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| TransportError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { base, client })
    }

    fn endpoint(&self, name: &str) -> Result<reqwest::Url, TransportError> {
        self.base
            .join(name)
            .map_err(|err| TransportError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    /// GET with no body; the response body is never consumed.
    async fn bodiless(&self, name: &str) -> Result<(), TransportError> {
        let response = self
            .client
            .get(self.endpoint(name)?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn fetch_status(&self, last_counter: u64) -> Result<StatusResponse, TransportError> {
        let response = self
            .client
            .post(self.endpoint("status")?)
            .json(&json!({ "lastCounter": last_counter }))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        response
            .json::<StatusResponse>()
            .await
            .map_err(|err| TransportError::new(FailureKind::Decode, err.to_string()))
    }

    async fn register(&self, username: &str) -> Result<(), TransportError> {
        let response = self
            .client
            .post(self.endpoint("register")?)
            .json(&json!({ "username": username }))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        // A rejection may carry a structured error body worth surfacing.
        let body = response.bytes().await.unwrap_or_default();
        if let Ok(rejection) = serde_json::from_slice::<RejectionBody>(&body) {
            if let Some(error) = rejection.error {
                return Err(TransportError::new(FailureKind::Rejected, error));
            }
        }
        Err(TransportError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ))
    }

    async fn choose(&self, value: &str) -> Result<(), TransportError> {
        let response = self
            .client
            .post(self.endpoint("choose")?)
            .json(&json!({ "value": value }))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(())
    }

    async fn reveal(&self) -> Result<(), TransportError> {
        self.bodiless("reveal").await
    }

    async fn clear(&self) -> Result<(), TransportError> {
        self.bodiless("clear").await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(FailureKind::Timeout, err.to_string());
    }
    TransportError::new(FailureKind::Network, err.to_string())
}
