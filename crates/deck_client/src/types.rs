use std::fmt;

use serde::Deserialize;

/// One participant row as sent by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireUser {
    pub name: String,
    #[serde(default)]
    pub card: Option<String>,
}

/// Decoded body of a successful `status` poll.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    pub counter: u64,
    #[serde(default)]
    pub users: Vec<WireUser>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
}

/// Structured error body some endpoints attach to a non-2xx response.
#[derive(Debug, Deserialize)]
pub(crate) struct RejectionBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Events the background client surfaces to the app thread. Failures of
/// choose/reveal/clear are logged and dropped; the next poll reflects true
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// A status poll completed with a fresh snapshot.
    Status(StatusResponse),
    /// The register endpoint turned the chosen name down.
    RegisterRejected { message: String },
}

/// Uniform failure signal for all transport operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: FailureKind,
    pub message: String,
}

impl TransportError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Server-authored rejection text, when the failure carries one.
    pub fn rejection(&self) -> Option<&str> {
        match self.kind {
            FailureKind::Rejected => Some(&self.message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    Timeout,
    HttpStatus(u16),
    Decode,
    /// Non-2xx whose body carried a structured `{"error": ...}` payload.
    Rejected,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Rejected => write!(f, "rejected by server"),
        }
    }
}
