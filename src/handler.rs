use crate::channel::ResponseChannel;
use crate::request::Request;
use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON payload carried by synthesized error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn internal_server_error() -> Self {
        Self::new("Internal Server Error")
    }

    pub fn to_bytes(&self) -> Bytes {
        Bytes::from(serde_json::json!({ "message": &self.message }).to_string())
    }
}

/// Failure raised by a downstream handler while driving the channel.
///
/// Carries at least a human-readable message. A faulted request produces
/// exactly one synthesized error response; there are no retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// Recognized HTTP-status error. Raised before the response-start has
    /// been forwarded, it becomes an ordinary response with that status.
    #[error("http error {status}: {message}")]
    Http { status: u16, message: String },
    /// Arbitrary unrecovered failure.
    #[error("{0}")]
    Unexpected(String),
}

impl HandlerError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}

/// Downstream application callable, invoked once per request.
///
/// Drives zero or more events onto the channel and either returns normally
/// or raises a [`HandlerError`].
#[async_trait]
pub trait Handler: Send + Sync {
    async fn call(
        &self,
        request: &Request,
        channel: &mut dyn ResponseChannel,
    ) -> Result<(), HandlerError>;
}
