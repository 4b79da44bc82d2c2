use crate::headers::Header;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Typed outbound message on one request's response channel.
///
/// Emission is strictly sequential: a start event precedes body chunks, and
/// a chunk with `more == false` marks the end of the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseEvent {
    /// Fixes the status code and header set before any body bytes flow.
    Start { status: u16, headers: Vec<Header> },
    /// One body chunk.
    Body { bytes: Bytes, more: bool },
}

impl ResponseEvent {
    pub fn start(status: u16, headers: Vec<Header>) -> Self {
        Self::Start { status, headers }
    }

    pub fn body(bytes: impl Into<Bytes>, more: bool) -> Self {
        Self::Body {
            bytes: bytes.into(),
            more,
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start { .. })
    }
}

/// Errors surfaced by the transport while emitting a response event.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("transport rejected a response event: {reason}")]
    Transport { reason: String },
}

impl ChannelError {
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }
}

/// Ordered sink for outbound response events.
///
/// The transport-side channel implements this; so does [`CorsInterceptor`],
/// which decorates a transport channel with header injection.
///
/// [`CorsInterceptor`]: crate::CorsInterceptor
#[async_trait]
pub trait ResponseChannel: Send {
    async fn emit(&mut self, event: ResponseEvent) -> Result<(), ChannelError>;
}
