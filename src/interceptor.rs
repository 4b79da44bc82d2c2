use crate::channel::{ChannelError, ResponseChannel, ResponseEvent};
use crate::constants::{header, media};
use crate::handler::{ErrorBody, HandlerError};
use crate::headers::{Header, HeaderSet};
use async_trait::async_trait;
use tracing::error;

/// Lifecycle of one request's outbound channel.
///
/// At most one response-start ever reaches the transport per request; the
/// recovery path checks this state before synthesizing a fallback response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    AwaitingStart,
    Started,
    Complete,
    Faulted,
}

/// Decorator around the transport channel that injects the resolved headers
/// on the response-start event.
///
/// The synthesized error response produced by [`recover`] is emitted through
/// this same decorator, so the header guarantee also holds for responses
/// created after the downstream handler has failed.
///
/// [`recover`]: CorsInterceptor::recover
pub struct CorsInterceptor<'a, C: ResponseChannel + ?Sized> {
    transport: &'a mut C,
    resolved: HeaderSet,
    state: ChannelState,
}

impl<'a, C: ResponseChannel + ?Sized> CorsInterceptor<'a, C> {
    pub fn new(transport: &'a mut C, resolved: HeaderSet) -> Self {
        Self {
            transport,
            resolved,
            state: ChannelState::AwaitingStart,
        }
    }

    pub fn state(&self) -> ChannelState {
        self.state
    }

    /// Whether a response-start has already been forwarded to the transport.
    pub fn has_started(&self) -> bool {
        !matches!(self.state, ChannelState::AwaitingStart)
    }

    /// Recovery boundary for an unrecovered downstream failure.
    ///
    /// Before the response-start has been forwarded, the failure is answered
    /// with a synthesized JSON 500 carrying the resolved headers. Once a
    /// start has been forwarded the response cannot be replaced; the error
    /// is logged and the channel terminates without further events.
    pub async fn recover(&mut self, failure: &HandlerError) -> Result<(), ChannelError> {
        if self.has_started() {
            error!(
                error = %failure,
                state = ?self.state,
                "handler failed after response-start; terminating channel"
            );
            self.state = ChannelState::Faulted;
            return Ok(());
        }

        error!(error = %failure, "handler failed before response-start; synthesizing error response");
        self.synthesize(500, ErrorBody::internal_server_error())
            .await
    }

    /// Emits a fresh JSON response through this interceptor, so the resolved
    /// headers are injected on the synthesized response-start as well.
    pub async fn synthesize(&mut self, status: u16, body: ErrorBody) -> Result<(), ChannelError> {
        let payload = body.to_bytes();
        let headers = vec![Header::new(header::CONTENT_TYPE, media::APPLICATION_JSON)];
        self.emit(ResponseEvent::Start { status, headers }).await?;
        self.emit(ResponseEvent::Body {
            bytes: payload,
            more: false,
        })
        .await
    }
}

#[async_trait]
impl<'a, C: ResponseChannel + ?Sized> ResponseChannel for CorsInterceptor<'a, C> {
    async fn emit(&mut self, event: ResponseEvent) -> Result<(), ChannelError> {
        match event {
            ResponseEvent::Start {
                status,
                mut headers,
            } if self.state == ChannelState::AwaitingStart => {
                self.resolved.inject_into(&mut headers);
                self.state = ChannelState::Started;
                self.transport
                    .emit(ResponseEvent::Start { status, headers })
                    .await
            }
            ResponseEvent::Body { bytes, more } => {
                if !more && self.state == ChannelState::Started {
                    self.state = ChannelState::Complete;
                }
                self.transport.emit(ResponseEvent::Body { bytes, more }).await
            }
            // Out-of-order or duplicate events are a protocol violation by
            // the downstream handler; they pass through untouched. The
            // contract is "inject when seen", not "validate ordering".
            other => self.transport.emit(other).await,
        }
    }
}

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;
