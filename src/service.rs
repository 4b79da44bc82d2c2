use crate::channel::{ChannelError, ResponseChannel, ResponseEvent};
use crate::config::{CorsConfig, ValidationError};
use crate::context::RequestContext;
use crate::handler::{ErrorBody, Handler, HandlerError};
use crate::interceptor::CorsInterceptor;
use crate::policy::CorsPolicy;
use crate::preflight::try_handle_preflight;
use crate::request::Request;
use bytes::Bytes;
use tracing::debug;

/// Request pipeline entry point.
///
/// Control flow per request: preflight short-circuit (terminal if matched),
/// then the interceptor wraps the outbound channel and drives the downstream
/// handler; whatever the handler produces, every response-start that reaches
/// the transport carries the resolved access-control headers.
pub struct CorsService<H> {
    policy: CorsPolicy,
    handler: H,
}

impl<H: Handler> CorsService<H> {
    pub fn new(config: CorsConfig, handler: H) -> Result<Self, ValidationError> {
        Ok(Self {
            policy: CorsPolicy::new(config)?,
            handler,
        })
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    /// Drives one request to completion against the transport channel.
    pub async fn handle<C>(&self, request: &Request, transport: &mut C) -> Result<(), ChannelError>
    where
        C: ResponseChannel,
    {
        let ctx = RequestContext::of(request);

        if let Some(response) = try_handle_preflight(&self.policy, &ctx) {
            debug!(path = request.path(), "answering preflight request");
            transport
                .emit(ResponseEvent::Start {
                    status: response.status,
                    headers: response.headers,
                })
                .await?;
            return transport
                .emit(ResponseEvent::Body {
                    bytes: Bytes::new(),
                    more: false,
                })
                .await;
        }

        let resolved = self.policy.resolve(ctx.origin);
        let mut interceptor = CorsInterceptor::new(transport, resolved);

        match self.handler.call(request, &mut interceptor).await {
            Ok(()) => Ok(()),
            Err(HandlerError::Http { status, message }) if !interceptor.has_started() => {
                // Recognized status errors become ordinary responses, emitted
                // through the interceptor so they carry the resolved headers.
                interceptor.synthesize(status, ErrorBody::new(message)).await
            }
            Err(failure) => interceptor.recover(&failure).await,
        }
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;
