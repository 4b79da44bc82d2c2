#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use cors_guard::constants::{header, media};
use cors_guard::{Handler, HandlerError, Header, Request, ResponseChannel, ResponseEvent};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Test application mirroring a small JSON API: one healthy endpoint plus
/// endpoints that fail at different points of the request lifecycle.
pub struct ScenarioApp {
    invocations: Arc<AtomicUsize>,
}

impl ScenarioApp {
    pub fn new() -> Self {
        Self {
            invocations: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared invocation counter, incremented once per `call`.
    pub fn invocations(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.invocations)
    }

    /// Pre-handler dependency that fails before the endpoint body runs.
    async fn failing_dependency(&self) -> Result<String, HandlerError> {
        Err(HandlerError::unexpected("Exception raised in dependency!"))
    }

    async fn failing_dependency_http(&self) -> Result<String, HandlerError> {
        Err(HandlerError::http(500, "HTTPException in dependency!"))
    }
}

async fn respond_json(
    channel: &mut dyn ResponseChannel,
    status: u16,
    payload: &'static str,
) -> Result<(), HandlerError> {
    channel
        .emit(ResponseEvent::start(
            status,
            vec![Header::new(header::CONTENT_TYPE, media::APPLICATION_JSON)],
        ))
        .await
        .map_err(|error| HandlerError::unexpected(error.to_string()))?;
    channel
        .emit(ResponseEvent::body(Bytes::from_static(payload.as_bytes()), false))
        .await
        .map_err(|error| HandlerError::unexpected(error.to_string()))
}

#[async_trait]
impl Handler for ScenarioApp {
    async fn call(
        &self,
        request: &Request,
        channel: &mut dyn ResponseChannel,
    ) -> Result<(), HandlerError> {
        self.invocations.fetch_add(1, Ordering::SeqCst);

        match request.path() {
            "/health" => respond_json(channel, 200, r#"{"message":"I'm healthy!"}"#).await,
            "/exception" => Err(HandlerError::unexpected("General exception occurred!")),
            "/exception/http" => Err(HandlerError::http(404, "HTTPException occurred!")),
            "/exception/depend" => {
                let _value = self.failing_dependency().await?;
                respond_json(channel, 200, r#"{"message":"how come"}"#).await
            }
            "/exception/http/depend" => {
                let _value = self.failing_dependency_http().await?;
                respond_json(channel, 200, r#"{"message":"how come"}"#).await
            }
            "/stream/break" => {
                channel
                    .emit(ResponseEvent::start(
                        200,
                        vec![Header::new(header::CONTENT_TYPE, media::APPLICATION_JSON)],
                    ))
                    .await
                    .map_err(|error| HandlerError::unexpected(error.to_string()))?;
                channel
                    .emit(ResponseEvent::body(Bytes::from_static(b"{\"partial\":"), true))
                    .await
                    .map_err(|error| HandlerError::unexpected(error.to_string()))?;
                Err(HandlerError::unexpected("stream interrupted"))
            }
            _ => Err(HandlerError::http(404, "Not Found")),
        }
    }
}
