#![allow(dead_code)]

use async_trait::async_trait;
use cors_guard::{ChannelError, ResponseChannel, ResponseEvent};

/// Transport stand-in that records every event it receives.
#[derive(Default)]
pub struct RecordingChannel {
    pub events: Vec<ResponseEvent>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResponseChannel for RecordingChannel {
    async fn emit(&mut self, event: ResponseEvent) -> Result<(), ChannelError> {
        self.events.push(event);
        Ok(())
    }
}

/// Transport stand-in that rejects every event.
pub struct ClosedChannel;

#[async_trait]
impl ResponseChannel for ClosedChannel {
    async fn emit(&mut self, _event: ResponseEvent) -> Result<(), ChannelError> {
        Err(ChannelError::transport("connection closed"))
    }
}
