//! Trait seams between the orchestrator and its collaborators.
//!
//! Each external service gets one async trait with a single production
//! implementation, so the pipeline can be driven by mock
//! implementations in tests without touching the network.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Message;

/// Text-generation provider.
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;

    /// Run one chat completion. `Ok(None)` means the service answered
    /// but produced no usable content; the caller decides what that
    /// implies.
    async fn chat(&self, messages: &[Message]) -> Result<Option<String>>;
}

/// Outbound SMS gateway.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Send one message; returns the gateway's delivery identifier.
    async fn send_sms(&self, to: &str, body: &str) -> Result<String>;
}

/// Outbound mail sender.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_email(&self, subject: &str, body: &str, to: &str) -> Result<()>;
}
