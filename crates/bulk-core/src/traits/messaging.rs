//! Messaging gateway port - the single outbound call to the provider

use async_trait::async_trait;

use crate::error::DomainError;
use crate::value_objects::DeliveryStatus;

/// One message to hand to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub from: String,
    pub to: String,
    pub body: String,
    /// URL the provider should post delivery status changes to
    pub status_callback: Option<String>,
}

impl OutboundMessage {
    pub fn new(from: impl Into<String>, to: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            body: body.into(),
            status_callback: None,
        }
    }

    pub fn with_status_callback(mut self, url: Option<String>) -> Self {
        self.status_callback = url;
        self
    }
}

/// What the provider answered for an accepted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    /// Provider-assigned message id (Twilio `sid`, e.g. `SM...`)
    pub provider_message_id: String,
    pub status: DeliveryStatus,
}

#[async_trait]
pub trait MessagingGateway: Send + Sync {
    /// Send one message.
    ///
    /// Fails with `DomainError::MessagingError` carrying the provider's code and
    /// message when the provider rejects the request.
    async fn send(&self, message: &OutboundMessage) -> Result<SendReceipt, DomainError>;
}
