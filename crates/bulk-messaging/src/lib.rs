//! # bulk-messaging
//!
//! Outbound side of the relay: implements the `MessagingGateway` port from
//! `bulk-core` against Twilio's Programmable Messaging REST API.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bulk_core::{MessagingGateway, OutboundMessage};
//! use bulk_messaging::TwilioClient;
//!
//! async fn example(config: &bulk_common::MessagingConfig) -> Result<(), bulk_core::DomainError> {
//!     let client = TwilioClient::from_config(config)?;
//!     let receipt = client
//!         .send(&OutboundMessage::new(&config.from_address, &config.to_address, "Hello"))
//!         .await?;
//!     println!("queued as {}", receipt.provider_message_id);
//!     Ok(())
//! }
//! ```

mod twilio;
mod wire;

pub use twilio::{TwilioClient, TwilioCredentials};
