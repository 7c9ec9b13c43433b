//! Axum extractors for request handling
//!
//! Custom extractors for JSON bodies, provider webhooks and path ids.

mod json;
mod path;
mod webhook;

pub use json::JsonBody;
pub use path::CampaignIdPath;
pub use webhook::WebhookPayload;
