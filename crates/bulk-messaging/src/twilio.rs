//! Twilio Programmable Messaging client

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bulk_common::MessagingConfig;
use bulk_core::{DeliveryStatus, DomainError, MessagingGateway, OutboundMessage, SendReceipt};
use reqwest::{Client, StatusCode};
use tracing::{info, instrument, warn};

use crate::wire::{ApiErrorBody, MessageResource};

const DEFAULT_API_BASE: &str = "https://api.twilio.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Account credentials used for HTTP basic auth
#[derive(Clone)]
pub struct TwilioCredentials {
    pub account_sid: String,
    pub auth_token: String,
}

impl TwilioCredentials {
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
        }
    }
}

impl fmt::Debug for TwilioCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioCredentials")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"[redacted]")
            .finish()
    }
}

/// Messaging gateway backed by Twilio's `Messages.json` endpoint.
///
/// One `send` is one HTTP request; nothing is retried.
#[derive(Debug, Clone)]
pub struct TwilioClient {
    client: Client,
    credentials: TwilioCredentials,
    api_base: String,
}

impl TwilioClient {
    /// Create a client against the public Twilio API
    pub fn new(credentials: TwilioCredentials) -> Result<Self, DomainError> {
        Self::with_options(credentials, DEFAULT_API_BASE, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit base URL (tests, regional edges) and timeout
    pub fn with_options(
        credentials: TwilioCredentials,
        api_base: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::InternalError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            credentials,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the application's messaging configuration
    pub fn from_config(config: &MessagingConfig) -> Result<Self, DomainError> {
        Self::with_options(
            TwilioCredentials::new(&config.account_sid, &config.auth_token),
            &config.api_base,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Messages endpoint for the configured account
    pub fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base, self.credentials.account_sid
        )
    }

    /// Turn a non-2xx response into a `MessagingError`, keeping the provider's
    /// code and message verbatim when the body carries them
    fn provider_error(status: StatusCode, body: &str) -> DomainError {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => DomainError::MessagingError {
                message: parsed
                    .message
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string()),
                code: parsed.code,
                http_status: parsed.status.or(Some(status.as_u16())),
                more_info: parsed.more_info,
            },
            Err(_) => DomainError::MessagingError {
                message: format!(
                    "Messaging provider returned {}",
                    status.canonical_reason().unwrap_or(status.as_str())
                ),
                code: None,
                http_status: Some(status.as_u16()),
                more_info: None,
            },
        }
    }
}

#[async_trait]
impl MessagingGateway for TwilioClient {
    #[instrument(skip(self, message), fields(to = %message.to, from = %message.from))]
    async fn send(&self, message: &OutboundMessage) -> Result<SendReceipt, DomainError> {
        let mut form: Vec<(&str, &str)> = vec![
            ("From", message.from.as_str()),
            ("To", message.to.as_str()),
            ("Body", message.body.as_str()),
        ];
        if let Some(callback) = message.status_callback.as_deref() {
            form.push(("StatusCallback", callback));
        }

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.credentials.account_sid, Some(&self.credentials.auth_token))
            .form(&form)
            .send()
            .await
            .map_err(|e| DomainError::MessagingError {
                message: e.to_string(),
                code: None,
                http_status: e.status().map(|s| s.as_u16()),
                more_info: None,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| DomainError::MessagingError {
            message: format!("Failed to read provider response: {e}"),
            code: None,
            http_status: Some(status.as_u16()),
            more_info: None,
        })?;

        if !status.is_success() {
            let err = Self::provider_error(status, &body);
            warn!(http_status = status.as_u16(), error = %err, "Provider rejected message");
            return Err(err);
        }

        let resource: MessageResource =
            serde_json::from_str(&body).map_err(|e| DomainError::MessagingError {
                message: format!("Unexpected provider response: {e}"),
                code: None,
                http_status: Some(status.as_u16()),
                more_info: None,
            })?;

        let delivery_status = resource
            .status
            .map_or(DeliveryStatus::Queued, DeliveryStatus::from);

        info!(sid = %resource.sid, status = %delivery_status, "Provider accepted message");

        Ok(SendReceipt {
            provider_message_id: resource.sid,
            status: delivery_status,
        })
    }
}
