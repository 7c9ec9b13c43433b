//! Provider webhook extractor
//!
//! The provider posts `application/x-www-form-urlencoded`; JSON bodies are
//! accepted too so the endpoints can be driven by hand. A callback is never
//! refused for missing fields: an empty body, or one in any other format,
//! decodes to the payload's default (every field absent).

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::response::ApiError;

/// Webhook body decoded from either a form or a JSON payload
#[derive(Debug, Clone)]
pub struct WebhookPayload<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Json,
    Form,
    Other,
}

fn encoding(req: &Request) -> Encoding {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.trim_start().to_ascii_lowercase());

    match content_type.as_deref() {
        Some(ct) if ct.starts_with("application/json") => Encoding::Json,
        Some(ct) if ct.starts_with("application/x-www-form-urlencoded") => Encoding::Form,
        _ => Encoding::Other,
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for WebhookPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match encoding(&req) {
            Encoding::Form => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::invalid_body(e.body_text()))?;
                Ok(Self(value))
            }
            Encoding::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::invalid_body(e.body_text()))?;
                if bytes.is_empty() {
                    return Ok(Self(T::default()));
                }
                let Json(value) =
                    Json::<T>::from_bytes(&bytes).map_err(|e| ApiError::invalid_body(e.body_text()))?;
                Ok(Self(value))
            }
            Encoding::Other => {
                debug!("Webhook body without a form or JSON content type, treating as empty");
                Ok(Self(T::default()))
            }
        }
    }
}
