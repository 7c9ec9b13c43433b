//! Middleware stack for the API server
//!
//! Request ids, request tracing, a global request quota, a request timeout
//! and CORS for browser-based callers.

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method, Request, StatusCode},
    Router,
};
use bulk_common::{AppError, CorsConfig, RateLimitConfig};
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    governor::GovernorConfigBuilder,
    key_extractor::GlobalKeyExtractor,
    GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level, Span};

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Upper bound on a request, including the provider round-trip
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wrap `router` in the full middleware stack
///
/// # Errors
/// Returns `AppError::Config` when the rate limit settings are unusable
pub fn apply_middleware_with_config<S>(
    router: Router<S>,
    rate_limit_config: &RateLimitConfig,
    cors_config: &CorsConfig,
    is_production: bool,
) -> Result<Router<S>, AppError>
where
    S: Clone + Send + Sync + 'static,
{
    // One shared bucket for every caller: `burst` tokens, refilled at `requests_per_second`
    let replenish_ms = (1000 / u64::from(rate_limit_config.requests_per_second.max(1))).max(1);
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_ms)
            .burst_size(rate_limit_config.burst.max(1))
            .key_extractor(GlobalKeyExtractor)
            .finish()
            .ok_or_else(|| AppError::Config("Invalid rate limiter configuration".to_string()))?,
    );
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // Outermost last: RateLimit -> SetRequestId -> PropagateRequestId -> Trace -> Timeout -> CORS
    Ok(router
        .layer(cors_layer(cors_config, is_production))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(GovernorLayer {
            config: governor_conf,
        }))
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

/// Webhooks are server-to-server, so CORS only matters for dashboards calling
/// `/campaign`, `/replies` and `/analytics` from a browser.
fn cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)]);

    if config.allowed_origins.is_empty() && !is_production {
        warn!("CORS: allowing any origin; set CORS_ALLOWED_ORIGINS to restrict");
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        warn!("CORS: no usable origins configured, browser requests will be refused");
    }
    layer.allow_origin(AllowOrigin::list(origins))
}
