//! Banner endpoint

/// Text served at the root path
pub const BANNER: &str = "WhatsApp Bulk System Running 🚀";

/// Plain-text banner
///
/// GET /
pub async fn index() -> &'static str {
    BANNER
}
