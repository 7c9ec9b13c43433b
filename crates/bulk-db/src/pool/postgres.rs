//! PostgreSQL connection pool management

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

/// Pool settings.
///
/// The URL and connection bounds come from the application config; the
/// timeouts are fixed.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// How long a request may wait for a free connection
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
    pub const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
    pub const MAX_LIFETIME: Duration = Duration::from_secs(1800);

    pub fn new(url: impl Into<String>, max_connections: u32, min_connections: u32) -> Self {
        Self {
            url: url.into(),
            max_connections,
            min_connections: min_connections.min(max_connections),
            acquire_timeout: Self::ACQUIRE_TIMEOUT,
            idle_timeout: Self::IDLE_TIMEOUT,
            max_lifetime: Self::MAX_LIFETIME,
        }
    }

    /// Connection URL with the password masked, for logs
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };
        match rest.split_once('@') {
            Some((credentials, host)) => {
                let user = credentials.split(':').next().unwrap_or_default();
                format!("{scheme}://{user}:***@{host}")
            }
            None => self.url.clone(),
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.redacted_url())
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish_non_exhaustive()
    }
}

impl From<&bulk_common::DatabaseConfig> for DatabaseConfig {
    fn from(config: &bulk_common::DatabaseConfig) -> Self {
        Self::new(&config.url, config.max_connections, config.min_connections)
    }
}

/// Open a PostgreSQL connection pool
///
/// # Errors
/// Returns the driver error when the first connection cannot be established
#[instrument(skip(config), fields(url = %config.redacted_url()))]
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database pool ready"
    );
    Ok(pool)
}
