//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and asserting on responses.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use bulk_api::{create_app, create_app_state, AppState};
use bulk_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fakes::InMemory;
use crate::fixtures::in_memory_config;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server over in-memory storage and a scripted gateway
    pub async fn start_in_memory(backends: &InMemory) -> Result<Self> {
        let state = AppState::new(backends.context(), in_memory_config());
        Self::start_with_state(state).await
    }

    /// Start a server wired to PostgreSQL and the configured provider
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        Self::start_with_state(state).await
    }

    async fn start_with_state(state: AppState) -> Result<Self> {
        let app = create_app(state)?;

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with a form-encoded body, the way the provider does
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).form(fields).send().await?)
    }
}

/// Helper to check if a live database is available
pub fn check_test_env() -> Option<String> {
    dotenvy::dotenv().ok();
    match std::env::var("DATABASE_URL") {
        Ok(url) => Some(url),
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            None
        }
    }
}

/// Apply the schema to the database behind `database_url`
pub async fn prepare_database(database_url: &str) -> Result<()> {
    let pool = sqlx::PgPool::connect(database_url).await?;
    sqlx::raw_sql(bulk_db::SCHEMA).execute(&pool).await?;
    pool.close().await;
    Ok(())
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status and return the raw body
pub async fn assert_text(response: Response, expected_status: StatusCode) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected_status {
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(body)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    assert_text(response, expected_status).await.map(|_| ())
}
