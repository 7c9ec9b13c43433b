//! Error handling utilities for repositories

use bulk_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError, keeping the SQLSTATE when the server sent one
pub fn map_db_error(e: SqlxError) -> DomainError {
    let code = e
        .as_database_error()
        .and_then(|db_err| db_err.code())
        .map(|code| code.into_owned());

    DomainError::DatabaseError {
        message: e.to_string(),
        code,
    }
}
