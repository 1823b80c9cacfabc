//! Error types for executing composed queries.

/// Errors that can occur while binding or executing a query.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The query could not be bound for this driver.
    #[error("Query error: {0}")]
    Query(#[from] sqlf_core::Error),

    /// Database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for query execution.
pub type Result<T> = std::result::Result<T, ExecError>;
