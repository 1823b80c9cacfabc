//! Query executor.
//!
//! Renders composed queries with `?` placeholders and binds their arguments,
//! in order, to a SQLite pool.

use sqlf_core::dialect::SIMPLE;
use sqlf_core::{Query, SqlValue};
use sqlx::sqlite::{Sqlite, SqliteArguments, SqlitePool, SqliteQueryResult, SqliteRow};
use tracing::debug;

use crate::error::Result;

type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// A statement rendered for SQLite, with its arguments checked for binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    args: Vec<SqlValue>,
}

impl Statement {
    /// Renders `query` for SQLite.
    ///
    /// # Errors
    ///
    /// Returns [`sqlf_core::Error::UnsupportedType`] if an argument has no
    /// SQLite representation (arrays).
    pub fn prepare(query: &Query) -> Result<Self> {
        let (sql, args) = query.build(&SIMPLE);
        if let Some(value) = args.iter().find(|v| matches!(v, SqlValue::Array(_))) {
            return Err(sqlf_core::Error::UnsupportedType { kind: value.kind() }.into());
        }
        Ok(Self { sql, args })
    }

    /// Returns the rendered SQL.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the arguments, in placeholder order.
    #[must_use]
    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }

    /// Builds an sqlx query with every argument bound.
    fn to_sqlx(&self) -> SqliteQuery<'_> {
        self.args
            .iter()
            .fold(sqlx::query(&self.sql), |query, value| bind_value(query, value))
    }
}

fn bind_value<'q>(query: SqliteQuery<'q>, value: &SqlValue) -> SqliteQuery<'q> {
    match value {
        SqlValue::Null => query.bind(None::<i64>),
        SqlValue::Bool(b) => query.bind(*b),
        SqlValue::Int(n) => query.bind(*n),
        SqlValue::Float(f) => query.bind(*f),
        SqlValue::Text(s) => query.bind(s.clone()),
        SqlValue::Blob(b) => query.bind(b.clone()),
        // Rejected by `Statement::prepare`.
        SqlValue::Array(_) => query.bind(None::<i64>),
    }
}

/// Executes composed queries against a SQLite database.
#[derive(Debug, Clone)]
pub struct QueryExecutor {
    pool: SqlitePool,
}

impl QueryExecutor {
    /// Creates a new executor.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Executes a statement, returning the number of rows affected.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be bound or the database rejects it.
    pub async fn execute(&self, query: &Query) -> Result<u64> {
        let statement = Statement::prepare(query)?;
        debug!(sql = %statement.sql, args = statement.args.len(), "Executing SQL");
        let result: SqliteQueryResult = statement.to_sqlx().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Runs a query, returning all rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be bound or the database rejects it.
    pub async fn fetch_all(&self, query: &Query) -> Result<Vec<SqliteRow>> {
        let statement = Statement::prepare(query)?;
        debug!(sql = %statement.sql, args = statement.args.len(), "Fetching rows");
        Ok(statement.to_sqlx().fetch_all(&self.pool).await?)
    }

    /// Runs a query, returning the first row if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be bound or the database rejects it.
    pub async fn fetch_optional(&self, query: &Query) -> Result<Option<SqliteRow>> {
        let statement = Statement::prepare(query)?;
        debug!(sql = %statement.sql, args = statement.args.len(), "Fetching row");
        Ok(statement.to_sqlx().fetch_optional(&self.pool).await?)
    }
}
