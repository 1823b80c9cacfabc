//! # sqlf-sqlx
//!
//! Runs queries composed with `sqlf-core` through `sqlx`.
//!
//! A [`Query`](sqlf_core::Query) is rendered with `?` placeholders and its
//! arguments are bound in the same order, so the statement and its arguments
//! always travel together.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sqlf_core::sqlf;
//! use sqlf_sqlx::QueryExecutor;
//!
//! let executor = QueryExecutor::new(pool);
//! let q = sqlf!("SELECT name FROM users WHERE age = %d", 27)?;
//! let rows = executor.fetch_all(&q).await?;
//! ```

pub mod error;
pub mod executor;

pub use error::{ExecError, Result};
pub use executor::{QueryExecutor, Statement};
