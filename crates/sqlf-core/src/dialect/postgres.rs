//! PostgreSQL dialect.

use super::Dialect;

/// Numbered `$N` placeholders.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn bind_var(&self, index: usize) -> String {
        format!("${}", index + 1)
    }
}
