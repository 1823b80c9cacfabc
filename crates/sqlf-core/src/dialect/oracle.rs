//! Oracle dialect.

use super::Dialect;

/// Numbered `:N` placeholders.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OracleDialect;

impl OracleDialect {
    /// Creates a new Oracle dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for OracleDialect {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn bind_var(&self, index: usize) -> String {
        format!(":{}", index + 1)
    }
}
