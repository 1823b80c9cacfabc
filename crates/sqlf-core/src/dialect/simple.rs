//! `?` dialect.

use super::Dialect;

/// Positional `?` placeholders (SQLite, MySQL).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimpleDialect;

impl SimpleDialect {
    /// Creates a new simple dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SimpleDialect {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn bind_var(&self, _index: usize) -> String {
        String::from("?")
    }
}
