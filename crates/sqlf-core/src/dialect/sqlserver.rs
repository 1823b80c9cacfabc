//! SQL Server dialect.

use super::Dialect;

/// Named `@pN` placeholders, as expected by `sp_executesql` style drivers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SqlServerDialect;

impl SqlServerDialect {
    /// Creates a new SQL Server dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqlServerDialect {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn bind_var(&self, index: usize) -> String {
        format!("@p{}", index + 1)
    }
}
