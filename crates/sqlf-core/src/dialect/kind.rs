//! Runtime selection of a built-in dialect.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Dialect, ORACLE, POSTGRES, SIMPLE, SQL_SERVER};
use crate::error::Error;

/// One of the built-in dialects, chosen by name at runtime.
///
/// Useful when the target database comes from configuration:
///
/// ```rust
/// use sqlf_core::dialect::{Dialect, DialectKind};
///
/// let dialect: DialectKind = "pg".parse().unwrap();
/// assert_eq!(dialect, DialectKind::Postgres);
/// assert_eq!(dialect.bind_var(0), "$1");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// `?`
    Simple,
    /// `$N`
    #[default]
    Postgres,
    /// `:N`
    Oracle,
    /// `@pN`
    #[serde(rename = "sqlserver", alias = "mssql")]
    SqlServer,
}

impl DialectKind {
    /// All built-in dialects.
    pub const ALL: [Self; 4] = [Self::Simple, Self::Postgres, Self::Oracle, Self::SqlServer];

    /// Returns the dialect implementation for this kind.
    #[must_use]
    pub fn as_dialect(self) -> &'static dyn Dialect {
        match self {
            Self::Simple => &SIMPLE,
            Self::Postgres => &POSTGRES,
            Self::Oracle => &ORACLE,
            Self::SqlServer => &SQL_SERVER,
        }
    }
}

impl Dialect for DialectKind {
    fn name(&self) -> &'static str {
        self.as_dialect().name()
    }

    fn bind_var(&self, index: usize) -> String {
        self.as_dialect().bind_var(index)
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for DialectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" | "?" | "sqlite" | "mysql" => Ok(Self::Simple),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "oracle" => Ok(Self::Oracle),
            "sqlserver" | "mssql" => Ok(Self::SqlServer),
            _ => Err(Error::UnknownDialect(s.to_string())),
        }
    }
}
