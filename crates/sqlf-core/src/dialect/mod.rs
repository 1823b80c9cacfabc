//! Bind variable dialects.
//!
//! A composed [`Query`](crate::Query) only records *where* its arguments go.
//! The placeholder text for each position is chosen by a [`Dialect`] when the
//! query is rendered, so the same query can be sent to databases with
//! different bind syntax.
//!
//! | Dialect | Placeholder for index `i` |
//! |---|---|
//! | [`SIMPLE`] | `?` |
//! | [`POSTGRES`] | `$` + (i + 1) |
//! | [`ORACLE`] | `:` + (i + 1) |
//! | [`SQL_SERVER`] | `@p` + (i + 1) |

mod kind;
mod oracle;
mod postgres;
mod simple;
mod sqlserver;

pub use kind::DialectKind;
pub use oracle::OracleDialect;
pub use postgres::PostgresDialect;
pub use simple::SimpleDialect;
pub use sqlserver::SqlServerDialect;

/// `?` placeholders, used by SQLite and MySQL.
pub const SIMPLE: SimpleDialect = SimpleDialect::new();

/// `$1, $2, ...` placeholders, used by PostgreSQL.
pub const POSTGRES: PostgresDialect = PostgresDialect::new();

/// `:1, :2, ...` placeholders, used by Oracle Database.
pub const ORACLE: OracleDialect = OracleDialect::new();

/// `@p1, @p2, ...` placeholders, used by SQL Server.
pub const SQL_SERVER: SqlServerDialect = SqlServerDialect::new();

/// Maps the position of a bound argument to its placeholder text.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the placeholder for the bind variable at `index`.
    ///
    /// `index` is the zero based position of the argument in the statement.
    fn bind_var(&self, index: usize) -> String;
}

impl<D: Dialect + ?Sized> Dialect for &D {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn bind_var(&self, index: usize) -> String {
        (**self).bind_var(index)
    }
}

impl<D: Dialect + ?Sized> Dialect for Box<D> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn bind_var(&self, index: usize) -> String {
        (**self).bind_var(index)
    }
}
