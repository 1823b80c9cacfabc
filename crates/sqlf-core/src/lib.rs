//! # sqlf-core
//!
//! Compose parameterized SQL, printf style.
//!
//! A template such as `"SELECT name FROM users WHERE age > %d"` is combined
//! with its arguments into a [`Query`]. Values never enter the SQL text; each
//! one becomes a bind parameter. Queries can be passed as arguments to other
//! queries, in which case they are flattened in place with their arguments
//! kept in order. The placeholder syntax (`?`, `$1`, `:1`, `@p1`) is chosen
//! only when the query is rendered with a [`Dialect`](dialect::Dialect).
//!
//! ## Example
//!
//! ```rust
//! use sqlf_core::dialect::{POSTGRES, SIMPLE};
//! use sqlf_core::{SqlValue, sqlf};
//!
//! let filter = sqlf!("name = %s AND age = %d", "John", 27).unwrap();
//! let page = sqlf!("%d OFFSET %d", 10, 100).unwrap();
//! let query = sqlf!("SELECT name FROM users WHERE %s LIMIT %s", filter, page).unwrap();
//!
//! assert_eq!(
//!     query.render(&POSTGRES),
//!     "SELECT name FROM users WHERE name = $1 AND age = $2 LIMIT $3 OFFSET $4"
//! );
//! assert_eq!(
//!     query.render(&SIMPLE),
//!     "SELECT name FROM users WHERE name = ? AND age = ? LIMIT ? OFFSET ?"
//! );
//! assert_eq!(
//!     query.args(),
//!     [
//!         SqlValue::Text(String::from("John")),
//!         SqlValue::Int(27),
//!         SqlValue::Int(10),
//!         SqlValue::Int(100),
//!     ]
//! );
//! ```
//!
//! ## Templates
//!
//! - Every `%` followed by a letter is a verb and consumes one argument. The
//!   letter and any flags (`%5d`, `%-s`) are ignored; no type checking is done.
//! - `%%` is a literal `%`.
//! - A verb/argument count mismatch is reported as
//!   [`Error::MalformedTemplate`].

pub mod arg;
pub mod dialect;
pub mod error;
mod join;
pub mod query;
pub mod template;
pub mod value;

pub use arg::Arg;
pub use error::{Error, Result};
pub use join::join;
pub use query::Query;
pub use value::{SqlValue, ToSqlValue};

/// Composes a [`Query`] from a template and arguments.
///
/// Shorthand for [`Query::compose`]; each argument may be any value
/// convertible to [`Arg`], including another `Query`.
///
/// ```rust
/// use sqlf_core::dialect::POSTGRES;
/// use sqlf_core::sqlf;
///
/// let sub = sqlf!("SELECT product_id FROM order_item WHERE quantity > %d", 100).unwrap();
/// let q = sqlf!("SELECT name FROM product WHERE id IN (%s)", sub).unwrap();
/// assert_eq!(
///     q.render(&POSTGRES),
///     "SELECT name FROM product WHERE id IN (SELECT product_id FROM order_item WHERE quantity > $1)"
/// );
/// ```
#[macro_export]
macro_rules! sqlf {
    ($format:expr $(,)?) => {
        $crate::Query::compose($format, ::std::iter::empty::<$crate::Arg>())
    };
    ($format:expr, $($arg:expr),+ $(,)?) => {
        $crate::Query::compose($format, [$($crate::Arg::from($arg)),+])
    };
}
