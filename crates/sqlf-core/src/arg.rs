//! Composition arguments.

use crate::query::Query;
use crate::value::{SqlValue, ToSqlValue};

/// An argument consumed by one verb of a template.
///
/// Plain values become a single bind parameter. Queries are flattened: their
/// pattern is spliced in place of the verb and their arguments are appended
/// in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A value bound to one placeholder.
    Value(SqlValue),
    /// A previously composed query embedded in place.
    Query(Query),
}

impl From<Query> for Arg {
    fn from(query: Query) -> Self {
        Self::Query(query)
    }
}

impl From<&Query> for Arg {
    fn from(query: &Query) -> Self {
        Self::Query(query.clone())
    }
}

impl From<SqlValue> for Arg {
    fn from(value: SqlValue) -> Self {
        Self::Value(value)
    }
}

macro_rules! value_to_arg {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::Value(value.to_sql_value())
                }
            }
        )*
    };
}

value_to_arg!(bool, i8, i16, i32, i64, u8, u16, u32, f32, f64, String, Vec<u8>);

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Value(value.to_sql_value())
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Self::Value(value.to_sql_value())
    }
}

impl From<&[u8]> for Arg {
    fn from(value: &[u8]) -> Self {
        Self::Value(value.to_sql_value())
    }
}

impl<T: ToSqlValue> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        Self::Value(value.to_sql_value())
    }
}
