//! Bound argument values.
//!
//! Every plain argument given to [`Query::compose`](crate::Query::compose) is
//! converted to a [`SqlValue`] and travels next to the statement as a bind
//! parameter. Values are never spliced into the SQL text, except by the
//! debug-only [`SqlValue::to_sql_inline`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A value bound to one placeholder of a query.
///
/// Serializes untagged, so JSON `null`, booleans, numbers, strings and arrays
/// map directly onto variants. JSON arrays deserialize as [`SqlValue::Array`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Array value, for drivers with native array parameters (e.g. PostgreSQL).
    Array(Vec<SqlValue>),
    /// Binary blob value.
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Creates an array value.
    pub fn array<T: ToSqlValue>(values: impl IntoIterator<Item = T>) -> Self {
        Self::Array(values.into_iter().map(ToSqlValue::to_sql_value).collect())
    }

    /// Returns a short name for the kind of value, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Array(_) => "array",
            Self::Blob(_) => "blob",
        }
    }

    /// Returns the SQL literal for this value, for debugging output only.
    ///
    /// **Warning**: the result is not safe against SQL injection for
    /// attacker-controlled text. Always execute queries with bound
    /// parameters instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] for arrays and for non-finite
    /// floats, which have no portable literal form.
    pub fn to_sql_inline(&self) -> Result<String> {
        match self {
            Self::Null => Ok(String::from("NULL")),
            Self::Bool(b) => Ok(String::from(if *b { "TRUE" } else { "FALSE" })),
            Self::Int(n) => Ok(n.to_string()),
            Self::Float(f) if f.is_finite() => Ok(f.to_string()),
            Self::Float(_) => Err(Error::UnsupportedType {
                kind: "non-finite float",
            }),
            Self::Text(s) => {
                // Escape single quotes by doubling them
                let escaped = s.replace('\'', "''");
                Ok(format!("'{escaped}'"))
            }
            Self::Blob(b) => {
                let hex: String = b.iter().map(|byte| format!("{byte:02X}")).collect();
                Ok(format!("X'{hex}'"))
            }
            Self::Array(_) => Err(Error::UnsupportedType { kind: self.kind() }),
        }
    }
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Bool(self)
    }
}

macro_rules! int_to_sql_value {
    ($($ty:ty),*) => {
        $(
            impl ToSqlValue for $ty {
                fn to_sql_value(self) -> SqlValue {
                    SqlValue::Int(i64::from(self))
                }
            }
        )*
    };
}

int_to_sql_value!(i8, i16, i32, i64, u8, u16, u32);

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for f32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(f64::from(self))
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self.clone())
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        match self {
            Some(v) => v.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self)
    }
}

impl ToSqlValue for &[u8] {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_scalars() {
        assert_eq!(SqlValue::Null.to_sql_inline().unwrap(), "NULL");
        assert_eq!(SqlValue::Bool(true).to_sql_inline().unwrap(), "TRUE");
        assert_eq!(SqlValue::Bool(false).to_sql_inline().unwrap(), "FALSE");
        assert_eq!(SqlValue::Int(-100).to_sql_inline().unwrap(), "-100");
        assert_eq!(SqlValue::Float(2.5).to_sql_inline().unwrap(), "2.5");
    }

    #[test]
    fn test_inline_text_escaping() {
        assert_eq!(
            SqlValue::Text(String::from("O'Brien")).to_sql_inline().unwrap(),
            "'O''Brien'"
        );
        assert_eq!(
            SqlValue::Text(String::from("'; DROP TABLE users; --"))
                .to_sql_inline()
                .unwrap(),
            "'''; DROP TABLE users; --'"
        );
    }

    #[test]
    fn test_inline_blob() {
        assert_eq!(
            SqlValue::Blob(vec![0xDE, 0xAD, 0x01]).to_sql_inline().unwrap(),
            "X'DEAD01'"
        );
    }

    #[test]
    fn test_inline_unsupported() {
        let err = SqlValue::array([1, 2]).to_sql_inline().unwrap_err();
        assert_eq!(err, Error::UnsupportedType { kind: "array" });

        let err = SqlValue::Float(f64::NAN).to_sql_inline().unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedType {
                kind: "non-finite float"
            }
        );
    }

    #[test]
    fn test_to_sql_value_conversions() {
        assert_eq!(true.to_sql_value(), SqlValue::Bool(true));
        assert_eq!(42_u32.to_sql_value(), SqlValue::Int(42));
        assert_eq!(2.5_f32.to_sql_value(), SqlValue::Float(2.5));
        assert_eq!("hi".to_sql_value(), SqlValue::Text(String::from("hi")));
        assert_eq!(None::<i32>.to_sql_value(), SqlValue::Null);
        assert_eq!(Some("x").to_sql_value(), SqlValue::Text(String::from("x")));
        assert_eq!(vec![1_u8, 2].to_sql_value(), SqlValue::Blob(vec![1, 2]));
        assert_eq!(
            SqlValue::array(["a", "b"]),
            SqlValue::Array(vec![
                SqlValue::Text(String::from("a")),
                SqlValue::Text(String::from("b")),
            ])
        );
    }

    #[test]
    fn test_json_values() {
        let values: Vec<SqlValue> =
            serde_json::from_str(r#"[null, true, 7, 1.5, "x", [1, "y"]]"#).unwrap();
        assert_eq!(
            values,
            vec![
                SqlValue::Null,
                SqlValue::Bool(true),
                SqlValue::Int(7),
                SqlValue::Float(1.5),
                SqlValue::Text(String::from("x")),
                SqlValue::Array(vec![SqlValue::Int(1), SqlValue::Text(String::from("y"))]),
            ]
        );
        assert_eq!(
            serde_json::to_string(&SqlValue::Text(String::from("x"))).unwrap(),
            "\"x\""
        );
    }
}
