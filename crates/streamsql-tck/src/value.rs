//! Literal values carried by inserts and expectations.

use core::fmt;

use serde::Serialize;

/// A literal value in an input record or an expected output row.
///
/// Values are not checked against any column type; a fixture may insert a
/// `Text` into an `INTEGER` column if it wants to test coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    /// SQL NULL.
    Null,
    /// TRUE or FALSE.
    Bool(bool),
    /// Any exact integer, whatever the column width.
    Int(i64),
    /// Any approximate number; also used for DECIMAL columns.
    Float(f64),
    /// Character data; temporal values may be written as text too.
    Text(String),
    /// Bytes for BINARY and VARBINARY columns.
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Returns `true` for [`SqlValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Renders the value the way it would appear in a `VALUES` list.
    #[must_use]
    pub fn to_sql_inline(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Bool(true) => "TRUE".to_string(),
            Self::Bool(false) => "FALSE".to_string(),
            Self::Int(n) => n.to_string(),
            Self::Float(x) => x.to_string(),
            Self::Text(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Blob(bytes) => {
                let hex: String = bytes.iter().map(|b| format!("{b:02X}")).collect();
                format!("X'{hex}'")
            }
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql_inline())
    }
}

/// Rust literals accepted in fixture rows.
///
/// Covers the kinds fixtures are written with; anything else can be passed
/// as an explicit [`SqlValue`].
pub trait ToSqlValue {
    /// Converts the literal to a `SqlValue`.
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

impl ToSqlValue for i64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(self)
    }
}

impl ToSqlValue for i32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
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

/// Builds a `Vec<SqlValue>` from a list of heterogeneous literals.
///
/// ```rust
/// use streamsql_tck::{SqlValue, values};
///
/// let row = values![1, 101, "milk", None::<i32>];
/// assert_eq!(row[2], SqlValue::Text("milk".into()));
/// assert!(row[3].is_null());
/// assert!(values![].is_empty());
/// ```
#[macro_export]
macro_rules! values {
    ($($value:expr),* $(,)?) => {
        <::std::vec::Vec<$crate::SqlValue>>::from([
            $($crate::ToSqlValue::to_sql_value($value)),*
        ])
    };
}
