//! Column definitions of a stream.

use core::fmt;

use serde::Serialize;

use crate::error::{Result, require};

/// Names of the SQL types the stream builder has shorthands for.
///
/// [`StreamBuilder::column`](crate::StreamBuilder::column) accepts any type
/// name; these are just the common ones.
pub mod sql_type {
    /// TRUE, FALSE or NULL.
    pub const BOOLEAN: &str = "BOOLEAN";
    /// Fixed-length character string.
    pub const CHAR: &str = "CHAR";
    /// Variable-length character string.
    pub const VARCHAR: &str = "VARCHAR";
    /// Fixed-length byte string.
    pub const BINARY: &str = "BINARY";
    /// Variable-length byte string.
    pub const VARBINARY: &str = "VARBINARY";
    /// 64-bit integer.
    pub const BIGINT: &str = "BIGINT";
    /// 32-bit integer.
    pub const INTEGER: &str = "INTEGER";
    /// 16-bit integer.
    pub const SMALLINT: &str = "SMALLINT";
    /// 8-bit integer.
    pub const TINYINT: &str = "TINYINT";
    /// Double-precision float.
    pub const DOUBLE: &str = "DOUBLE";
    /// Single-precision float.
    pub const REAL: &str = "REAL";
    /// Exact numeric with precision and scale.
    pub const DECIMAL: &str = "DECIMAL";
    /// Calendar date.
    pub const DATE: &str = "DATE";
    /// Time of day, with optional fractional-second scale.
    pub const TIME: &str = "TIME";
    /// Date and time, with optional fractional-second scale.
    pub const TIMESTAMP: &str = "TIMESTAMP";
}

/// Definition of a column in a [`Stream`](crate::Stream).
///
/// Columns are immutable; [`Column::with_nullable`] returns a modified copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Column {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    precision: Option<u32>,
    scale: Option<u32>,
    nullable: bool,
}

impl Column {
    /// Creates a column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`](crate::ScriptError::EmptyArgument)
    /// if `name` or `type_name` is empty.
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        precision: Option<u32>,
        scale: Option<u32>,
        nullable: bool,
    ) -> Result<Self> {
        let name = name.into();
        let type_name = type_name.into();
        require(&name, "column name")?;
        require(&type_name, "column type")?;
        Ok(Self {
            name,
            type_name,
            precision,
            scale,
            nullable,
        })
    }

    /// Column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// SQL type name, e.g. `VARCHAR`.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Precision of the type, if any.
    #[must_use]
    pub const fn precision(&self) -> Option<u32> {
        self.precision
    }

    /// Scale of the type, if any.
    #[must_use]
    pub const fn scale(&self) -> Option<u32> {
        self.scale
    }

    /// Whether the column allows NULL values.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns a copy of this column with the given nullability.
    #[must_use]
    pub fn with_nullable(&self, nullable: bool) -> Self {
        Self {
            nullable,
            ..self.clone()
        }
    }

    /// Returns the type with its precision and scale, e.g. `DECIMAL(10, 2)`.
    ///
    /// A scale without precision (as in `TIMESTAMP(3)`) is rendered alone.
    #[must_use]
    pub fn type_sql(&self) -> String {
        match (self.precision, self.scale) {
            (Some(p), Some(s)) => format!("{}({p}, {s})", self.type_name),
            (Some(n), None) | (None, Some(n)) => format!("{}({n})", self.type_name),
            (None, None) => self.type_name.clone(),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.type_sql())?;
        if !self.nullable {
            f.write_str(" NOT NULL")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptError;

    #[test]
    fn test_new_column() {
        let col = Column::new("product", sql_type::VARCHAR, Some(20), None, true).unwrap();
        assert_eq!(col.name(), "product");
        assert_eq!(col.type_name(), "VARCHAR");
        assert_eq!(col.precision(), Some(20));
        assert_eq!(col.scale(), None);
        assert!(col.is_nullable());
    }

    #[test]
    fn test_blank_name_or_type_rejected() {
        assert_eq!(
            Column::new("", "INTEGER", None, None, true),
            Err(ScriptError::EmptyArgument("column name"))
        );
        assert_eq!(
            Column::new("x", "", None, None, true),
            Err(ScriptError::EmptyArgument("column type"))
        );
    }

    #[test]
    fn test_with_nullable_copies() {
        let col = Column::new("price", sql_type::DECIMAL, Some(10), Some(2), true).unwrap();
        let strict = col.with_nullable(false);
        assert!(col.is_nullable());
        assert!(!strict.is_nullable());
        assert_eq!(strict.name(), "price");
        assert_eq!(strict.precision(), Some(10));
        assert_eq!(strict.scale(), Some(2));
    }

    #[test]
    fn test_type_sql() {
        let decimal = Column::new("d", "DECIMAL", Some(10), Some(2), true).unwrap();
        assert_eq!(decimal.type_sql(), "DECIMAL(10, 2)");
        let ts = Column::new("t", "TIMESTAMP", None, Some(3), true).unwrap();
        assert_eq!(ts.type_sql(), "TIMESTAMP(3)");
        let int = Column::new("i", "INTEGER", None, None, true).unwrap();
        assert_eq!(int.type_sql(), "INTEGER");
    }

    #[test]
    fn test_display() {
        let col = Column::new("rowtime", "TIMESTAMP", None, None, false).unwrap();
        assert_eq!(col.to_string(), "rowtime TIMESTAMP NOT NULL");
        let col = Column::new("product", "VARCHAR", Some(20), None, true).unwrap();
        assert_eq!(col.to_string(), "product VARCHAR(20)");
    }
}
