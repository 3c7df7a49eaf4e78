//! Definitions section: streams and their columns.

use crate::column::{Column, sql_type};
use crate::error::{Result, ScriptError, require};
use crate::stream::Stream;

use super::ScriptBuilder;

/// Builds the definitions section of a script.
///
/// Created via [`ScriptBuilder::definitions`].
#[derive(Debug)]
pub struct DefinitionsBuilder<'a> {
    script: &'a mut ScriptBuilder,
}

impl<'a> DefinitionsBuilder<'a> {
    pub(super) fn new(script: &'a mut ScriptBuilder) -> Self {
        Self { script }
    }

    /// Starts the definition of a stream.
    ///
    /// The name is checked for collisions when the stream is finished with
    /// [`StreamBuilder::end`].
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn stream(self, name: impl Into<String>) -> Result<StreamBuilder<'a>> {
        let name = name.into();
        require(&name, "stream name")?;
        Ok(StreamBuilder {
            definitions: self,
            name,
            columns: Vec::new(),
        })
    }

    /// Passes this section to `action`, which typically adds reusable
    /// stream definitions.
    ///
    /// # Errors
    ///
    /// Returns whatever error `action` returns.
    pub fn apply<F>(self, action: F) -> Result<Self>
    where
        F: FnOnce(Self) -> Result<Self>,
    {
        action(self)
    }

    /// Ends the definitions section and returns the parent builder.
    pub fn end(self) -> &'a mut ScriptBuilder {
        self.script
    }
}

/// Builds a stream definition.
///
/// Created via [`DefinitionsBuilder::stream`]. Column shorthands produce
/// nullable columns; follow them with [`StreamBuilder::not_null`] to
/// tighten the column just added.
#[derive(Debug)]
pub struct StreamBuilder<'a> {
    definitions: DefinitionsBuilder<'a>,
    name: String,
    columns: Vec<Column>,
}

impl<'a> StreamBuilder<'a> {
    /// Name of the stream being defined.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Finishes the stream, registers it and returns the parent section.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::DuplicateStream`] if a stream with the same
    /// name is already defined. The earlier definition is kept.
    pub fn end(self) -> Result<DefinitionsBuilder<'a>> {
        let Self {
            definitions,
            name,
            columns,
        } = self;
        definitions.script.add_stream(Stream::new(name, columns))?;
        Ok(definitions)
    }

    /// Adds a column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` or `type_name` is
    /// empty.
    pub fn column(
        mut self,
        name: impl Into<String>,
        type_name: impl Into<String>,
        precision: Option<u32>,
        scale: Option<u32>,
        nullable: bool,
    ) -> Result<Self> {
        self.columns
            .push(Column::new(name, type_name, precision, scale, nullable)?);
        Ok(self)
    }

    /// Makes the previously added column NOT NULL.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::NoPreviousColumn`] if no column was added yet.
    pub fn not_null(mut self) -> Result<Self> {
        let Some(last) = self.columns.last_mut() else {
            return Err(ScriptError::NoPreviousColumn {
                stream: self.name,
            });
        };
        *last = last.with_nullable(false);
        Ok(self)
    }

    /// Adds a BOOLEAN column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn boolean(self, name: impl Into<String>) -> Result<Self> {
        self.column(name, sql_type::BOOLEAN, None, None, true)
    }

    /// Adds a CHAR(precision) column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn char(self, name: impl Into<String>, precision: u32) -> Result<Self> {
        self.column(name, sql_type::CHAR, Some(precision), None, true)
    }

    /// Adds a VARCHAR(precision) column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn varchar(self, name: impl Into<String>, precision: u32) -> Result<Self> {
        self.column(name, sql_type::VARCHAR, Some(precision), None, true)
    }

    /// Adds a BINARY(precision) column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn binary(self, name: impl Into<String>, precision: u32) -> Result<Self> {
        self.column(name, sql_type::BINARY, Some(precision), None, true)
    }

    /// Adds a VARBINARY(precision) column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn varbinary(self, name: impl Into<String>, precision: u32) -> Result<Self> {
        self.column(name, sql_type::VARBINARY, Some(precision), None, true)
    }

    /// Adds a BIGINT column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn bigint(self, name: impl Into<String>) -> Result<Self> {
        self.column(name, sql_type::BIGINT, None, None, true)
    }

    /// Adds an INTEGER column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn integer(self, name: impl Into<String>) -> Result<Self> {
        self.column(name, sql_type::INTEGER, None, None, true)
    }

    /// Adds a SMALLINT column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn smallint(self, name: impl Into<String>) -> Result<Self> {
        self.column(name, sql_type::SMALLINT, None, None, true)
    }

    /// Adds a TINYINT column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn tinyint(self, name: impl Into<String>) -> Result<Self> {
        self.column(name, sql_type::TINYINT, None, None, true)
    }

    /// Adds a DOUBLE column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn double(self, name: impl Into<String>) -> Result<Self> {
        self.column(name, sql_type::DOUBLE, None, None, true)
    }

    /// Adds a REAL column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn real(self, name: impl Into<String>) -> Result<Self> {
        self.column(name, sql_type::REAL, None, None, true)
    }

    /// Adds a DECIMAL(precision, scale) column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn decimal(self, name: impl Into<String>, precision: u32, scale: u32) -> Result<Self> {
        self.column(name, sql_type::DECIMAL, Some(precision), Some(scale), true)
    }

    /// Adds a DATE column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn date(self, name: impl Into<String>) -> Result<Self> {
        self.column(name, sql_type::DATE, None, None, true)
    }

    /// Adds a TIME column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn time(self, name: impl Into<String>) -> Result<Self> {
        self.column(name, sql_type::TIME, None, None, true)
    }

    /// Adds a TIME(scale) column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn time_with_scale(self, name: impl Into<String>, scale: u32) -> Result<Self> {
        self.column(name, sql_type::TIME, None, Some(scale), true)
    }

    /// Adds a TIMESTAMP column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn timestamp(self, name: impl Into<String>) -> Result<Self> {
        self.column(name, sql_type::TIMESTAMP, None, None, true)
    }

    /// Adds a TIMESTAMP(scale) column.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` is empty.
    pub fn timestamp_with_scale(self, name: impl Into<String>, scale: u32) -> Result<Self> {
        self.column(name, sql_type::TIMESTAMP, None, Some(scale), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_types() {
        let mut builder = ScriptBuilder::new();
        builder
            .definitions()
            .stream("ALL_TYPES")
            .unwrap()
            .boolean("b")
            .unwrap()
            .char("c", 3)
            .unwrap()
            .varchar("vc", 20)
            .unwrap()
            .binary("bin", 4)
            .unwrap()
            .varbinary("vbin", 8)
            .unwrap()
            .bigint("i64")
            .unwrap()
            .integer("i32")
            .unwrap()
            .smallint("i16")
            .unwrap()
            .tinyint("i8")
            .unwrap()
            .double("f64")
            .unwrap()
            .real("f32")
            .unwrap()
            .decimal("price", 10, 2)
            .unwrap()
            .date("d")
            .unwrap()
            .time("t")
            .unwrap()
            .time_with_scale("t3", 3)
            .unwrap()
            .timestamp("ts")
            .unwrap()
            .timestamp_with_scale("ts6", 6)
            .unwrap()
            .end()
            .unwrap();

        let script = builder.build();
        let stream = script.stream("ALL_TYPES").unwrap();
        let types: Vec<String> = stream.columns().iter().map(Column::type_sql).collect();
        assert_eq!(
            types,
            [
                "BOOLEAN",
                "CHAR(3)",
                "VARCHAR(20)",
                "BINARY(4)",
                "VARBINARY(8)",
                "BIGINT",
                "INTEGER",
                "SMALLINT",
                "TINYINT",
                "DOUBLE",
                "REAL",
                "DECIMAL(10, 2)",
                "DATE",
                "TIME",
                "TIME(3)",
                "TIMESTAMP",
                "TIMESTAMP(6)",
            ]
        );
        assert!(stream.columns().iter().all(Column::is_nullable));
        let ts6 = stream.column("ts6").unwrap();
        assert_eq!(ts6.precision(), None);
        assert_eq!(ts6.scale(), Some(6));
    }

    #[test]
    fn test_not_null_without_column() {
        let mut builder = ScriptBuilder::new();
        let err = builder
            .definitions()
            .stream("S")
            .unwrap()
            .not_null()
            .unwrap_err();
        assert_eq!(
            err,
            ScriptError::NoPreviousColumn {
                stream: "S".into()
            }
        );
        assert!(builder.build().definitions().is_empty());
    }

    #[test]
    fn test_empty_stream_name() {
        let mut builder = ScriptBuilder::new();
        let err = builder.definitions().stream("").unwrap_err();
        assert_eq!(err, ScriptError::EmptyArgument("stream name"));
    }

    #[test]
    fn test_general_column() {
        let mut builder = ScriptBuilder::new();
        builder
            .definitions()
            .stream("S")
            .unwrap()
            .column("geo", "GEOMETRY", None, None, false)
            .unwrap()
            .end()
            .unwrap();
        let script = builder.build();
        let geo = script.stream("S").unwrap().column("geo").unwrap();
        assert_eq!(geo.type_name(), "GEOMETRY");
        assert!(!geo.is_nullable());
    }

    #[test]
    fn test_stream_builder_name() {
        let mut builder = ScriptBuilder::new();
        let stream = builder.definitions().stream("ORDERS").unwrap();
        assert_eq!(stream.name(), "ORDERS");
    }

    #[test]
    fn test_stream_without_columns() {
        let mut builder = ScriptBuilder::new();
        builder
            .definitions()
            .stream("EMPTY")
            .unwrap()
            .end()
            .unwrap();
        assert!(builder.build().stream("EMPTY").unwrap().is_empty());
    }
}
