//! Input records.

use serde::Serialize;

use crate::value::SqlValue;

/// An ordered tuple of literal values appended to a stream's input.
///
/// The value count and types are not checked against the target schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insert {
    stream: String,
    values: Vec<SqlValue>,
}

impl Insert {
    pub(crate) fn new(stream: String, values: Vec<SqlValue>) -> Self {
        Self { stream, values }
    }

    /// Name of the target stream.
    #[must_use]
    pub fn stream(&self) -> &str {
        &self.stream
    }

    /// Values of the record.
    #[must_use]
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }
}
