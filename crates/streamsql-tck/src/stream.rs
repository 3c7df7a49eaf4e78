//! Stream definitions.

use core::fmt;

use serde::Serialize;

use crate::column::Column;

/// A named, ordered schema of columns describing an unbounded input source.
///
/// Created by [`StreamBuilder::end`](crate::StreamBuilder::end).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stream {
    name: String,
    columns: Vec<Column>,
}

impl Stream {
    pub(crate) fn new(name: String, columns: Vec<Column>) -> Self {
        Self { name, columns }
    }

    /// Stream name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the first column with the given name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the stream has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.name)?;
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{column}")?;
        }
        f.write_str(")")
    }
}
