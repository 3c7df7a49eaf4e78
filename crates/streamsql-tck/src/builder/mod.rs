//! Staged builder for [`Script`].
//!
//! All mutable state lives in [`ScriptBuilder`]. The section builders
//! ([`DefinitionsBuilder`], [`StreamBuilder`], [`InputsBuilder`],
//! [`ExpectationsBuilder`]) each hold a mutable borrow of it and hand it
//! back from `end()`. Every section method consumes the section and returns
//! it again, so a section cannot be touched after its `end()`.
//!
//! # Example
//!
//! ```rust
//! use streamsql_tck::{Script, values};
//!
//! # fn main() -> Result<(), streamsql_tck::ScriptError> {
//! let script = Script::builder()
//!     .definitions()
//!     .stream("ORDERS")?
//!     .timestamp("rowtime")?
//!     .not_null()?
//!     .integer("orderId")?
//!     .not_null()?
//!     .varchar("product", 20)?
//!     .not_null()?
//!     .end()?
//!     .end()
//!     .query("Q", "select orderId from orders where product = 'milk'")?
//!     .input()
//!     .insert("ORDERS", values![0, 100, "beer"])?
//!     .insert("ORDERS", values![1, 101, "milk"])?
//!     .end()
//!     .expect()
//!     .row("Q", values![101])?
//!     .end()
//!     .build();
//!
//! assert_eq!(script.definitions()["ORDERS"].columns().len(), 3);
//! assert_eq!(script.inputs().len(), 2);
//! # Ok(())
//! # }
//! ```

mod definitions;
mod expectations;
mod inputs;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{Result, ScriptError, require};
use crate::insert::Insert;
use crate::script::Script;
use crate::stream::Stream;
use crate::value::SqlValue;

pub use definitions::{DefinitionsBuilder, StreamBuilder};
pub use expectations::ExpectationsBuilder;
pub use inputs::InputsBuilder;

/// Builder for [`Script`].
///
/// Validation happens eagerly: each call that would break an invariant
/// returns an error and leaves the builder unchanged.
#[derive(Debug, Clone, Default)]
pub struct ScriptBuilder {
    definitions: IndexMap<String, Stream>,
    queries: IndexMap<String, String>,
    inputs: Vec<Insert>,
    expectations: IndexMap<String, Vec<SqlValue>>,
}

impl ScriptBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the definitions section. Add streams with
    /// [`DefinitionsBuilder::stream`], then call [`DefinitionsBuilder::end`].
    pub fn definitions(&mut self) -> DefinitionsBuilder<'_> {
        DefinitionsBuilder::new(self)
    }

    /// Adds a named query to this script.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `name` or `sql` is empty and
    /// [`ScriptError::DuplicateQuery`] if `name` is already registered. In
    /// the latter case the first SQL text is kept.
    pub fn query(&mut self, name: impl Into<String>, sql: impl Into<String>) -> Result<&mut Self> {
        let name = name.into();
        let sql = sql.into();
        require(&name, "query name")?;
        require(&sql, "query sql")?;
        if self.queries.contains_key(&name) {
            return Err(ScriptError::DuplicateQuery(name));
        }
        debug!(query = %name, sql = %sql, "Registered query");
        self.queries.insert(name, sql);
        Ok(self)
    }

    /// Starts the inputs section. Add records with
    /// [`InputsBuilder::insert`], then call [`InputsBuilder::end`].
    pub fn input(&mut self) -> InputsBuilder<'_> {
        InputsBuilder::new(self)
    }

    /// Starts the expectations section. Add rows with
    /// [`ExpectationsBuilder::row`], then call [`ExpectationsBuilder::end`].
    pub fn expect(&mut self) -> ExpectationsBuilder<'_> {
        ExpectationsBuilder::new(self)
    }

    /// Snapshots the current state into an immutable [`Script`].
    ///
    /// The builder is left untouched and may be extended and built again.
    #[must_use]
    pub fn build(&self) -> Script {
        debug!(
            streams = self.definitions.len(),
            queries = self.queries.len(),
            inputs = self.inputs.len(),
            expectations = self.expectations.len(),
            "Building script"
        );
        Script::new(
            self.definitions.clone(),
            self.queries.clone(),
            self.inputs.clone(),
            self.expectations.clone(),
        )
    }

    fn add_stream(&mut self, stream: Stream) -> Result<()> {
        if self.definitions.contains_key(stream.name()) {
            return Err(ScriptError::DuplicateStream(stream.name().to_string()));
        }
        debug!(stream = %stream.name(), columns = stream.len(), "Registered stream");
        self.definitions.insert(stream.name().to_string(), stream);
        Ok(())
    }
}
