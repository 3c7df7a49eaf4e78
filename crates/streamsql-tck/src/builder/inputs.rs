//! Inputs section: records fed into streams.

use tracing::trace;

use crate::error::{Result, ScriptError, require};
use crate::insert::Insert;
use crate::value::SqlValue;

use super::ScriptBuilder;

/// Builds the inputs section of a script.
///
/// Created via [`ScriptBuilder::input`].
#[derive(Debug)]
pub struct InputsBuilder<'a> {
    script: &'a mut ScriptBuilder,
}

impl<'a> InputsBuilder<'a> {
    pub(super) fn new(script: &'a mut ScriptBuilder) -> Self {
        Self { script }
    }

    /// Appends a record to the input of `stream`.
    ///
    /// The values are not checked against the stream's columns.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `stream` is empty and
    /// [`ScriptError::UnknownTarget`] if no stream of that name is defined.
    pub fn insert<I>(self, stream: &str, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = SqlValue>,
    {
        require(stream, "stream name")?;
        if !self.script.definitions.contains_key(stream) {
            return Err(ScriptError::UnknownTarget(stream.to_string()));
        }
        let values: Vec<SqlValue> = values.into_iter().collect();
        trace!(stream, values = values.len(), "Recorded insert");
        self.script
            .inputs
            .push(Insert::new(stream.to_string(), values));
        Ok(self)
    }

    /// Passes this section to `action`, which typically adds shared input
    /// records.
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

    /// Ends the inputs section and returns the parent builder.
    pub fn end(self) -> &'a mut ScriptBuilder {
        self.script
    }
}
