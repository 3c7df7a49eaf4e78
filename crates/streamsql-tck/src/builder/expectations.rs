//! Expectations section: output expected from each query.

use tracing::{trace, warn};

use crate::error::{Result, ScriptError, require};
use crate::value::SqlValue;

use super::ScriptBuilder;

/// Builds the expectations section of a script.
///
/// Created via [`ScriptBuilder::expect`].
#[derive(Debug)]
pub struct ExpectationsBuilder<'a> {
    script: &'a mut ScriptBuilder,
}

impl<'a> ExpectationsBuilder<'a> {
    pub(super) fn new(script: &'a mut ScriptBuilder) -> Self {
        Self { script }
    }

    /// Sets the values expected from `query`.
    ///
    /// Unlike streams and queries, a second call for the same query replaces
    /// the earlier expectation instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::EmptyArgument`] if `query` is empty and
    /// [`ScriptError::UnknownQuery`] if no query of that name is registered.
    pub fn row<I>(self, query: &str, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = SqlValue>,
    {
        require(query, "query name")?;
        if !self.script.queries.contains_key(query) {
            return Err(ScriptError::UnknownQuery(query.to_string()));
        }
        let values: Vec<SqlValue> = values.into_iter().collect();
        trace!(query, values = values.len(), "Recorded expectation");
        if self
            .script
            .expectations
            .insert(query.to_string(), values)
            .is_some()
        {
            warn!(query, "Replaced previous expectation");
        }
        Ok(self)
    }

    /// Passes this section to `action`, which typically adds shared
    /// expectations.
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

    /// Ends the expectations section and returns the parent builder.
    pub fn end(self) -> &'a mut ScriptBuilder {
        self.script
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    #[test]
    fn test_row_unknown_query() {
        let mut builder = ScriptBuilder::new();
        builder.query("Q", "values 1").unwrap();
        let err = builder.expect().row("R", values![1]).unwrap_err();
        assert_eq!(err, ScriptError::UnknownQuery("R".into()));
        assert!(builder.build().expectations().is_empty());
    }

    #[test]
    fn test_row_empty_query_name() {
        let mut builder = ScriptBuilder::new();
        let err = builder.expect().row("", values![1]).unwrap_err();
        assert_eq!(err, ScriptError::EmptyArgument("query name"));
    }

    #[test]
    fn test_row_overwrites() {
        let mut builder = ScriptBuilder::new();
        builder.query("Q", "values 1").unwrap();
        builder
            .expect()
            .row("Q", values![1])
            .unwrap()
            .row("Q", values![2, 3])
            .unwrap();
        let script = builder.build();
        assert_eq!(script.expectations().len(), 1);
        assert_eq!(
            script.expectation("Q"),
            Some(&[SqlValue::Int(2), SqlValue::Int(3)][..])
        );
    }

    #[test]
    fn test_row_without_values() {
        let mut builder = ScriptBuilder::new();
        builder.query("Q", "values 1").unwrap();
        builder.expect().row("Q", values![]).unwrap();
        assert_eq!(builder.build().expectation("Q"), Some(&[][..]));
    }
}
