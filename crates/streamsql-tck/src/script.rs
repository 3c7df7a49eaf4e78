//! The immutable test script.

use indexmap::IndexMap;
use serde::Serialize;

use crate::builder::ScriptBuilder;
use crate::insert::Insert;
use crate::stream::Stream;
use crate::value::SqlValue;

/// A complete test case: stream definitions, queries, input records and
/// expected output.
///
/// A `Script` cannot be changed once built. Use [`Script::builder`] to
/// create one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Script {
    definitions: IndexMap<String, Stream>,
    queries: IndexMap<String, String>,
    inputs: Vec<Insert>,
    expectations: IndexMap<String, Vec<SqlValue>>,
}

impl Script {
    pub(crate) fn new(
        definitions: IndexMap<String, Stream>,
        queries: IndexMap<String, String>,
        inputs: Vec<Insert>,
        expectations: IndexMap<String, Vec<SqlValue>>,
    ) -> Self {
        Self {
            definitions,
            queries,
            inputs,
            expectations,
        }
    }

    /// Creates a builder that you can use to create a `Script`.
    #[must_use]
    pub fn builder() -> ScriptBuilder {
        ScriptBuilder::new()
    }

    /// Streams by name, in definition order.
    #[must_use]
    pub const fn definitions(&self) -> &IndexMap<String, Stream> {
        &self.definitions
    }

    /// SQL text by query name, in registration order.
    #[must_use]
    pub const fn queries(&self) -> &IndexMap<String, String> {
        &self.queries
    }

    /// Input records in the order they must be fed.
    #[must_use]
    pub fn inputs(&self) -> &[Insert] {
        &self.inputs
    }

    /// Expected output values by query name.
    #[must_use]
    pub const fn expectations(&self) -> &IndexMap<String, Vec<SqlValue>> {
        &self.expectations
    }

    /// Returns the stream with the given name.
    #[must_use]
    pub fn stream(&self, name: &str) -> Option<&Stream> {
        self.definitions.get(name)
    }

    /// Returns the SQL text of the given query.
    #[must_use]
    pub fn query(&self, name: &str) -> Option<&str> {
        self.queries.get(name).map(String::as_str)
    }

    /// Returns the expected values of the given query.
    #[must_use]
    pub fn expectation(&self, query: &str) -> Option<&[SqlValue]> {
        self.expectations.get(query).map(Vec::as_slice)
    }

    /// Returns the inputs targeting one stream, keeping their order.
    pub fn inputs_for<'a>(&'a self, stream: &'a str) -> impl Iterator<Item = &'a Insert> + 'a {
        self.inputs.iter().filter(move |insert| insert.stream() == stream)
    }
}
