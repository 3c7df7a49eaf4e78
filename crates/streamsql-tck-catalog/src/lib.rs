//! Ready-made fixtures for streaming SQL engines.
//!
//! A [`Catalog`] is a plain, immutable list of named scripts. Harnesses
//! build one at startup and iterate over it:
//!
//! ```rust
//! use streamsql_tck_catalog::Catalog;
//!
//! let catalog = Catalog::basic().unwrap();
//! for fixture in catalog.iter() {
//!     assert!(!fixture.script.queries().is_empty());
//! }
//! assert!(catalog.get("select_where").is_some());
//! ```

pub mod basic;

use serde::Serialize;
use streamsql_tck::{Result, Script};
use tracing::debug;

/// A named script in a catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fixture {
    /// Unique name within the catalog.
    pub name: &'static str,
    /// One-line summary of what the fixture checks.
    pub description: &'static str,
    /// The script itself.
    pub script: Script,
}

/// An ordered collection of fixtures.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    fixtures: Vec<Fixture>,
}

impl Catalog {
    /// Builds the catalog of basic fixtures.
    ///
    /// # Errors
    ///
    /// Fails if any fixture in the catalog is malformed.
    pub fn basic() -> Result<Self> {
        let catalog = Self {
            fixtures: vec![
                Fixture {
                    name: "select",
                    description: "select * passes every record through",
                    script: basic::select()?,
                },
                Fixture {
                    name: "select_where",
                    description: "where clause drops non-matching records",
                    script: basic::select_where()?,
                },
                Fixture {
                    name: "select_project",
                    description: "projection reorders columns",
                    script: basic::select_project()?,
                },
                Fixture {
                    name: "filter_null",
                    description: "is null matches NULL values",
                    script: basic::filter_null()?,
                },
            ],
        };
        debug!(fixtures = catalog.len(), "Built basic catalog");
        Ok(catalog)
    }

    /// Returns the fixture with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.name == name)
    }

    /// Iterates over the fixtures in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter()
    }

    /// Fixture names in catalog order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.fixtures.iter().map(|f| f.name).collect()
    }

    /// Number of fixtures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// Returns `true` if the catalog has no fixtures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Fixture;
    type IntoIter = std::slice::Iter<'a, Fixture>;

    fn into_iter(self) -> Self::IntoIter {
        self.fixtures.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_catalog() {
        let catalog = Catalog::basic().unwrap();
        assert_eq!(
            catalog.names(),
            ["select", "select_where", "select_project", "filter_null"]
        );
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_names_are_unique() {
        let catalog = Catalog::basic().unwrap();
        let mut names = catalog.names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_get() {
        let catalog = Catalog::basic().unwrap();
        let fixture = catalog.get("select_where").unwrap();
        assert_eq!(
            fixture.script.query("Q"),
            Some("select orderId from orders where product = 'milk'")
        );
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_catalog_is_rebuilt_identically() {
        assert_eq!(Catalog::basic().unwrap(), Catalog::basic().unwrap());
    }

    #[test]
    fn test_default_is_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!((&catalog).into_iter().count(), 0);
    }
}
