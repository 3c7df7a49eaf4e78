//! Plain-text rendering of catalogs and fixtures.

use core::fmt;

use anyhow::anyhow;
use streamsql_tck::SqlValue;
use streamsql_tck_catalog::{Catalog, Fixture};

/// Looks up a fixture by name.
///
/// # Errors
///
/// Fails with a message listing the available names if `name` is unknown.
pub fn find<'a>(catalog: &'a Catalog, name: &str) -> anyhow::Result<&'a Fixture> {
    catalog.get(name).ok_or_else(|| {
        anyhow!(
            "unknown fixture {name}; available: {}",
            catalog.names().join(", ")
        )
    })
}

/// One line per fixture: name, counts and description.
pub struct Listing<'a>(pub &'a Catalog);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.0.iter().map(|fixture| fixture.name.len()).max().unwrap_or(0);
        for fixture in self.0 {
            let script = &fixture.script;
            writeln!(
                f,
                "{:<width$}  streams={} queries={} inputs={}  {}",
                fixture.name,
                script.definitions().len(),
                script.queries().len(),
                script.inputs().len(),
                fixture.description,
            )?;
        }
        Ok(())
    }
}

/// The full contents of a fixture, one statement per line.
pub struct FixtureText<'a>(pub &'a Fixture);

impl fmt::Display for FixtureText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixture = self.0;
        let script = &fixture.script;
        writeln!(f, "-- {}: {}", fixture.name, fixture.description)?;
        for stream in script.definitions().values() {
            writeln!(f, "create stream {stream};")?;
        }
        for (name, sql) in script.queries() {
            writeln!(f, "query {name}: {sql};")?;
        }
        for insert in script.inputs() {
            writeln!(
                f,
                "insert into {} values ({});",
                insert.stream(),
                Values(insert.values())
            )?;
        }
        for (name, values) in script.expectations() {
            writeln!(f, "expect {name}: ({});", Values(values))?;
        }
        Ok(())
    }
}

/// Comma-separated SQL literals.
struct Values<'a>(&'a [SqlValue]);

impl fmt::Display for Values<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
