//! Trades - Windowed Aggregation Fixture Example
//!
//! This example writes a fixture for a tumbling-window aggregate over a
//! stream of trades:
//! - a reusable schema fragment applied through `DefinitionsBuilder::apply`
//! - inputs in rowtime order, including a NULL price
//! - the expected output of the aggregate query
//!
//! Run with: cargo run --example trades

use streamsql_tck::{DefinitionsBuilder, Result, Script, values};

// =============================================================================
// SCHEMA DEFINITIONS
// =============================================================================

fn define_trades(defs: DefinitionsBuilder<'_>) -> Result<DefinitionsBuilder<'_>> {
    defs.stream("TRADES")?
        .timestamp_with_scale("rowtime", 3)?
        .not_null()?
        .char("ticker", 4)?
        .not_null()?
        .decimal("price", 10, 2)?
        .bigint("shares")?
        .not_null()?
        .end()
}

// =============================================================================
// FIXTURE
// =============================================================================

fn main() -> Result<()> {
    let script = Script::builder()
        .definitions()
        .apply(define_trades)?
        .end()
        .query(
            "VOLUME",
            "select stream tumble_end(rowtime, interval '1' minute), ticker, sum(shares) \
             from trades group by tumble(rowtime, interval '1' minute), ticker",
        )?
        .input()
        .insert("TRADES", values![0, "ORCL", 31.5, 100])?
        .insert("TRADES", values![30_000, "ORCL", None::<f64>, 50])?
        .insert("TRADES", values![65_000, "ORCL", 32.0, 10])?
        .end()
        .expect()
        .row("VOLUME", values![60_000, "ORCL", 150])?
        .end()
        .build();

    for stream in script.definitions().values() {
        println!("stream {stream}");
    }
    for (name, sql) in script.queries() {
        println!("query {name}: {sql}");
    }
    for insert in script.inputs() {
        let values: Vec<String> = insert.values().iter().map(ToString::to_string).collect();
        println!("insert into {} values ({})", insert.stream(), values.join(", "));
    }
    for (name, values) in script.expectations() {
        println!("expect {name}: {values:?}");
    }

    Ok(())
}
