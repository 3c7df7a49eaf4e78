//! Scripts that test basic streaming SQL functionality.

use streamsql_tck::{DefinitionsBuilder, Result, Script, SqlValue, values};

/// Defines `ORDERS(rowtime, orderId, product)`, all NOT NULL.
///
/// # Errors
///
/// Returns [`ScriptError::DuplicateStream`](streamsql_tck::ScriptError::DuplicateStream)
/// if `ORDERS` is already defined in the script.
pub fn define_orders(defs: DefinitionsBuilder<'_>) -> Result<DefinitionsBuilder<'_>> {
    defs.stream("ORDERS")?
        .timestamp("rowtime")?
        .not_null()?
        .integer("orderId")?
        .not_null()?
        .varchar("product", 20)?
        .not_null()?
        .end()
}

/// `select *` passes every record through.
///
/// The expectation holds the values of both output rows back to back, six
/// values in all. Row boundaries are not recorded, so a harness has to split
/// the list by the width of the `ORDERS` schema itself.
///
/// # Errors
///
/// Fails only if the fixture itself is malformed.
pub fn select() -> Result<Script> {
    Ok(Script::builder()
        .definitions()
        .apply(define_orders)?
        .end()
        .query("Q", "select * from orders")?
        .input()
        .insert("ORDERS", values![0, 100, "beer"])?
        .insert("ORDERS", values![1, 101, "milk"])?
        .end()
        .expect()
        .row("Q", values![0, 100, "beer", 1, 101, "milk"])?
        .end()
        .build())
}

/// A `where` clause drops records that do not match.
///
/// # Errors
///
/// Fails only if the fixture itself is malformed.
pub fn select_where() -> Result<Script> {
    Ok(Script::builder()
        .definitions()
        .apply(define_orders)?
        .end()
        .query("Q", "select orderId from orders where product = 'milk'")?
        .input()
        .insert("ORDERS", values![0, 100, "beer"])?
        .insert("ORDERS", values![1, 101, "milk"])?
        .end()
        .expect()
        .row("Q", values![101])?
        .end()
        .build())
}

/// Projection reorders columns.
///
/// # Errors
///
/// Fails only if the fixture itself is malformed.
pub fn select_project() -> Result<Script> {
    Ok(Script::builder()
        .definitions()
        .apply(define_orders)?
        .end()
        .query("Q", "select product, orderId from orders")?
        .input()
        .insert("ORDERS", values![0, 100, "beer"])?
        .insert("ORDERS", values![1, 101, "milk"])?
        .end()
        .expect()
        .row("Q", values!["beer", 100, "milk", 101])?
        .end()
        .build())
}

/// `is null` matches records whose nullable column holds NULL.
///
/// # Errors
///
/// Fails only if the fixture itself is malformed.
pub fn filter_null() -> Result<Script> {
    Ok(Script::builder()
        .definitions()
        .stream("SHIPMENTS")?
        .timestamp("rowtime")?
        .not_null()?
        .integer("orderId")?
        .not_null()?
        .varchar("carrier", 10)?
        .end()?
        .end()
        .query("Q", "select orderId from shipments where carrier is null")?
        .input()
        .insert("SHIPMENTS", values![0, 100, "ups"])?
        .insert("SHIPMENTS", values![1, 101, SqlValue::Null])?
        .end()
        .expect()
        .row("Q", values![101])?
        .end()
        .build())
}
