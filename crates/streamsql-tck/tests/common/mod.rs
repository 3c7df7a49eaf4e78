#![allow(dead_code)]

use streamsql_tck::{
    DefinitionsBuilder, ExpectationsBuilder, InputsBuilder, Result, Script, ScriptBuilder,
    ScriptError, values,
};

/// Defines `ORDERS(rowtime TIMESTAMP NOT NULL, orderId INTEGER NOT NULL,
/// comments VARCHAR(1000))`.
pub fn define_orders(defs: DefinitionsBuilder<'_>) -> Result<DefinitionsBuilder<'_>> {
    defs.stream("ORDERS")?
        .timestamp("rowtime")?
        .not_null()?
        .integer("orderId")?
        .not_null()?
        .varchar("comments", 1000)?
        .end()
}

pub fn define_input(inputs: InputsBuilder<'_>) -> Result<InputsBuilder<'_>> {
    inputs
        .insert("ORDERS", values![0, 100, "beer"])?
        .insert("ORDERS", values![1, 101, "milk"])
}

pub fn define_output(expect: ExpectationsBuilder<'_>) -> Result<ExpectationsBuilder<'_>> {
    expect.row("Q", values![])
}

pub fn build(f: impl FnOnce(&mut ScriptBuilder) -> Result<()>) -> Script {
    let mut builder = Script::builder();
    f(&mut builder).unwrap_or_else(|e| panic!("Failed to build script: {e}"));
    builder.build()
}

pub fn build_err(f: impl FnOnce(&mut ScriptBuilder) -> Result<()>) -> ScriptError {
    let mut builder = Script::builder();
    f(&mut builder).expect_err("Expected builder error")
}
