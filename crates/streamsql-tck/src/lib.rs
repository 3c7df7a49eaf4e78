//! # streamsql-tck
//!
//! Declarative test fixtures for streaming SQL engines.
//!
//! A [`Script`] bundles everything a compatibility harness needs to run one
//! test case:
//! - stream definitions (ordered, typed, nullable columns)
//! - named SQL queries
//! - input records, in the order they must be fed
//! - the values each query is expected to produce
//!
//! Scripts are written with [`ScriptBuilder`], a staged builder that checks
//! names and references as entries are added and then freezes the result.
//! Running the queries and comparing output is left to the harness.
//!
//! ```rust
//! use streamsql_tck::{DefinitionsBuilder, Result, Script, SqlValue, values};
//!
//! fn define_orders(defs: DefinitionsBuilder<'_>) -> Result<DefinitionsBuilder<'_>> {
//!     defs.stream("ORDERS")?
//!         .timestamp("rowtime")?
//!         .not_null()?
//!         .integer("orderId")?
//!         .not_null()?
//!         .varchar("product", 20)?
//!         .not_null()?
//!         .end()
//! }
//!
//! # fn main() -> Result<()> {
//! let script = Script::builder()
//!     .definitions()
//!     .apply(define_orders)?
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
//! assert_eq!(script.expectation("Q"), Some(&[SqlValue::Int(101)][..]));
//!
//! // Inserting into a stream that was never defined is rejected.
//! let err = Script::builder().input().insert("TRADES", values![1]).unwrap_err();
//! assert_eq!(err.to_string(), "unknown target TRADES; must occur in the definitions");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod column;
pub mod error;
pub mod insert;
pub mod script;
pub mod stream;
pub mod value;

pub use builder::{
    DefinitionsBuilder, ExpectationsBuilder, InputsBuilder, ScriptBuilder, StreamBuilder,
};
pub use column::{Column, sql_type};
pub use error::{ErrorKind, Result, ScriptError};
pub use insert::Insert;
pub use script::Script;
pub use stream::Stream;
pub use value::{SqlValue, ToSqlValue};
