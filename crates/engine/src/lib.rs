//! Trace query engine for benchplot
//!
//! Turns a small filter vocabulary into parameter-bound SQL against one
//! imported table:
//! - connection: scoped SQLite handles with an explicit access mode
//! - schema: the table's column allow-list, read by introspection
//! - plan: SQL fragments precomputed once per engine
//! - engine: discovery, single traces, axis remapping and chart replay

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod connection;
pub mod engine;
pub mod payload;
pub mod plan;
pub mod schema;

pub use connection::{open_connection, AccessMode, OpenOptions};
pub use engine::TraceQueryEngine;
pub use payload::{AxisOptions, ControlValues, PlotSetup};
pub use plan::QueryPlan;
pub use schema::TableSchema;

#[cfg(test)]
pub(crate) mod test_support;
