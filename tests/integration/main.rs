//! Integration tests: import a CSV, query traces, save and replay charts.
//!
//! ```bash
//! cargo test --test integration
//! cargo test --test integration trace_queries::
//! ```

#[path = "../common/mod.rs"]
mod common;

mod charts;
mod import;
mod trace_queries;
