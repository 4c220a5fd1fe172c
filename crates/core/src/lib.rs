//! Core types for benchplot
//!
//! This crate defines the pieces shared by the importer, the trace query
//! engine, the chart store and the request executor:
//! - Datum: the scalar cell value moved between storage and traces
//! - ColumnType / ColumnSpec: the storage schema produced by an import
//! - Trace / TraceUpdate / SavedChart: what the engine hands back to callers
//! - PlotConfig / Config: the immutable configuration passed into components
//! - Error / Status / ErrorReply: the error taxonomy and its wire shape

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chart;
pub mod config;
pub mod error;
pub mod ident;
pub mod reply;
pub mod schema;
pub mod trace;
pub mod value;

pub use chart::{AxisPair, AxisSelection, Filters, SavedChart};
pub use config::{Config, PlotConfig};
pub use error::{Error, Result};
pub use ident::{quote_identifier, sanitize_column_name, sanitize_table_name, strip_quotes};
pub use reply::{ErrorReply, Status};
pub use schema::{ColumnSpec, ColumnType};
pub use trace::{Trace, TraceMode, TraceUpdate};
pub use value::Datum;
