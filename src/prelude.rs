//! Convenient imports for benchplot.
//!
//! ```ignore
//! use benchplot::prelude::*;
//!
//! let bp = Benchplot::builder().database("db.sqlite").open()?;
//! ```

// Main entry point
pub use crate::database::{Benchplot, BenchplotBuilder};

// Error handling
pub use benchplot_core::{Error, Result};

// Core types
pub use benchplot_core::{
    AxisPair, AxisSelection, Config, Datum, Filters, PlotConfig, SavedChart, Trace, TraceMode,
};

// Request boundary
pub use benchplot_executor::{Command, Session};

// Re-export serde_json for convenience
pub use serde_json::json;
