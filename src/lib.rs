//! # Benchplot
//!
//! Parametric trace queries over imported benchmark tables.
//!
//! A CSV of benchmark results is imported into a SQLite table whose schema is
//! inferred from the data. A fixed set of *control* columns (workload,
//! devices, algorithms, write policy by default) partitions the rows; each
//! full combination of control values is one plot trace over two chosen
//! axis columns. Charts are saved as lists of control-value tuples and
//! replayed through the same query path.
//!
//! ## Quick Start
//!
//! ```ignore
//! use benchplot::prelude::*;
//!
//! let bp = Benchplot::builder().database("db.sqlite").open()?;
//! bp.import_csv("master.csv", &[])?;
//!
//! let session = bp.session();
//! let setup = session.plot_setup()?;
//! let trace = session.plot(
//!     &AxisPair::new(setup.xaxis.default, setup.yaxis.default),
//!     &filters,
//! )?;
//! ```
//!
//! ## Crates
//!
//! - `benchplot-core`: shared types, configuration, errors
//! - `benchplot-import`: CSV → table with inferred schema and indexes
//! - `benchplot-engine`: trace, discovery and axis-change queries
//! - `benchplot-store`: saved chart persistence
//! - `benchplot-executor`: request/reply boundary

#![warn(missing_docs)]

mod database;

pub mod prelude;

// Re-export main entry points
pub use database::{Benchplot, BenchplotBuilder};

// Re-export shared types
pub use benchplot_core::{
    AxisPair, AxisSelection, Config, Datum, Error, Filters, PlotConfig, Result, SavedChart,
    Status, Trace, TraceMode, TraceUpdate,
};
pub use benchplot_executor::{Command, Executor, Output, Reply, Session};
pub use benchplot_import::{ImportSummary, SourceRecordSet};
