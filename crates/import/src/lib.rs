//! Schema importer for benchplot
//!
//! Loads a flat record set (normally a CSV file) into a SQLite table:
//! - SourceRecordSet: named fields of equal length, read from CSV
//! - infer_column_type: static INTEGER / REAL / TEXT inference per field
//! - Importer: create-if-absent, truncate, reload and re-index in one
//!   transaction

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod importer;
pub mod infer;
pub mod source;

pub use importer::{ImportSummary, Importer};
pub use infer::infer_column_type;
pub use source::{table_name_from_path, SourceField, SourceRecordSet};
