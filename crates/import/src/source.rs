//! Source record sets
//!
//! A [`SourceRecordSet`] is the columnar view of one input table. It is
//! immutable once read; every field has the same number of values.

use std::io::Read;
use std::path::Path;

use benchplot_core::{sanitize_table_name, Error, Result};

/// One named field and its raw values, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceField {
    /// Field name as it appeared in the header
    pub name: String,
    /// Raw cell text; empty cells are empty strings
    pub values: Vec<String>,
}

impl SourceField {
    /// Create a field
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Ordered fields of equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecordSet {
    fields: Vec<SourceField>,
    rows: usize,
}

impl SourceRecordSet {
    /// Build a record set, checking that every field has the same length.
    pub fn new(fields: Vec<SourceField>) -> Result<Self> {
        let rows = fields.first().map(|f| f.values.len()).unwrap_or(0);
        if let Some(bad) = fields.iter().find(|f| f.values.len() != rows) {
            return Err(Error::Schema(format!(
                "field '{}' has {} values, expected {}",
                bad.name,
                bad.values.len(),
                rows
            )));
        }
        Ok(Self { fields, rows })
    }

    /// Read a CSV document with a header row.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| Error::Schema(format!("cannot read CSV header: {}", e)))?
            .clone();
        let mut fields: Vec<SourceField> = headers
            .iter()
            .map(|h| SourceField::new(h, Vec::new()))
            .collect();

        for (line, record) in rdr.records().enumerate() {
            let record = record
                .map_err(|e| Error::Schema(format!("bad CSV record {}: {}", line + 1, e)))?;
            for (field, cell) in fields.iter_mut().zip(record.iter()) {
                field.values.push(cell.to_string());
            }
        }

        Self::new(fields)
    }

    /// Read a CSV file with a header row.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    /// Fields in source order
    pub fn fields(&self) -> &[SourceField] {
        &self.fields
    }

    /// Number of fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Check if the record set has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Cells of row `index`, in field order.
    pub fn row(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(move |f| f.values[index].as_str())
    }
}

/// Destination table hint for a CSV file: its stem, sanitized.
pub fn table_name_from_path(path: impl AsRef<Path>) -> String {
    let stem = path
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    sanitize_table_name(&stem)
}
