//! Storage schema types shared by the importer and the query engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage type of an imported column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    /// Every value parses as an integer
    Integer,
    /// Every value parses as a number, not all of them integers
    Real,
    /// Anything else
    Text,
}

impl ColumnType {
    /// SQL type keyword used in `CREATE TABLE`.
    pub fn sql_keyword(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text => "TEXT",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_keyword())
    }
}

/// One column of an imported table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Sanitized column name
    pub name: String,
    /// Inferred storage type
    pub column_type: ColumnType,
}

impl ColumnSpec {
    /// Create a column spec
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}
