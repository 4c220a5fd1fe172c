//! Table introspection.
//!
//! [`TableSchema`] is the only source of identifiers that may appear in
//! generated SQL. Names from requests are looked up here and rejected when
//! absent, before any statement is built.

use rusqlite::Connection;

use benchplot_core::{Error, Result};

/// Column allow-list of one table, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    table: String,
    columns: Vec<String>,
}

impl TableSchema {
    /// Read the columns of `table`.
    pub fn introspect(conn: &Connection, table: &str) -> Result<Self> {
        let exists: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Err(Error::Storage(format!("table '{}' does not exist", table)));
        }

        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid")?;
        let rows = stmt.query_map([table], |row| row.get::<_, String>(0))?;
        let columns = rows.collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(Self {
            table: table.to_string(),
            columns,
        })
    }

    /// Build a schema from known names, without storage.
    pub fn from_columns(table: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            table: table.into(),
            columns,
        }
    }

    /// Table name
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Column names in declaration order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Check if `name` is a column of the table
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Resolve a requested column name against the allow-list.
    ///
    /// The returned slice is owned by the schema, never by the request.
    pub fn resolve(&self, name: &str) -> Result<&str> {
        self.columns
            .iter()
            .find(|c| c.as_str() == name)
            .map(String::as_str)
            .ok_or_else(|| Error::Validation(format!("unknown column '{}'", name)))
    }
}
