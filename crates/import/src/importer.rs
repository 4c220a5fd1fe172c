//! Atomic table replace
//!
//! One import is one transaction:
//!
//! 1. `CREATE TABLE IF NOT EXISTS` with the surrogate key plus inferred columns.
//!    An existing table keeps its schema; it is never migrated.
//! 2. `DELETE FROM` the table and insert every source row in order.
//! 3. Drop every explicit index on the table, then create the requested ones
//!    as `idx_0`, `idx_1`, ...
//!
//! Any failure drops the transaction, which rolls back every step above.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use rusqlite::{params_from_iter, Connection, Transaction};
use tracing::{debug, info};

use benchplot_core::{
    quote_identifier, sanitize_column_name, sanitize_table_name, ColumnSpec, ColumnType, Datum,
    Error, PlotConfig, Result,
};

use crate::infer::infer_column_type;
use crate::source::SourceRecordSet;

/// Outcome of a successful import.
#[derive(Debug, Clone)]
pub struct ImportSummary {
    /// Destination table
    pub table: String,
    /// Columns inferred from the source, in field order
    pub columns: Vec<ColumnSpec>,
    /// Rows inserted
    pub rows: usize,
    /// Indexes attached to the table after the import
    pub indexes: Vec<String>,
    /// Wall-clock time of the whole import
    pub elapsed: Duration,
}

impl ImportSummary {
    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Imported {} rows into `{}` ({} columns, {} indexes) in {:.3}s",
            self.rows,
            self.table,
            self.columns.len(),
            self.indexes.len(),
            self.elapsed.as_secs_f64()
        )
    }
}

/// Loads record sets into SQLite tables.
#[derive(Debug, Clone)]
pub struct Importer {
    surrogate_key: String,
}

impl Importer {
    /// Create an importer using the surrogate key name from `config`.
    pub fn new(config: &PlotConfig) -> Self {
        Self {
            surrogate_key: config.surrogate_key.clone(),
        }
    }

    /// Infer the column specs of `source` without touching storage.
    pub fn infer_schema(&self, source: &SourceRecordSet) -> Result<Vec<ColumnSpec>> {
        if source.is_empty() {
            return Err(Error::Schema("there are zero fields in the source".into()));
        }
        Ok(source
            .fields()
            .iter()
            .enumerate()
            .map(|(i, field)| {
                ColumnSpec::new(
                    sanitize_column_name(&field.name, i + 1),
                    infer_column_type(&field.values),
                )
            })
            .collect())
    }

    /// Replace the contents of the destination table with `source`.
    ///
    /// `table_hint` is sanitized into the table name; each entry of
    /// `indexes` is the column list of one index.
    pub fn import(
        &self,
        conn: &mut Connection,
        source: &SourceRecordSet,
        table_hint: &str,
        indexes: &[Vec<String>],
    ) -> Result<ImportSummary> {
        let start = Instant::now();
        let table = sanitize_table_name(table_hint);
        let columns = self.infer_schema(source)?;

        let tx = conn
            .transaction()
            .map_err(storage_step("begin transaction"))?;
        let created = self.replace(&tx, &table, &columns, source, indexes)?;
        tx.commit().map_err(storage_step("commit"))?;

        let summary = ImportSummary {
            table,
            columns,
            rows: source.row_count(),
            indexes: created,
            elapsed: start.elapsed(),
        };
        info!(
            table = %summary.table,
            rows = summary.rows,
            indexes = summary.indexes.len(),
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "import complete"
        );
        Ok(summary)
    }

    fn replace(
        &self,
        tx: &Transaction<'_>,
        table: &str,
        columns: &[ColumnSpec],
        source: &SourceRecordSet,
        indexes: &[Vec<String>],
    ) -> Result<Vec<String>> {
        let quoted_table = quote_identifier(table);

        let create = create_table_sql(&quoted_table, &self.surrogate_key, columns);
        debug!(sql = %create, "create table");
        tx.execute_batch(&create)
            .map_err(storage_step("create table"))?;

        tx.execute(&format!("DELETE FROM {}", quoted_table), [])
            .map_err(storage_step("truncate table"))?;

        drop_indexes(tx, table)?;
        insert_rows(tx, &quoted_table, columns, source)?;
        create_indexes(tx, table, indexes)
    }
}

fn create_table_sql(quoted_table: &str, surrogate_key: &str, columns: &[ColumnSpec]) -> String {
    let mut defs = vec![format!("{} INTEGER PRIMARY KEY", quote_identifier(surrogate_key))];
    defs.extend(
        columns
            .iter()
            .map(|c| format!("{} {}", quote_identifier(&c.name), c.column_type.sql_keyword())),
    );
    format!("CREATE TABLE IF NOT EXISTS {} ({});", quoted_table, defs.join(","))
}

fn drop_indexes(tx: &Transaction<'_>, table: &str) -> Result<()> {
    // Automatic indexes have no SQL and cannot be dropped.
    let existing: Vec<String> = {
        let mut stmt = tx
            .prepare(
                "SELECT name FROM sqlite_master \
                 WHERE type = 'index' AND tbl_name = ?1 AND sql IS NOT NULL",
            )
            .map_err(storage_step("list indexes"))?;
        let names = stmt
            .query_map([table], |row| row.get::<_, String>(0))
            .map_err(storage_step("list indexes"))?;
        let existing = names
            .collect::<rusqlite::Result<_>>()
            .map_err(storage_step("list indexes"))?;
        existing
    };

    for name in existing {
        debug!(index = %name, "dropping index");
        tx.execute(&format!("DROP INDEX {}", quote_identifier(&name)), [])
            .map_err(storage_step("drop index"))?;
    }
    Ok(())
}

fn insert_rows(
    tx: &Transaction<'_>,
    quoted_table: &str,
    columns: &[ColumnSpec],
    source: &SourceRecordSet,
) -> Result<()> {
    let names: Vec<String> = columns.iter().map(|c| quote_identifier(&c.name)).collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{}", i)).collect();
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted_table,
        names.join(","),
        placeholders.join(",")
    );
    debug!(sql = %sql, rows = source.row_count(), "bulk insert");

    let mut stmt = tx.prepare(&sql).map_err(storage_step("prepare insert"))?;
    for index in 0..source.row_count() {
        let row: Vec<Datum> = source
            .row(index)
            .zip(columns)
            .map(|(cell, col)| typed_cell(cell, col.column_type))
            .collect();
        stmt.execute(params_from_iter(row.iter()))
            .map_err(|e| Error::Import(format!("insert row {}: {}", index + 1, e)))?;
    }
    Ok(())
}

fn create_indexes(
    tx: &Transaction<'_>,
    table: &str,
    indexes: &[Vec<String>],
) -> Result<Vec<String>> {
    let known = table_columns(tx, table)?;
    let quoted_table = quote_identifier(table);
    let mut created = Vec::with_capacity(indexes.len());

    for (position, cols) in indexes.iter().enumerate() {
        if cols.is_empty() {
            return Err(Error::Validation(format!("index {} has no columns", position)));
        }
        if let Some(unknown) = cols.iter().find(|c| !known.contains(c.as_str())) {
            return Err(Error::Validation(format!(
                "cannot index unknown column '{}' of table '{}'",
                unknown, table
            )));
        }
        let name = format!("idx_{}", position);
        let quoted_cols: Vec<String> = cols.iter().map(|c| quote_identifier(c)).collect();
        let sql = format!(
            "CREATE INDEX {} ON {} ({})",
            quote_identifier(&name),
            quoted_table,
            quoted_cols.join(",")
        );
        debug!(sql = %sql, "create index");
        tx.execute(&sql, []).map_err(storage_step("create index"))?;
        created.push(name);
    }
    Ok(created)
}

fn table_columns(tx: &Transaction<'_>, table: &str) -> Result<HashSet<String>> {
    let mut stmt = tx
        .prepare("SELECT name FROM pragma_table_info(?1)")
        .map_err(storage_step("read table info"))?;
    let names = stmt
        .query_map([table], |row| row.get::<_, String>(0))
        .map_err(storage_step("read table info"))?;
    let columns = names
        .collect::<rusqlite::Result<HashSet<String>>>()
        .map_err(storage_step("read table info"))?;
    Ok(columns)
}

/// Bind a raw cell as its column's storage type; empty cells are NULL.
fn typed_cell(cell: &str, column_type: ColumnType) -> Datum {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Datum::Null;
    }
    match column_type {
        ColumnType::Integer => trimmed
            .parse::<i64>()
            .map(Datum::Integer)
            .unwrap_or_else(|_| Datum::Text(cell.to_string())),
        ColumnType::Real => trimmed
            .parse::<f64>()
            .map(Datum::Real)
            .unwrap_or_else(|_| Datum::Text(cell.to_string())),
        ColumnType::Text => Datum::Text(cell.to_string()),
    }
}

fn storage_step(step: &'static str) -> impl FnOnce(rusqlite::Error) -> Error {
    move |e| Error::Import(format!("{}: {}", step, e))
}
