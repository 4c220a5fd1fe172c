//! Precomputed SQL fragments.
//!
//! A [`QueryPlan`] is built once from the table schema and the plot
//! configuration and never changes afterwards. It holds quoted identifiers
//! only; every value is a `?N` placeholder bound at execution time.

use benchplot_core::{quote_identifier, Error, PlotConfig, Result};

use crate::schema::TableSchema;

/// Immutable SQL templates for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    table: String,
    hover: String,
    controls: Vec<String>,
    filter_clause: String,
}

impl QueryPlan {
    /// Build the plan, checking that every configured column exists.
    pub fn new(schema: &TableSchema, config: &PlotConfig) -> Result<Self> {
        for control in &config.controls {
            if !schema.contains(control) {
                return Err(Error::Schema(format!(
                    "control column '{}' is missing from table '{}'",
                    control,
                    schema.table()
                )));
            }
        }
        if !schema.contains(&config.hover_column) {
            return Err(Error::Schema(format!(
                "hover column '{}' is missing from table '{}'",
                config.hover_column,
                schema.table()
            )));
        }

        Ok(Self {
            table: quote_identifier(schema.table()),
            hover: quote_identifier(&config.hover_column),
            controls: config.controls.clone(),
            filter_clause: equality_clause(config.controls.as_slice()),
        })
    }

    /// `SELECT x, y, hover ... WHERE <every control>`; binds one value per
    /// control, in control order.
    pub fn trace_sql(&self, x: &str, y: &str) -> String {
        format!(
            "SELECT {}, {}, {} FROM {} WHERE {}",
            quote_identifier(x),
            quote_identifier(y),
            self.hover,
            self.table,
            self.filter_clause
        )
    }

    /// Project `columns` for the rows of one trace; binds like [`trace_sql`].
    ///
    /// [`trace_sql`]: QueryPlan::trace_sql
    pub fn projection_sql(&self, columns: &[&str]) -> String {
        let cols: Vec<String> = columns.iter().map(|c| quote_identifier(c)).collect();
        format!(
            "SELECT {} FROM {} WHERE {}",
            cols.join(", "),
            self.table,
            self.filter_clause
        )
    }

    /// Sorted distinct values of `column` among rows matching `fixed`.
    ///
    /// Binds one value per entry of `fixed`, in the given order. An empty
    /// `fixed` scans the whole table.
    pub fn distinct_sql(&self, column: &str, fixed: &[&str]) -> String {
        let col = quote_identifier(column);
        if fixed.is_empty() {
            format!("SELECT DISTINCT {0} FROM {1} ORDER BY {0}", col, self.table)
        } else {
            format!(
                "SELECT DISTINCT {0} FROM {1} WHERE {2} ORDER BY {0}",
                col,
                self.table,
                equality_clause(fixed)
            )
        }
    }

    /// Control columns, in binding order
    pub fn controls(&self) -> &[String] {
        &self.controls
    }
}

fn equality_clause<S: AsRef<str>>(columns: &[S]) -> String {
    columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ?{}", quote_identifier(c.as_ref()), i + 1))
        .collect::<Vec<_>>()
        .join(" AND ")
}
