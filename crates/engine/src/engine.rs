//! The trace query engine.
//!
//! [`TraceQueryEngine`] borrows one connection for the lifetime of a
//! request. Construction reads the table schema and builds the
//! [`QueryPlan`]; both are immutable afterwards. Statements go through the
//! connection's prepared statement cache, so repeated traces with different
//! filter values reuse the same compiled SQL.

use std::sync::Arc;

use rusqlite::{params_from_iter, Connection};
use tracing::{debug, warn};

use benchplot_core::trace::TRACE_KIND;
use benchplot_core::{
    AxisPair, AxisSelection, Datum, Error, Filters, PlotConfig, Result, SavedChart, Trace,
    TraceMode, TraceUpdate,
};

use crate::payload::{AxisOptions, ControlValues, PlotSetup};
use crate::plan::QueryPlan;
use crate::schema::TableSchema;

/// Builds traces and discovery payloads from one table.
pub struct TraceQueryEngine<'c> {
    conn: &'c Connection,
    config: Arc<PlotConfig>,
    schema: TableSchema,
    plan: QueryPlan,
}

impl<'c> TraceQueryEngine<'c> {
    /// Create an engine over `config.table` using `conn`.
    pub fn new(conn: &'c Connection, config: Arc<PlotConfig>) -> Result<Self> {
        config.validate()?;
        let schema = TableSchema::introspect(conn, &config.table)?;
        let plan = QueryPlan::new(&schema, &config)?;
        Ok(Self {
            conn,
            config,
            schema,
            plan,
        })
    }

    /// Column allow-list of the table
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Plot configuration in use
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    // =========================================================================
    // Discovery
    // =========================================================================

    /// Sorted distinct values of every control column.
    pub fn list_controls(&self) -> Result<ControlValues> {
        self.valid_configs(&Filters::new())
    }

    /// Columns selectable as axes: everything except controls and the
    /// ignore set, sorted.
    pub fn list_axis_options(&self) -> Vec<String> {
        let mut opts: Vec<String> = self
            .schema
            .columns()
            .iter()
            .filter(|c| !self.config.is_control(c) && !self.config.is_ignored(c))
            .cloned()
            .collect();
        opts.sort();
        opts
    }

    /// Discovery payload for a client; `files` are the saved chart names.
    pub fn plot_setup(&self, files: Vec<String>) -> Result<PlotSetup> {
        let opts = self.list_axis_options();
        Ok(PlotSetup {
            controls: self.list_controls()?,
            xaxis: AxisOptions {
                opts: opts.clone(),
                default: self.config.default_x.clone(),
            },
            yaxis: AxisOptions {
                opts,
                default: self.config.default_y.clone(),
            },
            files,
        })
    }

    /// Values of each control not in `fixed` that co-occur with `fixed`.
    ///
    /// Every key of `fixed` must be a control column.
    pub fn valid_configs(&self, fixed: &Filters) -> Result<ControlValues> {
        if let Some(unknown) = fixed.keys().find(|k| !self.config.is_control(k)) {
            return Err(Error::Validation(format!(
                "'{}' is not a control column",
                unknown
            )));
        }

        let fixed_cols: Vec<&str> = self
            .plan
            .controls()
            .iter()
            .map(String::as_str)
            .filter(|c| fixed.contains_key(*c))
            .collect();
        let values: Vec<&Datum> = fixed_cols.iter().map(|c| &fixed[*c]).collect();

        let mut out = ControlValues::new();
        for control in self.plan.controls() {
            if fixed.contains_key(control.as_str()) {
                continue;
            }
            let sql = self.plan.distinct_sql(control, &fixed_cols);
            out.insert(control.clone(), self.distinct_values(&sql, &values)?);
        }
        Ok(out)
    }

    fn distinct_values(&self, sql: &str, values: &[&Datum]) -> Result<Vec<Datum>> {
        debug!(sql = %sql, "distinct query");
        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt.query_map(params_from_iter(values.iter().copied()), |row| {
            row.get::<_, Datum>(0)
        })?;
        let values = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(values)
    }

    // =========================================================================
    // Traces
    // =========================================================================

    /// Build the trace for one control-value combination.
    pub fn get_trace(&self, axes: &AxisPair, filters: &Filters) -> Result<Trace> {
        let x_col = self.schema.resolve(&axes.x)?;
        let y_col = self.schema.resolve(&axes.y)?;
        let values = self.bind_controls(filters)?;

        let sql = self.plan.trace_sql(x_col, y_col);
        debug!(sql = %sql, "trace query");
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let mut rows = stmt.query(params_from_iter(values.iter().copied()))?;

        let (mut x, mut y, mut hovertext) = (Vec::new(), Vec::new(), Vec::new());
        while let Some(row) = rows.next()? {
            x.push(row.get::<_, Datum>(0)?);
            y.push(row.get::<_, Datum>(1)?);
            hovertext.push(row.get::<_, Datum>(2)?);
        }
        if x.is_empty() {
            return Err(Error::EmptyResult);
        }

        Ok(Trace {
            x,
            y,
            hovertext,
            mode: self.mode_for(&values),
            name: legend_name(&values),
            kind: TRACE_KIND.to_string(),
            showlegend: true,
        })
    }

    /// Re-query only the requested axes for each trace.
    ///
    /// Name, mode and hover text are left to the caller; the updates carry
    /// coordinates only. With no axis requested storage is not touched.
    pub fn change_axes(
        &self,
        selection: &AxisSelection,
        traces: &[Filters],
    ) -> Result<Vec<TraceUpdate>> {
        if selection.is_empty() {
            return Ok(vec![TraceUpdate::default(); traces.len()]);
        }

        let x_col = selection
            .xaxis
            .as_deref()
            .map(|c| self.schema.resolve(c))
            .transpose()?;
        let y_col = selection
            .yaxis
            .as_deref()
            .map(|c| self.schema.resolve(c))
            .transpose()?;
        let columns: Vec<&str> = x_col.into_iter().chain(y_col).collect();
        let y_index = usize::from(x_col.is_some());

        let sql = self.plan.projection_sql(&columns);
        debug!(sql = %sql, traces = traces.len(), "axis change query");
        let mut stmt = self.conn.prepare_cached(&sql)?;

        let mut updates = Vec::with_capacity(traces.len());
        for filters in traces {
            let values = self.bind_controls(filters)?;
            let mut rows = stmt.query(params_from_iter(values.iter().copied()))?;

            let (mut xs, mut ys, mut count) = (Vec::new(), Vec::new(), 0usize);
            while let Some(row) = rows.next()? {
                if x_col.is_some() {
                    xs.push(row.get::<_, Datum>(0)?);
                }
                if y_col.is_some() {
                    ys.push(row.get::<_, Datum>(y_index)?);
                }
                count += 1;
            }
            if count == 0 {
                return Err(Error::EmptyResult);
            }

            updates.push(TraceUpdate {
                x: x_col.map(|_| xs),
                y: y_col.map(|_| ys),
            });
        }
        Ok(updates)
    }

    /// Replay a saved chart into its traces.
    ///
    /// Any failing trace fails the whole chart.
    pub fn open_chart(&self, chart: &SavedChart) -> Result<Vec<Trace>> {
        chart
            .traces
            .iter()
            .map(|filters| self.get_trace(&chart.axes, filters))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| {
                warn!(error = %e, traces = chart.traces.len(), "saved chart replay failed");
                Error::ChartOpen(Box::new(e))
            })
    }

    /// Filter values in control order; every control must be present.
    fn bind_controls<'f>(&self, filters: &'f Filters) -> Result<Vec<&'f Datum>> {
        self.plan
            .controls()
            .iter()
            .map(|control| {
                filters.get(control).ok_or_else(|| {
                    Error::Validation(format!("missing value for control '{}'", control))
                })
            })
            .collect()
    }

    fn mode_for(&self, values: &[&Datum]) -> TraceMode {
        let position = self
            .plan
            .controls()
            .iter()
            .position(|c| *c == self.config.mode_control);
        match position.and_then(|i| values.get(i)) {
            Some(value) => TraceMode::from_control_value(
                &value.to_string(),
                self.config.mode_delimiter,
                self.config.scatter_threshold,
            ),
            None => TraceMode::LinesMarkers,
        }
    }
}

/// Legend label: filter values joined by spaces, in control order.
fn legend_name(values: &[&Datum]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
