//! High-level typed wrapper for the Executor.
//!
//! [`Session`] turns the [`Command`]/[`Output`] interface into ordinary
//! method calls for Rust callers.
//!
//! # Example
//!
//! ```ignore
//! use benchplot_executor::Session;
//!
//! let session = Session::new(executor);
//! let setup = session.plot_setup()?;
//! let trace = session.plot(&AxisPair::new(setup.xaxis.default, setup.yaxis.default), &filters)?;
//! ```

mod charts;

use benchplot_core::{AxisPair, AxisSelection, Filters, Trace, TraceUpdate};
use benchplot_engine::{ControlValues, PlotSetup};

use crate::{Command, Error, Executor, Output, Result};

/// Typed request methods over an [`Executor`].
#[derive(Clone)]
pub struct Session {
    executor: Executor,
}

impl Session {
    /// Wrap an executor.
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    /// Get the underlying executor.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    // =========================================================================
    // Discovery
    // =========================================================================

    /// Control domains, axis options and saved chart names.
    pub fn plot_setup(&self) -> Result<PlotSetup> {
        match self.executor.execute(Command::PlotSetup)? {
            Output::PlotSetup(setup) => Ok(setup),
            other => Err(unexpected("PlotSetup", &other)),
        }
    }

    /// Values of the free controls that co-occur with `fixed`.
    pub fn valid_configs(&self, fixed: &Filters) -> Result<ControlValues> {
        match self.executor.execute(Command::ValidConfigs {
            fixed: fixed.clone(),
        })? {
            Output::ValidConfigs(values) => Ok(values),
            other => Err(unexpected("ValidConfigs", &other)),
        }
    }

    // =========================================================================
    // Traces
    // =========================================================================

    /// Build one trace.
    pub fn plot(&self, axes: &AxisPair, filters: &Filters) -> Result<Trace> {
        match self.executor.execute(Command::Plot {
            axes: axes.clone(),
            plot: filters.clone(),
        })? {
            Output::Trace(trace) => Ok(trace),
            other => Err(unexpected("Plot", &other)),
        }
    }

    /// Re-query the selected axes of existing traces.
    pub fn change_axes(
        &self,
        selection: &AxisSelection,
        traces: &[Filters],
    ) -> Result<Vec<TraceUpdate>> {
        match self.executor.execute(Command::ChangeAxes {
            axes: selection.clone(),
            traces: traces.to_vec(),
        })? {
            Output::TraceUpdates(updates) => Ok(updates),
            other => Err(unexpected("ChangeAxes", &other)),
        }
    }
}

fn unexpected(command: &str, output: &Output) -> Error {
    Error::Storage(format!("unexpected output for {}: {:?}", command, output))
}
