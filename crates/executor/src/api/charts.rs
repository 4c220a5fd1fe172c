//! Saved chart operations.

use benchplot_core::{AxisPair, SavedChart, Trace};

use super::{unexpected, Session};
use crate::{Command, Output, Result};

impl Session {
    // =========================================================================
    // Saved charts
    // =========================================================================

    /// Save `chart` under `name`, replacing any chart of that name.
    pub fn save_chart(&self, name: &str, chart: &SavedChart) -> Result<()> {
        match self.executor.execute(Command::SaveChart {
            name: name.to_string(),
            chart: chart.to_json()?,
        })? {
            Output::Unit => Ok(()),
            other => Err(unexpected("SaveChart", &other)),
        }
    }

    /// Replay a saved chart into its traces and axes.
    pub fn open_chart(&self, name: &str) -> Result<(Vec<Trace>, AxisPair)> {
        match self.executor.execute(Command::OpenChart {
            name: name.to_string(),
        })? {
            Output::Chart { traces, axes } => Ok((traces, axes)),
            other => Err(unexpected("OpenChart", &other)),
        }
    }

    /// Remove a saved chart.
    pub fn delete_chart(&self, name: &str) -> Result<()> {
        match self.executor.execute(Command::DeleteChart {
            name: name.to_string(),
        })? {
            Output::Unit => Ok(()),
            other => Err(unexpected("DeleteChart", &other)),
        }
    }

    /// Names of every saved chart, sorted.
    pub fn list_charts(&self) -> Result<Vec<String>> {
        match self.executor.execute(Command::ListCharts)? {
            Output::ChartNames(names) => Ok(names),
            other => Err(unexpected("ListCharts", &other)),
        }
    }
}
