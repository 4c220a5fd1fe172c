//! Command enum: every request the executor understands.

use serde::{Deserialize, Serialize};

use benchplot_core::{AxisPair, AxisSelection, Filters};

/// A single request.
///
/// On the wire commands are JSON objects tagged by `"command"`:
///
/// ```text
/// {"command": "plot", "axes": {"x": "iops", "y": "latency"}, "plot": {"workload": "W1", ...}}
/// {"command": "change_axes", "axes": {"xaxis": "iops"}, "traces": [{...}, {...}]}
/// {"command": "open_chart", "name": "baseline"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    // ==================== Discovery ====================
    /// Control domains, axis options and saved chart names.
    PlotSetup,

    /// Values of the free controls that co-occur with `fixed`.
    ValidConfigs {
        /// Controls already chosen
        #[serde(default)]
        fixed: Filters,
    },

    // ==================== Traces ====================
    /// One trace for a full control-value combination.
    Plot {
        /// Axis columns
        axes: AxisPair,
        /// One value per control
        plot: Filters,
    },

    /// Re-query the requested axes for existing traces.
    ChangeAxes {
        /// Axes to change; either may be absent
        #[serde(default)]
        axes: AxisSelection,
        /// Filter tuples of the traces on screen
        traces: Vec<Filters>,
    },

    // ==================== Saved charts ====================
    /// Store a chart blob under `name`.
    SaveChart {
        /// Chart name
        name: String,
        /// `{"axes": .., "traces": [..]}`
        chart: serde_json::Value,
    },

    /// Replay a saved chart.
    OpenChart {
        /// Chart name
        name: String,
    },

    /// Remove a saved chart.
    DeleteChart {
        /// Chart name
        name: String,
    },

    /// Names of every saved chart.
    ListCharts,
}

impl Command {
    /// Snake-case command name, as used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Command::PlotSetup => "plot_setup",
            Command::ValidConfigs { .. } => "valid_configs",
            Command::Plot { .. } => "plot",
            Command::ChangeAxes { .. } => "change_axes",
            Command::SaveChart { .. } => "save_chart",
            Command::OpenChart { .. } => "open_chart",
            Command::DeleteChart { .. } => "delete_chart",
            Command::ListCharts => "list_charts",
        }
    }
}
