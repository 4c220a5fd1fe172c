//! Output enum: successful command results.

use serde::Serialize;

use benchplot_core::{AxisPair, Trace, TraceUpdate};
use benchplot_engine::{ControlValues, PlotSetup};

/// Result of a successful command.
///
/// Serializes as the bare payload, without a variant tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// Discovery payload
    PlotSetup(PlotSetup),
    /// A single trace
    Trace(Trace),
    /// Control → co-occurring values
    ValidConfigs(ControlValues),
    /// One coordinate update per requested trace
    TraceUpdates(Vec<TraceUpdate>),
    /// A replayed saved chart
    Chart {
        /// Traces in saved order
        traces: Vec<Trace>,
        /// Saved axis pair
        axes: AxisPair,
    },
    /// Saved chart names, sorted
    ChartNames(Vec<String>),
    /// No payload
    Unit,
}

impl Output {
    /// Encode as the reply body.
    pub fn to_json(&self) -> serde_json::Value {
        // Output holds only maps with string keys and finite-or-null numbers.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
