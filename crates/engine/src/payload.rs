//! Discovery payloads used to populate selection UIs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use benchplot_core::Datum;

/// Sorted distinct values per control column.
pub type ControlValues = BTreeMap<String, Vec<Datum>>;

/// Choices for one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisOptions {
    /// Selectable columns, sorted
    pub opts: Vec<String>,
    /// Column selected initially
    #[serde(rename = "def")]
    pub default: String,
}

/// Everything a client needs to draw its controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSetup {
    /// Domain of every control column
    pub controls: ControlValues,
    /// X axis choices
    pub xaxis: AxisOptions,
    /// Y axis choices
    pub yaxis: AxisOptions,
    /// Saved chart names
    pub files: Vec<String>,
}
