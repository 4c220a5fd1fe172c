//! Trace types returned by the query engine
//!
//! A [`Trace`] is one rendered data series. It is built per request and never
//! persisted; a saved chart stores only the filters that produced it.

use serde::{Deserialize, Serialize};

use crate::value::Datum;

/// Renderer hint: WebGL scatter, since a trace can hold many points.
pub const TRACE_KIND: &str = "scattergl";

/// How the points of a trace are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceMode {
    /// Unconnected markers
    #[serde(rename = "markers")]
    Markers,
    /// Markers joined by a line
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

impl TraceMode {
    /// Pick the mode from the value of the mode control.
    ///
    /// More than `threshold` tokens after splitting on `delimiter` means the
    /// points have no natural order, so they are not connected.
    pub fn from_control_value(value: &str, delimiter: char, threshold: usize) -> Self {
        if value.split(delimiter).count() > threshold {
            TraceMode::Markers
        } else {
            TraceMode::LinesMarkers
        }
    }

    /// Renderer name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            TraceMode::Markers => "markers",
            TraceMode::LinesMarkers => "lines+markers",
        }
    }
}

/// One data series plus display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// X coordinates
    pub x: Vec<Datum>,
    /// Y coordinates
    pub y: Vec<Datum>,
    /// Auxiliary value shown when hovering a point
    pub hovertext: Vec<Datum>,
    /// Drawing mode
    pub mode: TraceMode,
    /// Legend label
    pub name: String,
    /// Renderer trace type
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the legend entry is shown
    pub showlegend: bool,
}

impl Trace {
    /// Number of points in the trace
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the trace has no points
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Partial update produced by an axis change.
///
/// Only the coordinates that were asked for are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceUpdate {
    /// New X coordinates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<Datum>>,
    /// New Y coordinates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<Datum>>,
}
