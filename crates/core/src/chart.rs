//! Chart request and saved-chart types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::Datum;

/// Filter values keyed by control column name.
pub type Filters = BTreeMap<String, Datum>;

/// Columns projected as X and Y.
///
/// Accepts either `{"x": .., "y": ..}` or the two-element array form
/// `["x", "y"]`; always serializes as the object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AxisPairRepr")]
pub struct AxisPair {
    /// X column
    pub x: String,
    /// Y column
    pub y: String,
}

impl AxisPair {
    /// Create an axis pair
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AxisPairRepr {
    Object { x: String, y: String },
    Pair(String, String),
}

impl From<AxisPairRepr> for AxisPair {
    fn from(repr: AxisPairRepr) -> Self {
        match repr {
            AxisPairRepr::Object { x, y } | AxisPairRepr::Pair(x, y) => AxisPair { x, y },
        }
    }
}

/// Axes requested by an axis change; either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSelection {
    /// New X column
    #[serde(default, alias = "x", skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<String>,
    /// New Y column
    #[serde(default, alias = "y", skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
}

impl AxisSelection {
    /// Check if neither axis was requested
    pub fn is_empty(&self) -> bool {
        self.xaxis.is_none() && self.yaxis.is_none()
    }
}

/// A persisted chart: axis choice plus one filter tuple per trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedChart {
    /// Axis pair shared by every trace
    pub axes: AxisPair,
    /// Filter tuples, one per trace, in display order
    #[serde(default)]
    pub traces: Vec<Filters>,
}

impl SavedChart {
    /// Parse a saved chart out of an opaque JSON blob.
    pub fn from_json(blob: &serde_json::Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(blob.clone())?)
    }

    /// Encode as a JSON blob for the chart store.
    pub fn to_json(&self) -> crate::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
