//! Command handlers, grouped by concern.

pub mod chart;
pub mod plot;
