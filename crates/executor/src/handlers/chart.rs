//! Saved chart command handlers.

use benchplot_core::{Error, SavedChart};
use benchplot_engine::TraceQueryEngine;
use benchplot_store::ChartStore;

use crate::{Output, Result};

/// Handle SaveChart command.
///
/// The blob must parse as a chart before it is stored.
pub fn save_chart(store: &dyn ChartStore, name: &str, blob: &serde_json::Value) -> Result<Output> {
    let chart = SavedChart::from_json(blob)?;
    store.put(name, &chart.to_json()?)?;
    Ok(Output::Unit)
}

/// Load a saved chart blob.
///
/// A missing or invalid name keeps its own error; anything else about the
/// stored blob is a `ChartOpen` failure.
pub fn load_chart(store: &dyn ChartStore, name: &str) -> Result<SavedChart> {
    let blob = store.get(name).map_err(|e| match e {
        Error::NotFound(_) | Error::Validation(_) => e,
        other => Error::ChartOpen(Box::new(other)),
    })?;
    SavedChart::from_json(&blob).map_err(|e| Error::ChartOpen(Box::new(e)))
}

/// Handle OpenChart command.
pub fn open_chart(engine: &TraceQueryEngine<'_>, chart: SavedChart) -> Result<Output> {
    let traces = engine.open_chart(&chart)?;
    Ok(Output::Chart {
        traces,
        axes: chart.axes,
    })
}

/// Handle DeleteChart command.
pub fn delete_chart(store: &dyn ChartStore, name: &str) -> Result<Output> {
    store.delete(name)?;
    Ok(Output::Unit)
}

/// Handle ListCharts command.
pub fn list_charts(store: &dyn ChartStore) -> Result<Output> {
    Ok(Output::ChartNames(store.list()?))
}
