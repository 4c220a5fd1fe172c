//! Discovery and trace command handlers.

use benchplot_core::{AxisPair, AxisSelection, Filters};
use benchplot_engine::TraceQueryEngine;
use benchplot_store::ChartStore;

use crate::{Output, Result};

/// Handle PlotSetup command.
pub fn plot_setup(engine: &TraceQueryEngine<'_>, store: &dyn ChartStore) -> Result<Output> {
    let files = store.list()?;
    Ok(Output::PlotSetup(engine.plot_setup(files)?))
}

/// Handle ValidConfigs command.
pub fn valid_configs(engine: &TraceQueryEngine<'_>, fixed: &Filters) -> Result<Output> {
    Ok(Output::ValidConfigs(engine.valid_configs(fixed)?))
}

/// Handle Plot command.
pub fn plot(engine: &TraceQueryEngine<'_>, axes: &AxisPair, filters: &Filters) -> Result<Output> {
    Ok(Output::Trace(engine.get_trace(axes, filters)?))
}

/// Handle ChangeAxes command.
pub fn change_axes(
    engine: &TraceQueryEngine<'_>,
    selection: &AxisSelection,
    traces: &[Filters],
) -> Result<Output> {
    Ok(Output::TraceUpdates(engine.change_axes(selection, traces)?))
}
