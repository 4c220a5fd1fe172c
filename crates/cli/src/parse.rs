//! ArgMatches → CliAction conversion.
//!
//! Translates clap's parsed arguments into the appropriate action:
//! - `import` → `CliAction::Import`
//! - everything else → `CliAction::Execute(Command)`

use std::path::PathBuf;

use clap::ArgMatches;

use benchplot_core::{AxisPair, AxisSelection, Datum, Filters, PlotConfig};
use benchplot_executor::Command;

/// The result of parsing the command line.
#[derive(Debug)]
pub enum CliAction {
    /// Load a CSV file into the database.
    Import(ImportArgs),
    /// A request for the executor.
    Execute(Command),
}

/// Arguments of `benchplot import`.
#[derive(Debug, PartialEq)]
pub struct ImportArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub indexes: Vec<Vec<String>>,
}

/// Convert clap ArgMatches into a CliAction.
///
/// `plot` supplies the default axes for `trace`.
pub fn matches_to_action(matches: &ArgMatches, plot: &PlotConfig) -> Result<CliAction, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "import" => parse_import(m),
        "controls" => Ok(CliAction::Execute(Command::PlotSetup)),
        "trace" => {
            let x = m.get_one::<String>("x").unwrap_or(&plot.default_x);
            let y = m.get_one::<String>("y").unwrap_or(&plot.default_y);
            Ok(CliAction::Execute(Command::Plot {
                axes: AxisPair::new(x.as_str(), y.as_str()),
                plot: parse_filters(m)?,
            }))
        }
        "valid" => Ok(CliAction::Execute(Command::ValidConfigs {
            fixed: parse_filters(m)?,
        })),
        "axes" => parse_axes(m),
        "save" => {
            let name = required(m, "name")?;
            let chart = read_chart_arg(&required(m, "chart")?)?;
            Ok(CliAction::Execute(Command::SaveChart { name, chart }))
        }
        "open" => Ok(CliAction::Execute(Command::OpenChart {
            name: required(m, "name")?,
        })),
        "delete" => Ok(CliAction::Execute(Command::DeleteChart {
            name: required(m, "name")?,
        })),
        "charts" => Ok(CliAction::Execute(Command::ListCharts)),
        other => Err(format!("Unknown command: {}", other)),
    }
}

// =========================================================================
// Import
// =========================================================================

fn parse_import(m: &ArgMatches) -> Result<CliAction, String> {
    let input = PathBuf::from(required(m, "input")?);
    let output = m.get_one::<String>("output").map(PathBuf::from);
    let indexes = match m.get_occurrences::<String>("index") {
        Some(groups) => groups.map(|g| g.cloned().collect()).collect(),
        None => Vec::new(),
    };
    Ok(CliAction::Import(ImportArgs {
        input,
        output,
        indexes,
    }))
}

// =========================================================================
// Query helpers
// =========================================================================

fn parse_axes(m: &ArgMatches) -> Result<CliAction, String> {
    let axes = AxisSelection {
        xaxis: m.get_one::<String>("x").cloned(),
        yaxis: m.get_one::<String>("y").cloned(),
    };
    let traces = m
        .get_many::<String>("trace")
        .unwrap_or_default()
        .map(|raw| {
            serde_json::from_str::<Filters>(raw)
                .map_err(|e| format!("Invalid trace '{}': {}", raw, e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CliAction::Execute(Command::ChangeAxes { axes, traces }))
}

fn parse_filters(m: &ArgMatches) -> Result<Filters, String> {
    let mut filters = Filters::new();
    for raw in m.get_many::<String>("filter").unwrap_or_default() {
        let (control, value) = raw
            .split_once('=')
            .ok_or_else(|| format!("Expected CONTROL=VALUE, got '{}'", raw))?;
        // Bound as the literal text: "007" must not turn into 7.
        filters.insert(control.trim().to_string(), Datum::from(value));
    }
    Ok(filters)
}

fn read_chart_arg(raw: &str) -> Result<serde_json::Value, String> {
    let text = match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read chart file {}: {}", path, e))?,
        None => raw.to_string(),
    };
    serde_json::from_str(&text).map_err(|e| format!("Invalid chart JSON: {}", e))
}

fn required(m: &ArgMatches, id: &str) -> Result<String, String> {
    m.get_one::<String>(id)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", id))
}
