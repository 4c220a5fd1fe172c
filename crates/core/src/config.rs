//! Configuration
//!
//! [`PlotConfig`] describes the shape of the benchmark table: which columns
//! are controls, which are never offered as axes, and the display defaults.
//! It is built once and shared read-only by the importer and the engine.
//!
//! [`Config`] wraps it with the process-level settings (database path, chart
//! directory, logging) and loads from TOML:
//!
//! ```toml
//! database = "db.sqlite"
//! charts_dir = "work"
//! log_file = "error.log"
//!
//! [plot]
//! table = "master"
//! controls = ["workload", "devices", "algorithms", "write policy"]
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Shape of the benchmark table and display defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Table holding the benchmark rows
    pub table: String,
    /// Control columns, in binding and legend order
    pub controls: Vec<String>,
    /// Columns never offered as axes
    pub ignore: Vec<String>,
    /// Column projected as hover text
    pub hover_column: String,
    /// Surrogate key column added by the importer
    pub surrogate_key: String,
    /// Control whose value decides the trace mode
    pub mode_control: String,
    /// Delimiter splitting the mode control value into tokens
    pub mode_delimiter: char,
    /// Token count above which a trace is drawn as markers only
    pub scatter_threshold: usize,
    /// Default X axis column
    pub default_x: String,
    /// Default Y axis column
    pub default_y: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            table: "master".to_string(),
            controls: vec![
                "workload".to_string(),
                "devices".to_string(),
                "algorithms".to_string(),
                "write policy".to_string(),
            ],
            ignore: vec![
                "id".to_string(),
                "source".to_string(),
                "cache sizes".to_string(),
            ],
            hover_column: "cache sizes".to_string(),
            surrogate_key: "id".to_string(),
            mode_control: "devices".to_string(),
            mode_delimiter: '-',
            scatter_threshold: 2,
            default_x: "total purchase cost ($)".to_string(),
            default_y: "avg throughput (KB/s)".to_string(),
        }
    }
}

impl PlotConfig {
    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.table.is_empty() {
            return Err(Error::Config("table name is empty".into()));
        }
        if self.controls.is_empty() {
            return Err(Error::Config("at least one control column is required".into()));
        }
        let mut seen = HashSet::new();
        for control in &self.controls {
            if !seen.insert(control.as_str()) {
                return Err(Error::Config(format!("duplicate control column '{}'", control)));
            }
        }
        if !self.controls.contains(&self.mode_control) {
            return Err(Error::Config(format!(
                "mode control '{}' is not a control column",
                self.mode_control
            )));
        }
        if self.surrogate_key.is_empty() || self.hover_column.is_empty() {
            return Err(Error::Config(
                "surrogate key and hover column must be named".into(),
            ));
        }
        Ok(())
    }

    /// Check if `column` is one of the controls
    pub fn is_control(&self, column: &str) -> bool {
        self.controls.iter().any(|c| c == column)
    }

    /// Check if `column` is excluded from axis options
    pub fn is_ignored(&self, column: &str) -> bool {
        self.ignore.iter().any(|c| c == column)
    }
}

/// Process-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQLite database file
    pub database: PathBuf,
    /// Directory holding saved charts
    pub charts_dir: PathBuf,
    /// Append-mode log file; logs go to stderr when unset
    pub log_file: Option<PathBuf>,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Table shape
    pub plot: PlotConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from("db.sqlite"),
            charts_dir: PathBuf::from("work"),
            log_file: None,
            log_level: "warn".to_string(),
            plot: PlotConfig::default(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(|e| Error::Config(e.to_string()))?;
        config.plot.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }
}
