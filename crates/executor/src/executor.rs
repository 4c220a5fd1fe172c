//! The command executor.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, warn};

use benchplot_core::{Config, Error, PlotConfig, Status};
use benchplot_engine::{open_connection, AccessMode, OpenOptions, TraceQueryEngine};
use benchplot_store::{ChartStore, FsChartStore};

use crate::handlers::{chart, plot};
use crate::{Command, Output, Result};

/// Dispatches commands against one database file and one chart store.
///
/// The executor is stateless apart from its immutable configuration, so it
/// is cheap to clone and safe to share across threads.
#[derive(Clone)]
pub struct Executor {
    database: PathBuf,
    plot: Arc<PlotConfig>,
    store: Arc<dyn ChartStore>,
    open: OpenOptions,
}

impl Executor {
    /// Create an executor over `config.database` with the given chart store.
    pub fn new(config: &Config, store: Arc<dyn ChartStore>) -> Self {
        Self {
            database: config.database.clone(),
            plot: Arc::new(config.plot.clone()),
            store,
            open: OpenOptions::new().access_mode(AccessMode::ReadOnly),
        }
    }

    /// Create an executor storing charts as files under `config.charts_dir`.
    pub fn with_fs_store(config: &Config) -> Self {
        let store = Arc::new(FsChartStore::new(config.charts_dir.clone()));
        Self::new(config, store)
    }

    /// Database file queried by this executor
    pub fn database(&self) -> &Path {
        &self.database
    }

    /// Chart store used by this executor
    pub fn store(&self) -> &Arc<dyn ChartStore> {
        &self.store
    }

    /// Execute a command, returning its typed output.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let store = self.store.as_ref();
        match cmd {
            Command::PlotSetup => self.with_engine(|engine| plot::plot_setup(engine, store)),
            Command::ValidConfigs { fixed } => {
                self.with_engine(|engine| plot::valid_configs(engine, &fixed))
            }
            Command::Plot { axes, plot: filters } => {
                self.with_engine(|engine| plot::plot(engine, &axes, &filters))
            }
            Command::ChangeAxes { axes, traces } => {
                self.with_engine(|engine| plot::change_axes(engine, &axes, &traces))
            }
            Command::SaveChart { name, chart: blob } => chart::save_chart(store, &name, &blob),
            Command::OpenChart { name } => {
                let saved = chart::load_chart(store, &name)?;
                self.with_engine(|engine| chart::open_chart(engine, saved))
                    .map_err(|e| match e {
                        Error::ChartOpen(_) => e,
                        other => Error::ChartOpen(Box::new(other)),
                    })
            }
            Command::DeleteChart { name } => chart::delete_chart(store, &name),
            Command::ListCharts => chart::list_charts(store),
        }
    }

    /// Execute a command and turn the outcome into a [`Reply`].
    ///
    /// Errors are logged here with their full diagnostic text; the reply
    /// only carries the user-safe message.
    pub fn handle(&self, cmd: Command) -> Reply {
        let name = cmd.name();
        let success = match cmd {
            Command::SaveChart { .. } => Status::Created,
            _ => Status::Ok,
        };

        match self.execute(cmd) {
            Ok(output) => Reply {
                status: success,
                body: output.to_json(),
            },
            Err(e) => {
                log_failure(name, &e);
                Reply::from_error(&e)
            }
        }
    }

    /// Parse one JSON request and handle it.
    pub fn handle_json(&self, request: &str) -> Reply {
        match serde_json::from_str::<Command>(request) {
            Ok(cmd) => self.handle(cmd),
            Err(e) => {
                let e = Error::from(e);
                log_failure("unparsed", &e);
                Reply::from_error(&e)
            }
        }
    }

    /// Run `f` with an engine over a fresh read-only connection.
    ///
    /// The connection lives only for this call.
    fn with_engine<T>(&self, f: impl FnOnce(&TraceQueryEngine<'_>) -> Result<T>) -> Result<T> {
        debug!(database = %self.database.display(), "opening request connection");
        let conn = open_connection(&self.database, &self.open)?;
        let engine = TraceQueryEngine::new(&conn, Arc::clone(&self.plot))?;
        f(&engine)
    }
}

fn log_failure(command: &str, e: &Error) {
    if e.is_client_error() {
        warn!(command, code = e.code(), error = %e, "request rejected");
    } else {
        error!(command, code = e.code(), error = ?e, "request failed");
    }
}

/// Outcome of one handled request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    /// Status classification
    pub status: Status,
    /// Output payload on success, `{"code", "message"}` on failure
    pub body: serde_json::Value,
}

impl Reply {
    /// Build the reply for a failed request.
    pub fn from_error(e: &Error) -> Self {
        Self {
            status: e.status(),
            body: serde_json::to_value(e.to_reply()).unwrap_or(serde_json::Value::Null),
        }
    }

    /// Check if the request succeeded.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
