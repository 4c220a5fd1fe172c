//! Main entry point for benchplot.
//!
//! This module provides the `Benchplot` struct, which ties one database file
//! and one chart store to a plot configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use benchplot_core::{Config, Result};
use benchplot_engine::{open_connection, OpenOptions};
use benchplot_executor::{Executor, Session};
use benchplot_import::{table_name_from_path, ImportSummary, Importer, SourceRecordSet};
use benchplot_store::{ChartStore, FsChartStore, MemoryChartStore};

/// A benchmark database plus its saved charts.
///
/// Imports write to the database; queries go through [`Benchplot::session`],
/// which opens a read-only connection per request.
///
/// # Example
///
/// ```ignore
/// use benchplot::prelude::*;
///
/// let bp = Benchplot::builder()
///     .database("db.sqlite")
///     .charts_dir("work")
///     .open()?;
///
/// bp.import_csv("master.csv", &[vec!["workload".into()]])?;
/// let setup = bp.session().plot_setup()?;
/// ```
pub struct Benchplot {
    config: Config,
    session: Session,
}

impl Benchplot {
    /// Open with the given configuration and a file-backed chart store.
    pub fn open(config: Config) -> Result<Self> {
        Self::builder().config(config).open()
    }

    /// Create a builder.
    pub fn builder() -> BenchplotBuilder {
        BenchplotBuilder::new()
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Database file path
    pub fn database(&self) -> &Path {
        &self.config.database
    }

    /// Typed query and chart operations.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Command executor, for JSON request handling.
    pub fn executor(&self) -> &Executor {
        self.session.executor()
    }

    /// Import a CSV file into the table named after its stem.
    ///
    /// The table is created if needed, emptied, reloaded and re-indexed
    /// with `indexes` in one transaction.
    pub fn import_csv(
        &self,
        path: impl AsRef<Path>,
        indexes: &[Vec<String>],
    ) -> Result<ImportSummary> {
        let path = path.as_ref();
        let source = SourceRecordSet::from_csv_path(path)?;
        self.import_source(&source, &table_name_from_path(path), indexes)
    }

    /// Import an already parsed record set into `table_hint`.
    pub fn import_source(
        &self,
        source: &SourceRecordSet,
        table_hint: &str,
        indexes: &[Vec<String>],
    ) -> Result<ImportSummary> {
        let mut conn = open_connection(&self.config.database, &OpenOptions::new())?;
        let summary =
            Importer::new(&self.config.plot).import(&mut conn, source, table_hint, indexes)?;
        info!(database = %self.config.database.display(), "{}", summary.summary());
        Ok(summary)
    }
}

/// Builder for [`Benchplot`].
///
/// # Example
///
/// ```ignore
/// // Charts kept in memory, handy for tests
/// let bp = Benchplot::builder()
///     .database(dir.path().join("db.sqlite"))
///     .in_memory_charts()
///     .open()?;
/// ```
pub struct BenchplotBuilder {
    config: Config,
    memory_charts: bool,
}

impl BenchplotBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            memory_charts: false,
        }
    }

    /// Replace the whole configuration.
    ///
    /// Call before `database`/`charts_dir`, which override fields of it.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the database file.
    pub fn database(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.database = path.into();
        self
    }

    /// Set the saved chart directory.
    pub fn charts_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.charts_dir = path.into();
        self
    }

    /// Keep saved charts in memory instead of `charts_dir`.
    pub fn in_memory_charts(mut self) -> Self {
        self.memory_charts = true;
        self
    }

    /// Validate the configuration and build.
    ///
    /// The database file does not need to exist yet; queries fail with a
    /// storage error until something has been imported.
    pub fn open(self) -> Result<Benchplot> {
        self.config.plot.validate()?;
        let store: Arc<dyn ChartStore> = if self.memory_charts {
            Arc::new(MemoryChartStore::new())
        } else {
            Arc::new(FsChartStore::new(self.config.charts_dir.clone()))
        };
        let executor = Executor::new(&self.config, store);
        Ok(Benchplot {
            config: self.config,
            session: Session::new(executor),
        })
    }
}

impl Default for BenchplotBuilder {
    fn default() -> Self {
        Self::new()
    }
}
