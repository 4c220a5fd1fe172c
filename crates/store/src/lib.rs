//! Saved chart persistence for benchplot
//!
//! Charts are opaque JSON blobs keyed by name. The engine never sees paths;
//! it reads and writes through the [`ChartStore`] trait.
//!
//! - [`FsChartStore`]: one file per chart under a fixed root directory
//! - [`MemoryChartStore`]: process-local map, for ephemeral setups and tests

#![warn(missing_docs)]
#![warn(clippy::all)]

mod fs;
mod memory;

pub use fs::FsChartStore;
pub use memory::MemoryChartStore;

use benchplot_core::{Error, Result};

/// Key → JSON blob persistence for saved charts.
pub trait ChartStore: Send + Sync {
    /// Store `blob` under `name`, replacing any previous chart.
    fn put(&self, name: &str, blob: &serde_json::Value) -> Result<()>;

    /// Fetch the chart stored under `name`.
    ///
    /// Returns [`Error::NotFound`] if there is none.
    fn get(&self, name: &str) -> Result<serde_json::Value>;

    /// Remove the chart stored under `name`.
    ///
    /// Returns [`Error::NotFound`] if there is none.
    fn delete(&self, name: &str) -> Result<()>;

    /// Names of every stored chart, sorted.
    fn list(&self) -> Result<Vec<String>>;
}

/// Check that a chart name is a single plain file name.
///
/// Rejects empty names, path separators, `.`/`..` and hidden names, so a
/// name can never address anything outside the store root.
pub fn validate_name(name: &str) -> Result<()> {
    let bad = name.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\', '\0'])
        || name.chars().any(char::is_control);
    if bad {
        return Err(Error::Validation(format!("invalid chart name '{}'", name)));
    }
    Ok(())
}
