//! File-system chart store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use benchplot_core::{Error, Result};

use crate::{validate_name, ChartStore};

/// One JSON file per chart, directly under `root`.
#[derive(Debug, Clone)]
pub struct FsChartStore {
    root: PathBuf,
}

impl FsChartStore {
    /// Open a store rooted at `root`; the directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(name))
    }
}

impl ChartStore for FsChartStore {
    fn put(&self, name: &str, blob: &serde_json::Value) -> Result<()> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.root)?;
        let bytes = serde_json::to_vec(blob)
            .map_err(|e| Error::Storage(format!("cannot encode chart '{}': {}", name, e)))?;
        fs::write(&path, bytes)?;
        info!(chart = %name, "saved chart");
        Ok(())
    }

    fn get(&self, name: &str) -> Result<serde_json::Value> {
        let path = self.path_for(name)?;
        let bytes = fs::read(&path).map_err(|e| not_found_or_storage(e, name))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| Error::Storage(format!("chart '{}' is not valid JSON: {}", name, e)))
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        fs::remove_file(&path).map_err(|e| not_found_or_storage(e, name))?;
        info!(chart = %name, "deleted chart");
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

fn not_found_or_storage(e: std::io::Error, name: &str) -> Error {
    if e.kind() == ErrorKind::NotFound {
        Error::NotFound(name.to_string())
    } else {
        Error::Storage(format!("chart '{}': {}", name, e))
    }
}
