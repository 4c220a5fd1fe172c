//! In-memory chart store.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use benchplot_core::{Error, Result};

use crate::{validate_name, ChartStore};

/// Charts kept in a process-local map; lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryChartStore {
    charts: RwLock<BTreeMap<String, serde_json::Value>>,
}

impl MemoryChartStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChartStore for MemoryChartStore {
    fn put(&self, name: &str, blob: &serde_json::Value) -> Result<()> {
        validate_name(name)?;
        self.charts.write().insert(name.to_string(), blob.clone());
        Ok(())
    }

    fn get(&self, name: &str) -> Result<serde_json::Value> {
        validate_name(name)?;
        self.charts
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    fn delete(&self, name: &str) -> Result<()> {
        validate_name(name)?;
        self.charts
            .write()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.charts.read().keys().cloned().collect())
    }
}
