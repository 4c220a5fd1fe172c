//! Connection access control.
//!
//! Query serving opens the database read-only; only the importer writes.
//! Each request opens its own [`rusqlite::Connection`] and drops it when the
//! request ends, on success and on error alike.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use serde::{Deserialize, Serialize};

use benchplot_core::{Error, Result};

/// Controls whether a connection allows writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessMode {
    /// Create the file if missing, allow writes
    #[default]
    ReadWrite,
    /// The file must exist; writes fail
    ReadOnly,
}

/// Options for opening a database connection.
///
/// ```ignore
/// use benchplot_engine::{AccessMode, OpenOptions};
///
/// let opts = OpenOptions::new().access_mode(AccessMode::ReadOnly);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    /// Read-write or read-only
    pub access_mode: AccessMode,
}

impl OpenOptions {
    /// Read-write options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access mode
    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.access_mode = mode;
        self
    }

    fn flags(&self) -> OpenFlags {
        let base = OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        match self.access_mode {
            AccessMode::ReadWrite => {
                base | OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE
            }
            AccessMode::ReadOnly => base | OpenFlags::SQLITE_OPEN_READ_ONLY,
        }
    }
}

/// Open a connection to the database file at `path`.
pub fn open_connection(path: impl AsRef<Path>, opts: &OpenOptions) -> Result<Connection> {
    let path = path.as_ref();
    Connection::open_with_flags(path, opts.flags()).map_err(|e| {
        Error::Storage(format!("failed to open database {}: {}", path.display(), e))
    })
}
