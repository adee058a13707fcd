//! JSON-file session history.
//!
//! The whole history is one JSON array, newest first. An absent or
//! unreadable file is treated as an empty history rather than an error, so
//! a corrupted file never blocks saving the next session.
//!
//! Saves write a sibling temporary file and rename it over the history, so
//! readers see either the old or the new array, never a partial one. Every
//! handle on the same path in this process shares one lock.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use fitai_core::{SessionRecord, SessionStore, StorageError};
use parking_lot::Mutex;
use tempfile::NamedTempFile;

use crate::store::DEFAULT_CAPACITY;

/// Lock shared by every store opened on `path`.
fn path_lock(path: &Path) -> Arc<Mutex<()>> {
    static LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();

    let key = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    LOCKS
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .entry(key)
        .or_default()
        .clone()
}

/// Session store persisted to a single JSON file.
#[derive(Debug)]
pub struct JsonFileSessionStore {
    path: PathBuf,
    max_records: usize,
    /// Serializes access to `path` across handles in this process.
    lock: Arc<Mutex<()>>,
}

impl JsonFileSessionStore {
    /// Store backed by `path` with the default capacity.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_capacity(path, DEFAULT_CAPACITY)
    }

    /// Store backed by `path` retaining at most `max_records` sessions.
    #[must_use]
    pub fn with_capacity(path: impl Into<PathBuf>, max_records: usize) -> Self {
        let path = path.into();
        Self {
            lock: path_lock(&path),
            path,
            max_records: max_records.max(1),
        }
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Maximum capacity of the store.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_records
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn load(&self) -> Result<Vec<SessionRecord>, StorageError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        match serde_json::from_str(&contents) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Session history is unreadable, starting empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn persist(&self, records: &[SessionRecord]) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| StorageError::serialization(e.to_string()))?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }
}

impl SessionStore for JsonFileSessionStore {
    fn save(&self, record: SessionRecord) -> Result<(), StorageError> {
        let _guard = self.lock.lock();
        let mut records = self.load()?;
        records.insert(0, record);
        records.truncate(self.max_records);
        self.persist(&records)?;
        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "Session history saved"
        );
        Ok(())
    }

    fn all(&self) -> Result<Vec<SessionRecord>, StorageError> {
        let _guard = self.lock.lock();
        self.load()
    }
}
