//! Key-value persistence for switcher settings.
//!
//! The host owns durable storage; the switcher only needs to read and
//! replace one JSON value under one key. [`SettingsStore`] captures that
//! contract: `set` stages a value, `save` makes everything staged durable
//! in one step. [`MemoryStore`] backs tests, [`JsonFileStore`] persists to
//! a single JSON file with an atomic rename on save.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Failure talking to the settings backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings store I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings store format: {0}")]
    Format(#[from] serde_json::Error),

    /// Escape hatch for host-specific backends (databases, config APIs).
    #[error("settings store backend: {0}")]
    Backend(String),
}

/// Durable key-value storage for JSON settings records.
///
/// Writes are two-phase: `set` stages, `save` commits. A caller that
/// stages a value and never calls `save` has changed nothing durable,
/// which is what lets validation failures abort without cleanup.
pub trait SettingsStore {
    /// Current value under `key`, staged or committed. `None` when the
    /// key has never been written.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Stage `value` under `key`, replacing any staged or committed value.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Commit everything staged.
    fn save(&mut self) -> Result<(), StoreError>;
}

impl<S: SettingsStore + ?Sized> SettingsStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn save(&mut self) -> Result<(), StoreError> {
        (**self).save()
    }
}

// ── In-memory store ─────────────────────────────────────────────────────────

/// Volatile store keeping staged and committed values apart, so tests can
/// assert that an aborted write left nothing durable behind.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    staged: HashMap<String, Value>,
    committed: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed view only, ignoring staged writes.
    pub fn committed(&self) -> &HashMap<String, Value> {
        &self.committed
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .staged
            .get(key)
            .or_else(|| self.committed.get(key))
            .cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.staged.insert(key.to_owned(), value);
        Ok(())
    }

    fn save(&mut self) -> Result<(), StoreError> {
        self.committed.extend(self.staged.drain());
        Ok(())
    }
}

// ── JSON file store ─────────────────────────────────────────────────────────

/// File-backed store holding all keys in one pretty-printed JSON object.
///
/// The file is read once at [`open`](Self::open); a missing file is an
/// empty store. `save` writes a sibling temp file and renames it over the
/// original, so readers never observe a half-written file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
    dirty: bool,
}

impl JsonFileStore {
    /// Open the store at `path`, reading existing contents eagerly.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value);
        self.dirty = true;
        Ok(())
    }

    fn save(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        // Temp file next to the target keeps the rename on one filesystem.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        self.dirty = false;
        debug!("settings saved to {}", self.path.display());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
