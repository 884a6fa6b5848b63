//! Cart snapshot persistence.
//!
//! The cart survives restarts through a single persisted slot: a JSON file
//! holding the serialized list of cart lines. The whole snapshot is rewritten
//! on every mutation (last-writer-wins), and read exactly once at startup.
//!
//! [`CartStore`] is the capability boundary; [`FileCartStore`] is the real
//! implementation and [`MemoryCartStore`] backs the tests.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use medigrove_core::CartLine;
use thiserror::Error;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read cart snapshot: {0}")]
    Read(std::io::Error),

    #[error("Failed to write cart snapshot: {0}")]
    Write(std::io::Error),

    #[error("Malformed cart snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A single named slot holding the serialized cart between sessions.
pub trait CartStore: Send + Sync {
    /// Read the persisted snapshot.
    ///
    /// An absent slot is an empty cart, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot exists but cannot be read or
    /// parsed. Callers decide whether to degrade to an empty cart.
    fn load(&self) -> Result<Vec<CartLine>, StorageError>;

    /// Overwrite the slot with the full snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the write fails.
    fn save(&self, lines: &[CartLine]) -> Result<(), StorageError>;
}

/// File-backed cart store (one JSON file).
#[derive(Debug)]
pub struct FileCartStore {
    path: PathBuf,
}

impl FileCartStore {
    /// Create a store persisting to `path`. Parent directories are created
    /// on first save.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CartStore for FileCartStore {
    fn load(&self) -> Result<Vec<CartLine>, StorageError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::Read(e)),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), StorageError> {
        let json = serde_json::to_string(lines)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(StorageError::Write)?;
        }
        std::fs::write(&self.path, json).map_err(StorageError::Write)
    }
}

/// In-memory cart store for tests and ephemeral runs.
///
/// Holds the raw serialized snapshot so tests can seed it with malformed
/// data or force write failures.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    slot: Mutex<Option<String>>,
    fail_saves: bool,
}

impl MemoryCartStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a raw snapshot (possibly malformed).
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
            fail_saves: false,
        }
    }

    /// A store whose saves always fail, for error-path tests.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            slot: Mutex::new(None),
            fail_saves: true,
        }
    }

    /// The raw persisted snapshot, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().map(|slot| slot.clone()).unwrap_or(None)
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> Result<Vec<CartLine>, StorageError> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| StorageError::Read(std::io::Error::other("slot lock poisoned")))?;
        match slot.as_deref() {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), StorageError> {
        if self.fail_saves {
            return Err(StorageError::Write(std::io::Error::other(
                "store configured to fail",
            )));
        }
        let json = serde_json::to_string(lines)?;
        *self
            .slot
            .lock()
            .map_err(|_| StorageError::Write(std::io::Error::other("slot lock poisoned")))? =
            Some(json);
        Ok(())
    }
}
