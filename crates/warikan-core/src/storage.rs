//! Persistence gateway for roster snapshots and calculation results.
//!
//! Two pieces of state are kept under well-known keys: the durable roster
//! snapshot, which survives across sessions, and the ephemeral last result,
//! which only ever holds the most recent calculation. Backends serialize
//! both as JSON so persisted files can be inspected and repaired by hand.

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use tracing::debug;
use warikan_types::{PaymentResult, RoleRecord};

use crate::error::{SplitError, SplitResult};

/// Key holding the durable roster snapshot.
pub const ROLES_KEY: &str = "roles";

/// Key holding the ephemeral last calculation result.
pub const RESULT_KEY: &str = "last_result";

/// Storage backend for session state.
///
/// Implementations must be safe to share across threads. A `load` returning
/// `Ok(None)` means nothing was ever saved under that key; decoding failures
/// surface as [`SplitError::CorruptPersistedState`] and transport failures
/// as [`SplitError::Storage`].
pub trait StateStore: Send + Sync {
    /// Reads the durable roster snapshot.
    fn load_roles(&self) -> SplitResult<Option<Vec<RoleRecord>>>;

    /// Writes the durable roster snapshot, replacing any previous one.
    fn save_roles(&self, records: &[RoleRecord]) -> SplitResult<()>;

    /// Reads the last calculation result.
    fn load_result(&self) -> SplitResult<Option<PaymentResult>>;

    /// Writes the last calculation result, replacing any previous one.
    fn save_result(&self, result: &PaymentResult) -> SplitResult<()>;

    /// Drops the last calculation result. Absence is not an error.
    fn clear_result(&self) -> SplitResult<()>;
}

#[derive(Default)]
struct MemoryInner {
    roles: Option<Vec<RoleRecord>>,
    result: Option<PaymentResult>,
}

/// In-memory store used by tests and one-shot sessions.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StateStore for MemoryStore {
    fn load_roles(&self) -> SplitResult<Option<Vec<RoleRecord>>> {
        Ok(self.lock().roles.clone())
    }

    fn save_roles(&self, records: &[RoleRecord]) -> SplitResult<()> {
        self.lock().roles = Some(records.to_vec());
        Ok(())
    }

    fn load_result(&self) -> SplitResult<Option<PaymentResult>> {
        Ok(self.lock().result.clone())
    }

    fn save_result(&self, result: &PaymentResult) -> SplitResult<()> {
        self.lock().result = Some(result.clone());
        Ok(())
    }

    fn clear_result(&self) -> SplitResult<()> {
        self.lock().result = None;
        Ok(())
    }
}

/// File-backed store keeping one pretty-printed JSON file per key inside a
/// data directory.
///
/// Writes go through a temporary file and a rename, so a crash mid-write
/// leaves the previous state intact rather than a truncated file.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> SplitResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|err| SplitError::storage(dir.display().to_string(), "create", err))?;
        Ok(Self { dir })
    }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn read_key(&self, key: &str) -> SplitResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SplitError::storage(key, "read", err)),
        }
    }

    fn write_key(&self, key: &str, contents: &str) -> SplitResult<()> {
        let target = self.path_for(key);
        let staging = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&staging, contents).map_err(|err| SplitError::storage(key, "write", err))?;
        fs::rename(&staging, &target).map_err(|err| SplitError::storage(key, "write", err))?;
        debug!(key, path = %target.display(), "Wrote state file");
        Ok(())
    }

    fn remove_key(&self, key: &str) -> SplitResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SplitError::storage(key, "remove", err)),
        }
    }
}

impl StateStore for JsonFileStore {
    fn load_roles(&self) -> SplitResult<Option<Vec<RoleRecord>>> {
        match self.read_key(ROLES_KEY)? {
            None => Ok(None),
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|err| SplitError::corrupt_state(ROLES_KEY, err)),
        }
    }

    fn save_roles(&self, records: &[RoleRecord]) -> SplitResult<()> {
        let contents = serde_json::to_string_pretty(records)
            .map_err(|err| SplitError::storage(ROLES_KEY, "encode", err))?;
        self.write_key(ROLES_KEY, &contents)
    }

    fn load_result(&self) -> SplitResult<Option<PaymentResult>> {
        match self.read_key(RESULT_KEY)? {
            None => Ok(None),
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|err| SplitError::corrupt_state(RESULT_KEY, err)),
        }
    }

    fn save_result(&self, result: &PaymentResult) -> SplitResult<()> {
        let contents = serde_json::to_string_pretty(result)
            .map_err(|err| SplitError::storage(RESULT_KEY, "encode", err))?;
        self.write_key(RESULT_KEY, &contents)
    }

    fn clear_result(&self) -> SplitResult<()> {
        self.remove_key(RESULT_KEY)
    }
}
