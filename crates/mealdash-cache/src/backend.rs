//! Storage backends.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::CacheError;

/// Raw byte storage underneath [`Cache`](crate::Cache).
///
/// Implementations persist opaque byte records under string keys.
/// `read` returns `None` for an absent key, and `remove` of an absent
/// key succeeds.
pub trait Backend: Send + Sync {
    /// Read the record stored under `key`.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Write `value` under `key`, replacing any previous record.
    fn write(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Delete the record under `key`.
    fn remove(&self, key: &str) -> Result<(), CacheError>;
}

/// Process-local backend. Records live until the process exits.
#[derive(Default)]
pub struct MemoryBackend {
    records: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let records = self
            .records
            .lock()
            .map_err(|_| CacheError::Store("memory store poisoned".to_string()))?;
        Ok(records.get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| CacheError::Store("memory store poisoned".to_string()))?;
        records.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| CacheError::Store("memory store poisoned".to_string()))?;
        records.remove(key);
        Ok(())
    }
}

/// Durable backend rooted at a directory, one file per key.
///
/// Records survive process restarts. Writes go through a temp file and a
/// rename so a crash mid-write leaves the previous record intact.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|e| CacheError::Open(format!("{}: {e}", root.display())))?;
        Ok(Self { root })
    }

    /// Keys may contain separators like `mealdash:cart`; file names stay flat.
    fn record_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{name}.json"))
    }
}

impl Backend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        match fs::read(self.record_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let path = self.record_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        match fs::remove_file(self.record_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
