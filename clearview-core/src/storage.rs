//! Key-value persistence seam for the settings record, plus an in-memory implementation.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Trait for abstracting the key-value store settings persist into.
/// Platform-specific implementations should provide this.
pub trait SettingsStorage {
    type Error: std::error::Error + 'static;

    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Replace the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum MemoryStorageError {
    #[error("Memory storage refused to read {0}")]
    ReadRefused(String),
    #[error("Memory storage refused to write {0}")]
    WriteRefused(String),
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-memory storage with a shared handle.
///
/// Clones observe the same entries, so a test can keep one handle while the store owns another.
/// Also serves as the browser fallback when `localStorage` is blocked.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .inner
            .borrow_mut()
            .entries
            .insert(key.to_string(), value.to_string());
        storage
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().entries.get(key).cloned()
    }

    /// Number of successful writes since creation.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.inner.borrow().writes
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.borrow_mut().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }
}

impl SettingsStorage for MemoryStorage {
    type Error = MemoryStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let inner = self.inner.borrow();
        if inner.fail_reads {
            return Err(MemoryStorageError::ReadRefused(key.to_string()));
        }
        Ok(inner.entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(MemoryStorageError::WriteRefused(key.to_string()));
        }
        inner.entries.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let storage = MemoryStorage::new();
        let observer = storage.clone();
        storage.write("k", "v").unwrap();
        assert_eq!(observer.get("k").as_deref(), Some("v"));
        assert_eq!(observer.write_count(), 1);
    }

    #[test]
    fn injected_failures_surface_as_errors() {
        let storage = MemoryStorage::with_entry("k", "v");
        storage.set_fail_writes(true);
        assert!(storage.write("k", "w").is_err());
        assert_eq!(storage.get("k").as_deref(), Some("v"));
        assert_eq!(storage.write_count(), 0);

        storage.set_fail_reads(true);
        let err = storage.read("k").unwrap_err();
        assert_eq!(err.to_string(), "Memory storage refused to read k");
    }
}
