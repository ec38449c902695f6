//! Test utilities and mock implementations.

use crate::{AttributeStore, FileRef, SpectrumError};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// In-memory attribute store for tests. Never touches the real filesystem.
///
/// Distinguishes "not set" from "set to the empty string" exactly as the
/// extended-attribute store does, and can inject read or write failures to
/// exercise error paths.
pub struct MemoryAttributeStore {
    entries: Mutex<HashMap<(PathBuf, String), String>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryAttributeStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fail_reads: false,
            fail_writes: false,
        }
    }

    /// Store whose reads fail; writes still succeed.
    pub fn with_read_failure() -> Self {
        Self {
            fail_reads: true,
            ..Self::new()
        }
    }

    /// Store whose writes (and removals) fail; reads still succeed.
    pub fn with_write_failure() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl Default for MemoryAttributeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeStore for MemoryAttributeStore {
    fn get(&self, file: &FileRef, name: &str) -> Result<Option<String>, SpectrumError> {
        if self.fail_reads {
            return Err(SpectrumError::AttributeRead(format!(
                "{}: injected read failure",
                file.path().display()
            )));
        }
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .get(&(file.path().to_path_buf(), name.to_string()))
            .cloned())
    }

    fn set(&self, file: &FileRef, name: &str, value: &str) -> Result<(), SpectrumError> {
        if self.fail_writes {
            return Err(SpectrumError::AttributeWrite(format!(
                "{}: injected write failure",
                file.path().display()
            )));
        }
        self.entries
            .lock()
            .unwrap()
            .insert((file.path().to_path_buf(), name.to_string()), value.to_string());
        Ok(())
    }

    fn remove(&self, file: &FileRef, name: &str) -> Result<(), SpectrumError> {
        if self.fail_writes {
            return Err(SpectrumError::AttributeWrite(format!(
                "{}: injected write failure",
                file.path().display()
            )));
        }
        self.entries
            .lock()
            .unwrap()
            .remove(&(file.path().to_path_buf(), name.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_reads_as_none() {
        let store = MemoryAttributeStore::new();
        let file = FileRef::new("/tmp/file");
        assert_eq!(store.get(&file, "metadata::x").unwrap(), None);
    }

    #[test]
    fn test_empty_string_is_set_not_removed() {
        let store = MemoryAttributeStore::new();
        let file = FileRef::new("/tmp/file");

        store.set(&file, "metadata::x", "").unwrap();
        assert_eq!(store.get(&file, "metadata::x").unwrap(), Some(String::new()));

        store.remove(&file, "metadata::x").unwrap();
        assert_eq!(store.get(&file, "metadata::x").unwrap(), None);
    }

    #[test]
    fn test_injected_failures() {
        let file = FileRef::new("/tmp/file");

        let store = MemoryAttributeStore::with_read_failure();
        assert!(store.get(&file, "metadata::x").is_err());
        assert!(store.set(&file, "metadata::x", "v").is_ok());

        let store = MemoryAttributeStore::with_write_failure();
        assert!(store.set(&file, "metadata::x", "v").is_err());
        assert!(store.remove(&file, "metadata::x").is_err());
        assert!(store.get(&file, "metadata::x").is_ok());
    }
}
