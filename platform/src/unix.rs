use spectrum_core::{AttributeStore, FileRef, SpectrumError};
use tracing::debug;

/// Prefix of canonical metadata keys.
const METADATA_PREFIX: &str = "metadata::";

/// Extended-attribute namespace writable by unprivileged users.
const XATTR_NAMESPACE: &str = "user.";

/// Attribute store backed by extended attributes.
///
/// Canonical keys are namespaced `metadata::<name>`; on disk the value lives
/// under `user.<name>` (so `metadata::nemo-sort-order` is stored as
/// `user.nemo-sort-order`). A zero-length value is a set value, distinct
/// from the attribute being absent.
pub struct XattrAttributeStore;

impl XattrAttributeStore {
    pub fn new() -> Self {
        Self
    }

    fn xattr_name(name: &str) -> Result<String, SpectrumError> {
        match name.strip_prefix(METADATA_PREFIX) {
            Some(rest) if !rest.is_empty() => Ok(format!("{}{}", XATTR_NAMESPACE, rest)),
            _ => Err(SpectrumError::Other(format!(
                "attribute key outside the metadata namespace: {}",
                name
            ))),
        }
    }
}

impl Default for XattrAttributeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeStore for XattrAttributeStore {
    fn get(&self, file: &FileRef, name: &str) -> Result<Option<String>, SpectrumError> {
        let attr = Self::xattr_name(name)?;
        match xattr::get(file.path(), &attr) {
            Ok(Some(bytes)) => String::from_utf8(bytes).map(Some).map_err(|e| {
                SpectrumError::AttributeRead(format!(
                    "{}: {} holds non-UTF-8 data: {}",
                    file.path().display(),
                    name,
                    e
                ))
            }),
            Ok(None) => Ok(None),
            Err(e) => Err(SpectrumError::AttributeRead(format!(
                "{}: {}",
                file.path().display(),
                e
            ))),
        }
    }

    fn set(&self, file: &FileRef, name: &str, value: &str) -> Result<(), SpectrumError> {
        let attr = Self::xattr_name(name)?;
        xattr::set(file.path(), &attr, value.as_bytes()).map_err(|e| {
            SpectrumError::AttributeWrite(format!("{}: {}", file.path().display(), e))
        })
    }

    fn remove(&self, file: &FileRef, name: &str) -> Result<(), SpectrumError> {
        let attr = Self::xattr_name(name)?;
        // removal of an absent attribute is a no-op, not an error
        if self.get(file, name)?.is_none() {
            debug!("remove of unset attribute {} on {}", name, file.path().display());
            return Ok(());
        }
        xattr::remove(file.path(), &attr).map_err(|e| {
            SpectrumError::AttributeWrite(format!("{}: {}", file.path().display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn temp_file(dir: &TempDir) -> FileRef {
        let path = dir.path().join("test.txt");
        fs::write(&path, "test content").unwrap();
        FileRef::new(path)
    }

    const KEY: &str = "metadata::nemo-sort-order";

    #[test]
    fn test_xattr_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = XattrAttributeStore::new();
        let file = temp_file(&dir);

        // xattrs may be unsupported on the test filesystem
        if store.set(&file, KEY, "custom-123").is_err() {
            println!("extended attributes not supported here - test skipped");
            return;
        }

        assert_eq!(store.get(&file, KEY).unwrap(), Some("custom-123".to_string()));

        store.set(&file, KEY, "").unwrap();
        assert_eq!(store.get(&file, KEY).unwrap(), Some(String::new()));

        store.remove(&file, KEY).unwrap();
        assert_eq!(store.get(&file, KEY).unwrap(), None);
    }

    #[test]
    fn test_unset_attribute_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = XattrAttributeStore::new();
        let file = temp_file(&dir);

        match store.get(&file, KEY) {
            Ok(value) => assert_eq!(value, None),
            Err(_) => println!("extended attributes not supported here - test skipped"),
        }
    }

    #[test]
    fn test_remove_of_unset_attribute_is_ok() {
        let dir = TempDir::new().unwrap();
        let store = XattrAttributeStore::new();
        let file = temp_file(&dir);

        if store.get(&file, KEY).is_err() {
            println!("extended attributes not supported here - test skipped");
            return;
        }
        store.remove(&file, KEY).unwrap();
    }

    #[test]
    fn test_foreign_namespace_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = XattrAttributeStore::new();
        let file = temp_file(&dir);

        assert!(store.get(&file, "nemo-sort-order").is_err());
        assert!(store.set(&file, "system.posix_acl_access", "x").is_err());
        assert!(store.get(&file, "metadata::").is_err());
    }

    #[test]
    fn test_missing_file_read_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = XattrAttributeStore::new();
        let file = FileRef::new(dir.path().join("does-not-exist"));

        assert!(matches!(
            store.get(&file, KEY),
            Err(SpectrumError::AttributeRead(_))
        ));
    }
}
