use spectrum_core::{AttributeStore, FileRef, SpectrumError};

/// Placeholder store for platforms without extended-attribute support.
pub struct UnsupportedAttributeStore;

impl UnsupportedAttributeStore {
    pub fn new() -> Self {
        Self
    }

    fn unsupported() -> SpectrumError {
        SpectrumError::NotSupported(
            "extended attributes are not available on this platform".to_string(),
        )
    }
}

impl Default for UnsupportedAttributeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeStore for UnsupportedAttributeStore {
    fn get(&self, _file: &FileRef, _name: &str) -> Result<Option<String>, SpectrumError> {
        Err(Self::unsupported())
    }

    fn set(&self, _file: &FileRef, _name: &str, _value: &str) -> Result<(), SpectrumError> {
        Err(Self::unsupported())
    }

    fn remove(&self, _file: &FileRef, _name: &str) -> Result<(), SpectrumError> {
        Err(Self::unsupported())
    }
}
