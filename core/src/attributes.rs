use crate::{FileRef, SpectrumError};

/// Named string metadata attached to a filesystem entry, stored outside the
/// file's primary content.
///
/// The store distinguishes "not set" from "set to the empty string": `set`
/// with `""` stores a zero-length value, only `remove` deletes it.
pub trait AttributeStore: Send + Sync {
    /// Value of the attribute, or `None` when it has never been set.
    fn get(&self, file: &FileRef, name: &str) -> Result<Option<String>, SpectrumError>;

    /// Set the attribute unconditionally, including to the empty string.
    fn set(&self, file: &FileRef, name: &str, value: &str) -> Result<(), SpectrumError>;

    /// Delete the attribute, returning the file to the unset state.
    fn remove(&self, file: &FileRef, name: &str) -> Result<(), SpectrumError>;
}
