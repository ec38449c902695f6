use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Opaque handle to a location in the filesystem.
///
/// The host owns the selection and hands out references for the duration of
/// a callback; a settings view clones the handle it needs for its apply
/// action and keeps it for the view's own lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileRef {
    path: PathBuf,
}

impl FileRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name shown in listings, lossily decoded.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// A file plus the string attributes info providers have contributed.
///
/// Listing views read these attributes when rendering extension columns.
#[derive(Debug, Clone)]
pub struct FileInfo {
    file: FileRef,
    attributes: HashMap<String, String>,
}

impl FileInfo {
    pub fn new(file: FileRef) -> Self {
        Self {
            file,
            attributes: HashMap::new(),
        }
    }

    pub fn file(&self) -> &FileRef {
        &self.file
    }

    pub fn add_string_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn string_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_is_final_component() {
        let file = FileRef::new("/tmp/some/dir/notes.txt");
        assert_eq!(file.display_name(), "notes.txt");
    }

    #[test]
    fn test_file_info_attribute_bag() {
        let mut info = FileInfo::new(FileRef::new("/tmp/a"));
        assert_eq!(info.string_attribute("metadata::x"), None);

        info.add_string_attribute("metadata::x", "1");
        assert_eq!(info.string_attribute("metadata::x"), Some("1"));

        info.add_string_attribute("metadata::x", "");
        assert_eq!(info.string_attribute("metadata::x"), Some(""));
    }
}
