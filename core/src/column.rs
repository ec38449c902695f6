use serde::{Deserialize, Serialize};

/// An extension-defined column for the host's list view.
///
/// `attribute` names the file-info attribute the column renders;
/// `default_value` is shown for files where the attribute is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub attribute: String,
    pub label: String,
    pub default_value: String,
}

impl Column {
    pub fn new(id: &str, attribute: &str, label: &str, default_value: &str) -> Self {
        Self {
            id: id.to_string(),
            attribute: attribute.to_string(),
            label: label.to_string(),
            default_value: default_value.to_string(),
        }
    }
}
