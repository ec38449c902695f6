use crate::provider::{ColumnProvider, InfoProvider, NameAndDescProvider, PropertyPageProvider};
use std::sync::Arc;
use uuid::Uuid;

/// One registered extension and the capability interfaces it implements.
pub struct RegisteredExtension {
    name: String,
    info: Option<Arc<dyn InfoProvider>>,
    columns: Option<Arc<dyn ColumnProvider>>,
    pages: Option<Arc<dyn PropertyPageProvider>>,
    name_and_desc: Option<Arc<dyn NameAndDescProvider>>,
}

impl RegisteredExtension {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            info: None,
            columns: None,
            pages: None,
            name_and_desc: None,
        }
    }

    pub fn with_info_provider(mut self, provider: Arc<dyn InfoProvider>) -> Self {
        self.info = Some(provider);
        self
    }

    pub fn with_column_provider(mut self, provider: Arc<dyn ColumnProvider>) -> Self {
        self.columns = Some(provider);
        self
    }

    pub fn with_property_page_provider(mut self, provider: Arc<dyn PropertyPageProvider>) -> Self {
        self.pages = Some(provider);
        self
    }

    pub fn with_name_and_desc_provider(mut self, provider: Arc<dyn NameAndDescProvider>) -> Self {
        self.name_and_desc = Some(provider);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Result of registering an extension's capability set.
///
/// The id exists only as a value returned to the caller; there is no
/// process-wide registration state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRegistration {
    pub id: Uuid,
}

pub struct ExtensionRegistry {
    extensions: Vec<(Uuid, RegisteredExtension)>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self {
            extensions: Vec::new(),
        }
    }

    pub fn register(&mut self, extension: RegisteredExtension) -> TypeRegistration {
        let id = Uuid::new_v4();
        self.extensions.push((id, extension));
        TypeRegistration { id }
    }

    pub fn get(&self, id: Uuid) -> Option<&RegisteredExtension> {
        self.extensions
            .iter()
            .find(|(registered, _)| *registered == id)
            .map(|(_, extension)| extension)
    }

    pub fn names(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|(_, e)| e.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn info_providers(&self) -> Vec<Arc<dyn InfoProvider>> {
        self.extensions
            .iter()
            .filter_map(|(_, e)| e.info.clone())
            .collect()
    }

    pub fn column_providers(&self) -> Vec<Arc<dyn ColumnProvider>> {
        self.extensions
            .iter()
            .filter_map(|(_, e)| e.columns.clone())
            .collect()
    }

    pub fn page_providers(&self) -> Vec<Arc<dyn PropertyPageProvider>> {
        self.extensions
            .iter()
            .filter_map(|(_, e)| e.pages.clone())
            .collect()
    }

    pub fn name_and_desc_providers(&self) -> Vec<Arc<dyn NameAndDescProvider>> {
        self.extensions
            .iter()
            .filter_map(|(_, e)| e.name_and_desc.clone())
            .collect()
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
