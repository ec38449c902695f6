use crate::SORT_ORDER_ATTRIBUTE;
use spectrum_core::{AttributeStore, FileRef, SpectrumError};
use std::sync::Arc;

/// Reads and writes the sort-order attribute through an attribute store.
#[derive(Clone)]
pub struct SortOrderAccessor {
    store: Arc<dyn AttributeStore>,
}

impl SortOrderAccessor {
    pub fn new(store: Arc<dyn AttributeStore>) -> Self {
        Self { store }
    }

    /// Current sort order of `file`. An unset attribute reads as the empty
    /// string; the distinction is only visible at the store level.
    pub fn read(&self, file: &FileRef) -> Result<String, SpectrumError> {
        Ok(self
            .store
            .get(file, SORT_ORDER_ATTRIBUTE)?
            .unwrap_or_default())
    }

    /// Set the sort order unconditionally. An empty `value` stores a
    /// zero-length attribute; it does not remove it.
    pub fn write(&self, file: &FileRef, value: &str) -> Result<(), SpectrumError> {
        self.store.set(file, SORT_ORDER_ATTRIBUTE, value)
    }

    /// Remove the attribute, returning the file to the unset state.
    pub fn clear(&self, file: &FileRef) -> Result<(), SpectrumError> {
        self.store.remove(file, SORT_ORDER_ATTRIBUTE)
    }
}
