use crate::accessor::SortOrderAccessor;
use crate::view::SettingsView;
use crate::{
    EXTENSION_DESCRIPTION, EXTENSION_NAME, PROPERTY_PAGE_ID, PROPERTY_PAGE_LABEL,
    SORT_ORDER_ATTRIBUTE, SORT_ORDER_COLUMN_ID, SORT_ORDER_COLUMN_LABEL,
};
use spectrum_core::{
    AttributeStore, Column, ColumnProvider, FileInfo, FileRef, InfoProvider, NameAndDescProvider,
    OperationHandle, PropertyPage, PropertyPageProvider, SpectrumError, UpdateResult,
};
use std::sync::Arc;
use tracing::warn;

/// The Spectrum extension. One instance backs all four capability
/// interfaces the host queries for.
pub struct SortOrderExtension {
    accessor: SortOrderAccessor,
}

impl SortOrderExtension {
    pub fn new(store: Arc<dyn AttributeStore>) -> Self {
        Self {
            accessor: SortOrderAccessor::new(store),
        }
    }

    pub fn accessor(&self) -> &SortOrderAccessor {
        &self.accessor
    }
}

#[async_trait::async_trait]
impl InfoProvider for SortOrderExtension {
    async fn update_file_info(&self, info: &mut FileInfo) -> Result<UpdateResult, SpectrumError> {
        let value = self.accessor.read(info.file())?;
        info.add_string_attribute(SORT_ORDER_ATTRIBUTE, &value);
        Ok(UpdateResult::Complete)
    }

    fn cancel_update(&self, _handle: OperationHandle) {
        // updates complete synchronously; nothing is ever in flight
    }
}

impl ColumnProvider for SortOrderExtension {
    fn get_columns(&self) -> Vec<Column> {
        vec![Column::new(
            SORT_ORDER_COLUMN_ID,
            SORT_ORDER_ATTRIBUTE,
            SORT_ORDER_COLUMN_LABEL,
            "",
        )]
    }
}

impl PropertyPageProvider for SortOrderExtension {
    fn get_pages(&self, files: &[FileRef]) -> Vec<PropertyPage> {
        // only offer the page when exactly one file is selected
        let file = match files {
            [file] => file,
            _ => return Vec::new(),
        };

        let view = match SettingsView::new(file.clone(), self.accessor.clone()) {
            Ok(view) => view,
            Err(e) => {
                warn!(
                    "no sort-order page for {}: {}",
                    file.path().display(),
                    e
                );
                return Vec::new();
            }
        };
        view.hide_cancel();

        vec![view.into_page(PROPERTY_PAGE_ID, PROPERTY_PAGE_LABEL)]
    }
}

impl NameAndDescProvider for SortOrderExtension {
    fn get_name_and_desc(&self) -> Vec<String> {
        vec![format!("{}:::{}", EXTENSION_NAME, EXTENSION_DESCRIPTION)]
    }
}
