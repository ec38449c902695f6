pub mod accessor;
pub mod extension;
pub mod view;

pub use accessor::SortOrderAccessor;
pub use extension::SortOrderExtension;
pub use view::SettingsView;

use spectrum_core::{AttributeStore, ExtensionRegistry, RegisteredExtension, TypeRegistration};
use std::sync::Arc;

/// Canonical metadata key of the sort-order attribute.
pub const SORT_ORDER_ATTRIBUTE: &str = "metadata::nemo-sort-order";

pub const EXTENSION_NAME: &str = "spectrum";

pub const EXTENSION_DESCRIPTION: &str =
    "View and edit a file's custom sort order, shown as a listing column";

pub(crate) const SORT_ORDER_COLUMN_ID: &str = "Spectrum::sort_order_column";
pub(crate) const SORT_ORDER_COLUMN_LABEL: &str = "Sort Order";
pub(crate) const PROPERTY_PAGE_ID: &str = "Spectrum::property_page";
pub(crate) const PROPERTY_PAGE_LABEL: &str = "Sort Order";

/// Register the Spectrum extension's capability set with the host registry.
///
/// One extension instance backs all four capability interfaces; the returned
/// registration is the only record of the registered type.
pub fn register_extension(
    registry: &mut ExtensionRegistry,
    store: Arc<dyn AttributeStore>,
) -> TypeRegistration {
    let extension = Arc::new(SortOrderExtension::new(store));
    registry.register(
        RegisteredExtension::new(EXTENSION_NAME)
            .with_info_provider(extension.clone())
            .with_column_provider(extension.clone())
            .with_property_page_provider(extension.clone())
            .with_name_and_desc_provider(extension),
    )
}
