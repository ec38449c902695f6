use crate::accessor::SortOrderAccessor;
use spectrum_core::ui::{Template, Widget, WidgetTree};
use spectrum_core::{FileRef, PropertyPage, SpectrumError};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, warn};

const PAGE_TEMPLATE: &str = include_str!("../resources/sort_order_page.json");

const ENTRY_SORT_ORDER: &str = "entry_sort_order";
const BUTTON_CANCEL: &str = "button_cancel";
const BUTTON_APPLY: &str = "button_apply";
const LABEL_STATUS: &str = "label_status";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewState {
    Open,
    Closed,
}

struct ViewInner {
    file: FileRef,
    accessor: SortOrderAccessor,
    entry: Rc<Widget>,
    status: Rc<Widget>,
    state: Cell<ViewState>,
}

impl ViewInner {
    fn apply(&self) -> Result<(), SpectrumError> {
        if self.state.get() == ViewState::Closed {
            return Err(SpectrumError::ViewClosed);
        }
        let value = self.entry.text();
        match self.accessor.write(&self.file, &value) {
            Ok(()) => {
                self.status.set_text("");
                self.status.hide();
                Ok(())
            }
            Err(e) => {
                // the field stays editable so the user can retry
                warn!(
                    "sort-order apply failed for {}: {}",
                    self.file.path().display(),
                    e
                );
                self.status.set_text(&format!("Could not save sort order: {}", e));
                self.status.show();
                Err(e)
            }
        }
    }
}

/// Controller for the sort-order settings page.
///
/// Two states: Open (editable) and Closed (dismissed, terminal). The view
/// owns its widget tree and its file reference; both live exactly as long
/// as the page that embeds them.
pub struct SettingsView {
    tree: WidgetTree,
    cancel: Rc<Widget>,
    inner: Rc<ViewInner>,
}

impl SettingsView {
    /// Build the page for one file: instantiate the template, populate the
    /// entry with the current attribute value, wire the apply button.
    pub fn new(file: FileRef, accessor: SortOrderAccessor) -> Result<Self, SpectrumError> {
        let template = Template::from_json(PAGE_TEMPLATE)?;
        let tree = template.instantiate()?;

        let entry = tree.widget(ENTRY_SORT_ORDER)?;
        let cancel = tree.widget(BUTTON_CANCEL)?;
        let status = tree.widget(LABEL_STATUS)?;

        entry.set_text(&accessor.read(&file)?);

        let inner = Rc::new(ViewInner {
            file,
            accessor,
            entry,
            status,
            state: Cell::new(ViewState::Open),
        });

        let handler = Rc::clone(&inner);
        tree.connect_clicked(BUTTON_APPLY, move || {
            // failures are surfaced on the status label by apply itself
            if let Err(SpectrumError::ViewClosed) = handler.apply() {
                debug!("apply click ignored, view already dismissed");
            }
        })?;

        Ok(Self { tree, cancel, inner })
    }

    /// Hide the template's cancel button. The host's own dialog affordances
    /// provide close semantics when the view is embedded as a property page.
    pub fn hide_cancel(&self) {
        self.cancel.hide();
    }

    /// Write the entry contents back to the attribute.
    pub fn apply(&self) -> Result<(), SpectrumError> {
        self.inner.apply()
    }

    /// Dismiss the view. Terminal: further applies are refused.
    pub fn dismiss(&self) {
        self.inner.state.set(ViewState::Closed);
    }

    pub fn is_open(&self) -> bool {
        self.inner.state.get() == ViewState::Open
    }

    /// Current entry contents.
    pub fn text(&self) -> String {
        self.inner.entry.text()
    }

    pub fn set_text(&self, text: &str) {
        self.inner.entry.set_text(text);
    }

    /// Message currently shown on the status label, if any.
    pub fn status_message(&self) -> Option<String> {
        if self.inner.status.is_visible() {
            Some(self.inner.status.text())
        } else {
            None
        }
    }

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// Wrap the view into a property page, handing the widget tree over.
    /// The controller state stays alive inside the wired apply handler for
    /// the page's lifetime.
    pub fn into_page(self, id: &str, label: &str) -> PropertyPage {
        PropertyPage {
            id: id.to_string(),
            label: label.to_string(),
            root: self.tree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum_core::test_utils::MemoryAttributeStore;
    use spectrum_core::AttributeStore;
    use std::sync::Arc;

    fn view_over(store: Arc<MemoryAttributeStore>, file: &FileRef) -> SettingsView {
        SettingsView::new(file.clone(), SortOrderAccessor::new(store)).unwrap()
    }

    #[test]
    fn test_entry_is_populated_from_the_attribute() {
        let store = Arc::new(MemoryAttributeStore::new());
        let file = FileRef::new("/tmp/file");
        store.set(&file, crate::SORT_ORDER_ATTRIBUTE, "005").unwrap();

        let view = view_over(store, &file);
        assert_eq!(view.text(), "005");
        assert!(view.is_open());
        assert_eq!(view.status_message(), None);
    }

    #[test]
    fn test_entry_is_empty_for_an_unset_attribute() {
        let store = Arc::new(MemoryAttributeStore::new());
        let file = FileRef::new("/tmp/file");

        let view = view_over(store, &file);
        assert_eq!(view.text(), "");
    }

    #[test]
    fn test_apply_click_writes_the_entry_contents() {
        let store = Arc::new(MemoryAttributeStore::new());
        let file = FileRef::new("/tmp/file");
        let view = view_over(store.clone(), &file);

        view.set_text("custom-123");
        view.tree().click("button_apply").unwrap();

        assert_eq!(
            store.get(&file, crate::SORT_ORDER_ATTRIBUTE).unwrap(),
            Some("custom-123".to_string())
        );
    }

    #[test]
    fn test_applying_an_empty_entry_stores_an_empty_value() {
        let store = Arc::new(MemoryAttributeStore::new());
        let file = FileRef::new("/tmp/file");
        store.set(&file, crate::SORT_ORDER_ATTRIBUTE, "old").unwrap();

        let view = view_over(store.clone(), &file);
        view.set_text("");
        view.apply().unwrap();

        assert_eq!(
            store.get(&file, crate::SORT_ORDER_ATTRIBUTE).unwrap(),
            Some(String::new())
        );
    }

    #[test]
    fn test_apply_failure_is_surfaced_and_the_view_stays_editable() {
        let store = Arc::new(MemoryAttributeStore::with_write_failure());
        let file = FileRef::new("/tmp/file");
        let view = view_over(store, &file);

        view.set_text("custom-123");
        view.tree().click("button_apply").unwrap();

        let message = view.status_message().unwrap();
        assert!(message.contains("Could not save sort order"));
        assert!(view.is_open());
        assert_eq!(view.text(), "custom-123");

        // a successful retry clears the message
        // (not possible with this store; check the direct error instead)
        assert!(matches!(
            view.apply(),
            Err(SpectrumError::AttributeWrite(_))
        ));
    }

    #[test]
    fn test_status_clears_after_a_successful_apply() {
        let store = Arc::new(MemoryAttributeStore::new());
        let file = FileRef::new("/tmp/file");
        let view = view_over(store, &file);

        view.apply().unwrap();
        assert_eq!(view.status_message(), None);
    }

    #[test]
    fn test_dismissed_view_refuses_applies() {
        let store = Arc::new(MemoryAttributeStore::new());
        let file = FileRef::new("/tmp/file");
        let view = view_over(store.clone(), &file);

        view.set_text("late edit");
        view.dismiss();
        assert!(!view.is_open());

        assert!(matches!(view.apply(), Err(SpectrumError::ViewClosed)));

        // a click after dismissal writes nothing
        view.tree().click("button_apply").unwrap();
        assert_eq!(store.get(&file, crate::SORT_ORDER_ATTRIBUTE).unwrap(), None);
    }

    #[test]
    fn test_hide_cancel() {
        let store = Arc::new(MemoryAttributeStore::new());
        let file = FileRef::new("/tmp/file");
        let view = view_over(store, &file);

        assert!(view.tree().widget("button_cancel").unwrap().is_visible());
        view.hide_cancel();
        assert!(!view.tree().widget("button_cancel").unwrap().is_visible());
    }

    #[test]
    fn test_construction_fails_when_the_attribute_cannot_be_read() {
        let store = Arc::new(MemoryAttributeStore::with_read_failure());
        let file = FileRef::new("/tmp/file");

        let result = SettingsView::new(file, SortOrderAccessor::new(store));
        assert!(matches!(result, Err(SpectrumError::AttributeRead(_))));
    }
}
