use crate::ui::WidgetTree;
use crate::{Column, FileInfo, FileRef, SpectrumError};
use uuid::Uuid;

/// Handle for an in-flight info update, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationHandle(Uuid);

impl OperationHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OperationHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of an info-provider update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResult {
    /// The file info was updated before the call returned.
    Complete,
    /// The update continues in the background; the host may cancel it
    /// through the handle.
    InProgress(OperationHandle),
}

/// A panel embedded into the host's details dialog for a selected item.
///
/// The page owns the widget tree of exactly one settings view; dropping the
/// page ends the view's lifetime.
pub struct PropertyPage {
    pub id: String,
    pub label: String,
    pub root: WidgetTree,
}

/// Contributes string attributes to a file as the host lists it.
///
/// The update protocol allows asynchronous completion; a provider that
/// finishes synchronously returns [`UpdateResult::Complete`] and treats
/// cancellation as a no-op.
#[async_trait::async_trait]
pub trait InfoProvider: Send + Sync {
    async fn update_file_info(&self, info: &mut FileInfo) -> Result<UpdateResult, SpectrumError>;

    fn cancel_update(&self, handle: OperationHandle);
}

/// Supplies extension-defined listing columns. Called once at registration
/// time; the returned set is static.
pub trait ColumnProvider: Send + Sync {
    fn get_columns(&self) -> Vec<Column>;
}

/// Supplies property pages for the current selection.
pub trait PropertyPageProvider: Send + Sync {
    /// Pages for `files`. An empty result means no page is offered for this
    /// selection; construction failures are reported as a diagnostic and
    /// yield no page rather than failing the host dialog.
    fn get_pages(&self, files: &[FileRef]) -> Vec<PropertyPage>;
}

/// Supplies the extension's identity for the host's plugin listing.
pub trait NameAndDescProvider: Send + Sync {
    /// Entries formatted as `"<id>:::<description>"`.
    fn get_name_and_desc(&self) -> Vec<String>;
}
