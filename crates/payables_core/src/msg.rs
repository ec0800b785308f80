use chrono::{DateTime, Utc};

use crate::{RawFileDescriptor, SortKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User ticked or unticked one invoice.
    InvoiceToggled { id: String, checked: bool },
    /// User clicked "select all" (`true`) or "deselect all" (`false`).
    SelectAllClicked(bool),
    /// User cancelled the whole selection.
    SelectionReset,
    /// User edited the invoice search box.
    InvoiceQueryChanged(String),
    /// User asked to pay the selected invoices.
    PaySelectedClicked,
    /// A drag entered or moved over the drop zone.
    DragEntered,
    /// A drag left the drop zone without dropping.
    DragLeft,
    /// Files were dropped onto the drop zone.
    FilesDropped {
        files: Vec<RawFileDescriptor>,
        received_at: DateTime<Utc>,
    },
    /// Files were picked through the file browser.
    FilesBrowsed {
        files: Vec<RawFileDescriptor>,
        received_at: DateTime<Utc>,
    },
    /// User removed one staged file by its generated id.
    StagedFileRemoved(String),
    /// User emptied the staging list.
    StagingCleared,
    /// User asked to process the staged files.
    ProcessClicked,
    /// User edited the history search box.
    HistoryQueryChanged(String),
    /// User clicked one of the history sort buttons.
    HistorySortClicked(SortKey),
    /// User cleared the upload history.
    HistoryCleared,
}
