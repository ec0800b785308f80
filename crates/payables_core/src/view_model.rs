use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{DueStatus, HistorySort, Totals, UploadSource, UploadStatus};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub totals: Totals,
    pub invoice_query: String,
    /// Invoices matching `invoice_query`, in original order.
    pub invoices: Vec<InvoiceRowView>,
    pub invoice_count: usize,
    pub all_selected: bool,
    pub any_selected: bool,
    pub drag_active: bool,
    /// Staged files ordered by name.
    pub staged: Vec<StagedFileView>,
    pub can_process: bool,
    pub history_query: String,
    pub history_sort: HistorySort,
    /// Filtered and sorted history.
    pub history: Vec<HistoryRowView>,
    pub history_count: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceRowView {
    pub id: String,
    pub vendor: String,
    pub description: Option<String>,
    pub due: NaiveDate,
    pub due_status: DueStatus,
    pub amount: Decimal,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFileView {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub file_type: String,
    pub last_modified_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub file_type: String,
    pub uploaded_at: DateTime<Utc>,
    pub source: UploadSource,
    pub status: UploadStatus,
}
