use chrono::NaiveDate;

use crate::view_model::{AppViewModel, HistoryRowView, InvoiceRowView, StagedFileView};
use crate::{HistoryLog, Seed, SeedError, Selection, StagingQueue};

/// Everything the dashboard owns. Each engine keeps its own state; this type
/// only composes them and carries presentation flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    selection: Selection,
    invoice_query: String,
    staging: StagingQueue,
    drag_active: bool,
    history: HistoryLog,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds state from validated startup data.
    pub fn from_seed(seed: Seed) -> Result<Self, SeedError> {
        seed.validate()?;
        Ok(Self {
            selection: Selection::new(seed.invoices),
            history: HistoryLog::new(seed.history),
            ..Self::default()
        })
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn staging(&self) -> &StagingQueue {
        &self.staging
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Derives the full view. Due statuses are computed against `today`.
    pub fn view(&self, today: NaiveDate) -> AppViewModel {
        let invoices = self
            .selection
            .search(&self.invoice_query)
            .into_iter()
            .map(|inv| InvoiceRowView {
                id: inv.id.clone(),
                vendor: inv.vendor.clone(),
                description: inv.description.clone(),
                due: inv.due,
                due_status: inv.due_status(today),
                amount: inv.amount,
                selected: inv.selected,
            })
            .collect();

        let staged = self
            .staging
            .ordered()
            .into_iter()
            .map(|file| StagedFileView {
                id: file.id.clone(),
                name: file.name.clone(),
                size: file.size,
                file_type: file.file_type.clone(),
                last_modified_at: file.last_modified_at,
            })
            .collect();

        let history = self
            .history
            .view()
            .into_iter()
            .map(|entry| HistoryRowView {
                id: entry.id.clone(),
                name: entry.name.clone(),
                size: entry.size,
                file_type: entry.file_type.clone(),
                uploaded_at: entry.uploaded_at,
                source: entry.source,
                status: entry.status,
            })
            .collect();

        AppViewModel {
            totals: self.selection.totals(),
            invoice_query: self.invoice_query.clone(),
            invoices,
            invoice_count: self.selection.invoices().len(),
            all_selected: self.selection.all_selected(),
            any_selected: self.selection.any_selected(),
            drag_active: self.drag_active,
            staged,
            can_process: !self.staging.is_empty(),
            history_query: self.history.query().to_string(),
            history_sort: self.history.sort(),
            history,
            history_count: self.history.len(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub(crate) fn staging_mut(&mut self) -> &mut StagingQueue {
        &mut self.staging
    }

    pub(crate) fn history_mut(&mut self) -> &mut HistoryLog {
        &mut self.history
    }

    pub(crate) fn set_invoice_query(&mut self, query: String) {
        self.invoice_query = query;
    }

    pub(crate) fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }
}
