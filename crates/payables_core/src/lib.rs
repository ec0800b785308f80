//! Payables core: the invoice, staging and history engines, composed into a
//! pure state machine with view-model helpers.
mod effect;
mod format;
mod history;
mod invoice;
mod msg;
mod seed;
mod selection;
mod staging;
mod state;
mod text;
mod update;
mod view_model;

pub use effect::Effect;
pub use format::{format_eur, human_size};
pub use history::{
    HistoryEntry, HistoryLog, HistorySort, SortDirection, SortKey, UploadSource, UploadStatus,
};
pub use invoice::{days_until, DueStatus, Invoice};
pub use msg::Msg;
pub use seed::{Seed, SeedError};
pub use selection::{Selection, Totals};
pub use staging::{infer_file_type, AddReport, RawFileDescriptor, StagedFile, StagingQueue};
pub use state::AppState;
pub use text::collate;
pub use update::update;
pub use view_model::{AppViewModel, HistoryRowView, InvoiceRowView, StagedFileView};
