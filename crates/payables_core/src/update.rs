use chrono::{DateTime, Utc};

use crate::{AppState, Effect, Msg, RawFileDescriptor};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InvoiceToggled { id, checked } => {
            if state.selection_mut().toggle(&id, checked) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SelectAllClicked(value) => {
            state.selection_mut().select_all(value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SelectionReset => {
            state.selection_mut().reset();
            state.mark_dirty();
            Vec::new()
        }
        Msg::InvoiceQueryChanged(query) => {
            state.set_invoice_query(query);
            state.mark_dirty();
            Vec::new()
        }
        Msg::PaySelectedClicked => {
            let selection = state.selection();
            if selection.any_selected() {
                vec![Effect::PayInvoices {
                    invoice_ids: selection.selected_ids(),
                    amount: selection.totals().selected,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::DragEntered => {
            state.set_drag_active(true);
            state.mark_dirty();
            Vec::new()
        }
        Msg::DragLeft => {
            state.set_drag_active(false);
            state.mark_dirty();
            Vec::new()
        }
        Msg::FilesDropped { files, received_at } => {
            state.set_drag_active(false);
            stage_files(&mut state, files, received_at);
            state.mark_dirty();
            Vec::new()
        }
        Msg::FilesBrowsed { files, received_at } => {
            stage_files(&mut state, files, received_at);
            Vec::new()
        }
        Msg::StagedFileRemoved(id) => {
            if state.staging_mut().remove_one(&id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::StagingCleared => {
            state.staging_mut().clear_all();
            state.mark_dirty();
            Vec::new()
        }
        Msg::ProcessClicked => match state.staging().submission() {
            Some(files) => vec![Effect::SubmitStaged { files }],
            None => Vec::new(),
        },
        Msg::HistoryQueryChanged(query) => {
            state.history_mut().set_query(query);
            state.mark_dirty();
            Vec::new()
        }
        Msg::HistorySortClicked(key) => {
            state.history_mut().toggle_sort(key);
            state.mark_dirty();
            Vec::new()
        }
        Msg::HistoryCleared => {
            state.history_mut().clear_all();
            state.mark_dirty();
            Vec::new()
        }
    };

    (state, effects)
}

fn stage_files(state: &mut AppState, files: Vec<RawFileDescriptor>, received_at: DateTime<Utc>) {
    if files.is_empty() {
        return;
    }
    state.staging_mut().add_files(files, received_at);
    state.mark_dirty();
}
