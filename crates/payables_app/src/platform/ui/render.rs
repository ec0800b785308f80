use std::fmt::Write;

use chrono::Local;
use payables_core::{
    format_eur, human_size, AppViewModel, DueStatus, HistoryRowView, HistorySort, InvoiceRowView,
    SortDirection, SortKey, StagedFileView, UploadSource, UploadStatus,
};

const GAUGE_WIDTH: usize = 24;
const SHORT_ID_LEN: usize = 8;

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    render_invoices(&mut out, view);
    render_totals(&mut out, view);
    render_staging(&mut out, view);
    render_history(&mut out, view);
    out
}

fn render_invoices(out: &mut String, view: &AppViewModel) {
    let _ = writeln!(
        out,
        "== Invoices ({} of {}){}",
        view.invoices.len(),
        view.invoice_count,
        query_suffix(&view.invoice_query)
    );
    if view.invoices.is_empty() {
        let _ = writeln!(out, "   no invoices match");
    }
    for row in &view.invoices {
        let _ = writeln!(out, "{}", format_invoice_row(row));
    }
    let select_hint = if view.all_selected { "none" } else { "all" };
    let _ = writeln!(out, "   [{select_hint}] to toggle the whole list");
}

fn format_invoice_row(row: &InvoiceRowView) -> String {
    let mark = if row.selected { "x" } else { " " };
    let description = row
        .description
        .as_deref()
        .map(|d| format!(" · {d}"))
        .unwrap_or_default();
    format!(
        "[{mark}] {id}  {vendor}{description}  due {due} ({status})  {amount}",
        id = row.id,
        vendor = row.vendor,
        due = row.due.format("%d/%m/%Y"),
        status = due_label(row.due_status),
        amount = format_eur(row.amount),
    )
}

fn due_label(status: DueStatus) -> String {
    match status {
        DueStatus::Overdue => "overdue".to_string(),
        DueStatus::DueToday => "due today".to_string(),
        DueStatus::DueSoon(days) => format!("due in {days} d"),
        DueStatus::OnTrack => "on track".to_string(),
    }
}

fn render_totals(out: &mut String, view: &AppViewModel) {
    let totals = &view.totals;
    let _ = writeln!(out, "== Remaining to pay");
    let _ = writeln!(
        out,
        "   {} {:.1}%",
        gauge(totals.percent_remaining),
        totals.percent_remaining
    );
    let _ = writeln!(
        out,
        "   selected {}  |  total {}  |  remaining {}",
        format_eur(totals.selected),
        format_eur(totals.total),
        format_eur(totals.remaining)
    );
    if view.any_selected {
        let _ = writeln!(out, "   [pay] hands off the selection, [reset] cancels it");
    }
}

fn gauge(percent: f64) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * GAUGE_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(GAUGE_WIDTH - filled)
    )
}

fn render_staging(out: &mut String, view: &AppViewModel) {
    let drop_zone = if view.drag_active {
        " [release to drop]"
    } else {
        ""
    };
    let _ = writeln!(out, "== Staged uploads ({}){drop_zone}", view.staged.len());
    if view.staged.is_empty() {
        let _ = writeln!(out, "   drop or browse files to stage them");
        return;
    }
    for (index, file) in view.staged.iter().enumerate() {
        let _ = writeln!(out, "{}", format_staged_row(index + 1, file));
    }
    if view.can_process {
        let _ = writeln!(out, "   [process] hands off {} files", view.staged.len());
    }
}

fn format_staged_row(number: usize, file: &StagedFileView) -> String {
    format!(
        "{number:>3}. {name}  {size}  {kind}  {modified}  #{id}",
        name = file.name,
        size = human_size(file.size),
        kind = file.file_type,
        modified = file.last_modified_at.with_timezone(&Local).format("%d/%m/%Y"),
        id = short_id(&file.id),
    )
}

fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

fn render_history(out: &mut String, view: &AppViewModel) {
    let _ = writeln!(
        out,
        "== Upload history ({} of {}){}",
        view.history.len(),
        view.history_count,
        query_suffix(&view.history_query)
    );
    let _ = writeln!(
        out,
        "   sort: uploaded {}  name {}  size {}",
        sort_indicator(view.history_sort, SortKey::UploadedAt),
        sort_indicator(view.history_sort, SortKey::Name),
        sort_indicator(view.history_sort, SortKey::Size)
    );
    if view.history.is_empty() {
        let _ = writeln!(out, "   no uploads");
    }
    for row in &view.history {
        let _ = writeln!(out, "{}", format_history_row(row));
    }
}

fn sort_indicator(sort: HistorySort, key: SortKey) -> &'static str {
    if sort.key != key {
        return "↕";
    }
    match sort.direction {
        SortDirection::Asc => "↑",
        SortDirection::Desc => "↓",
    }
}

fn format_history_row(row: &HistoryRowView) -> String {
    let uploaded = row.uploaded_at.with_timezone(&Local).format("%d/%m/%Y %H:%M");
    let source = match row.source {
        UploadSource::Drag => "drag",
        UploadSource::Browse => "browse",
    };
    let status = match row.status {
        UploadStatus::Processed => "processed",
        UploadStatus::Queued => "queued",
        UploadStatus::Failed => "FAILED",
    };
    format!(
        "   {name}  {size}  {kind}  {uploaded}  via {source}  [{status}]",
        name = row.name,
        size = human_size(row.size),
        kind = row.file_type,
    )
}

fn query_suffix(query: &str) -> String {
    if query.trim().is_empty() {
        String::new()
    } else {
        format!(" matching \"{}\"", query.trim())
    }
}
