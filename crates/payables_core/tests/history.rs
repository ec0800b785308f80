use chrono::{DateTime, Duration, TimeZone, Utc};
use payables_core::{
    HistoryEntry, HistoryLog, SortDirection, SortKey, UploadSource, UploadStatus,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 18, 12, 0, 0).unwrap()
}

fn entry(id: &str, name: &str, size: u64, file_type: &str, minutes_ago: i64) -> HistoryEntry {
    HistoryEntry {
        id: id.to_string(),
        name: name.to_string(),
        size,
        file_type: file_type.to_string(),
        uploaded_at: now() - Duration::minutes(minutes_ago),
        source: UploadSource::Drag,
        status: UploadStatus::Processed,
    }
}

fn ids(log: &HistoryLog) -> Vec<&str> {
    log.view().into_iter().map(|e| e.id.as_str()).collect()
}

fn sample_log() -> HistoryLog {
    HistoryLog::new(vec![
        entry("t1", "zeta.pdf", 300, "pdf", 1),
        entry("t2", "alpha.csv", 100, "csv", 2),
        entry("t3", "Mid.xml", 200, "xml", 3),
    ])
}

#[test]
fn default_view_is_most_recent_first() {
    let log = HistoryLog::new(vec![
        entry("t3", "c.pdf", 1, "pdf", 3),
        entry("t1", "a.pdf", 1, "pdf", 1),
        entry("t2", "b.pdf", 1, "pdf", 2),
    ]);

    assert_eq!(log.sort().key, SortKey::UploadedAt);
    assert_eq!(log.sort().direction, SortDirection::Desc);
    assert_eq!(ids(&log), vec!["t1", "t2", "t3"]);
}

#[test]
fn sorting_by_name_ignores_timestamps() {
    let mut log = sample_log();
    log.toggle_sort(SortKey::Name);

    assert_eq!(log.sort().direction, SortDirection::Asc);
    assert_eq!(ids(&log), vec!["t2", "t3", "t1"]);
}

#[test]
fn toggling_same_key_twice_restores_direction() {
    let mut log = sample_log();
    log.toggle_sort(SortKey::Name);
    log.toggle_sort(SortKey::Name);
    assert_eq!(log.sort().direction, SortDirection::Desc);
    assert_eq!(ids(&log), vec!["t1", "t3", "t2"]);

    log.toggle_sort(SortKey::Name);
    assert_eq!(log.sort().direction, SortDirection::Asc);
}

#[test]
fn switching_key_adopts_its_default_direction() {
    let mut log = sample_log();
    log.toggle_sort(SortKey::Size);
    assert_eq!(log.sort().direction, SortDirection::Asc);
    assert_eq!(ids(&log), vec!["t2", "t3", "t1"]);

    log.toggle_sort(SortKey::Size);
    log.toggle_sort(SortKey::UploadedAt);
    assert_eq!(log.sort().direction, SortDirection::Desc);
}

#[test]
fn ties_keep_log_order_in_both_directions() {
    let mut log = HistoryLog::new(vec![
        entry("first", "a.pdf", 50, "pdf", 1),
        entry("second", "b.pdf", 50, "pdf", 2),
        entry("third", "c.pdf", 10, "pdf", 3),
    ]);
    log.toggle_sort(SortKey::Size);
    assert_eq!(ids(&log), vec!["third", "first", "second"]);

    log.toggle_sort(SortKey::Size);
    assert_eq!(ids(&log), vec!["first", "second", "third"]);
}

#[test]
fn query_matches_name_or_type() {
    let mut log = sample_log();

    log.set_query("CSV");
    assert_eq!(ids(&log), vec!["t2"]);

    log.set_query("mid");
    assert_eq!(ids(&log), vec!["t3"]);

    log.set_query("  ");
    assert_eq!(ids(&log), vec!["t1", "t2", "t3"]);
}

#[test]
fn view_does_not_mutate_the_log() {
    let mut log = sample_log();
    log.toggle_sort(SortKey::Name);
    let before = log.clone();

    let _ = log.view();
    assert_eq!(log, before);
}

#[test]
fn clear_empties_every_view() {
    let mut log = sample_log();
    log.set_query("pdf");
    log.clear_all();

    assert!(log.is_empty());
    assert!(log.view().is_empty());
    log.set_query("");
    log.toggle_sort(SortKey::Name);
    assert!(log.view().is_empty());
}
