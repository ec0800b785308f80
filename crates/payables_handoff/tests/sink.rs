use std::fs;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use payables_core::{RawFileDescriptor, StagingQueue};
use payables_handoff::{
    DirectorySink, HandoffError, HandoffSink, PaymentManifest, SubmissionManifest,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use tempfile::TempDir;

fn fixed_sink(temp: &TempDir) -> DirectorySink {
    let at = Utc.with_ymd_and_hms(2025, 10, 18, 8, 0, 0).unwrap();
    DirectorySink::with_clock(temp.path().join("out"), Arc::new(move || at))
}

#[test]
fn submission_manifest_lists_files_in_staging_order() {
    let temp = TempDir::new().unwrap();
    let sink = fixed_sink(&temp);
    let mut queue = StagingQueue::new();
    queue.add_files(
        [
            RawFileDescriptor::new("zeta.pdf", 300),
            RawFileDescriptor::new("alpha.csv", 100).with_mime("text/csv"),
        ],
        Utc::now(),
    );
    let files = queue.submission().unwrap();

    let receipt = sink.submit_files(&files).unwrap();
    assert_eq!(receipt.item_count, 2);
    let name = receipt.manifest_path.file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("submission--20251018T080000Z--"));

    let manifest: SubmissionManifest =
        serde_json::from_str(&fs::read_to_string(&receipt.manifest_path).unwrap()).unwrap();
    assert_eq!(manifest.file_count, 2);
    assert_eq!(manifest.total_bytes, 400);
    assert_eq!(manifest.files, files);
    assert_eq!(manifest.files[0].file_type, "text/csv");
}

#[test]
fn payment_manifest_carries_ids_and_amount() {
    let temp = TempDir::new().unwrap();
    let sink = fixed_sink(&temp);
    let ids = vec!["INV-2025-001".to_string(), "INV-2025-004".to_string()];

    let receipt = sink.request_payment(&ids, Decimal::new(15325, 2)).unwrap();

    let manifest: PaymentManifest =
        serde_json::from_str(&fs::read_to_string(&receipt.manifest_path).unwrap()).unwrap();
    assert_eq!(manifest.invoice_ids, ids);
    assert_eq!(manifest.amount, Decimal::new(15325, 2));
    assert_eq!(manifest.currency, "EUR");
}

#[test]
fn empty_batches_are_refused() {
    let temp = TempDir::new().unwrap();
    let sink = fixed_sink(&temp);

    assert!(matches!(sink.submit_files(&[]), Err(HandoffError::Empty)));
    assert!(matches!(
        sink.request_payment(&[], Decimal::ZERO),
        Err(HandoffError::Empty)
    ));
    assert!(!temp.path().join("out").exists());
}
