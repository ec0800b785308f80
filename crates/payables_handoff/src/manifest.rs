use chrono::{DateTime, Utc};
use payables_core::StagedFile;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What the processing backend receives for one "process" click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionManifest {
    pub submitted_at: DateTime<Utc>,
    pub file_count: usize,
    pub total_bytes: u64,
    pub files: Vec<StagedFile>,
}

impl SubmissionManifest {
    pub fn new(files: &[StagedFile], submitted_at: DateTime<Utc>) -> Self {
        Self {
            submitted_at,
            file_count: files.len(),
            total_bytes: files.iter().map(|f| f.size).sum(),
            files: files.to_vec(),
        }
    }
}

/// What the payment backend receives for one "pay selected" click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentManifest {
    pub requested_at: DateTime<Utc>,
    pub invoice_ids: Vec<String>,
    pub amount: Decimal,
    pub currency: String,
}

impl PaymentManifest {
    pub fn new(invoice_ids: &[String], amount: Decimal, requested_at: DateTime<Utc>) -> Self {
        Self {
            requested_at,
            invoice_ids: invoice_ids.to_vec(),
            amount,
            currency: "EUR".to_string(),
        }
    }
}
