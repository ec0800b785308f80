//! Startup data for the engines, plus its entry-time validation.

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::{HistoryEntry, UploadSource, UploadStatus};
use crate::invoice::Invoice;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("duplicate invoice id {0}")]
    DuplicateInvoiceId(String),
    #[error("invoice {id} has negative amount {amount}")]
    NegativeAmount { id: String, amount: Decimal },
    #[error("duplicate history id {0}")]
    DuplicateHistoryId(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl Seed {
    /// Rejects data the engines assume never occurs. Repeated vendor or
    /// amount values across distinct ids are fine.
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut invoice_ids = HashSet::new();
        for invoice in &self.invoices {
            if !invoice_ids.insert(invoice.id.as_str()) {
                return Err(SeedError::DuplicateInvoiceId(invoice.id.clone()));
            }
            if invoice.amount.is_sign_negative() && !invoice.amount.is_zero() {
                return Err(SeedError::NegativeAmount {
                    id: invoice.id.clone(),
                    amount: invoice.amount,
                });
            }
        }

        let mut history_ids = HashSet::new();
        for entry in &self.history {
            if !history_ids.insert(entry.id.as_str()) {
                return Err(SeedError::DuplicateHistoryId(entry.id.clone()));
            }
        }
        Ok(())
    }

    /// Demo data used when no seed is configured. History timestamps are
    /// relative to `now`.
    pub fn demo(now: DateTime<Utc>) -> Self {
        Self {
            invoices: demo_invoices(),
            history: demo_history(now),
        }
    }
}

fn demo_invoices() -> Vec<Invoice> {
    let rows: [(&str, &str, &str, (i32, u32, u32), i64); 11] = [
        ("INV-2025-001", "ENEL Energia", "Luce – Marzo", (2025, 10, 20), 12045),
        ("INV-2025-002", "Vodafone", "Fibra – Ottobre", (2025, 10, 25), 4599),
        ("INV-2025-003", "Comune di Pisa", "TARI 2025 (2ª rata)", (2025, 11, 10), 21000),
        ("INV-2025-004", "AWS", "Cloud bill", (2025, 10, 18), 3280),
        ("INV-2025-005", "Supabase", "Pro plan", (2025, 10, 19), 2500),
        ("INV-2025-006", "Comune di Pisa", "TARI 2025 (2ª rata)", (2025, 11, 10), 21000),
        ("INV-2025-007", "AWS", "Cloud bill", (2025, 10, 18), 3280),
        ("INV-2025-008", "Supabase", "Pro plan", (2025, 10, 19), 2500),
        ("INV-2025-009", "Comune di Pisa", "TARI 2025 (2ª rata)", (2025, 11, 10), 21000),
        ("INV-2025-010", "AWS", "Cloud bill", (2025, 10, 18), 3280),
        ("INV-2025-011", "Supabase", "Pro plan", (2025, 10, 19), 2500),
    ];
    rows.into_iter()
        .filter_map(|(id, vendor, description, (y, m, d), cents)| {
            let due = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(Invoice::new(
                id,
                vendor,
                Some(description),
                due,
                Decimal::new(cents, 2),
            ))
        })
        .collect()
}

fn demo_history(now: DateTime<Utc>) -> Vec<HistoryEntry> {
    let entry = |id: &str, name: &str, size: u64, file_type: &str, age: Duration, source, status| {
        HistoryEntry {
            id: id.to_string(),
            name: name.to_string(),
            size,
            file_type: file_type.to_string(),
            uploaded_at: now - age,
            source,
            status,
        }
    };
    vec![
        entry(
            "h1",
            "fattura_1234.pdf",
            234_551,
            "pdf",
            Duration::minutes(2),
            UploadSource::Drag,
            UploadStatus::Processed,
        ),
        entry(
            "h2",
            "bolletta_enel_marzo.pdf",
            121_000,
            "pdf",
            Duration::hours(1),
            UploadSource::Browse,
            UploadStatus::Processed,
        ),
        entry(
            "h3",
            "aws_oct.csv",
            78_321,
            "csv",
            Duration::days(1),
            UploadSource::Browse,
            UploadStatus::Queued,
        ),
        entry(
            "h4",
            "vodafone_10_2025.xml",
            64_101,
            "xml",
            Duration::days(2),
            UploadSource::Drag,
            UploadStatus::Processed,
        ),
        entry(
            "h5",
            "supabase_invoice.json",
            15_440,
            "json",
            Duration::days(3),
            UploadSource::Drag,
            UploadStatus::Failed,
        ),
    ]
}
