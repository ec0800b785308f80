use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use desk_logging::{desk_info, desk_warn};
use payables_core::StagedFile;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::filename::manifest_filename;
use crate::manifest::{PaymentManifest, SubmissionManifest};
use crate::persist::{ManifestDir, PersistError};

#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("nothing to hand off")]
    Empty,
    #[error("manifest encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Proof that a batch left this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffReceipt {
    pub manifest_path: PathBuf,
    pub item_count: usize,
}

/// The downstream side of the dashboard's hand-off points.
pub trait HandoffSink: Send + Sync {
    fn submit_files(&self, files: &[StagedFile]) -> Result<HandoffReceipt, HandoffError>;

    fn request_payment(
        &self,
        invoice_ids: &[String],
        amount: Decimal,
    ) -> Result<HandoffReceipt, HandoffError>;
}

pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Drops JSON manifests into a directory for a backend to pick up.
pub struct DirectorySink {
    target: ManifestDir,
    clock: Clock,
}

impl DirectorySink {
    pub fn new(dir: PathBuf) -> Self {
        Self::with_clock(dir, Arc::new(Utc::now))
    }

    pub fn with_clock(dir: PathBuf, clock: Clock) -> Self {
        Self {
            target: ManifestDir::new(dir),
            clock,
        }
    }

    fn write_manifest<T: Serialize>(
        &self,
        filename: &str,
        manifest: &T,
    ) -> Result<PathBuf, HandoffError> {
        let body = serde_json::to_vec_pretty(manifest)?;
        let path = self
            .target
            .store(filename, &body)
            .inspect_err(|err| desk_warn!("Manifest hand-off failed: {}", err))?;
        Ok(path)
    }
}

impl HandoffSink for DirectorySink {
    fn submit_files(&self, files: &[StagedFile]) -> Result<HandoffReceipt, HandoffError> {
        if files.is_empty() {
            return Err(HandoffError::Empty);
        }
        let now = (self.clock)();
        let manifest = SubmissionManifest::new(files, now);
        let filename = manifest_filename("submission", now, files.iter().map(|f| f.id.as_str()));
        let manifest_path = self.write_manifest(&filename, &manifest)?;

        desk_info!(
            "Submitted {} staged files ({} bytes) to {:?}",
            manifest.file_count,
            manifest.total_bytes,
            manifest_path
        );
        Ok(HandoffReceipt {
            manifest_path,
            item_count: files.len(),
        })
    }

    fn request_payment(
        &self,
        invoice_ids: &[String],
        amount: Decimal,
    ) -> Result<HandoffReceipt, HandoffError> {
        if invoice_ids.is_empty() {
            return Err(HandoffError::Empty);
        }
        let now = (self.clock)();
        let manifest = PaymentManifest::new(invoice_ids, amount, now);
        let filename = manifest_filename("payment", now, invoice_ids.iter().map(String::as_str));
        let manifest_path = self.write_manifest(&filename, &manifest)?;

        desk_info!(
            "Requested payment of {} for {} invoices via {:?}",
            amount,
            invoice_ids.len(),
            manifest_path
        );
        Ok(HandoffReceipt {
            manifest_path,
            item_count: invoice_ids.len(),
        })
    }
}
