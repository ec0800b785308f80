//! Payables hand-off: turns dashboard effects into manifests for the
//! processing and payment backends.
mod filename;
mod manifest;
mod persist;
mod sink;

pub use filename::manifest_filename;
pub use manifest::{PaymentManifest, SubmissionManifest};
pub use persist::{ManifestDir, PersistError};
pub use sink::{Clock, DirectorySink, HandoffError, HandoffReceipt, HandoffSink};
