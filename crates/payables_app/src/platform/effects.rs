use desk_logging::{desk_info, desk_warn};
use payables_core::{format_eur, Effect};
use payables_handoff::HandoffSink;

/// Executes effects emitted by `update` against the hand-off backend and
/// reports one status line per effect.
pub struct EffectRunner {
    sink: Box<dyn HandoffSink>,
}

impl EffectRunner {
    pub fn new(sink: Box<dyn HandoffSink>) -> Self {
        Self { sink }
    }

    pub fn run(&self, effects: Vec<Effect>) -> Vec<String> {
        effects.into_iter().map(|effect| self.run_one(effect)).collect()
    }

    fn run_one(&self, effect: Effect) -> String {
        match effect {
            Effect::SubmitStaged { files } => {
                desk_info!("SubmitStaged file_count={}", files.len());
                match self.sink.submit_files(&files) {
                    Ok(receipt) => format!(
                        "Handed off {} files: {}",
                        receipt.item_count,
                        receipt.manifest_path.display()
                    ),
                    Err(err) => {
                        desk_warn!("Submission hand-off failed: {}", err);
                        format!("Could not hand off staged files: {err}")
                    }
                }
            }
            Effect::PayInvoices {
                invoice_ids,
                amount,
            } => {
                desk_info!(
                    "PayInvoices invoice_count={} amount={}",
                    invoice_ids.len(),
                    amount
                );
                match self.sink.request_payment(&invoice_ids, amount) {
                    Ok(receipt) => format!(
                        "Payment of {} requested for {} invoices: {}",
                        format_eur(amount),
                        receipt.item_count,
                        receipt.manifest_path.display()
                    ),
                    Err(err) => {
                        desk_warn!("Payment hand-off failed: {}", err);
                        format!("Could not request payment: {err}")
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use payables_core::{RawFileDescriptor, StagingQueue};
    use payables_handoff::DirectorySink;
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    #[test]
    fn payment_effect_writes_a_manifest() {
        let temp = TempDir::new().unwrap();
        let runner = EffectRunner::new(Box::new(DirectorySink::new(temp.path().to_path_buf())));

        let notices = runner.run(vec![Effect::PayInvoices {
            invoice_ids: vec!["INV-2025-002".to_string()],
            amount: Decimal::new(4599, 2),
        }]);

        assert_eq!(notices.len(), 1);
        assert!(notices[0].starts_with("Payment of 45,99 € requested for 1 invoices"));
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn failed_hand_off_is_reported_not_raised() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let runner = EffectRunner::new(Box::new(DirectorySink::new(blocker)));
        let mut queue = StagingQueue::new();
        queue.add_files([RawFileDescriptor::new("a.pdf", 1)], Utc::now());
        let files = queue.submission().unwrap();

        let notices = runner.run(vec![Effect::SubmitStaged { files }]);

        assert_eq!(notices.len(), 1);
        assert!(notices[0].starts_with("Could not hand off staged files"));
    }
}
