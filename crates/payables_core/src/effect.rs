use rust_decimal::Decimal;

use crate::StagedFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Forward the staged files, in view order, to the processing backend.
    SubmitStaged { files: Vec<StagedFile> },
    /// Ask the payment backend to settle these invoices.
    PayInvoices {
        invoice_ids: Vec<String>,
        amount: Decimal,
    },
}
