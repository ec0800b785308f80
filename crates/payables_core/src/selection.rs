//! Invoice selection and the running totals derived from it.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::invoice::Invoice;
use crate::text::{any_field_contains, normalize_query};

/// Sums derived from the current selection. Never stored; see [`Selection::totals`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub total: Decimal,
    pub selected: Decimal,
    pub remaining: Decimal,
    /// Share of `total` still unselected, in `0.0..=100.0`.
    pub percent_remaining: f64,
}

impl Default for Totals {
    fn default() -> Self {
        Self {
            total: Decimal::ZERO,
            selected: Decimal::ZERO,
            remaining: Decimal::ZERO,
            percent_remaining: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    invoices: Vec<Invoice>,
}

impl Selection {
    pub fn new(invoices: Vec<Invoice>) -> Self {
        Self { invoices }
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Sets the flag on the invoice with `id`. Unknown ids are ignored.
    /// Returns whether an invoice matched.
    pub fn toggle(&mut self, id: &str, checked: bool) -> bool {
        match self.invoices.iter_mut().find(|inv| inv.id == id) {
            Some(invoice) => {
                invoice.selected = checked;
                true
            }
            None => false,
        }
    }

    pub fn select_all(&mut self, value: bool) {
        for invoice in &mut self.invoices {
            invoice.selected = value;
        }
    }

    pub fn reset(&mut self) {
        self.select_all(false);
    }

    /// Invoices whose vendor, description or id contain `query`, in original order.
    pub fn search(&self, query: &str) -> Vec<&Invoice> {
        let Some(needle) = normalize_query(query) else {
            return self.invoices.iter().collect();
        };
        self.invoices
            .iter()
            .filter(|inv| {
                any_field_contains(
                    [inv.vendor.as_str(), inv.description_or_empty(), inv.id.as_str()],
                    &needle,
                )
            })
            .collect()
    }

    pub fn totals(&self) -> Totals {
        let total: Decimal = self.invoices.iter().map(|inv| inv.amount).sum();
        let selected: Decimal = self
            .invoices
            .iter()
            .filter(|inv| inv.selected)
            .map(|inv| inv.amount)
            .sum();
        let remaining = (total - selected).max(Decimal::ZERO);
        let percent_remaining = if total > Decimal::ZERO {
            (remaining / total * Decimal::ONE_HUNDRED)
                .to_f64()
                .unwrap_or(0.0)
                .clamp(0.0, 100.0)
        } else {
            0.0
        };
        Totals {
            total,
            selected,
            remaining,
            percent_remaining,
        }
    }

    /// True only when there is at least one invoice and all are selected.
    pub fn all_selected(&self) -> bool {
        !self.invoices.is_empty() && self.invoices.iter().all(|inv| inv.selected)
    }

    pub fn any_selected(&self) -> bool {
        self.invoices.iter().any(|inv| inv.selected)
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.invoices
            .iter()
            .filter(|inv| inv.selected)
            .map(|inv| inv.id.clone())
            .collect()
    }
}
