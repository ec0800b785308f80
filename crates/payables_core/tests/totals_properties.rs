use chrono::NaiveDate;
use payables_core::{Invoice, Selection};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn invoices_from(cents: &[i64]) -> Vec<Invoice> {
    let due = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap();
    cents
        .iter()
        .enumerate()
        .map(|(i, c)| Invoice::new(format!("INV-{i}"), "Vendor", None, due, Decimal::new(*c, 2)))
        .collect()
}

proptest! {
    #[test]
    fn selected_plus_remaining_is_total(
        cents in prop::collection::vec(0i64..1_000_000, 0..20),
        picks in prop::collection::vec(any::<bool>(), 20),
    ) {
        let mut selection = Selection::new(invoices_from(&cents));
        for (i, pick) in picks.iter().take(cents.len()).enumerate() {
            selection.toggle(&format!("INV-{i}"), *pick);
        }
        let totals = selection.totals();

        prop_assert_eq!(totals.selected + totals.remaining, totals.total);
        prop_assert!(totals.selected <= totals.total);
        prop_assert!((0.0..=100.0).contains(&totals.percent_remaining));
    }

    #[test]
    fn percent_remaining_never_increases_as_selection_grows(
        cents in prop::collection::vec(0i64..1_000_000, 1..20),
    ) {
        let mut selection = Selection::new(invoices_from(&cents));
        let mut previous = selection.totals().percent_remaining;
        for i in 0..cents.len() {
            selection.toggle(&format!("INV-{i}"), true);
            let current = selection.totals().percent_remaining;
            prop_assert!(current <= previous + 1e-9);
            previous = current;
        }
        prop_assert_eq!(previous, 0.0);
    }
}
