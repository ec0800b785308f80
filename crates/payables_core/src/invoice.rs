use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payable invoice. `id` is the identity key; only `selected` ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub vendor: String,
    #[serde(default)]
    pub description: Option<String>,
    pub due: NaiveDate,
    pub amount: Decimal,
    #[serde(default)]
    pub selected: bool,
}

impl Invoice {
    pub fn new(
        id: impl Into<String>,
        vendor: impl Into<String>,
        description: Option<&str>,
        due: NaiveDate,
        amount: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            vendor: vendor.into(),
            description: description.map(ToOwned::to_owned),
            due,
            amount,
            selected: false,
        }
    }

    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn due_status(&self, today: NaiveDate) -> DueStatus {
        DueStatus::classify(self.due, today)
    }
}

/// Whole calendar days from `today` until `due`; negative once overdue.
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    due.signed_duration_since(today).num_days()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    DueToday,
    /// Due within the next week; carries the day count (1..=7).
    DueSoon(u32),
    OnTrack,
}

impl DueStatus {
    pub const SOON_WINDOW_DAYS: i64 = 7;

    pub fn classify(due: NaiveDate, today: NaiveDate) -> Self {
        match days_until(due, today) {
            d if d < 0 => DueStatus::Overdue,
            0 => DueStatus::DueToday,
            d if d <= Self::SOON_WINDOW_DAYS => DueStatus::DueSoon(d as u32),
            _ => DueStatus::OnTrack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn classify_covers_every_band() {
        let today = date(2025, 10, 18);
        assert_eq!(DueStatus::classify(date(2025, 10, 17), today), DueStatus::Overdue);
        assert_eq!(DueStatus::classify(today, today), DueStatus::DueToday);
        assert_eq!(DueStatus::classify(date(2025, 10, 19), today), DueStatus::DueSoon(1));
        assert_eq!(DueStatus::classify(date(2025, 10, 25), today), DueStatus::DueSoon(7));
        assert_eq!(DueStatus::classify(date(2025, 10, 26), today), DueStatus::OnTrack);
    }

    #[test]
    fn days_until_crosses_month_boundaries() {
        assert_eq!(days_until(date(2025, 11, 10), date(2025, 10, 31)), 10);
        assert_eq!(days_until(date(2025, 9, 30), date(2025, 10, 1)), -1);
    }
}
