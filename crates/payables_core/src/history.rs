//! Log of past uploads with a free-text filter and a toggleable sort.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::text::{any_field_contains, collate, normalize_query};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadSource {
    Drag,
    Browse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadStatus {
    Processed,
    Queued,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub file_type: String,
    pub uploaded_at: DateTime<Utc>,
    pub source: UploadSource,
    pub status: UploadStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    UploadedAt,
    Name,
    Size,
}

impl SortKey {
    /// Direction adopted when switching to this key: newest uploads first,
    /// everything else ascending.
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortKey::UploadedAt => SortDirection::Desc,
            SortKey::Name | SortKey::Size => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistorySort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for HistorySort {
    fn default() -> Self {
        Self {
            key: SortKey::UploadedAt,
            direction: SortKey::UploadedAt.default_direction(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    query: String,
    sort: HistorySort,
}

impl HistoryLog {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> HistorySort {
        self.sort
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = if self.sort.key == key {
            HistorySort {
                key,
                direction: self.sort.direction.flipped(),
            }
        } else {
            HistorySort {
                key,
                direction: key.default_direction(),
            }
        };
    }

    /// Filtered and sorted entries. The log itself is left untouched.
    pub fn view(&self) -> Vec<&HistoryEntry> {
        let mut rows: Vec<&HistoryEntry> = match normalize_query(&self.query) {
            Some(needle) => self
                .entries
                .iter()
                .filter(|e| any_field_contains([e.name.as_str(), e.file_type.as_str()], &needle))
                .collect(),
            None => self.entries.iter().collect(),
        };
        let HistorySort { key, direction } = self.sort;
        // `sort_by` is stable, and reversing the comparator (not the output)
        // keeps ties in log order for both directions.
        rows.sort_by(|a, b| {
            let ord = compare_by(key, a, b);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        rows
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }
}

fn compare_by(key: SortKey, a: &HistoryEntry, b: &HistoryEntry) -> Ordering {
    match key {
        SortKey::UploadedAt => a.uploaded_at.cmp(&b.uploaded_at),
        SortKey::Size => a.size.cmp(&b.size),
        SortKey::Name => collate(&a.name, &b.name),
    }
}
