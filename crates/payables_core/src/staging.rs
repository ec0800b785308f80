//! Upload staging: files accepted from drag-and-drop or the file picker,
//! deduplicated by `(name, size)` until they are handed off.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use desk_logging::desk_debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::text::collate;

const FALLBACK_FILE_TYPE: &str = "file";

/// A file as the host environment hands it over. Treated as opaque input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFileDescriptor {
    pub name: String,
    pub size: u64,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub last_modified_at: Option<DateTime<Utc>>,
}

impl RawFileDescriptor {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: None,
            last_modified_at: None,
        }
    }

    pub fn with_mime(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedFile {
    pub id: String,
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub file_type: String,
    pub last_modified_at: DateTime<Utc>,
}

impl StagedFile {
    fn from_descriptor(raw: RawFileDescriptor, now: DateTime<Utc>) -> Self {
        let file_type = infer_file_type(&raw.name, raw.mime_type.as_deref());
        Self {
            id: Uuid::new_v4().to_string(),
            name: raw.name,
            size: raw.size,
            file_type,
            last_modified_at: raw.last_modified_at.unwrap_or(now),
        }
    }

    fn key(&self) -> StagingKey {
        (self.name.clone(), self.size)
    }
}

/// Declared MIME if present, else the non-empty extension after the last
/// `.`, else `"file"`.
pub fn infer_file_type(name: &str, mime_type: Option<&str>) -> String {
    if let Some(mime) = mime_type.filter(|m| !m.is_empty()) {
        return mime.to_string();
    }
    name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .unwrap_or(FALLBACK_FILE_TYPE)
        .to_string()
}

type StagingKey = (String, u64);

/// Outcome of one [`StagingQueue::add_files`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddReport {
    pub added: usize,
    pub replaced: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StagingQueue {
    files: BTreeMap<StagingKey, StagedFile>,
}

impl StagingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merges descriptors into the set. A descriptor whose `(name, size)` is
    /// already staged replaces the earlier record, id and timestamp included.
    pub fn add_files(
        &mut self,
        descriptors: impl IntoIterator<Item = RawFileDescriptor>,
        now: DateTime<Utc>,
    ) -> AddReport {
        let mut report = AddReport::default();
        for raw in descriptors {
            let staged = StagedFile::from_descriptor(raw, now);
            match self.files.insert(staged.key(), staged) {
                Some(previous) => {
                    desk_debug!(
                        "Re-staged {} ({} bytes), dropping id {}",
                        previous.name,
                        previous.size,
                        previous.id
                    );
                    report.replaced += 1;
                }
                None => report.added += 1,
            }
        }
        report
    }

    /// Removes the record with the generated `id`. Returns whether one matched.
    pub fn remove_one(&mut self, id: &str) -> bool {
        let key = self
            .files
            .iter()
            .find(|(_, file)| file.id == id)
            .map(|(key, _)| key.clone());
        match key {
            Some(key) => self.files.remove(&key).is_some(),
            None => false,
        }
    }

    pub fn clear_all(&mut self) {
        self.files.clear();
    }

    /// Staged files ordered by name, ties broken by generated id.
    pub fn ordered(&self) -> Vec<&StagedFile> {
        let mut files: Vec<&StagedFile> = self.files.values().collect();
        files.sort_by(|a, b| collate(&a.name, &b.name).then_with(|| a.id.cmp(&b.id)));
        files
    }

    /// Snapshot for the downstream hand-off; `None` while nothing is staged.
    pub fn submission(&self) -> Option<Vec<StagedFile>> {
        if self.is_empty() {
            return None;
        }
        Some(self.ordered().into_iter().cloned().collect())
    }
}
