use std::fmt::Write;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Manifest filename: `{kind}--{YYYYmmddTHHMMSSZ}--{short_hash(ids)}.json`.
///
/// The hash covers the ids in the given order, so the same batch handed off
/// twice in the same second lands on the same file.
pub fn manifest_filename<'a>(
    kind: &str,
    at: DateTime<Utc>,
    ids: impl IntoIterator<Item = &'a str>,
) -> String {
    let stamp = at.format("%Y%m%dT%H%M%SZ");
    format!("{kind}--{stamp}--{}.json", short_hash(ids))
}

fn short_hash<'a>(ids: impl IntoIterator<Item = &'a str>) -> String {
    let mut hasher = Sha256::new();
    for id in ids {
        hasher.update(id.as_bytes());
        hasher.update([0u8]);
    }
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
