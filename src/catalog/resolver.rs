//! Manifest parsing and version lookup

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::catalog::error::ResolveError;

/// A single version entry as it appears in the manifest. Extra fields
/// (`type`, `url`, `sha1`, ...) are ignored.
#[derive(Debug, Deserialize)]
struct VersionRecord {
    id: String,
    #[serde(rename = "releaseTime")]
    release_time: String,
}

/// Looks up `version_id` in the raw manifest bytes and returns its release
/// time, offset intact.
///
/// Entries are scanned in manifest order and the first exact `id` match
/// wins; ids are compared without trimming or case folding. A manifest with
/// no `versions` array yields `Ok(None)`, the same as an id that is simply
/// not listed. Only a syntactically broken document or a matched entry with
/// a missing or unparseable `releaseTime` is an error.
pub fn resolve(manifest: &[u8], version_id: &str) -> Result<Option<DateTime<FixedOffset>>, ResolveError> {
    let root: Value = serde_json::from_slice(manifest)?;

    let Some(entries) = root.get("versions").and_then(Value::as_array) else {
        debug!("Manifest has no versions array");
        return Ok(None);
    };

    for entry in entries {
        if entry.get("id").and_then(Value::as_str) != Some(version_id) {
            continue;
        }

        let record: VersionRecord = serde_json::from_value(entry.clone())?;
        debug!("Found {} with releaseTime {}", record.id, record.release_time);

        let release_date = DateTime::parse_from_rfc3339(&record.release_time).map_err(|err| {
            ResolveError::InvalidReleaseTime {
                value: record.release_time,
                source: err,
            }
        })?;

        return Ok(Some(release_date));
    }

    Ok(None)
}
