//! Keyed archive codec for index sets.
//!
//! Archives are MessagePack-encoded named maps with a `version` tag and the
//! index set under the fixed key `contained_index_set`. A missing key, wrong
//! shape, or unknown version is a hard decode error — a failed decode must
//! never be coerced to an empty set, since downstream code would treat that
//! as a real (empty) selection.

use serde::{Deserialize, Serialize};

use crate::index_set::IndexSet;

/// Current archive schema version.
pub const ARCHIVE_VERSION: u32 = 1;

/// Maximum archive size (1 MiB). An index-set archive anywhere near this
/// large is corrupt or hostile, not a selection.
pub const MAX_ARCHIVE_SIZE: usize = 1024 * 1024;

/// Archive codec error type.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("archive too large: {0} bytes (max {MAX_ARCHIVE_SIZE})")]
    TooLarge(usize),
    #[error("unsupported archive version {0} (current {ARCHIVE_VERSION})")]
    UnsupportedVersion(u32),
    #[error("archive encode error: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("archive decode error: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}

/// On-the-wire archive shape: version tag plus the single keyed field.
#[derive(Debug, Serialize, Deserialize)]
struct ArchivedIndexSet {
    version: u32,
    contained_index_set: IndexSet,
}

/// Encode an index set as a keyed archive blob.
pub fn encode(indexes: &IndexSet) -> Result<Vec<u8>, ArchiveError> {
    let archived = ArchivedIndexSet {
        version: ARCHIVE_VERSION,
        contained_index_set: indexes.clone(),
    };
    let blob = rmp_serde::to_vec_named(&archived)?;
    if blob.len() > MAX_ARCHIVE_SIZE {
        return Err(ArchiveError::TooLarge(blob.len()));
    }
    Ok(blob)
}

/// Decode a keyed archive blob back into an index set.
///
/// The `contained_index_set` key must be present and well-shaped, and the
/// version tag must not exceed [`ARCHIVE_VERSION`].
pub fn decode(blob: &[u8]) -> Result<IndexSet, ArchiveError> {
    if blob.len() > MAX_ARCHIVE_SIZE {
        return Err(ArchiveError::TooLarge(blob.len()));
    }
    let archived: ArchivedIndexSet = rmp_serde::from_slice(blob)?;
    if archived.version > ARCHIVE_VERSION {
        return Err(ArchiveError::UnsupportedVersion(archived.version));
    }
    Ok(archived.contained_index_set)
}
