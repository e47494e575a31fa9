//! Pasteboard container for a table-row index selection.
//!
//! Wraps an [`IndexSet`] so a row selection can travel through the
//! pasteboard (same-app drag/copy-paste) and through the keyed archive
//! codec. Immutable after construction.

use tracing::warn;

use crate::archive;
use crate::index_set::IndexSet;

use super::{
    INDEX_SET_ARCHIVE_TYPE, Pasteboard, PasteboardError, PasteboardPayload, PasteboardReading,
    PasteboardType, PasteboardWriting,
};

/// An index set packaged for pasteboard transfer.
///
/// Construction copies the input set; mutating the caller's original after
/// construction does not affect the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSetPasteboardContainer {
    contained_index_set: IndexSet,
}

impl IndexSetPasteboardContainer {
    /// Wrap an index set. Always succeeds.
    pub fn new(index_set: IndexSet) -> Self {
        Self {
            contained_index_set: index_set,
        }
    }

    /// The wrapped set. Read-only; the container never mutates it.
    pub fn contained_index_set(&self) -> &IndexSet {
        &self.contained_index_set
    }

    /// Encode through the keyed archive codec.
    pub fn to_archive(&self) -> Result<Vec<u8>, archive::ArchiveError> {
        archive::encode(&self.contained_index_set)
    }

    /// Decode from a keyed archive blob. Malformed input is a hard error,
    /// never an empty-set fallback.
    pub fn from_archive(blob: &[u8]) -> Result<Self, archive::ArchiveError> {
        Ok(Self {
            contained_index_set: archive::decode(blob)?,
        })
    }
}

impl PasteboardReading for IndexSetPasteboardContainer {
    fn readable_types(_pasteboard: &Pasteboard) -> Vec<PasteboardType> {
        vec![INDEX_SET_ARCHIVE_TYPE]
    }

    fn from_pasteboard_payload(
        payload: &PasteboardPayload,
        type_id: &PasteboardType,
    ) -> Result<Self, PasteboardError> {
        if *type_id != INDEX_SET_ARCHIVE_TYPE {
            return Err(PasteboardError::UnsupportedType(type_id.clone()));
        }
        match archive::decode(&payload.data) {
            Ok(contained_index_set) => Ok(Self {
                contained_index_set,
            }),
            Err(source) => {
                warn!(type_id = %type_id, error = %source, "index set payload decode failed");
                Err(PasteboardError::Decode {
                    type_id: type_id.clone(),
                    source,
                })
            }
        }
    }
}

impl PasteboardWriting for IndexSetPasteboardContainer {
    fn writable_types(&self, _pasteboard: &Pasteboard) -> Vec<PasteboardType> {
        vec![INDEX_SET_ARCHIVE_TYPE]
    }

    fn to_pasteboard_payload(&self, type_id: &PasteboardType) -> Option<PasteboardPayload> {
        if *type_id != INDEX_SET_ARCHIVE_TYPE {
            return None;
        }
        match archive::encode(&self.contained_index_set) {
            Ok(data) => Some(PasteboardPayload {
                type_id: type_id.clone(),
                data,
            }),
            Err(e) => {
                // Encoding a valid set only fails past the size guard.
                warn!(error = %e, "index set payload encode failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pasteboard::FILE_PATHS_TYPE;

    fn payload_round_trip(s: IndexSet) -> IndexSet {
        let container = IndexSetPasteboardContainer::new(s);
        let payload = container
            .to_pasteboard_payload(&INDEX_SET_ARCHIVE_TYPE)
            .unwrap();
        let restored = IndexSetPasteboardContainer::from_pasteboard_payload(
            &payload,
            &INDEX_SET_ARCHIVE_TYPE,
        )
        .unwrap();
        restored.contained_index_set().clone()
    }

    #[test]
    fn payload_round_trip_empty() {
        assert_eq!(payload_round_trip(IndexSet::new()), IndexSet::new());
    }

    #[test]
    fn payload_round_trip_single() {
        assert_eq!(payload_round_trip(IndexSet::single(3)), IndexSet::single(3));
    }

    #[test]
    fn payload_round_trip_sparse() {
        let s: IndexSet = [1, 4, 9, 100, 10_000].into_iter().collect();
        assert_eq!(payload_round_trip(s.clone()), s);
    }

    #[test]
    fn concrete_scenario_2_5_6_9() {
        // Construct from {2, 5, 6, 9}, produce a payload for the custom
        // type, decode it back, and check members in ascending order.
        let restored = payload_round_trip(IndexSet::from([2, 5, 6, 9]));
        let members: Vec<u64> = restored.iter().collect();
        assert_eq!(members, vec![2, 5, 6, 9]);
    }

    #[test]
    fn archive_round_trip() {
        let container = IndexSetPasteboardContainer::new(IndexSet::from([2, 5, 6, 9]));
        let blob = container.to_archive().unwrap();
        let restored = IndexSetPasteboardContainer::from_archive(&blob).unwrap();
        assert_eq!(restored, container);
    }

    #[test]
    fn archive_decode_failure_is_hard_error() {
        assert!(IndexSetPasteboardContainer::from_archive(b"garbage").is_err());
    }

    #[test]
    fn malformed_payload_decode_is_hard_error() {
        crate::init_test_tracing();
        let payload = PasteboardPayload {
            type_id: INDEX_SET_ARCHIVE_TYPE,
            data: b"not an archive".to_vec(),
        };
        let err = IndexSetPasteboardContainer::from_pasteboard_payload(
            &payload,
            &INDEX_SET_ARCHIVE_TYPE,
        )
        .unwrap_err();
        assert!(matches!(err, PasteboardError::Decode { .. }));
    }

    #[test]
    fn unadvertised_type_produces_no_payload() {
        let container = IndexSetPasteboardContainer::new(IndexSet::single(1));
        assert!(container.to_pasteboard_payload(&FILE_PATHS_TYPE).is_none());
        assert!(
            container
                .to_pasteboard_payload(&PasteboardType::new("public.utf8-plain-text"))
                .is_none()
        );
    }

    #[test]
    fn unadvertised_type_on_read_is_unsupported() {
        let container = IndexSetPasteboardContainer::new(IndexSet::single(1));
        let payload = container
            .to_pasteboard_payload(&INDEX_SET_ARCHIVE_TYPE)
            .unwrap();
        let err =
            IndexSetPasteboardContainer::from_pasteboard_payload(&payload, &FILE_PATHS_TYPE)
                .unwrap_err();
        assert!(matches!(err, PasteboardError::UnsupportedType(_)));
    }

    #[test]
    fn readable_types_cover_writable_types() {
        // Advertisement closure: everything any instance can write, the
        // class can read back.
        let pb = Pasteboard::new();
        let readable = IndexSetPasteboardContainer::readable_types(&pb);
        assert!(!readable.is_empty());
        let container = IndexSetPasteboardContainer::new(IndexSet::new());
        for ty in container.writable_types(&pb) {
            assert!(readable.contains(&ty), "writable type {ty} not readable");
        }
    }

    #[test]
    fn container_owns_its_copy() {
        let mut original = IndexSet::from([1, 2, 3]);
        let container = IndexSetPasteboardContainer::new(original.clone());
        original.insert(99);
        original.remove(1);
        assert_eq!(
            container.contained_index_set(),
            &IndexSet::from([1, 2, 3]),
            "caller mutation leaked into the container"
        );
    }

    #[test]
    fn full_pasteboard_round_trip() {
        let mut pb = Pasteboard::new();
        pb.declare_types(&[INDEX_SET_ARCHIVE_TYPE]);
        let container = IndexSetPasteboardContainer::new(IndexSet::from([2, 5, 6, 9]));
        assert_eq!(pb.write_object(&container), 1);

        let restored: IndexSetPasteboardContainer = pb.read_object().unwrap();
        assert_eq!(restored, container);
    }
}
