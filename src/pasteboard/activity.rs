//! Drag pasteboard classification for the row table.
//!
//! During a drag the table asks what kind of drop is in flight: files
//! dragged in from outside, a same-app row move, or something it does not
//! understand. File payloads win over row payloads; an unrecognized
//! pasteboard is logged and reported as [`DragActivity::Unknown`].

use std::path::PathBuf;

use tracing::{info, warn};

use crate::index_set::IndexSet;

use super::container::IndexSetPasteboardContainer;
use super::{FILE_PATHS_TYPE, INDEX_SET_ARCHIVE_TYPE, Pasteboard, PasteboardPayload};

/// What a drag pasteboard holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragActivity {
    /// Same-app row drag: move the rows at these indexes.
    MoveRows(IndexSet),
    /// Files dragged in from outside the app.
    DragFiles(Vec<PathBuf>),
    /// Nothing this table knows how to accept.
    Unknown,
}

/// Classify the contents of a drag pasteboard.
pub fn classify(pasteboard: &Pasteboard) -> DragActivity {
    // File drags take priority: an external drop should never be
    // misread as a row move.
    if let Some(payload) = pasteboard.payload_for(&FILE_PATHS_TYPE) {
        match rmp_serde::from_slice::<Vec<PathBuf>>(&payload.data) {
            Ok(paths) if !paths.is_empty() => return DragActivity::DragFiles(paths),
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "file path payload decode failed");
            }
        }
    }

    if let Ok(container) = pasteboard.read_object::<IndexSetPasteboardContainer>() {
        return DragActivity::MoveRows(container.contained_index_set().clone());
    }

    info!(types = ?pasteboard.types(), "unknown item found in pasteboard");
    DragActivity::Unknown
}

/// Start a row drag: declare the custom type and write the selection.
///
/// Returns `false` when the selection is empty (nothing to drag).
pub fn write_row_drag(pasteboard: &mut Pasteboard, indexes: &IndexSet) -> bool {
    if indexes.is_empty() {
        return false;
    }
    pasteboard.declare_types(&[INDEX_SET_ARCHIVE_TYPE]);
    let container = IndexSetPasteboardContainer::new(indexes.clone());
    pasteboard.write_object(&container) == 1
}

/// Write a file drag payload, as an external drag source would.
pub fn write_file_drag(pasteboard: &mut Pasteboard, paths: &[PathBuf]) {
    pasteboard.declare_types(&[FILE_PATHS_TYPE]);
    match rmp_serde::to_vec_named(&paths) {
        Ok(data) => pasteboard.set_payload(PasteboardPayload {
            type_id: FILE_PATHS_TYPE,
            data,
        }),
        Err(e) => {
            warn!(error = %e, "file path payload encode failed");
        }
    }
}

/// Effective insertion row once the dragged rows are removed.
///
/// Members of `indexes` below `drop_row` vacate rows above the insertion
/// point, shifting it down by their count.
pub fn move_destination(indexes: &IndexSet, drop_row: u64) -> u64 {
    drop_row - indexes.count_below(drop_row) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pasteboard::PasteboardWriting;

    #[test]
    fn classify_row_drag() {
        let mut pb = Pasteboard::new();
        let selection = IndexSet::from([2, 5, 6, 9]);
        assert!(write_row_drag(&mut pb, &selection));
        assert_eq!(classify(&pb), DragActivity::MoveRows(selection));
    }

    #[test]
    fn classify_file_drag() {
        let mut pb = Pasteboard::new();
        let paths = vec![PathBuf::from("/tmp/a.toml"), PathBuf::from("/tmp/b.toml")];
        write_file_drag(&mut pb, &paths);
        assert_eq!(classify(&pb), DragActivity::DragFiles(paths));
    }

    #[test]
    fn files_win_over_rows() {
        let mut pb = Pasteboard::new();
        write_file_drag(&mut pb, &[PathBuf::from("/tmp/f")]);
        // A row payload alongside the file payload must not change the answer.
        let container = IndexSetPasteboardContainer::new(IndexSet::single(0));
        if let Some(payload) = container.to_pasteboard_payload(&INDEX_SET_ARCHIVE_TYPE) {
            pb.set_payload(payload);
        }
        assert!(matches!(classify(&pb), DragActivity::DragFiles(_)));
    }

    #[test]
    fn empty_board_is_unknown() {
        crate::init_test_tracing();
        let pb = Pasteboard::new();
        assert_eq!(classify(&pb), DragActivity::Unknown);
    }

    #[test]
    fn malformed_row_payload_is_unknown() {
        crate::init_test_tracing();
        let mut pb = Pasteboard::new();
        pb.set_payload(PasteboardPayload {
            type_id: INDEX_SET_ARCHIVE_TYPE,
            data: b"corrupt".to_vec(),
        });
        assert_eq!(classify(&pb), DragActivity::Unknown);
    }

    #[test]
    fn empty_selection_does_not_start_a_drag() {
        let mut pb = Pasteboard::new();
        assert!(!write_row_drag(&mut pb, &IndexSet::new()));
    }

    #[test]
    fn move_destination_shifts_for_rows_below() {
        let dragged = IndexSet::from([2, 5, 6, 9]);
        // Dropping at row 8: rows 2, 5, 6 vacate slots above it.
        assert_eq!(move_destination(&dragged, 8), 5);
        // Dropping at row 0: nothing below.
        assert_eq!(move_destination(&dragged, 0), 0);
    }
}
