//! rowclip — pasteboard transfer of table-row index selections.
//!
//! A row table that supports drag-reorder needs its selection to travel
//! through the clipboard: wrapped for same-app pasteboard exchange,
//! archived for persistence, and classifiable against competing drag
//! payloads (files dropped from outside). This crate provides the value
//! type, the codecs, and the pasteboard glue:
//!
//! - [`IndexSet`]: ordered, deduplicated set of row indexes.
//! - [`archive`]: keyed single-field archive codec (versioned MessagePack).
//! - [`pasteboard`]: typed in-memory pasteboard, the
//!   [`IndexSetPasteboardContainer`] wrapper, and drag-activity
//!   classification.
//! - [`clipboard`]: provider trait for shipping payloads through a real
//!   system clipboard.

pub mod archive;
pub mod clipboard;
pub mod index_set;
pub mod pasteboard;

/// Install an env-filtered subscriber so log output from failure-path
/// tests is observable under `RUST_LOG`. Safe to call from every test;
/// only the first install wins.
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub use clipboard::{ClipboardError, ClipboardProvider, InMemoryClipboard};
pub use index_set::IndexSet;
pub use pasteboard::activity::{
    DragActivity, classify, move_destination, write_file_drag, write_row_drag,
};
pub use pasteboard::container::IndexSetPasteboardContainer;
pub use pasteboard::{
    FILE_PATHS_TYPE, INDEX_SET_ARCHIVE_TYPE, Pasteboard, PasteboardError, PasteboardPayload,
    PasteboardReading, PasteboardType, PasteboardWriting,
};
