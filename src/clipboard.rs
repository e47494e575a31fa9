//! System clipboard seam — how archived payloads leave the process.
//!
//! Platform adapters implement [`ClipboardProvider`]; the export/import
//! helpers ship a serialized [`PasteboardPayload`] through whichever
//! provider is composed in. The library only supplies [`InMemoryClipboard`];
//! a GUI host wires in its own platform adapter.

use std::sync::Mutex;

use tracing::debug;

use crate::archive::ArchiveError;
use crate::pasteboard::container::IndexSetPasteboardContainer;
use crate::pasteboard::{
    INDEX_SET_ARCHIVE_TYPE, PasteboardError, PasteboardPayload, PasteboardReading,
};

/// Errors from clipboard export/import.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// Provider-level failure (platform mechanism unavailable, pipe error).
    #[error("clipboard: {0}")]
    Provider(String),

    /// The container's set could not be archived for transport.
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// Clipboard bytes do not deserialize as a pasteboard payload.
    #[error("clipboard payload envelope decode failed: {0}")]
    Envelope(#[from] rmp_serde::decode::Error),

    /// Clipboard bytes could not be produced for transport.
    #[error("clipboard payload envelope encode failed: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    /// Envelope decoded, but its contents are not a usable index set.
    #[error(transparent)]
    Pasteboard(#[from] PasteboardError),
}

/// Reads and writes the system clipboard.
///
/// `Send + Sync` so a host can invoke clipboard operations from whatever
/// thread owns its event loop.
pub trait ClipboardProvider: Send + Sync {
    /// Set the clipboard content to the given bytes.
    fn write(&self, content: &[u8]) -> Result<(), ClipboardError>;

    /// Read the current clipboard content.
    fn read(&self) -> Result<Vec<u8>, ClipboardError>;
}

/// Process-local provider backed by a mutex-guarded buffer.
#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    content: Mutex<Vec<u8>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardProvider for InMemoryClipboard {
    fn write(&self, content: &[u8]) -> Result<(), ClipboardError> {
        let mut guard = self
            .content
            .lock()
            .map_err(|_| ClipboardError::Provider("clipboard lock poisoned".into()))?;
        *guard = content.to_vec();
        Ok(())
    }

    fn read(&self) -> Result<Vec<u8>, ClipboardError> {
        let guard = self
            .content
            .lock()
            .map_err(|_| ClipboardError::Provider("clipboard lock poisoned".into()))?;
        Ok(guard.clone())
    }
}

/// Export a container's archive payload to the clipboard.
///
/// The payload (type identifier plus archive blob) is MessagePack-encoded
/// as the transport envelope, so import can verify the type before decoding.
pub fn export(
    provider: &dyn ClipboardProvider,
    container: &IndexSetPasteboardContainer,
) -> Result<(), ClipboardError> {
    let payload = PasteboardPayload {
        type_id: INDEX_SET_ARCHIVE_TYPE,
        data: container.to_archive()?,
    };
    let envelope = rmp_serde::to_vec_named(&payload)?;
    debug!(bytes = envelope.len(), "exporting index set payload");
    provider.write(&envelope)
}

/// Import a container from clipboard bytes written by [`export`].
///
/// Verifies the embedded type identifier against the container's readable
/// types before decoding the archive blob.
pub fn import(
    provider: &dyn ClipboardProvider,
) -> Result<IndexSetPasteboardContainer, ClipboardError> {
    let envelope = provider.read()?;
    let payload: PasteboardPayload = rmp_serde::from_slice(&envelope)?;
    let type_id = payload.type_id.clone();
    Ok(IndexSetPasteboardContainer::from_pasteboard_payload(
        &payload, &type_id,
    )?)
}
