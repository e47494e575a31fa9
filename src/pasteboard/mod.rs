//! Typed in-memory pasteboard.
//!
//! Models the host-framework clipboard contract as two traits plus a
//! payload store. Writers declare the type identifiers they can produce and
//! render payloads on request; readers declare the identifiers they accept
//! and reconstruct themselves from a matching payload. The pasteboard itself
//! is a flat map from declared type identifier to payload blob.

pub mod activity;
pub mod container;

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::archive::ArchiveError;

/// A pasteboard type identifier (reverse-DNS string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PasteboardType(Cow<'static, str>);

impl PasteboardType {
    /// A type identifier from an owned or static string.
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PasteboardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Application-private archive format for an index set.
///
/// The only custom identifier this crate advertises. Keeping it private to
/// the application lets same-app row drags round-trip losslessly while
/// staying invisible to other clipboard consumers.
pub const INDEX_SET_ARCHIVE_TYPE: PasteboardType =
    PasteboardType(Cow::Borrowed("io.rowclip.index-set-archive"));

/// File-path list type, declared by external drags of files onto the table.
pub const FILE_PATHS_TYPE: PasteboardType = PasteboardType(Cow::Borrowed("io.rowclip.file-paths"));

/// An opaque property-list value: an archived blob tagged with the type
/// identifier it was produced for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteboardPayload {
    pub type_id: PasteboardType,
    #[serde(with = "serde_bytes")]
    pub data: Vec<u8>,
}

/// Errors from pasteboard payload production and consumption.
#[derive(Debug, thiserror::Error)]
pub enum PasteboardError {
    /// Payload bytes do not decode as the declared type.
    #[error("payload decode failed for {type_id}: {source}")]
    Decode {
        type_id: PasteboardType,
        #[source]
        source: ArchiveError,
    },

    /// Payload carries a type identifier the reader does not accept.
    #[error("unsupported pasteboard type: {0}")]
    UnsupportedType(PasteboardType),

    /// No declared type on the pasteboard matches the reader.
    #[error("no readable payload on pasteboard")]
    NoReadablePayload,
}

/// Reads values of `Self` off a pasteboard. Class-level contract: the
/// accepted identifiers do not depend on any instance.
pub trait PasteboardReading: Sized {
    /// Type identifiers this type can read, in preference order.
    fn readable_types(pasteboard: &Pasteboard) -> Vec<PasteboardType>;

    /// Reconstruct from a payload previously produced for `type_id`.
    ///
    /// Malformed payloads are a hard error; a reader must never substitute
    /// a default value for data it could not decode.
    fn from_pasteboard_payload(
        payload: &PasteboardPayload,
        type_id: &PasteboardType,
    ) -> Result<Self, PasteboardError>;
}

/// Writes values of `Self` onto a pasteboard.
pub trait PasteboardWriting {
    /// Type identifiers this instance can produce, in preference order.
    fn writable_types(&self, pasteboard: &Pasteboard) -> Vec<PasteboardType>;

    /// Render a payload for `type_id`, or `None` if the identifier was not
    /// advertised by [`writable_types`](Self::writable_types). Never returns
    /// a malformed payload.
    fn to_pasteboard_payload(&self, type_id: &PasteboardType) -> Option<PasteboardPayload>;
}

/// In-memory pasteboard: declared types plus payloads keyed by type.
///
/// `declare_types` clears previous contents, mirroring the host-framework
/// rule that a new drag or copy owns the whole board.
#[derive(Debug, Default)]
pub struct Pasteboard {
    declared: Vec<PasteboardType>,
    payloads: HashMap<PasteboardType, PasteboardPayload>,
}

impl Pasteboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the types an upcoming write will offer, clearing any
    /// previous contents.
    pub fn declare_types(&mut self, types: &[PasteboardType]) {
        self.declared = types.to_vec();
        self.payloads.clear();
    }

    /// Currently declared types, in declaration order.
    pub fn types(&self) -> &[PasteboardType] {
        &self.declared
    }

    /// Write every payload a writer offers for the declared types.
    ///
    /// Asks the writer for its writable types, intersects with the declared
    /// list, and stores one payload per matching identifier. Returns the
    /// number of payloads written.
    pub fn write_object(&mut self, writer: &dyn PasteboardWriting) -> usize {
        let mut written = 0;
        for ty in writer.writable_types(self) {
            if !self.declared.contains(&ty) {
                continue;
            }
            if let Some(payload) = writer.to_pasteboard_payload(&ty) {
                self.payloads.insert(ty, payload);
                written += 1;
            }
        }
        written
    }

    /// Store a pre-built payload under its own type identifier, declaring
    /// the type if it was not declared yet.
    pub fn set_payload(&mut self, payload: PasteboardPayload) {
        if !self.declared.contains(&payload.type_id) {
            self.declared.push(payload.type_id.clone());
        }
        self.payloads.insert(payload.type_id.clone(), payload);
    }

    /// Raw payload for a declared type, if one was written.
    pub fn payload_for(&self, type_id: &PasteboardType) -> Option<&PasteboardPayload> {
        self.payloads.get(type_id)
    }

    /// Read a value of type `T` off the pasteboard.
    ///
    /// Scans `T`'s readable types in preference order and decodes the first
    /// one with a payload present. Returns [`PasteboardError::NoReadablePayload`]
    /// when nothing matches; a present-but-malformed payload surfaces its
    /// decode error rather than being skipped.
    pub fn read_object<T: PasteboardReading>(&self) -> Result<T, PasteboardError> {
        for ty in T::readable_types(self) {
            if let Some(payload) = self.payloads.get(&ty) {
                return T::from_pasteboard_payload(payload, &ty);
            }
        }
        Err(PasteboardError::NoReadablePayload)
    }
}
