use thiserror::Error;

use super::checksum::DocumentKind;

/// Errors that can occur while constructing a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// The input does not normalize to a structurally valid document with
    /// matching check digits.
    #[error("invalid {kind} format: '{input}'")]
    InvalidDocumentFormat {
        /// Which document kind was expected.
        kind: DocumentKind,
        /// The input as supplied by the caller.
        input: String,
    },
}

impl DocumentError {
    /// The document kind the rejected input was checked against.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::InvalidDocumentFormat { kind, .. } => *kind,
        }
    }
}
