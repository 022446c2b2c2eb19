//! Error types for content loading and host operations.

use thiserror::Error;

use crate::types::Slot;

/// Failure to load a CMS document as a whole.
///
/// Category and record problems never surface here; they are isolated in
/// [`crate::content::Collection`] instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document is not valid JSON.
    #[error("content is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// The document parsed but its top level is not an object.
    #[error("content must be a JSON object keyed by slot, got {found}")]
    NotAnObject {
        /// JSON type found at the top level
        found: &'static str,
    },
}

/// A single record that could not be decoded into its category's shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{slot} record #{index} is malformed: {reason}")]
pub struct MalformedRecord {
    /// Category the record belongs to
    pub slot: Slot,
    /// Zero-based position in the category's list
    pub index: usize,
    /// Decoder message, e.g. "missing field `answer`"
    pub reason: String,
}

/// A host document operation that failed (append, class toggle, listener).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {message}")]
pub struct HostError {
    /// Short name of the attempted operation
    pub operation: &'static str,
    /// Host-provided error description
    pub message: String,
}

impl HostError {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}
