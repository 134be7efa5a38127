//! Error types for document operations
//!
//! Provides unified error handling for upload validation and document
//! loading.

use thiserror::Error;

// Re-export acceptance limits from constants module for consistency
pub use crate::constants::{ACCEPTED_MIME_TYPE, MAX_DOCUMENT_SIZE_MB};

/// Errors that can occur while acquiring or loading a document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// File is not of the accepted document type
    #[error("Please select a PDF file.")]
    InvalidType {
        /// MIME type the file actually carried
        mime: String,
    },

    /// File exceeds the configured size limit
    #[error("File must be less than {max_mb}MB.")]
    TooLarge { size_bytes: u64, max_mb: u64 },

    /// No document handle is present to operate on
    #[error("No document loaded")]
    NoDocument,

    /// The rendering surface failed to decode or display the document
    #[error("Error loading PDF.")]
    LoadFailed(#[source] anyhow::Error),
}

/// Result type alias for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;
