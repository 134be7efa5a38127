//! Incoming file validation.
//!
//! Checks an upload's declared type and size before any bytes are handed to
//! the rendering surface. Rejections carry the user-facing message; nothing
//! else in the session is touched.

use crate::document::error::{DocumentError, DocumentResult};
use crate::constants::ACCEPTED_MIME_TYPE;
use crate::settings::Settings;

/// Metadata describing a file the user picked.
#[derive(Clone, Debug)]
pub struct DocumentUpload {
    /// Original file name, for display only
    pub file_name: String,
    /// Declared MIME type
    pub mime: String,
    /// Size in bytes
    pub size_bytes: u64,
}

impl DocumentUpload {
    pub fn new(
        file_name: impl Into<String>,
        mime: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            size_bytes,
        }
    }

    /// Validate declared type and size against the configured limits.
    ///
    /// Size is checked against `settings.max_document_size_mb` before any
    /// content is read.
    pub fn validate(&self, settings: &Settings) -> DocumentResult<()> {
        if self.mime != ACCEPTED_MIME_TYPE {
            return Err(DocumentError::InvalidType {
                mime: self.mime.clone(),
            });
        }

        let max_mb = settings.max_document_size_mb;
        if self.size_bytes > max_mb * 1024 * 1024 {
            return Err(DocumentError::TooLarge {
                size_bytes: self.size_bytes,
                max_mb,
            });
        }

        Ok(())
    }
}
