//! Opaque content handle passed to the rendering surface.

use std::path::PathBuf;
use std::sync::Arc;

/// A reference to document bytes usable by a [`RenderSurface`].
///
/// The engine only threads this value through to the collaborator; it never
/// inspects the content. Reclaiming whatever backs the handle (a mapped
/// file, an object URL) is the creator's responsibility on close/replace.
///
/// [`RenderSurface`]: crate::document::RenderSurface
#[derive(Clone, Debug)]
pub enum ContentHandle {
    /// Document bytes held in memory
    Memory(Arc<[u8]>),
    /// Document stored on disk
    Path(PathBuf),
    /// Document addressable by URL (e.g. an object URL from the embedder)
    Url(String),
}

impl ContentHandle {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::Memory(bytes.into())
    }

    /// Byte length, when the handle knows it without touching I/O.
    pub fn len(&self) -> Option<u64> {
        match self {
            Self::Memory(bytes) => Some(bytes.len() as u64),
            Self::Path(_) | Self::Url(_) => None,
        }
    }
}
