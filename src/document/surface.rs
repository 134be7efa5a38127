//! The document rendering collaborator.
//!
//! Decoding and rasterization live behind this trait. The engine supplies a
//! content handle, a page number, and a requested width; the collaborator
//! reports page count and the displayed page geometry. Failures cross the
//! boundary as opaque `anyhow` errors and are surfaced to the user by the
//! session.

use crate::document::ContentHandle;

/// Displayed geometry of the current page, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageView {
    pub width: f32,
    pub height: f32,
}

/// External surface that decodes and displays the document.
pub trait RenderSurface {
    /// Load the document and return its total page count.
    fn load(&mut self, handle: &ContentHandle) -> anyhow::Result<u32>;

    /// Display `page` (1-based) at the requested pixel width and return the
    /// resulting page geometry.
    fn render_page(&mut self, page: u32, width: f32) -> anyhow::Result<PageView>;
}
