//! Document acquisition and the rendering-surface boundary.
//!
//! The engine never decodes or rasterizes documents itself. This module owns
//! the pieces around that boundary:
//!
//! - `handle` - opaque reference to document content
//! - `upload` - incoming file validation (type and size)
//! - `surface` - the external rendering collaborator trait
//! - `layout` - responsive render-width computation
//! - `error` - the document error taxonomy

pub mod error;
mod handle;
mod layout;
mod surface;
mod upload;

pub use error::{DocumentError, DocumentResult};
pub use handle::ContentHandle;
pub use layout::page_render_width;
pub use surface::{PageView, RenderSurface};
pub use upload::DocumentUpload;
