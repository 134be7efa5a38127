//! Derived visuals for the annotation layer.
//!
//! - `overlay` - projects stored annotations onto the current page as
//!   paint-ready primitives

mod overlay;

pub use overlay::{OverlayPrimitive, page_overlay};
