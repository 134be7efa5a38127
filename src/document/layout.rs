//! Responsive render-width computation.

use crate::constants::{HALF_WIDTH_MAX, HALF_WIDTH_MIN};

/// Width at which to render a page inside a container of the given width.
///
/// Containers strictly between the two breakpoints get a half-width page;
/// everything else renders at the full container width.
pub fn page_render_width(container_width: f32) -> f32 {
    if container_width > HALF_WIDTH_MIN && container_width < HALF_WIDTH_MAX {
        container_width / 2.0
    } else {
        container_width
    }
}
