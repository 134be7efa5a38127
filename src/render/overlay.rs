//! Page overlay renderer.
//!
//! Projects the annotation model onto the currently displayed page as a
//! lazy sequence of paint-ready primitives. The projection is pure and holds
//! no state of its own: it must be re-derived whenever the model or the page
//! number changes, and calling it twice with the same inputs yields the same
//! sequence.
//!
//! Positions and sizes are passed through untransformed. Annotations store
//! raw pixels from creation time, so a surface rendered at a different width
//! later will show them drifted from their original anchor; re-anchoring to
//! resolution-independent coordinates is a deliberate non-feature here.

use crate::annotations::AnnotationStore;
use crate::constants::{
    HIGHLIGHT_OPACITY, SIGNATURE_MAX_HEIGHT, SIGNATURE_MAX_WIDTH, UNDERLINE_THICKNESS,
};
use crate::types::{Annotation, AnnotationKind};

/// One paint-ready visual, positioned in the rendering surface's pixel
/// space.
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayPrimitive {
    /// Solid rectangle (highlights and underline bars)
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: String,
        opacity: f32,
    },
    /// Styled note box containing comment text
    NoteBox { x: f32, y: f32, text: String },
    /// Raster stamp, displayed no larger than its max box
    ImageStamp {
        x: f32,
        y: f32,
        image_data: String,
        max_width: f32,
        max_height: f32,
    },
}

/// Project the annotations of `page` into paint order.
///
/// Lazy, finite, and restartable; entries come out in insertion order so
/// later annotations paint over earlier ones.
pub fn page_overlay(
    store: &AnnotationStore,
    page: u32,
) -> impl Iterator<Item = OverlayPrimitive> + '_ {
    store.for_page(page).map(project)
}

fn project(annotation: &Annotation) -> OverlayPrimitive {
    let (x, y) = annotation.position;
    match &annotation.kind {
        AnnotationKind::Highlight {
            color,
            width,
            height,
        } => OverlayPrimitive::Rect {
            x,
            y,
            width: *width,
            height: *height,
            color: color.clone(),
            opacity: HIGHLIGHT_OPACITY,
        },
        AnnotationKind::Underline { color, width } => OverlayPrimitive::Rect {
            x,
            y,
            width: *width,
            height: UNDERLINE_THICKNESS,
            color: color.clone(),
            opacity: 1.0,
        },
        AnnotationKind::Comment { text } => OverlayPrimitive::NoteBox {
            x,
            y,
            text: text.clone(),
        },
        AnnotationKind::Signature { image_data } => OverlayPrimitive::ImageStamp {
            x,
            y,
            image_data: image_data.clone(),
            max_width: SIGNATURE_MAX_WIDTH,
            max_height: SIGNATURE_MAX_HEIGHT,
        },
    }
}
