//! Pointer move event handling - signature strokes, live previews.
//!
//! ## Performance Notes
//!
//! Pointer move fires very frequently during a gesture (potentially 60+
//! times per second), so this path does no allocation and mutates nothing
//! in the annotation model.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::input::coords::CoordinateCapture;
use crate::profile_scope;
use crate::session::ViewerSession;
use crate::types::{AnnotationTool, PointerEvent};

impl ViewerSession {
    /// Track pointer movement over the rendering surface.
    ///
    /// The annotation model is never mutated here. While the signature tool
    /// is active, moves feed the signature pad's continuous stroke; the pad
    /// is deliberately not gated on the drawing gesture.
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) {
        profile_scope!("handle_pointer_move");

        let Some(rect) = self.document.surface else {
            return;
        };
        let current = CoordinateCapture::surface_local(event, &rect);

        if self.tools.selected == AnnotationTool::Signature {
            if let Some(pad) = self.signature_pad.as_mut() {
                pad.extend_to(current);
            }
        }

        if !self.gesture.is_dragging() {
            return;
        }

        match self.tools.selected {
            // Extension point for a live preview of the in-progress box.
            AnnotationTool::Highlight | AnnotationTool::Underline => {}
            AnnotationTool::Select | AnnotationTool::Comment | AnnotationTool::Signature => {}
        }
    }
}
