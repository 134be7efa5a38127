//! Pointer up event handling - finalize the gesture, commit annotations.

use crate::constants::{DEFAULT_COMMENT_TEXT, HIGHLIGHT_HEIGHT};
use crate::input::coords::CoordinateCapture;
use crate::profile_scope;
use crate::session::ViewerSession;
use crate::types::{AnnotationKind, AnnotationTool, PointerEvent};
use tracing::{debug, warn};

impl ViewerSession {
    /// Finish the in-flight gesture and commit an annotation per the active
    /// tool.
    ///
    /// The gesture is consumed up front, so it is cleared on every path out
    /// of this method whether or not a record was created. Drags in any of
    /// the four directions normalize to a non-negative box.
    pub fn handle_pointer_up(&mut self, event: &PointerEvent) {
        profile_scope!("handle_pointer_up");

        let gesture = std::mem::take(&mut self.gesture);
        let Some((start_x, start_y)) = gesture.start_coords() else {
            return;
        };
        let Some(rect) = self.document.surface else {
            return;
        };

        let (end_x, end_y) = CoordinateCapture::surface_local(event, &rect);
        let page = self.document.page_number;

        match self.tools.selected {
            AnnotationTool::Highlight => {
                let id = self.annotations.add(
                    page,
                    (start_x.min(end_x), start_y.min(end_y)),
                    AnnotationKind::Highlight {
                        color: self.tools.highlight_color.clone(),
                        width: (end_x - start_x).abs(),
                        height: HIGHLIGHT_HEIGHT,
                    },
                );
                debug!(%id, page, "committed highlight annotation");
            }
            AnnotationTool::Underline => {
                // The bar sits at the lower of the two touched y coordinates.
                let id = self.annotations.add(
                    page,
                    (start_x.min(end_x), start_y.max(end_y)),
                    AnnotationKind::Underline {
                        color: self.tools.underline_color.clone(),
                        width: (end_x - start_x).abs(),
                    },
                );
                debug!(%id, page, "committed underline annotation");
            }
            AnnotationTool::Comment => {
                let mut text = std::mem::take(&mut self.tools.comment_text);
                if text.is_empty() {
                    text = DEFAULT_COMMENT_TEXT.to_string();
                }
                let id = self
                    .annotations
                    .add(page, (end_x, end_y), AnnotationKind::Comment { text });
                debug!(%id, page, "committed comment annotation");
            }
            AnnotationTool::Signature => {
                let Some(pad) = self.signature_pad.as_ref() else {
                    // No capture pad mounted: silently drop the gesture.
                    debug!("signature commit skipped: no capture pad");
                    return;
                };
                match pad.snapshot() {
                    Ok(image_data) => {
                        let id = self.annotations.add(
                            page,
                            (end_x, end_y),
                            AnnotationKind::Signature { image_data },
                        );
                        debug!(%id, page, "committed signature annotation");
                    }
                    Err(err) => warn!(%err, "signature snapshot failed, no annotation created"),
                }
            }
            AnnotationTool::Select => {}
        }
    }
}
