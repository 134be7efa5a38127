//! Pointer down event handling - gesture start.

use crate::input::coords::CoordinateCapture;
use crate::profile_scope;
use crate::session::ViewerSession;
use crate::types::PointerEvent;
use tracing::trace;

impl ViewerSession {
    /// Begin a drawing gesture at the event position.
    ///
    /// Requires a known surface rect; without one the event is ignored.
    /// A pointer down while a gesture is already in flight overwrites the
    /// start point (last pointer down wins).
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) {
        profile_scope!("handle_pointer_down");

        let Some(rect) = self.document.surface else {
            trace!("pointer down ignored: no surface rect");
            return;
        };

        let start = CoordinateCapture::surface_local(event, &rect);
        self.gesture.begin(start);
    }
}
