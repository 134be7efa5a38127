//! Coordinate conversion for pointer interactions.
//!
//! This module provides the single conversion from client (window)
//! coordinates to surface-local coordinates, eliminating duplicated
//! formulas across input handling code.

use crate::types::{PointerEvent, SurfaceRect};

pub struct CoordinateCapture;

impl CoordinateCapture {
    /// Convert a pointer event to surface-local coordinates.
    ///
    /// Pure function with no failure mode; callers are responsible for
    /// checking that a surface rect exists before invoking.
    #[inline]
    pub fn surface_local(event: &PointerEvent, rect: &SurfaceRect) -> (f32, f32) {
        (event.client_x - rect.left, event.client_y - rect.top)
    }
}
