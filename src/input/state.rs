//! Gesture state machine - explicit state for the in-progress drawing gesture.
//!
//! A single enum tracks whether a gesture is in flight, replacing the
//! `active: bool` + `start_coords: Option` pair with a state where the start
//! point exists exactly when a drag is active.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Dragging   (pointer down with a surface rect present)
//! Dragging -> Dragging   (pointer move - no model mutation)
//! Dragging -> Idle       (pointer up - commits per tool, always resets)
//! ```
//!
//! A pointer down while already dragging overwrites the start point: the
//! prior gesture is abandoned and the last pointer down wins.

/// The ephemeral drawing gesture.
///
/// Created on pointer down, consumed and cleared on pointer up regardless of
/// whether a commit happened.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    /// No gesture in flight
    #[default]
    Idle,
    /// Pointer is down; `start` is the surface-local press position
    Dragging { start: (f32, f32) },
}

impl GestureState {
    /// Returns true if no gesture is in flight.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a gesture is in flight.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The gesture start position, if dragging.
    pub fn start_coords(&self) -> Option<(f32, f32)> {
        match self {
            Self::Dragging { start } => Some(*start),
            Self::Idle => None,
        }
    }

    /// Enter the dragging state. Overwrites any prior start point.
    pub fn begin(&mut self, start: (f32, f32)) {
        *self = Self::Dragging { start };
    }

    /// Reset to Idle.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
