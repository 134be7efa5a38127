//! The viewer session - the single owner of all mutable engine state.
//!
//! This module is organized into several submodules:
//! - `state` - The ViewerSession struct definition and sub-structs
//! - `lifecycle` - Document open/load/display/close
//! - `navigation` - Page navigation with clamping
//!
//! Pointer event handling lives in `crate::input` as further
//! `impl ViewerSession` blocks.

mod lifecycle;
mod navigation;
mod state;

pub use state::{DocumentState, ToolState, ViewerSession};
