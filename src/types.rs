//! Core types for the docmark annotation system.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: annotation records, their typed payloads, and the tool palette.

use serde::{Deserialize, Serialize};

/// A markup record anchored to one page of the loaded document.
///
/// Every annotation has a unique id, the 1-based page it was created on, and
/// a position in the rendering surface's pixel space (top-left origin) at the
/// zoom/width in effect when the gesture committed. Records are immutable
/// after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Unique identifier, generated at creation and never reused
    pub id: String,
    /// 1-based page number this annotation belongs to
    pub page: u32,
    /// Anchor position in surface-local pixels (x, y)
    pub position: (f32, f32),
    /// The typed payload this annotation carries
    pub kind: AnnotationKind,
}

/// The payload of an annotation.
///
/// Determines how the record is projected by the overlay renderer. Every
/// consumption site matches exhaustively, so adding a variant is a
/// compile-time-checked change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnnotationKind {
    /// Translucent rectangle laid over a span of text
    Highlight {
        /// Fill color as hex string (e.g. "#ffff00")
        color: String,
        /// Box width in pixels
        width: f32,
        /// Box height in pixels
        height: f32,
    },
    /// Thin bar drawn under a span of text
    Underline {
        /// Bar color as hex string
        color: String,
        /// Bar width in pixels
        width: f32,
    },
    /// Anchored note box
    Comment {
        /// The note text
        text: String,
    },
    /// Anchored raster stamp captured from the signature pad
    Signature {
        /// Self-describing encoded image payload (data:image/png;base64,...)
        image_data: String,
    },
}

impl Annotation {
    /// Width of the annotation's box, if its variant has one.
    pub fn width(&self) -> Option<f32> {
        match &self.kind {
            AnnotationKind::Highlight { width, .. } => Some(*width),
            AnnotationKind::Underline { width, .. } => Some(*width),
            AnnotationKind::Comment { .. } | AnnotationKind::Signature { .. } => None,
        }
    }

    /// Returns true if this annotation would render as a zero-size primitive.
    ///
    /// Degenerate records are legal; they are kept and simply paint nothing.
    pub fn is_degenerate(&self) -> bool {
        match &self.kind {
            AnnotationKind::Highlight { width, height, .. } => *width <= 0.0 || *height <= 0.0,
            AnnotationKind::Underline { width, .. } => *width <= 0.0,
            AnnotationKind::Comment { .. } | AnnotationKind::Signature { .. } => false,
        }
    }
}

impl AnnotationKind {
    pub fn type_label(&self) -> &'static str {
        match self {
            AnnotationKind::Highlight { .. } => "HIGHLIGHT",
            AnnotationKind::Underline { .. } => "UNDERLINE",
            AnnotationKind::Comment { .. } => "COMMENT",
            AnnotationKind::Signature { .. } => "SIGNATURE",
        }
    }
}

/// Tool identifiers for the annotation palette.
///
/// The selected tool determines what the next completed gesture creates.
/// `Select` creates nothing; pointer interaction is inert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationTool {
    #[default]
    Select,
    Highlight,
    Underline,
    Comment,
    Signature,
}

impl AnnotationTool {
    pub fn label(&self) -> &'static str {
        match self {
            AnnotationTool::Select => "Select",
            AnnotationTool::Highlight => "Highlight",
            AnnotationTool::Underline => "Underline",
            AnnotationTool::Comment => "Comment",
            AnnotationTool::Signature => "Signature",
        }
    }

    pub fn all() -> &'static [AnnotationTool] {
        &[
            AnnotationTool::Select,
            AnnotationTool::Highlight,
            AnnotationTool::Underline,
            AnnotationTool::Comment,
            AnnotationTool::Signature,
        ]
    }

    /// Returns true if this tool commits an annotation on pointer-up.
    pub fn creates_annotations(&self) -> bool {
        !matches!(self, AnnotationTool::Select)
    }
}

/// A pointer event in client (window) coordinates.
///
/// The engine never reads device state directly; the embedder forwards these
/// from whatever windowing layer it uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub client_x: f32,
    pub client_y: f32,
}

impl PointerEvent {
    pub fn new(client_x: f32, client_y: f32) -> Self {
        Self { client_x, client_y }
    }
}

/// Bounding rectangle of the rendering surface in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}
