//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Document Acceptance
// ============================================================================

/// MIME type accepted by the upload validator
pub const ACCEPTED_MIME_TYPE: &str = "application/pdf";

/// Maximum document size in MB (overridable through Settings)
pub const MAX_DOCUMENT_SIZE_MB: u64 = 10;

// ============================================================================
// Annotation Defaults
// ============================================================================

/// Default highlight color (yellow)
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#ffff00";

/// Default underline color (blue)
pub const DEFAULT_UNDERLINE_COLOR: &str = "#0000ff";

/// Fixed height of a committed highlight box in pixels
pub const HIGHLIGHT_HEIGHT: f32 = 20.0;

/// Opacity applied to highlight rectangles when projected
pub const HIGHLIGHT_OPACITY: f32 = 0.5;

/// Height of the rendered underline bar in pixels
pub const UNDERLINE_THICKNESS: f32 = 3.0;

/// Text used when a comment is committed with an empty pending string
pub const DEFAULT_COMMENT_TEXT: &str = "New Comment";

// ============================================================================
// Signature Capture
// ============================================================================

/// Stroke width of the signature pen in pixels
pub const SIGNATURE_STROKE_WIDTH: f32 = 2.0;

/// Fallback raster size when no surface rect is known at pad creation
pub const SIGNATURE_PAD_FALLBACK_SIZE: (u32, u32) = (800, 600);

/// Maximum displayed width of a signature stamp in pixels
pub const SIGNATURE_MAX_WIDTH: f32 = 200.0;

/// Maximum displayed height of a signature stamp in pixels
pub const SIGNATURE_MAX_HEIGHT: f32 = 100.0;

// ============================================================================
// Responsive Layout
// ============================================================================

/// Container width above which the page is rendered at half width
pub const HALF_WIDTH_MIN: f32 = 600.0;

/// Container width at and above which the page is rendered at full width again
pub const HALF_WIDTH_MAX: f32 = 1000.0;

// ============================================================================
// Page Navigation
// ============================================================================

/// First page number (pages are 1-based)
pub const FIRST_PAGE: u32 = 1;
