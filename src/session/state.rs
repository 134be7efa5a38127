//! Session state - the ViewerSession struct definition and sub-structs.
//!
//! Tool parameters, gesture state, and the annotation collection are all
//! explicit fields here rather than ambient globals, so the drawing state
//! machine is unit-testable without a UI harness. All mutation happens
//! synchronously inside event handlers on one logical thread.

use crate::annotations::AnnotationStore;
use crate::constants::{FIRST_PAGE, SIGNATURE_PAD_FALLBACK_SIZE};
use crate::document::{ContentHandle, PageView};
use crate::input::GestureState;
use crate::notifications::ToastManager;
use crate::settings::Settings;
use crate::signature::SignaturePad;
use crate::types::{AnnotationTool, SurfaceRect};

/// Loaded-document state - content handle, paging, and display geometry.
pub struct DocumentState {
    /// Handle to the loaded document's content (None until a file is
    /// accepted)
    pub handle: Option<ContentHandle>,
    /// Currently displayed page, 1-based
    pub page_number: u32,
    /// Total pages reported by the rendering surface (0 until loaded)
    pub page_count: u32,
    /// Width last requested from the rendering surface
    pub render_width: f32,
    /// Displayed geometry of the current page, as reported back
    pub page_view: Option<PageView>,
    /// Bounding rect of the rendering surface in client coordinates
    pub surface: Option<SurfaceRect>,
}

impl DocumentState {
    fn new() -> Self {
        Self {
            handle: None,
            page_number: FIRST_PAGE,
            page_count: 0,
            render_width: 0.0,
            page_view: None,
            surface: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.handle.is_some() && self.page_count > 0
    }
}

/// Tool state - selected tool and per-tool parameters.
///
/// Parameter changes apply only to annotations created afterwards; committed
/// records keep the values they were created with.
pub struct ToolState {
    /// Currently selected tool
    pub selected: AnnotationTool,
    /// Color for future highlight annotations, hex string
    pub highlight_color: String,
    /// Color for future underline annotations, hex string
    pub underline_color: String,
    /// Pending comment text, consumed by the next comment commit
    pub comment_text: String,
}

impl ToolState {
    fn new(settings: &Settings) -> Self {
        Self {
            selected: AnnotationTool::default(),
            highlight_color: settings.highlight_color.clone(),
            underline_color: settings.underline_color.clone(),
            comment_text: String::new(),
        }
    }
}

/// One annotation session over one document.
///
/// Owns the annotation model, the drawing gesture, tool parameters, the
/// optional signature pad, and the notification queue.
pub struct ViewerSession {
    /// Document and display state
    pub document: DocumentState,
    /// Tool selection and parameters
    pub tools: ToolState,
    /// The annotation collection
    pub annotations: AnnotationStore,
    /// In-progress drawing gesture
    pub gesture: GestureState,
    /// Signature capture pad, mounted only while the signature tool is
    /// active
    pub signature_pad: Option<SignaturePad>,
    /// Transient user notifications
    pub toasts: ToastManager,
    /// Engine settings
    pub settings: Settings,
}

impl ViewerSession {
    /// Session with default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Session with explicit settings (e.g. `Settings::load()`).
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            document: DocumentState::new(),
            tools: ToolState::new(&settings),
            annotations: AnnotationStore::new(),
            gesture: GestureState::default(),
            signature_pad: None,
            toasts: ToastManager::new(),
            settings,
        }
    }

    /// Switch the active tool.
    ///
    /// Entering the signature tool mounts a fresh capture pad sized to the
    /// surface; leaving it drops the pad and its accumulated strokes.
    pub fn select_tool(&mut self, tool: AnnotationTool) {
        if self.tools.selected == tool {
            return;
        }

        if tool == AnnotationTool::Signature {
            let (w, h) = match self.document.surface {
                Some(rect) => (rect.width as u32, rect.height as u32),
                None => SIGNATURE_PAD_FALLBACK_SIZE,
            };
            self.signature_pad = Some(SignaturePad::new(w, h));
        } else {
            self.signature_pad = None;
        }

        self.tools.selected = tool;
    }

    /// Color for highlights committed after this call.
    pub fn set_highlight_color(&mut self, color: impl Into<String>) {
        self.tools.highlight_color = color.into();
    }

    /// Color for underlines committed after this call.
    pub fn set_underline_color(&mut self, color: impl Into<String>) {
        self.tools.underline_color = color.into();
    }

    /// Text the next comment commit will carry.
    pub fn set_comment_text(&mut self, text: impl Into<String>) {
        self.tools.comment_text = text.into();
    }

    /// Record the rendering surface's bounding rect in client coordinates.
    pub fn set_surface(&mut self, rect: SurfaceRect) {
        self.document.surface = Some(rect);
    }

    /// Forget the rendering surface (e.g. it was unmounted).
    pub fn clear_surface(&mut self) {
        self.document.surface = None;
    }
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new()
    }
}
