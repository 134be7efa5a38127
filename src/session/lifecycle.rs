//! Document lifecycle - open, load, display, close.

use crate::constants::FIRST_PAGE;
use crate::document::{
    ContentHandle, DocumentError, DocumentResult, DocumentUpload, PageView, RenderSurface,
    page_render_width,
};
use crate::notifications::Toast;
use crate::session::ViewerSession;
use tracing::{info, warn};

impl ViewerSession {
    /// Accept or reject an incoming file.
    ///
    /// Rejection pushes an error toast and leaves every other piece of state
    /// untouched. Acceptance replaces the whole document session: prior
    /// annotations, gesture, and signature pad are discarded and paging
    /// resets to the first page. Reclaiming whatever backed the previous
    /// handle is the caller's responsibility.
    pub fn open_document(
        &mut self,
        upload: &DocumentUpload,
        handle: ContentHandle,
    ) -> DocumentResult<()> {
        // A new upload dismisses notifications from the previous attempt.
        self.toasts.clear();

        if let Err(err) = upload.validate(&self.settings) {
            warn!(file = %upload.file_name, error = %err, "upload rejected");
            self.toasts.push(Toast::error(err.to_string()));
            return Err(err);
        }

        self.annotations.clear();
        self.gesture.reset();
        self.signature_pad = None;
        self.document.handle = Some(handle);
        self.document.page_number = FIRST_PAGE;
        self.document.page_count = 0;
        self.document.page_view = None;

        info!(file = %upload.file_name, size_bytes = upload.size_bytes, "document accepted");
        Ok(())
    }

    /// Ask the rendering surface to load the current document.
    ///
    /// On success the reported page count is recorded. On failure a toast is
    /// surfaced and the page number and annotations are left untouched.
    pub fn load_document(&mut self, surface: &mut dyn RenderSurface) -> DocumentResult<u32> {
        let Some(handle) = self.document.handle.as_ref() else {
            return Err(DocumentError::NoDocument);
        };

        match surface.load(handle) {
            Ok(page_count) => {
                self.document.page_count = page_count;
                info!(page_count, "document loaded");
                Ok(page_count)
            }
            Err(source) => {
                let err = DocumentError::LoadFailed(source);
                warn!(error = %err, "document load failed");
                self.toasts.push(Toast::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Display the current page at a width derived from the container.
    ///
    /// Records the requested width and the geometry the surface reports
    /// back. A render failure surfaces a toast and preserves prior state.
    pub fn display_page(
        &mut self,
        surface: &mut dyn RenderSurface,
        container_width: f32,
    ) -> DocumentResult<PageView> {
        if self.document.handle.is_none() {
            return Err(DocumentError::NoDocument);
        }

        let width = page_render_width(container_width);
        self.document.render_width = width;

        match surface.render_page(self.document.page_number, width) {
            Ok(view) => {
                self.document.page_view = Some(view);
                Ok(view)
            }
            Err(source) => {
                let err = DocumentError::LoadFailed(source);
                warn!(page = self.document.page_number, error = %err, "page render failed");
                self.toasts.push(Toast::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Discard the document session.
    ///
    /// Drops the handle, all annotations, the gesture, the signature pad,
    /// and paging state. The backing resource (bytes, object URL) is
    /// reclaimed by whoever created the handle.
    pub fn close_document(&mut self) {
        self.document.handle = None;
        self.document.page_number = FIRST_PAGE;
        self.document.page_count = 0;
        self.document.page_view = None;
        self.annotations.clear();
        self.gesture.reset();
        self.signature_pad = None;
    }
}
