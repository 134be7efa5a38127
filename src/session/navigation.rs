//! Page navigation.

use crate::constants::FIRST_PAGE;
use crate::session::ViewerSession;

impl ViewerSession {
    /// Go to the previous page, clamped to the first page.
    pub fn go_to_previous_page(&mut self) {
        self.document.page_number = self.document.page_number.saturating_sub(1).max(FIRST_PAGE);
    }

    /// Go to the next page, clamped to the last known page.
    pub fn go_to_next_page(&mut self) {
        if self.document.page_number < self.document.page_count {
            self.document.page_number += 1;
        }
    }
}
