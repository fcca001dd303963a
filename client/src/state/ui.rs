//! Local UI chrome state (header, mobile menu, scroll progress).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the view router so the page
//! chrome can react to scrolling without touching routing state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Scroll offset past which the header switches to its condensed style.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// UI state for the fixed header and the reading-progress bar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub header_scrolled: bool,
    pub mobile_menu_open: bool,
    /// Fraction of the document scrolled, in `[0, 1]`.
    pub scroll_progress: f64,
}

impl UiState {
    /// Update scroll-derived fields from the window metrics.
    pub fn on_scroll(&mut self, scroll_y: f64, scroll_height: f64, viewport_height: f64) {
        self.header_scrolled = scroll_y > HEADER_SCROLL_THRESHOLD_PX;
        self.scroll_progress = scroll_progress(scroll_y, scroll_height, viewport_height);
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Navigating from the mobile menu always closes it.
    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}

/// Scrolled fraction of a document. A page that does not scroll reports 0.
#[must_use]
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}
