//! Mobile navigation panel state.
//!
//! Panel, overlay, body lock and button icon are all projections of one
//! `open` flag, so they can never disagree.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Class added to `<body>` while the panel is open.
pub const MENU_OPEN_BODY_CLASS: &str = "menu-open";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Overlay clicks and link clicks only ever close the panel.
    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn panel_class(self) -> &'static str {
        if self.open { "mobile-nav show" } else { "mobile-nav" }
    }

    #[must_use]
    pub fn overlay_class(self) -> &'static str {
        if self.open { "menu-overlay show" } else { "menu-overlay" }
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        if self.open { "fas fa-times" } else { "fas fa-bars" }
    }
}
