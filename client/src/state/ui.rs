//! Page chrome state (theme, nav visibility, scroll locks, mobile menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the gallery state so the
//! modal, the nav bar and the menu can each react to the same flags without
//! reaching into one another.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::menu::MenuState;
use crate::util::scroll::NavScroll;
use crate::util::theme::Theme;

#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    /// Primary nav bar shown; hidden while the gallery is open.
    pub nav_visible: bool,
    /// Page behind an overlay must not scroll.
    pub page_scroll_locked: bool,
    pub nav_scroll: NavScroll,
    pub menu: MenuState,
    /// Splash screen finished and faded out.
    pub loading_done: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            nav_visible: true,
            page_scroll_locked: false,
            nav_scroll: NavScroll::default(),
            menu: MenuState::default(),
            loading_done: false,
        }
    }
}

impl UiState {
    /// Class list for the `<nav>` element.
    #[must_use]
    pub fn nav_classes(&self) -> String {
        let mut classes = vec!["navbar"];
        if self.nav_scroll.scrolling_down() {
            classes.push("scroll-down");
        }
        if self.nav_scroll.scrolling_up() {
            classes.push("scroll-up");
        }
        classes.join(" ")
    }
}
