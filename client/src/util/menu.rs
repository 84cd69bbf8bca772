//! Mobile menu open/close bookkeeping.
//!
//! Opening the menu pins `<body>` at the current scroll offset so the page
//! does not move underneath the overlay; closing restores that offset.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::util::timing::{format_seconds, stagger_ms};

/// Delay between a link click and the scroll, matching the close transition.
pub const CLOSE_SCROLL_DELAY_MS: u32 = 300;

const LINK_BASE_DELAY_MS: u32 = 200;
const LINK_STEP_DELAY_MS: u32 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuState {
    pub open: bool,
    pub saved_scroll: f64,
}

/// What the page must do after a toggle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuTransition {
    /// Pin the body at `-offset` and stagger the links in.
    Opened { offset: f64 },
    /// Unpin the body and scroll back to `offset`.
    Closed { offset: f64 },
}

impl MenuState {
    /// Flip open/closed. `page_offset` is the current scroll position, only
    /// read when opening.
    pub fn toggle(&mut self, page_offset: f64) -> MenuTransition {
        self.open = !self.open;
        if self.open {
            self.saved_scroll = page_offset;
            MenuTransition::Opened { offset: page_offset }
        } else {
            MenuTransition::Closed { offset: self.saved_scroll }
        }
    }
}

/// A section link only closes the menu when its anchor exists on the page.
#[must_use]
pub fn link_closes_menu(href: &str, target_exists: bool) -> bool {
    href.starts_with('#') && target_exists
}

/// CSS `transition-delay` for the menu link at `index` while opening.
#[must_use]
pub fn link_delay(index: usize) -> String {
    format_seconds(stagger_ms(LINK_BASE_DELAY_MS, LINK_STEP_DELAY_MS, index))
}

/// `top` value that pins `<body>` at `offset`.
#[must_use]
pub fn body_top(offset: f64) -> String {
    format!("-{offset}px")
}
