//! Scroll math for the navigation bar and hero parallax.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Nav bar gains its drop shadow past this many pixels.
pub const SHADOW_THRESHOLD_PX: f64 = 50.0;

/// Hero content moves at this fraction of the scroll distance.
pub const PARALLAX_FACTOR: f64 = 0.4;

/// Document offset to scroll to so `target_top` (viewport-relative) lands
/// just below a nav bar of `nav_height`.
#[must_use]
pub fn anchor_scroll_top(target_top: f64, page_offset: f64, nav_height: f64) -> f64 {
    target_top + page_offset - nav_height
}

#[must_use]
pub fn has_shadow(scroll_y: f64) -> bool {
    scroll_y > SHADOW_THRESHOLD_PX
}

/// `transform` value for the hero content at `scroll_y`.
#[must_use]
pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * PARALLAX_FACTOR)
}

/// True for in-page section links (`#about`), false for `#` and external URLs.
#[must_use]
pub fn is_section_href(href: &str) -> bool {
    href.starts_with('#') && href != "#"
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    /// The user is scrolling down; the nav slides away.
    Down,
    /// The user scrolled back up after scrolling down; the nav returns.
    Up,
}

/// Tracks the `scroll-down` / `scroll-up` state of the nav bar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavScroll {
    pub last_scroll: f64,
    pub direction: Option<NavDirection>,
    pub shadow: bool,
}

impl NavScroll {
    /// Feed the current scroll position.
    pub fn observe(&mut self, current: f64) {
        self.shadow = has_shadow(current);

        if current <= 0.0 {
            // Only the "up" marker is cleared at the top; last position is kept.
            if self.direction == Some(NavDirection::Up) {
                self.direction = None;
            }
            return;
        }

        if current > self.last_scroll && self.direction != Some(NavDirection::Down) {
            self.direction = Some(NavDirection::Down);
        } else if current < self.last_scroll && self.direction == Some(NavDirection::Down) {
            self.direction = Some(NavDirection::Up);
        }
        self.last_scroll = current;
    }

    #[must_use]
    pub fn scrolling_down(&self) -> bool {
        self.direction == Some(NavDirection::Down)
    }

    #[must_use]
    pub fn scrolling_up(&self) -> bool {
        self.direction == Some(NavDirection::Up)
    }
}
