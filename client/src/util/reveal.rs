//! Scroll-triggered reveal animations.
//!
//! Sections and cards start with the `hidden` class and gain `show` while
//! they intersect the viewport; the stylesheet owns the actual transition.
//! Cards inside a grid get staggered delays so a row fades in left to right.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::util::timing::{format_seconds, stagger_ms};

pub const THRESHOLD: f64 = 0.1;
pub const ROOT_MARGIN: &str = "-50px";

/// Elements that fade in on scroll.
pub const REVEAL_TARGETS: &[&str] = &[
    ".project-card",
    ".service-card",
    ".about-content",
    ".experience",
    ".hero-content h1",
    ".hero-content h2",
    ".hero-content h3",
    ".hero-description",
    ".social-links",
    ".work h2",
    ".services h2",
    ".about h2",
    ".contact h2",
];

/// Grid containers whose cards are staggered.
pub const STAGGERED_GRIDS: &[(&str, &str)] = &[(".projects-grid", ".project-card"), (".services-grid", ".service-card")];

const GRID_STEP_MS: u32 = 100;

/// Transition delay for the card at `index` within its grid.
#[must_use]
pub fn grid_stagger_delay(index: usize) -> String {
    format_seconds(stagger_ms(0, GRID_STEP_MS, index))
}

/// Comma-joined selector covering every reveal target.
#[must_use]
pub fn target_selector() -> String {
    REVEAL_TARGETS.join(", ")
}

/// Hide every reveal target and start observing it.
#[cfg(feature = "hydrate")]
pub fn install() {
    use crate::util::{dom, observer};

    for (grid, card) in STAGGERED_GRIDS {
        for parent in dom::query_all(grid) {
            for (index, item) in dom::query_within(&parent, card).iter().enumerate() {
                dom::set_style(item, "transition-delay", &grid_stagger_delay(index));
            }
        }
    }

    let targets = dom::query_all(&target_selector());
    if targets.is_empty() {
        return;
    }
    for target in &targets {
        let _ = target.class_list().add_1("hidden");
    }

    let installed = observer::observe(&targets, THRESHOLD, Some(ROOT_MARGIN), |entry, _| {
        let classes = entry.target().class_list();
        if entry.is_intersecting() {
            let _ = classes.add_1("show");
        } else {
            let _ = classes.remove_1("show");
        }
    });
    if installed.is_none() {
        // Without an observer nothing would ever un-hide them.
        for target in &targets {
            let _ = target.class_list().remove_1("hidden");
        }
    }
}
