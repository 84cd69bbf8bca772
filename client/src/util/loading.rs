//! Splash screen progress and the hero entrance that follows it.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use crate::util::timing::stagger_ms;

/// Interval between progress steps.
pub const TICK_MS: u32 = 20;

/// Pause at 100% before the splash fades out.
pub const FADE_DELAY_MS: u32 = 500;

const HERO_BASE_DELAY_MS: u32 = 300;
const HERO_STEP_DELAY_MS: u32 = 200;

/// Greeting shown above the progress bar.
pub const GREETING: &str = "Hello!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingProgress {
    percent: u32,
}

impl LoadingProgress {
    #[must_use]
    pub fn percent(self) -> u32 {
        self.percent
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.percent >= 100
    }

    /// Advance one step. Returns `true` once the bar is full.
    pub fn tick(&mut self) -> bool {
        if self.percent < 100 {
            self.percent += 1;
        }
        self.is_complete()
    }

    /// CSS width of the progress bar.
    #[must_use]
    pub fn width(self) -> String {
        format!("{}%", self.percent)
    }
}

/// Delay before the hero child at `index` fades in.
#[must_use]
pub fn hero_delay_ms(index: usize) -> u32 {
    stagger_ms(HERO_BASE_DELAY_MS, HERO_STEP_DELAY_MS, index)
}

/// Fade the hero children in one after another.
#[cfg(feature = "hydrate")]
pub fn run_hero_entrance() {
    use std::time::Duration;

    let items = crate::util::dom::query_all_html(".hero-content > *");
    for (index, item) in items.into_iter().enumerate() {
        crate::util::dom::set_style(&item, "opacity", "0");
        let delay = u64::from(hero_delay_ms(index));
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(Duration::from_millis(delay)).await;
            crate::util::dom::set_style(&item, "opacity", "1");
            let _ = item.class_list().add_1("show");
        });
    }
}
