//! Splash screen shown until the progress bar fills.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per page load. When it finishes it flags `UiState::loading_done`,
//! fades itself out and starts the hero entrance and the reveal observer.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::loading::{GREETING, LoadingProgress};

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let progress = RwSignal::new(LoadingProgress::default());

    #[cfg(feature = "hydrate")]
    {
        use std::time::Duration;

        use crate::util::loading::{FADE_DELAY_MS, TICK_MS};

        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(Duration::from_millis(u64::from(TICK_MS))).await;
                let mut done = false;
                progress.update(|p| done = p.tick());
                if done {
                    break;
                }
            }
            gloo_timers::future::sleep(Duration::from_millis(u64::from(FADE_DELAY_MS))).await;
            ui.update(|state| state.loading_done = true);
            crate::util::loading::run_hero_entrance();
            crate::util::reveal::install();
        });
    }

    let screen_style = move || {
        if ui.with(|state| state.loading_done) {
            "opacity:0;visibility:hidden;"
        } else {
            ""
        }
    };

    view! {
        <div class="loading-screen" style=screen_style>
            <div class="loading-content">
                <div class="hello-text">{GREETING}</div>
                <div class="loading-progress" style=move || format!("width:{};", progress.get().width())></div>
            </div>
        </div>
    }
}
