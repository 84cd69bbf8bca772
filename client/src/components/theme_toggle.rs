//! Light/dark theme button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let next = theme::toggle(ui.with_untracked(|state| state.theme));
        ui.update(|state| state.theme = next);
    };

    view! {
        <button class="theme-toggle" aria-label="Toggle theme" on:click=on_click>
            {move || ui.with(|state| state.theme.toggle_icon())}
        </button>
    }
}
