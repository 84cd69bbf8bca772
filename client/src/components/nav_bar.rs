//! Fixed top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bar reacts to page scroll (drop shadow, hide on scroll-down, hero
//! parallax) and disappears while the gallery modal is open. Section links
//! scroll smoothly and leave room for the bar's own height.

use leptos::prelude::*;

use crate::components::mobile_menu::{MenuButton, MenuLinks};
use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::UiState;

const NAV_SHADOW: &str = "0 2px 5px rgba(0,0,0,0.1)";

/// Inline style for the `<nav>`: hidden under the gallery, shadowed once scrolled.
fn nav_style(state: &UiState) -> String {
    let mut style = String::new();
    if !state.nav_visible {
        style.push_str("display:none;");
    }
    let shadow = if state.nav_scroll.shadow { NAV_SHADOW } else { "none" };
    style.push_str(&format!("box-shadow:{shadow};"));
    style
}

/// Click handler for `<a href="#section">` links outside the mobile menu.
pub fn on_section_link(ev: leptos::ev::MouseEvent, href: &str) {
    if !crate::util::scroll::is_section_href(href) {
        return;
    }
    ev.prevent_default();
    #[cfg(feature = "hydrate")]
    {
        crate::util::dom::scroll_to_section(href);
    }
}

/// Top navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = crate::util::dom::scroll_y();
            ui.update(|state| state.nav_scroll.observe(y));
            if let Some(hero) = crate::util::dom::query_all_html(".hero-content").first() {
                crate::util::dom::set_style(hero, "transform", &crate::util::scroll::parallax_transform(y));
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <nav class=move || ui.with(UiState::nav_classes) style=move || ui.with(nav_style)>
            <div class="nav-container">
                <a href="#home" class="logo" on:click=move |ev| on_section_link(ev, "#home")>
                    "Portfolio"
                </a>
                <MenuLinks/>
                <ThemeToggle/>
                <MenuButton/>
            </div>
        </nav>
    }
}
