//! Hamburger button and the section link list it reveals on small screens.
//!
//! DESIGN
//! ======
//! `MenuState` decides what a toggle means; this module applies the result to
//! `<body>` (pin at the saved offset, or unpin and scroll back). Link delays
//! are rendered from the same signal so they reset with the menu.
//!
//! TRADE-OFFS
//! ==========
//! Link clicks wait for the close transition before scrolling. A second click
//! inside that window queues a second scroll; the later one wins.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::menu::{self, MenuTransition};

/// Section links shown in the nav bar and the mobile overlay.
pub const SECTION_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#work", "Work"),
    ("#services", "Services"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

/// Flip the menu and apply the body pinning for the new state.
fn toggle_menu(ui: RwSignal<UiState>) {
    #[cfg(feature = "hydrate")]
    let offset = crate::util::dom::scroll_y();
    #[cfg(not(feature = "hydrate"))]
    let offset = 0.0;

    let mut transition = None;
    ui.update(|state| transition = Some(state.menu.toggle(offset)));
    if let Some(transition) = transition {
        apply_transition(transition);
    }
}

fn close_menu(ui: RwSignal<UiState>) {
    if ui.with_untracked(|state| state.menu.open) {
        toggle_menu(ui);
    }
}

#[cfg(feature = "hydrate")]
fn apply_transition(transition: MenuTransition) {
    use crate::util::dom;

    let Some(body) = dom::body() else {
        return;
    };
    match transition {
        MenuTransition::Opened { offset } => {
            let _ = body.class_list().add_1("menu-open");
            dom::set_style(&body, "top", &menu::body_top(offset));
        }
        MenuTransition::Closed { offset } => {
            let _ = body.class_list().remove_1("menu-open");
            dom::set_style(&body, "top", "");
            dom::jump_scroll_to(offset);
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn apply_transition(_transition: MenuTransition) {}

/// Hamburger toggle. Also closes the menu on Escape or a click outside the nav.
#[component]
pub fn MenuButton() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = move || ui.with(|state| state.menu.open);

    #[cfg(feature = "hydrate")]
    {
        let keys = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                close_menu(ui);
            }
        });
        let clicks = window_event_listener(leptos::ev::click, move |ev| {
            if !ui.with_untracked(|state| state.menu.open) {
                return;
            }
            let inside_nav = crate::util::dom::query("nav").is_some_and(|nav| {
                ev.target()
                    .and_then(|target| wasm_bindgen::JsCast::dyn_into::<web_sys::Node>(target).ok())
                    .is_some_and(|node| nav.contains(Some(&node)))
            });
            if !inside_nav {
                close_menu(ui);
            }
        });
        on_cleanup(move || {
            keys.remove();
            clicks.remove();
        });
    }

    view! {
        <button
            class="hamburger"
            class:active=open
            aria-label="Menu"
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                toggle_menu(ui);
            }
        >
            <span class="bar"></span>
        </button>
    }
}

/// Section link list; becomes the overlay menu on small screens.
#[component]
pub fn MenuLinks() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = move || ui.with(|state| state.menu.open);

    let on_link = move |ev: leptos::ev::MouseEvent, href: &'static str| {
        if !href.starts_with('#') {
            return;
        }
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        let target_exists = crate::util::dom::query(href).is_some();
        #[cfg(not(feature = "hydrate"))]
        let target_exists = true;
        if !menu::link_closes_menu(href, target_exists) {
            return;
        }
        close_menu(ui);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let delay = u64::from(menu::CLOSE_SCROLL_DELAY_MS);
            gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
            crate::util::dom::scroll_to_section(href);
        });
    };

    view! {
        <ul class="nav-links" class:active=open>
            {SECTION_LINKS
                .iter()
                .enumerate()
                .map(|(index, &(href, label))| {
                    let delay = move || {
                        let value = if open() { menu::link_delay(index) } else { "0s".to_owned() };
                        format!("transition-delay:{value};")
                    };
                    view! {
                        <li style=delay>
                            <a href=href on:click=move |ev| on_link(ev, href)>
                                {label}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
