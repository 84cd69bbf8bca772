//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the gallery while reading/writing shared
//! state from Leptos context providers (`RwSignal<UiState>`, `GalleryHandle`).

pub mod counter;
pub mod gallery_modal;
pub mod loading_screen;
pub mod mobile_menu;
pub mod nav_bar;
pub mod project_card;
pub mod theme_toggle;
