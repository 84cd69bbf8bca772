//! Shared reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `RwSignal<UiState>` and one `GalleryHandle` and provides
//! both; components read them with `expect_context`.

pub mod gallery;
pub mod ui;
