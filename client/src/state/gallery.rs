//! Reactive side of the gallery modal.
//!
//! ARCHITECTURE
//! ============
//! `gallery::GalleryController` stays the single owner of `ViewState`. It is
//! parked in a `StoredValue` and driven through `GalleryHandle`, which
//! components pull from context. The controller's surface is `SignalSurface`:
//! instead of touching the DOM it writes into `RwSignal<GalleryView>` and
//! `RwSignal<UiState>`, and the modal component renders from those signals.
//!
//! TRADE-OFFS
//! ==========
//! Pre-loads are requested by recording the ticket in `GalleryView::pending`.
//! The modal watches that field, loads the image and reports back through
//! `GalleryHandle::finish_preload`. This keeps the surface free of a
//! back-reference to the controller that owns it.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use gallery::{Catalog, GalleryController, GalleryFrame, GallerySurface, PreloadOutcome, PreloadTicket};
use leptos::prelude::*;

use crate::state::ui::UiState;

/// Everything the modal markup renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryView {
    pub visible: bool,
    pub frame: GalleryFrame,
    /// Source currently in the main `<img>`.
    pub displayed_src: Option<String>,
    /// Pre-load waiting to settle.
    pub pending: Option<PreloadTicket>,
}

impl GalleryView {
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.displayed_src = None;
            self.pending = None;
        }
    }

    pub fn begin_preload(&mut self, ticket: PreloadTicket) {
        self.pending = Some(ticket);
    }

    /// Swap the main image; clears `pending` if it was for the same source.
    pub fn show_image(&mut self, src: &str) {
        if self.pending.as_ref().is_some_and(|ticket| ticket.src == src) {
            self.pending = None;
        }
        self.displayed_src = Some(src.to_owned());
    }

    /// Blank the main image and drop any pending load.
    pub fn clear_image(&mut self) {
        self.displayed_src = None;
        self.pending = None;
    }

    /// True while a newer image than the displayed one is still loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// "n / m" label for the image counter.
    #[must_use]
    pub fn position_label(&self) -> Option<String> {
        self.frame.position.map(|(n, m)| format!("{n} / {m}"))
    }
}

/// `GallerySurface` backed by Leptos signals.
#[derive(Clone, Copy)]
pub struct SignalSurface {
    view: RwSignal<GalleryView>,
    ui: RwSignal<UiState>,
}

impl SignalSurface {
    #[must_use]
    pub fn new(view: RwSignal<GalleryView>, ui: RwSignal<UiState>) -> Self {
        Self { view, ui }
    }
}

impl GallerySurface for SignalSurface {
    fn set_modal_visible(&mut self, visible: bool) {
        self.view.update(|view| view.set_visible(visible));
    }

    fn set_page_scroll_locked(&mut self, locked: bool) {
        self.ui.update(|ui| ui.page_scroll_locked = locked);
    }

    fn set_nav_visible(&mut self, visible: bool) {
        self.ui.update(|ui| ui.nav_visible = visible);
    }

    fn begin_preload(&mut self, ticket: PreloadTicket) {
        self.view.update(|view| view.begin_preload(ticket));
    }

    fn show_image(&mut self, src: &str) {
        self.view.update(|view| view.show_image(src));
    }

    fn clear_image(&mut self) {
        self.view.update(GalleryView::clear_image);
    }

    fn render(&mut self, frame: &GalleryFrame) {
        let frame = frame.clone();
        self.view.update(|view| view.frame = frame);
    }
}

/// Copyable entry point to the gallery controller, provided via context.
#[derive(Clone, Copy)]
pub struct GalleryHandle {
    controller: StoredValue<GalleryController<SignalSurface>>,
    view: RwSignal<GalleryView>,
}

impl GalleryHandle {
    #[must_use]
    pub fn new(catalog: Catalog, ui: RwSignal<UiState>) -> Self {
        let view = RwSignal::new(GalleryView::default());
        let controller = GalleryController::new(catalog, SignalSurface::new(view, ui));
        Self { controller: StoredValue::new(controller), view }
    }

    #[must_use]
    pub fn view(&self) -> RwSignal<GalleryView> {
        self.view
    }

    pub fn open(&self, project_id: &str) {
        self.controller.update_value(|c| c.open(project_id));
    }

    pub fn close(&self) {
        self.controller.update_value(GalleryController::close);
    }

    pub fn select_subcategory(&self, name: &str) {
        self.controller.update_value(|c| c.select_subcategory(name));
    }

    pub fn next(&self) {
        self.controller.update_value(GalleryController::next);
    }

    pub fn previous(&self) {
        self.controller.update_value(GalleryController::previous);
    }

    pub fn jump_to(&self, index: usize) {
        self.controller.update_value(|c| c.jump_to(index));
    }

    /// Returns `true` when the key was consumed by the open modal.
    pub fn handle_key(&self, key: &str) -> bool {
        self.controller.try_update_value(|c| c.handle_key(key)).unwrap_or(false)
    }

    pub fn finish_preload(&self, ticket: &PreloadTicket, outcome: PreloadOutcome) {
        self.controller.update_value(|c| {
            c.finish_preload(ticket, outcome);
        });
    }
}
