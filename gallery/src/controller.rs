//! Gallery controller: open/close lifecycle and image navigation.
//!
//! ARCHITECTURE
//! ============
//! The controller owns the catalog, the single `ViewState` and a handle to the
//! UI surface. Every successful transition ends in `render`, which asks the
//! surface to pre-load the active image and to rebuild the modal chrome from a
//! fresh `GalleryFrame`. Unknown ids and out-of-range requests are dropped
//! without touching state.
//!
//! TRADE-OFFS
//! ==========
//! Pre-loads are never cancelled. A completion that arrives after a newer
//! navigation is recognised by its ticket and ignored instead.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::catalog::{ALL_SUBCATEGORY, Catalog};
use crate::keys::GalleryKey;
use crate::preload::{PreloadOutcome, PreloadSequencer, PreloadTicket};
use crate::render::GalleryFrame;
use crate::state::ViewState;
use crate::surface::GallerySurface;

pub struct GalleryController<S: GallerySurface> {
    catalog: Catalog,
    surface: S,
    state: ViewState,
    preload: PreloadSequencer,
}

impl<S: GallerySurface> GalleryController<S> {
    #[must_use]
    pub fn new(catalog: Catalog, surface: S) -> Self {
        Self { catalog, surface, state: ViewState::closed(), preload: PreloadSequencer::new() }
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    // --- Lifecycle ---

    /// Open `project_id` on its "All" sub-category.
    pub fn open(&mut self, project_id: &str) {
        let Some(project) = self.catalog.project(project_id) else {
            log::debug!("gallery: ignoring unknown project '{project_id}'");
            return;
        };
        let images = project
            .subcategory(ALL_SUBCATEGORY)
            .map(<[String]>::to_vec)
            .unwrap_or_default();

        self.state = ViewState {
            active_project: Some(project_id.to_owned()),
            active_subcategory: ALL_SUBCATEGORY.to_owned(),
            active_index: 0,
            active_images: images,
        };

        self.surface.set_modal_visible(true);
        self.surface.set_page_scroll_locked(true);
        self.surface.set_nav_visible(false);
        self.render();
    }

    /// Hide the modal and reset to the closed state.
    pub fn close(&mut self) {
        if !self.state.is_open() {
            return;
        }
        self.surface.set_modal_visible(false);
        self.surface.set_page_scroll_locked(false);
        self.surface.set_nav_visible(true);
        self.state = ViewState::closed();
        self.preload.invalidate();
    }

    // --- Navigation ---

    /// Switch to sub-category `name` and rewind to its first image.
    pub fn select_subcategory(&mut self, name: &str) {
        if !self.state.is_open() || self.state.active_subcategory == name {
            return;
        }
        let Some(images) = self
            .state
            .active_project
            .as_deref()
            .and_then(|id| self.catalog.project(id))
            .and_then(|project| project.subcategory(name))
        else {
            log::debug!("gallery: ignoring unknown sub-category '{name}'");
            return;
        };

        self.state.active_images = images.to_vec();
        self.state.active_subcategory = name.to_owned();
        self.state.active_index = 0;
        self.render();
    }

    pub fn next(&mut self) {
        if !self.state.is_open() {
            return;
        }
        if let Some(index) = self.state.next_index() {
            self.state.active_index = index;
            self.render();
        }
    }

    pub fn previous(&mut self) {
        if !self.state.is_open() {
            return;
        }
        if let Some(index) = self.state.previous_index() {
            self.state.active_index = index;
            self.render();
        }
    }

    /// Show the image at `index` of the active list (thumbnail click).
    pub fn jump_to(&mut self, index: usize) {
        if !self.state.is_open()
            || index == self.state.active_index
            || index >= self.state.active_images.len()
        {
            return;
        }
        self.state.active_index = index;
        self.render();
    }

    /// Apply a key binding. Returns `true` when the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.state.is_open() {
            return false;
        }
        match GalleryKey::from_key(key) {
            Some(GalleryKey::Previous) => self.previous(),
            Some(GalleryKey::Next) => self.next(),
            Some(GalleryKey::Close) => self.close(),
            None => return false,
        }
        true
    }

    // --- Pre-load completion ---

    /// Swap the visible image if `ticket` is still the latest request.
    ///
    /// Failed loads still swap so the platform's broken-image indicator shows.
    /// Returns whether the surface was updated.
    pub fn finish_preload(&mut self, ticket: &PreloadTicket, outcome: PreloadOutcome) -> bool {
        if !self.state.is_open() || !self.preload.is_current(ticket) {
            log::debug!("gallery: dropping stale pre-load #{} for {}", ticket.seq, ticket.src);
            return false;
        }
        if outcome == PreloadOutcome::Failed {
            log::debug!("gallery: pre-load failed for {}", ticket.src);
        }
        self.surface.show_image(&ticket.src);
        true
    }

    fn render(&mut self) {
        let Some(project) = self
            .state
            .active_project
            .as_deref()
            .and_then(|id| self.catalog.project(id))
        else {
            return;
        };

        if let Some(src) = self.state.current_image() {
            let ticket = self.preload.issue(src);
            self.surface.begin_preload(ticket);
        } else {
            // Nothing to show; a load still in flight must not land here.
            self.preload.invalidate();
            self.surface.clear_image();
        }

        let frame = GalleryFrame::build(project, &self.state);
        self.surface.render(&frame);
    }
}
