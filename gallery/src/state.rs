//! Gallery view state: which project, sub-category and image are showing.
//!
//! DESIGN
//! ======
//! `ViewState` is plain data. Only `GalleryController` writes it, which keeps
//! the index invariant (`active_index < active_images.len()` while open with a
//! non-empty list) in one place.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::catalog::{ALL_SUBCATEGORY, ProjectId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub active_project: Option<ProjectId>,
    pub active_subcategory: String,
    pub active_index: usize,
    /// Copy of the active sub-category's images, derived from the catalog.
    pub active_images: Vec<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::closed()
    }
}

impl ViewState {
    /// State of a closed modal.
    #[must_use]
    pub fn closed() -> Self {
        Self {
            active_project: None,
            active_subcategory: ALL_SUBCATEGORY.to_owned(),
            active_index: 0,
            active_images: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active_project.is_some()
    }

    /// Image at the active index, if any.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.active_images.get(self.active_index).map(String::as_str)
    }

    /// Index after `active_index`, wrapping to 0. `None` for an empty list.
    #[must_use]
    pub fn next_index(&self) -> Option<usize> {
        let len = self.active_images.len();
        (len > 0).then(|| (self.active_index + 1) % len)
    }

    /// Index before `active_index`, wrapping to the last image.
    #[must_use]
    pub fn previous_index(&self) -> Option<usize> {
        let len = self.active_images.len();
        (len > 0).then(|| (self.active_index + len - 1) % len)
    }
}
