//! Render model for the gallery modal.
//!
//! A `GalleryFrame` is everything the host needs to rebuild the modal chrome
//! after a transition: header text, one control per sub-category and one
//! thumbnail per image. The host discards its previous controls and builds
//! new ones from each frame.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::catalog::Project;
use crate::state::ViewState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryFrame {
    pub title: String,
    pub description: Option<String>,
    pub subcategories: Vec<SubcategoryButton>,
    pub thumbnails: Vec<Thumbnail>,
    /// 1-based position and list length, for an "n / m" counter.
    pub position: Option<(usize, usize)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubcategoryButton {
    pub name: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thumbnail {
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub active: bool,
}

impl GalleryFrame {
    /// Build the frame for `project` as seen through `state`.
    #[must_use]
    pub fn build(project: &Project, state: &ViewState) -> Self {
        let subcategories = project
            .subcategory_names()
            .map(|name| SubcategoryButton {
                name: name.to_owned(),
                active: name == state.active_subcategory,
            })
            .collect();

        let thumbnails = state
            .active_images
            .iter()
            .enumerate()
            .map(|(index, src)| Thumbnail {
                index,
                src: src.clone(),
                alt: format!("Thumbnail {}", index + 1),
                active: index == state.active_index,
            })
            .collect();

        let len = state.active_images.len();
        let position = (len > 0).then_some((state.active_index + 1, len));

        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            subcategories,
            thumbnails,
            position,
        }
    }

    #[must_use]
    pub fn active_subcategory(&self) -> Option<&str> {
        self.subcategories
            .iter()
            .find(|button| button.active)
            .map(|button| button.name.as_str())
    }

    #[must_use]
    pub fn active_thumbnail(&self) -> Option<&Thumbnail> {
        self.thumbnails.iter().find(|thumb| thumb.active)
    }
}
