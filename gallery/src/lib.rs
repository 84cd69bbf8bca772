//! Project gallery state machine for the portfolio site.
//!
//! This crate holds everything the gallery modal needs that does not touch the
//! DOM: the static project catalog, the mutable view state, the controller that
//! moves between states, and the render model the host turns into markup. The
//! host (the `client` crate) implements [`surface::GallerySurface`] and
//! forwards clicks, key presses and image load completions to the controller.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Projects, sub-categories and the embedded catalog document |
//! | [`state`] | `ViewState`: active project, sub-category and image index |
//! | [`controller`] | `GalleryController`, the only writer of `ViewState` |
//! | [`render`] | `GalleryFrame` built from catalog + view state |
//! | [`preload`] | Sequenced pre-load tickets for stale-completion filtering |
//! | [`keys`] | Keyboard bindings while the modal is open |
//! | [`surface`] | Trait for the UI collaborators the controller drives |

pub mod catalog;
pub mod controller;
pub mod keys;
pub mod preload;
pub mod render;
pub mod state;
pub mod surface;

pub use catalog::{ALL_SUBCATEGORY, Catalog, CatalogError, Project, ProjectId};
pub use controller::GalleryController;
pub use keys::GalleryKey;
pub use preload::{PreloadOutcome, PreloadTicket};
pub use render::{GalleryFrame, SubcategoryButton, Thumbnail};
pub use state::ViewState;
pub use surface::GallerySurface;
