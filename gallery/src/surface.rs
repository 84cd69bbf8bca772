//! UI collaborators driven by the gallery controller.
//!
//! The browser host implements this with signals and DOM calls; tests use a
//! recording implementation. Methods are fire-and-forget: the controller never
//! waits on the surface, and pre-load completions come back through
//! `GalleryController::finish_preload`.

use crate::preload::PreloadTicket;
use crate::render::GalleryFrame;

pub trait GallerySurface {
    /// Show or hide the modal container.
    fn set_modal_visible(&mut self, visible: bool);

    /// Lock or unlock scrolling of the page behind the modal.
    fn set_page_scroll_locked(&mut self, locked: bool);

    /// Show or hide the primary site navigation bar.
    fn set_nav_visible(&mut self, visible: bool);

    /// Start fetching `ticket.src`. Report the result through
    /// `GalleryController::finish_preload` with the same ticket.
    fn begin_preload(&mut self, ticket: PreloadTicket);

    /// Swap the main image to `src`.
    fn show_image(&mut self, src: &str);

    /// Blank the main image and forget any pending pre-load. Used when the
    /// active list is empty.
    fn clear_image(&mut self);

    /// Replace header text, sub-category controls and thumbnails.
    fn render(&mut self, frame: &GalleryFrame);
}
