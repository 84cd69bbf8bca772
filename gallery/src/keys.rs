//! Keyboard bindings for the open gallery.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryKey {
    Previous,
    Next,
    Close,
}

impl GalleryKey {
    /// Map a DOM `KeyboardEvent.key` value to a gallery action.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}
