use super::*;

fn open_with(images: &[&str], index: usize) -> ViewState {
    ViewState {
        active_project: Some("p".to_owned()),
        active_subcategory: ALL_SUBCATEGORY.to_owned(),
        active_index: index,
        active_images: images.iter().map(|s| (*s).to_owned()).collect(),
    }
}

#[test]
fn default_is_closed() {
    let state = ViewState::default();
    assert!(!state.is_open());
    assert_eq!(state.active_subcategory, "All");
    assert_eq!(state.active_index, 0);
    assert!(state.active_images.is_empty());
    assert_eq!(state, ViewState::closed());
}

#[test]
fn current_image_follows_index() {
    let state = open_with(&["a", "b", "c"], 1);
    assert_eq!(state.current_image(), Some("b"));
}

#[test]
fn current_image_is_none_for_empty_list() {
    let state = open_with(&[], 0);
    assert_eq!(state.current_image(), None);
}

#[test]
fn next_index_wraps_at_end() {
    assert_eq!(open_with(&["a", "b", "c"], 0).next_index(), Some(1));
    assert_eq!(open_with(&["a", "b", "c"], 2).next_index(), Some(0));
}

#[test]
fn previous_index_wraps_at_start() {
    assert_eq!(open_with(&["a", "b", "c"], 0).previous_index(), Some(2));
    assert_eq!(open_with(&["a", "b", "c"], 2).previous_index(), Some(1));
}

#[test]
fn single_image_wraps_to_itself() {
    let state = open_with(&["only"], 0);
    assert_eq!(state.next_index(), Some(0));
    assert_eq!(state.previous_index(), Some(0));
}

#[test]
fn empty_list_has_no_neighbours() {
    let state = open_with(&[], 0);
    assert_eq!(state.next_index(), None);
    assert_eq!(state.previous_index(), None);
}
