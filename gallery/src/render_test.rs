use super::*;
use crate::catalog::ALL_SUBCATEGORY;

fn project() -> Project {
    Project::new("Designs")
        .with_description("Graphic work")
        .with_subcategory(ALL_SUBCATEGORY, ["g1", "g2", "i1"])
        .with_subcategory("Graphics", ["g1", "g2"])
        .with_subcategory("Illustrations", ["i1"])
}

fn state(subcategory: &str, images: &[&str], index: usize) -> ViewState {
    ViewState {
        active_project: Some("designs".to_owned()),
        active_subcategory: subcategory.to_owned(),
        active_index: index,
        active_images: images.iter().map(|s| (*s).to_owned()).collect(),
    }
}

#[test]
fn build_lists_every_subcategory_in_order() {
    let frame = GalleryFrame::build(&project(), &state("All", &["g1", "g2", "i1"], 0));
    let names = frame
        .subcategories
        .iter()
        .map(|b| b.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["All", "Graphics", "Illustrations"]);
}

#[test]
fn build_marks_exactly_one_active_subcategory() {
    let frame = GalleryFrame::build(&project(), &state("Graphics", &["g1", "g2"], 0));
    assert_eq!(frame.subcategories.iter().filter(|b| b.active).count(), 1);
    assert_eq!(frame.active_subcategory(), Some("Graphics"));
}

#[test]
fn build_creates_one_thumbnail_per_image() {
    let frame = GalleryFrame::build(&project(), &state("All", &["g1", "g2", "i1"], 1));
    assert_eq!(frame.thumbnails.len(), 3);
    assert_eq!(frame.thumbnails[2].src, "i1");
    assert_eq!(frame.thumbnails[2].index, 2);
    assert_eq!(frame.thumbnails[0].alt, "Thumbnail 1");
    let active = frame.active_thumbnail().expect("one thumbnail is active");
    assert_eq!(active.index, 1);
    assert_eq!(frame.thumbnails.iter().filter(|t| t.active).count(), 1);
}

#[test]
fn build_copies_header_text() {
    let frame = GalleryFrame::build(&project(), &state("All", &["g1"], 0));
    assert_eq!(frame.title, "Designs");
    assert_eq!(frame.description.as_deref(), Some("Graphic work"));
}

#[test]
fn build_reports_one_based_position() {
    let frame = GalleryFrame::build(&project(), &state("All", &["g1", "g2", "i1"], 2));
    assert_eq!(frame.position, Some((3, 3)));
}

#[test]
fn build_with_empty_list_has_no_thumbnails_or_position() {
    let frame = GalleryFrame::build(&project(), &state("All", &[], 0));
    assert!(frame.thumbnails.is_empty());
    assert_eq!(frame.position, None);
    assert!(frame.active_thumbnail().is_none());
}

#[test]
fn default_frame_is_blank() {
    let frame = GalleryFrame::default();
    assert!(frame.title.is_empty());
    assert!(frame.subcategories.is_empty());
    assert_eq!(frame.active_subcategory(), None);
}
