use super::*;

// =============================================================
// Anchor offset / shadow / parallax
// =============================================================

#[test]
fn anchor_scroll_top_subtracts_nav_height() {
    assert_eq!(anchor_scroll_top(300.0, 1000.0, 80.0), 1220.0);
    assert_eq!(anchor_scroll_top(-200.0, 1000.0, 80.0), 720.0);
}

#[test]
fn shadow_appears_strictly_after_threshold() {
    assert!(!has_shadow(0.0));
    assert!(!has_shadow(50.0));
    assert!(has_shadow(50.5));
}

#[test]
fn parallax_moves_at_forty_percent() {
    assert_eq!(parallax_transform(0.0), "translateY(0px)");
    assert_eq!(parallax_transform(100.0), "translateY(40px)");
    assert_eq!(parallax_transform(250.0), "translateY(100px)");
}

#[test]
fn section_href_requires_fragment_name() {
    assert!(is_section_href("#about"));
    assert!(!is_section_href("#"));
    assert!(!is_section_href("https://example.com/#about"));
    assert!(!is_section_href("/cv.pdf"));
}

// =============================================================
// NavScroll
// =============================================================

#[test]
fn nav_scroll_starts_without_direction() {
    let nav = NavScroll::default();
    assert_eq!(nav.direction, None);
    assert!(!nav.shadow);
}

#[test]
fn scrolling_down_marks_down() {
    let mut nav = NavScroll::default();
    nav.observe(120.0);
    assert!(nav.scrolling_down());
    assert!(nav.shadow);
    assert_eq!(nav.last_scroll, 120.0);
}

#[test]
fn scrolling_up_after_down_marks_up() {
    let mut nav = NavScroll::default();
    nav.observe(120.0);
    nav.observe(90.0);
    assert!(nav.scrolling_up());
}

#[test]
fn scrolling_up_without_prior_down_keeps_direction() {
    let mut nav = NavScroll { last_scroll: 200.0, direction: None, shadow: true };
    nav.observe(150.0);
    assert_eq!(nav.direction, None);
    assert_eq!(nav.last_scroll, 150.0);
}

#[test]
fn continued_down_scroll_stays_down() {
    let mut nav = NavScroll::default();
    nav.observe(100.0);
    nav.observe(200.0);
    nav.observe(300.0);
    assert!(nav.scrolling_down());
}

#[test]
fn reaching_top_clears_up_marker_only() {
    let mut nav = NavScroll::default();
    nav.observe(100.0);
    nav.observe(40.0);
    assert!(nav.scrolling_up());
    nav.observe(0.0);
    assert_eq!(nav.direction, None);
    assert_eq!(nav.last_scroll, 40.0);
    assert!(!nav.shadow);
}

#[test]
fn reaching_top_keeps_down_marker() {
    let mut nav = NavScroll::default();
    nav.observe(100.0);
    nav.observe(0.0);
    assert!(nav.scrolling_down());
}
