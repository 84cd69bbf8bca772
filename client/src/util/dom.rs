//! Thin web-sys helpers for page-level DOM wiring.
//!
//! Components own their own markup through Leptos; these helpers cover the
//! cross-cutting bits that act on elements outside any one component (body
//! scroll locks, `<html>` attributes, selector-driven animations).

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::util::scroll;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Like [`query_all`], keeping only HTML elements (those with `style`).
pub fn query_all_html(selector: &str) -> Vec<HtmlElement> {
    query_all(selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Children of `parent` matching `selector`.
pub fn query_within(parent: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = parent.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Set a custom property on the `<html>` element.
pub fn set_root_property(property: &str, value: &str) {
    let Some(root) = document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    set_style(&root, property, value);
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

pub fn jump_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, top);
    }
}

/// Height of the primary `<nav>`, or 0 when absent.
pub fn nav_height() -> f64 {
    query("nav")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map_or(0.0, |nav| f64::from(nav.offset_height()))
}

/// Smooth-scroll to the element `href` points at (`#id`), leaving room for
/// the nav bar. Returns `false` when the target does not exist.
pub fn scroll_to_section(href: &str) -> bool {
    let Some(target) = query(href) else {
        return false;
    };
    let top = scroll::anchor_scroll_top(target.get_bounding_client_rect().top(), scroll_y(), nav_height());
    smooth_scroll_to(top);
    true
}

/// Toggle `overflow: hidden` on `<body>`.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = body() {
        set_style(&body, "overflow", if locked { "hidden" } else { "" });
    }
}
