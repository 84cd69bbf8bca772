//! IntersectionObserver wiring shared by reveal and counter animations.

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Observe `targets` and call `on_entry` for every intersection change.
///
/// Observers are never disconnected, so the callback is leaked with the
/// page. Returns `None` when the browser rejects the options.
pub fn observe<F>(targets: &[Element], threshold: f64, root_margin: Option<&str>, mut on_entry: F) -> Option<IntersectionObserver>
where
    F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                on_entry(&entry, &observer);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("intersection observer unavailable: {err:?}");
            return None;
        }
    };
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Some(observer)
}
