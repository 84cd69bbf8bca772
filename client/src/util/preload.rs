//! Off-screen image loading for the gallery modal.

use std::cell::RefCell;
use std::rc::Rc;

use gallery::PreloadOutcome;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::HtmlImageElement;

type Settle = Box<dyn FnOnce(PreloadOutcome)>;

/// Fetch `src` into a detached `<img>` and report how it settled.
///
/// `on_settle` runs at most once, on whichever of `load`/`error` fires first.
pub fn load_image(src: &str, on_settle: impl FnOnce(PreloadOutcome) + 'static) {
    let Ok(img) = HtmlImageElement::new() else {
        on_settle(PreloadOutcome::Failed);
        return;
    };

    let slot: Rc<RefCell<Option<Settle>>> = Rc::new(RefCell::new(Some(Box::new(on_settle))));
    let settle_with = |outcome: PreloadOutcome| {
        let slot = Rc::clone(&slot);
        Closure::once_into_js(move || {
            let settle = slot.borrow_mut().take();
            if let Some(settle) = settle {
                settle(outcome);
            }
        })
    };

    let on_load = settle_with(PreloadOutcome::Loaded);
    let on_error = settle_with(PreloadOutcome::Failed);
    img.set_onload(Some(on_load.unchecked_ref()));
    img.set_onerror(Some(on_error.unchecked_ref()));
    img.set_src(src);
}
