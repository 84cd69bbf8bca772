//! Experience figures that count up the first time they scroll into view.
//!
//! DESIGN
//! ======
//! The block is watched with an IntersectionObserver at 50% visibility. The
//! first hit flips `started` and stops observing; each figure then runs its
//! own `requestAnimationFrame` loop. Figures whose text has no leading number
//! are left as authored.

use leptos::prelude::*;

/// One figure in the experience block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceItem {
    pub figure: &'static str,
    pub label: &'static str,
}

#[component]
pub fn Experience(items: &'static [ExperienceItem]) -> impl IntoView {
    let started = RwSignal::new(false);
    let block_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(block) = block_ref.get() else {
            return;
        };
        let block: web_sys::Element = block.into();
        crate::util::observer::observe(
            std::slice::from_ref(&block),
            crate::util::counter::TRIGGER_THRESHOLD,
            None,
            move |entry, observer| {
                if entry.is_intersecting() {
                    started.set(true);
                    observer.unobserve(&entry.target());
                }
            },
        );
    });

    view! {
        <div class="experience" node_ref=block_ref>
            {items
                .iter()
                .map(|item| {
                    view! {
                        <div class="exp-item">
                            <Counter figure=item.figure started=started.read_only()/>
                            <p>{item.label}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Heading that animates from 0 to the number in `figure` once `started`.
#[component]
fn Counter(figure: &'static str, started: ReadSignal<bool>) -> impl IntoView {
    let text = RwSignal::new(figure.to_owned());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::counter::{format_counter, parse_counter_target};

        let target = parse_counter_target(figure);
        Effect::new(move |ran: Option<bool>| {
            if ran == Some(true) {
                return true;
            }
            if !started.get() {
                return false;
            }
            if let Some(end) = target {
                animate(0, end, move |value| text.set(format_counter(value)));
            }
            true
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = started;

    view! { <h4>{move || text.get()}</h4> }
}

/// Drive `on_value` from `start` to `end` over the counter duration.
#[cfg(feature = "hydrate")]
fn animate(start: i64, end: i64, on_value: impl Fn(i64) + 'static) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::{JsCast, closure::Closure};

    use crate::util::counter::{DURATION_MS, counter_frame};

    type FrameCallback = Closure<dyn FnMut(f64)>;

    let Some(window) = web_sys::window() else {
        on_value(end);
        return;
    };

    let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let mut origin: Option<f64> = None;

    let cb = Closure::wrap(Box::new(move |ts: f64| {
        let began = *origin.get_or_insert(ts);
        let frame = counter_frame(start, end, ts - began, DURATION_MS);
        on_value(frame.value);
        if frame.finished {
            holder_for_cb.borrow_mut().take();
            return;
        }
        if let Some(cb) = holder_for_cb.borrow().as_ref() {
            let _ = window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        on_value(end);
    }
}
