//! Fullscreen project gallery.
//!
//! ARCHITECTURE
//! ============
//! Markup is a pure function of `GalleryView`. Every control forwards to
//! `GalleryHandle`, and the controller answers by rewriting the view signal:
//! sub-category buttons and sidebar thumbnails are rebuilt from the new
//! `GalleryFrame` each time.
//!
//! The main image only changes when a pre-load settles. An effect watches
//! `GalleryView::pending`, loads the ticket's image off-screen and hands the
//! outcome back to the controller, which drops it if a newer ticket exists.

use leptos::prelude::*;

use gallery::SubcategoryButton;

use crate::state::gallery::GalleryHandle;

#[component]
pub fn GalleryModal() -> impl IntoView {
    let gallery = expect_context::<GalleryHandle>();
    let modal = gallery.view();

    #[cfg(feature = "hydrate")]
    {
        let keys = window_event_listener(leptos::ev::keydown, move |ev| {
            if gallery.handle_key(&ev.key()) {
                ev.prevent_default();
            }
        });
        on_cleanup(move || keys.remove());

        let pending = Memo::new(move |_| modal.with(|v| v.pending.clone()));
        Effect::new(move || {
            let Some(ticket) = pending.get() else {
                return;
            };
            let src = ticket.src.clone();
            crate::util::preload::load_image(&src, move |outcome| gallery.finish_preload(&ticket, outcome));
        });
    }

    let visible = move || modal.with(|v| v.visible);
    let title = move || modal.with(|v| v.frame.title.clone());
    let description = move || modal.with(|v| v.frame.description.clone().unwrap_or_default());
    let counter = move || modal.with(|v| v.position_label().unwrap_or_default());
    let image_src = move || modal.with(|v| v.displayed_src.clone().unwrap_or_default());
    let loading = move || modal.with(|v| v.is_loading());
    let image_style = move || if loading() { "opacity:0;" } else { "opacity:1;" };

    let subcategories = move || {
        modal.with(|v| v.frame.subcategories.clone())
            .into_iter()
            .map(|SubcategoryButton { name, active }| {
                let key = name.clone();
                let data = name.clone();
                let on_select = move |_| gallery.select_subcategory(&key);
                view! {
                    <button
                        class="subcategory-button"
                        class:active=active
                        data-subcategory=data
                        on:click=on_select
                    >
                        {name}
                    </button>
                }
            })
            .collect_view()
    };

    let thumbnails = move || {
        modal.with(|v| v.frame.thumbnails.clone())
            .into_iter()
            .map(|thumb| {
                let index = thumb.index;
                view! {
                    <div
                        class="sidebar-thumbnail"
                        class:active=thumb.active
                        data-index=index.to_string()
                        on:click=move |_| gallery.jump_to(index)
                    >
                        <img src=thumb.src alt=thumb.alt/>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="gallery-modal" class:active=visible on:click=move |_| gallery.close()>
            <div class="gallery-content" on:click=move |ev| ev.stop_propagation()>
                <button class="close-gallery" aria-label="Close gallery" on:click=move |_| gallery.close()>
                    "×"
                </button>
                <div class="gallery-header">
                    <h3>{title}</h3>
                    <p class="gallery-description">{description}</p>
                    <div class="gallery-subcategories">{subcategories}</div>
                </div>
                <div class="gallery-body">
                    <div class="gallery-sidebar">{thumbnails}</div>
                    <div class="gallery-main">
                        <button class="prev" aria-label="Previous image" on:click=move |_| gallery.previous()>
                            "‹"
                        </button>
                        <div class="gallery-image">
                            <img src=image_src class:loading=loading style=image_style alt=title/>
                        </div>
                        <button class="next" aria-label="Next image" on:click=move |_| gallery.next()>
                            "›"
                        </button>
                    </div>
                    <div class="gallery-counter">{counter}</div>
                </div>
            </div>
        </div>
    }
}
