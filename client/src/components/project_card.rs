//! Portfolio card that opens its project in the gallery modal.

use leptos::prelude::*;

use crate::state::gallery::GalleryHandle;

#[component]
pub fn ProjectCard(
    /// Catalog id passed to the gallery.
    project: &'static str,
    title: &'static str,
    category: &'static str,
    cover: &'static str,
) -> impl IntoView {
    let gallery = expect_context::<GalleryHandle>();

    view! {
        <div class="project-card" data-project=project>
            <div class="project-image">
                <img src=cover alt=title loading="lazy"/>
            </div>
            <div class="project-info">
                <span class="project-category">{category}</span>
                <h3>{title}</h3>
                <a
                    href="#"
                    class="demo-link"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        gallery.open(project);
                    }
                >
                    "View Project"
                </a>
            </div>
        </div>
    }
}
