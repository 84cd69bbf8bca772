//! Root application component with routing and context providers.

use gallery::Catalog;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::gallery::GalleryHandle;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Load the embedded catalog, falling back to an empty one.
///
/// Audit findings are logged and never block the gallery.
fn load_catalog() -> Catalog {
    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            leptos::logging::error!("gallery catalog unavailable: {e}");
            return Catalog::new();
        }
    };
    for finding in catalog.audit() {
        leptos::logging::warn!("gallery catalog: {finding}");
    }
    catalog
}

/// Root application component.
///
/// Provides the shared UI state and the gallery handle, then routes to the
/// home page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let gallery = GalleryHandle::new(load_catalog(), ui);

    provide_context(ui);
    provide_context(gallery);

    #[cfg(feature = "hydrate")]
    {
        // Hydrate against the server's light markup, then switch.
        Effect::new(move || {
            let theme = crate::util::theme::read_preference();
            crate::util::theme::apply(theme);
            ui.update(|state| state.theme = theme);
        });

        Effect::new(move || {
            crate::util::dom::set_body_scroll_locked(ui.with(|state| state.page_scroll_locked));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
