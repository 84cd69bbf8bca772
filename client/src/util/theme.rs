//! Light/dark theme initialization and toggle.
//!
//! Reads the saved preference from `localStorage` and applies a `data-theme`
//! attribute to the `<html>` element. Toggle writes back to `localStorage`,
//! updates the attribute and briefly enables the CSS colour transition.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! render the light theme and no-op on writes to keep server output stable.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// How long `--transition-speed` stays non-zero after a toggle.
pub const TRANSITION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored attribute value. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle button: the theme you would switch to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Read the saved theme, defaulting to light.
pub fn read_preference() -> Theme {
    crate::util::storage::load_string(STORAGE_KEY)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = crate::util::dom::document().and_then(|doc| doc.document_element()) {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme, persist it and run the short colour transition.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    crate::util::storage::save_string(STORAGE_KEY, next.as_str());
    pulse_transition();
    next
}

fn pulse_transition() {
    #[cfg(feature = "hydrate")]
    {
        crate::util::dom::set_root_property("--transition-speed", "0.3s");
        leptos::task::spawn_local(async {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(TRANSITION_MS))).await;
            crate::util::dom::set_root_property("--transition-speed", "0s");
        });
    }
}
