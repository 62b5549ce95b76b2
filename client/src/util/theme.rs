//! Theme preference persistence and application.
//!
//! Reads the preference from `localStorage`, applies it as the `data-theme`
//! attribute of `<html>`, and writes it back on toggle. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best effort: a missing window or blocked storage leaves
//! the page on the default theme without surfacing an error.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;
#[cfg(feature = "hydrate")]
use crate::state::theme::THEME_STORAGE_KEY;

/// Read the stored preference, defaulting to [`Theme::Dark`].
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
        Theme::from_stored(stored.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Persist `theme` to `localStorage`.
pub fn persist(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Invert `current`, apply and persist the result, and return it.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    persist(next);
    next
}
