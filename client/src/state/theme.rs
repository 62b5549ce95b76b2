//! Display theme preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// How long `theme-transition` stays on `<body>` after a toggle.
pub const THEME_TRANSITION_MS: u32 = 1000;

/// Two-valued display mode persisted across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Resolve a stored value. Anything other than `light` or `dark` is `Dark`.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Value written to `data-theme` and to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Icon class for the toggle button: the sun offers a way out of dark mode.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-sun",
            Self::Light => "fas fa-moon",
        }
    }
}
