//! Page-level chrome: sections, back-to-top button, hero role rotation.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Scroll offset past which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;
/// Fixed header height subtracted from anchor scroll targets.
pub const HEADER_OFFSET_PX: f64 = 80.0;
/// How long a section keeps `highlight-section` after an anchor jump.
pub const HIGHLIGHT_MS: u32 = 2000;
/// Interval between hero role swaps.
pub const ROLE_INTERVAL_MS: u32 = 3000;
/// Fade-out before the role text is swapped.
pub const ROLE_FADE_MS: u32 = 500;

pub const ROLES: &[&str] = &["A passionate", "A creative", "An innovative", "A dedicated"];

/// Anchored page sections, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Self; 5] = [Self::Home, Self::About, Self::Skills, Self::Projects, Self::Contact];

    /// Element id of the section.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Resolve an `href` such as `#about`.
    #[must_use]
    pub fn from_href(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

#[derive(Clone, Debug, Default)]
pub struct PageState {
    pub back_to_top_visible: bool,
    pub highlighted: Option<Section>,
    pub role_index: usize,
    /// `false` while the role text is faded out for a swap.
    pub role_visible: bool,
}

impl PageState {
    #[must_use]
    pub fn new() -> Self {
        Self { role_visible: true, ..Self::default() }
    }

    #[must_use]
    pub fn role(&self) -> &'static str {
        ROLES[self.role_index % ROLES.len()]
    }

    pub fn fade_role(&mut self) {
        self.role_visible = false;
    }

    /// Swap to the next role and fade it back in.
    pub fn next_role(&mut self) {
        self.role_index = (self.role_index + 1) % ROLES.len();
        self.role_visible = true;
    }

    #[must_use]
    pub fn section_class(&self, section: Section, base: &'static str) -> String {
        if self.highlighted == Some(section) { format!("{base} highlight-section") } else { base.to_owned() }
    }
}

/// Whether the back-to-top button shows at window offset `scroll_y`.
#[must_use]
pub fn back_to_top_visible_at(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD_PX
}

/// Window scroll position for a section whose top sits at `offset_top`.
#[must_use]
pub fn anchor_scroll_target(offset_top: f64) -> f64 {
    offset_top - HEADER_OFFSET_PX
}
