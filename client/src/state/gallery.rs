//! Project gallery state: filter selection, per-card visibility, modal.
//!
//! DESIGN
//! ======
//! A filter change produces a plan of [`CardStep`]s. Each step has an
//! immediate part, applied by [`GalleryState::select_filter`], and a delayed
//! part, applied by [`GalleryState::settle`] when its timer fires. Callers
//! cancel outstanding timers before starting a new plan, so steps from an
//! older selection never land on a newer one.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::collections::HashMap;

use projects::{Catalog, Filter, ProjectRecord};

/// Delay between successive cards fading in.
pub const CARD_STAGGER_MS: u32 = 100;
/// Fade-out time before a filtered-out card leaves the layout.
pub const CARD_HIDE_DELAY_MS: u32 = 300;
/// Fade-out time of the modal before it is hidden.
pub const MODAL_FADE_MS: u32 = 300;
/// Wait after opening before the modal body starts its entrance.
pub const MODAL_ENTER_DELAY_MS: u32 = 300;

/// Visual state of one project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardView {
    /// Whether the card takes part in layout (`display: block`).
    pub displayed: bool,
    /// Whether the card is at full opacity and resting position.
    pub faded_in: bool,
}

impl Default for CardView {
    fn default() -> Self {
        Self { displayed: true, faded_in: false }
    }
}

impl CardView {
    #[must_use]
    pub fn style(self) -> String {
        let display = if self.displayed { "block" } else { "none" };
        let (opacity, offset) = if self.faded_in { (1, 0) } else { (0, 20) };
        format!("display: {display}; opacity: {opacity}; transform: translateY({offset}px);")
    }
}

/// One card's share of a filter plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardStep {
    /// Display now, fade in after `delay_ms`.
    Show { id: String, delay_ms: u32 },
    /// Fade out now, leave layout after `delay_ms`.
    Hide { id: String, delay_ms: u32 },
}

impl CardStep {
    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        match self {
            Self::Show { delay_ms, .. } | Self::Hide { delay_ms, .. } => *delay_ms,
        }
    }
}

/// Compute the per-card plan for `filter`, in catalog order.
///
/// Visible cards are staggered by their rank among visible cards, not by
/// their position in the full list.
#[must_use]
pub fn plan_filter(catalog: &Catalog, filter: &Filter) -> Vec<CardStep> {
    let mut visible_index = 0u32;
    catalog
        .projects()
        .iter()
        .map(|project| {
            if filter.matches(&project.categories) {
                let delay_ms = visible_index * CARD_STAGGER_MS;
                visible_index += 1;
                CardStep::Show { id: project.id.clone(), delay_ms }
            } else {
                CardStep::Hide { id: project.id.clone(), delay_ms: CARD_HIDE_DELAY_MS }
            }
        })
        .collect()
}

/// Scroll-lock value to write given the previously applied one, or `None`
/// when nothing changed. The unlocked initial state writes nothing, so an
/// inline `overflow` never overrides stylesheet rules such as `menu-open`.
#[must_use]
pub fn scroll_lock_write(previous: Option<bool>, locked: bool) -> Option<bool> {
    (previous.unwrap_or(false) != locked).then_some(locked)
}

/// Detail modal lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open { project_id: String },
    /// Fading out; becomes `Closed` after [`MODAL_FADE_MS`].
    Closing { project_id: String },
}

#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub filter: Filter,
    pub cards: HashMap<String, CardView>,
    pub modal: ModalState,
    /// Set one tick after opening so modal blocks can transition in.
    pub modal_entered: bool,
}

impl GalleryState {
    /// Every card displayed and waiting for its entrance fade.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let cards = catalog
            .projects()
            .iter()
            .map(|p| (p.id.clone(), CardView::default()))
            .collect();
        Self { cards, ..Self::default() }
    }

    #[must_use]
    pub fn card(&self, id: &str) -> CardView {
        self.cards.get(id).copied().unwrap_or_default()
    }

    /// Switch filter, apply the immediate half of each step, and return the
    /// plan so the caller can schedule [`Self::settle`] for each step.
    pub fn select_filter(&mut self, catalog: &Catalog, filter: Filter) -> Vec<CardStep> {
        let plan = plan_filter(catalog, &filter);
        self.filter = filter;
        for step in &plan {
            match step {
                CardStep::Show { id, .. } => {
                    self.cards.entry(id.clone()).or_default().displayed = true;
                }
                CardStep::Hide { id, .. } => {
                    self.cards.entry(id.clone()).or_default().faded_in = false;
                }
            }
        }
        plan
    }

    /// Apply the delayed half of a step.
    pub fn settle(&mut self, step: &CardStep) {
        match step {
            CardStep::Show { id, .. } => {
                self.cards.entry(id.clone()).or_default().faded_in = true;
            }
            CardStep::Hide { id, .. } => {
                self.cards.entry(id.clone()).or_default().displayed = false;
            }
        }
    }

    /// Open the modal for `project_id`. Unknown ids leave the state untouched.
    pub fn open_detail(&mut self, catalog: &Catalog, project_id: &str) -> bool {
        if catalog.get(project_id).is_none() {
            return false;
        }
        self.modal = ModalState::Open { project_id: project_id.to_owned() };
        self.modal_entered = false;
        true
    }

    pub fn enter_modal(&mut self) {
        if matches!(self.modal, ModalState::Open { .. }) {
            self.modal_entered = true;
        }
    }

    /// Start the fade-out. Returns `false` when there is nothing to close.
    pub fn close_modal(&mut self) -> bool {
        match std::mem::take(&mut self.modal) {
            ModalState::Open { project_id } => {
                self.modal = ModalState::Closing { project_id };
                true
            }
            other => {
                self.modal = other;
                false
            }
        }
    }

    /// Finish a fade-out started by [`Self::close_modal`].
    pub fn finish_close(&mut self) {
        if matches!(self.modal, ModalState::Closing { .. }) {
            self.modal = ModalState::Closed;
            self.modal_entered = false;
        }
    }

    #[must_use]
    pub fn modal_project<'a>(&self, catalog: &'a Catalog) -> Option<&'a ProjectRecord> {
        match &self.modal {
            ModalState::Open { project_id } | ModalState::Closing { project_id } => catalog.get(project_id),
            ModalState::Closed => None,
        }
    }

    #[must_use]
    pub fn modal_visible(&self) -> bool {
        !matches!(self.modal, ModalState::Closed)
    }

    /// Page scroll is locked from open until the fade-out completes.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.modal_visible()
    }

    /// Inline style of the `.project-modal` element.
    #[must_use]
    pub fn modal_style(&self) -> &'static str {
        match self.modal {
            ModalState::Closed => "display: none;",
            ModalState::Open { .. } => "display: block; opacity: 1;",
            ModalState::Closing { .. } => "display: block; opacity: 0;",
        }
    }
}
