//! In-page anchor links with offset smooth scrolling and target highlight.

use leptos::prelude::*;

use crate::state::page::{HIGHLIGHT_MS, PageState, Section, anchor_scroll_target};
use crate::util::dom;
use crate::util::schedule::TimerSlot;

/// Shared timer that clears `highlight-section`; a new jump restarts it.
#[derive(Clone, Copy)]
pub struct HighlightTimer(pub TimerSlot);

/// Scroll to `section` below the fixed header and highlight it briefly.
/// Missing targets are ignored.
pub fn follow_anchor(section: Section, page: RwSignal<PageState>, timer: HighlightTimer) {
    let Some(top) = dom::element_offset_top(section.id()) else {
        return;
    };
    page.update(|p| p.highlighted = Some(section));
    timer.0.schedule(HIGHLIGHT_MS, move || page.update(|p| p.highlighted = None));
    dom::smooth_scroll_to(anchor_scroll_target(top));
}

/// Anchor to a page section. `on_follow` runs after the jump starts.
#[component]
pub fn SectionLink(
    section: Section,
    #[prop(optional)] label: Option<&'static str>,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] on_follow: Option<Callback<()>>,
) -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let timer = expect_context::<HighlightTimer>();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        follow_anchor(section, page, timer);
        if let Some(cb) = on_follow {
            cb.run(());
        }
    };

    view! {
        <a href=section.href() class=class on:click=on_click>
            {label.unwrap_or(section.label())}
        </a>
    }
}
