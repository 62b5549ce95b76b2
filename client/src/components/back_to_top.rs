//! Floating button that returns to the top once the page is scrolled.

use leptos::prelude::*;

use crate::state::page::{PageState, back_to_top_visible_at};
use crate::util::dom;

#[component]
pub fn BackToTop() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    let listener = window_event_listener(leptos::ev::scroll, move |_| {
        let visible = back_to_top_visible_at(dom::scroll_y());
        if page.with_untracked(|p| p.back_to_top_visible) != visible {
            page.update(|p| p.back_to_top_visible = visible);
        }
    });
    on_cleanup(move || listener.remove());

    view! {
        <div
            class=move || if page.with(|p| p.back_to_top_visible) { "back-to-top show" } else { "back-to-top" }
            on:click=move |_| dom::smooth_scroll_to(0.0)
        >
            <i class="fas fa-arrow-up"></i>
        </div>
    }
}
