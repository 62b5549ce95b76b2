//! Slide-out navigation panel and dimming overlay for narrow screens.

use leptos::prelude::*;

use crate::components::section_link::SectionLink;
use crate::state::nav::NavState;
use crate::state::page::Section;

#[component]
pub fn MobileNav() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let close = Callback::new(move |()| nav.update(NavState::close));

    view! {
        <div class=move || nav.get().overlay_class() on:click=move |_| close.run(())></div>
        <nav class=move || nav.get().panel_class()>
            <ul>
                {Section::ALL
                    .into_iter()
                    .map(|section| view! { <li><SectionLink section=section on_follow=close/></li> })
                    .collect_view()}
            </ul>
        </nav>
    }
}
