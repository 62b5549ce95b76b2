//! Fixed site header: brand, desktop links, theme and menu controls.

use leptos::prelude::*;

use crate::components::section_link::SectionLink;
use crate::components::theme_toggle::ThemeToggle;
use crate::content::OWNER_NAME;
use crate::state::nav::NavState;
use crate::state::page::Section;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    let on_menu = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        nav.update(NavState::toggle);
    };

    view! {
        <header class="header">
            <SectionLink section=Section::Home label=OWNER_NAME class="logo"/>
            <nav class="desktop-nav">
                {Section::ALL
                    .into_iter()
                    .map(|section| view! { <SectionLink section=section class="nav-link"/> })
                    .collect_view()}
            </nav>
            <div class="controls-container">
                <ThemeToggle/>
                <button id="menu-button" class="menu-button" aria-label="Toggle menu" on:click=on_menu>
                    <i class=move || nav.get().icon_class()></i>
                </button>
            </div>
        </header>
    }
}
