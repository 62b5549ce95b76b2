//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use projects::Catalog;

use crate::components::section_link::HighlightTimer;
use crate::components::toast::Toaster;
use crate::content::{OWNER_NAME, OWNER_ROLE};
use crate::pages::home::HomePage;
use crate::state::gallery::GalleryState;
use crate::state::nav::{MENU_OPEN_BODY_CLASS, NavState};
use crate::state::page::PageState;
use crate::state::theme::Theme;
use crate::util::schedule::TimerSlot;
use crate::util::{dom, theme};

const ICON_STYLESHEET: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme=Theme::default().as_str()>
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

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let current_theme = RwSignal::new(Theme::default());
    let nav = RwSignal::new(NavState::default());
    let page = RwSignal::new(PageState::new());

    provide_context(current_theme);
    provide_context(nav);
    provide_context(page);
    provide_context(Toaster::new());
    provide_context(HighlightTimer(TimerSlot::new()));

    match Catalog::embedded() {
        Ok(catalog) => {
            provide_context(RwSignal::new(GalleryState::new(&catalog)));
            provide_context(Arc::new(catalog));
        }
        Err(e) => leptos::logging::error!("project catalog unavailable: {e}"),
    }

    // Browser-only: pick up the stored preference once hydrated.
    Effect::new(move |_| {
        let stored = theme::read_preference();
        theme::apply(stored);
        current_theme.set(stored);
    });
    Effect::new(move |_| dom::set_body_class(MENU_OPEN_BODY_CLASS, nav.with(|n| n.open)));

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Link rel="stylesheet" href=ICON_STYLESHEET/>
        <Title text=format!("{OWNER_NAME} | {OWNER_ROLE}")/>
        <Meta name="description" content=format!("Portfolio of {OWNER_NAME}, {OWNER_ROLE}.")/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
