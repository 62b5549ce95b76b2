//! Header button that flips between dark and light themes.

use leptos::prelude::*;

use crate::state::theme::{THEME_TRANSITION_MS, Theme};
use crate::util::schedule::TimerSlot;
use crate::util::{dom, theme};

const TRANSITION_CLASS: &str = "theme-transition";

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let current = expect_context::<RwSignal<Theme>>();
    let transition = TimerSlot::new();

    let on_click = move |_| {
        current.set(theme::toggle(current.get_untracked()));
        dom::set_body_class(TRANSITION_CLASS, true);
        transition.schedule(THEME_TRANSITION_MS, || dom::set_body_class(TRANSITION_CLASS, false));
    };

    view! {
        <button class="theme-toggle" aria-label="Toggle theme" on:click=on_click>
            <i class=move || current.get().icon_class()></i>
        </button>
    }
}
