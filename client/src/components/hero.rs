//! Hero banner: profile image, rotating role line, call to action.

use leptos::prelude::*;

use crate::components::section_link::SectionLink;
use crate::content::{GITHUB_URL, HERO_INTRO, OWNER_NAME, OWNER_ROLE, PROFILE_IMAGE};
use crate::state::page::{PageState, ROLE_FADE_MS, ROLE_INTERVAL_MS, Section};
use crate::util::reveal::{RevealEffect, RevealTarget, use_reveal};
use crate::util::schedule::{TimerSlot, every};

#[component]
pub fn Hero() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let image = NodeRef::<leptos::html::Img>::new();
    let image_revealed = use_reveal(image, RevealTarget::Element.threshold());

    let swap = TimerSlot::new();
    every(ROLE_INTERVAL_MS, move || {
        page.update(PageState::fade_role);
        swap.schedule(ROLE_FADE_MS, move || page.update(PageState::next_role));
    });

    view! {
        <section id=Section::Home.id() class=move || page.with(|p| p.section_class(Section::Home, "hero"))>
            <div class="hero-content">
                <h1>"Hi, I'm " <span class="highlight">{OWNER_NAME}</span></h1>
                <h2>
                    <span
                        id="word"
                        style=move || {
                            let opacity = if page.with(|p| p.role_visible) { 1 } else { 0 };
                            format!("opacity: {opacity}; transition: opacity {ROLE_FADE_MS}ms ease;")
                        }
                    >
                        {move || page.with(PageState::role)}
                    </span>
                    " " {OWNER_ROLE}
                </h2>
                <p>{HERO_INTRO}</p>
                <div class="hero-buttons">
                    <SectionLink section=Section::Projects label="View Projects" class="btn"/>
                    <a href=GITHUB_URL class="btn btn-outline" target="_blank" rel="noopener noreferrer">
                        "GitHub"
                    </a>
                </div>
            </div>
            <div class="hero-image">
                <img
                    node_ref=image
                    id="profile-img"
                    src=PROFILE_IMAGE
                    alt=OWNER_NAME
                    style=move || RevealEffect::Rise.style(image_revealed.get())
                />
            </div>
        </section>
    }
}
