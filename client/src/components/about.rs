//! About section: alternating text blocks and the intro video.

use leptos::prelude::*;

use crate::components::page_section::PageSection;
use crate::components::video::VideoPlayer;
use crate::content::{ABOUT_BLOCKS, INTRO_VIDEO};
use crate::state::page::Section;
use crate::util::reveal::{RevealEffect, RevealTarget, use_reveal};

#[component]
fn TextSection(heading: &'static str, body: &'static str, alternate: bool) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let revealed = use_reveal(node, RevealTarget::Element.threshold());
    let effect = RevealEffect::text_section(alternate);
    let container = if alternate { "container2" } else { "container" };

    view! {
        <div class=container>
            <div node_ref=node class="text-section" style=move || effect.style(revealed.get())>
                <h3>{heading}</h3>
                <p>{body}</p>
            </div>
        </div>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <PageSection section=Section::About class="section about">
            <h2 class="section-title">"About Me"</h2>
            {ABOUT_BLOCKS
                .iter()
                .enumerate()
                .map(|(i, &(heading, body))| view! { <TextSection heading=heading body=body alternate=i % 2 == 1/> })
                .collect_view()}
            <VideoPlayer src=INTRO_VIDEO/>
        </PageSection>
    }
}
