//! Top-level `<section>` wrapper: anchor id, highlight, fade-in on enter.

use leptos::prelude::*;

use crate::state::page::{PageState, Section};
use crate::util::reveal::{RevealEffect, RevealTarget, use_reveal};

#[component]
pub fn PageSection(
    section: Section,
    #[prop(default = "section")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let node = NodeRef::<leptos::html::Section>::new();
    let revealed = use_reveal(node, RevealTarget::Element.threshold());

    view! {
        <section
            node_ref=node
            id=section.id()
            class=move || {
                let base = page.with(|p| p.section_class(section, class));
                RevealEffect::FadeIn.class(&base, revealed.get())
            }
        >
            {children()}
        </section>
    }
}
