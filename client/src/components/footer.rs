//! Page footer with staggered section and icon entrances.

use leptos::prelude::*;

use crate::components::section_link::{HighlightTimer, SectionLink, follow_anchor};
use crate::content::{OWNER_NAME, OWNER_ROLE, SOCIAL_LINKS, SocialLink};
use crate::state::page::{PageState, Section};
use crate::util::reveal::{RevealEffect, RevealTarget, use_reveal};

#[component]
fn FooterSection(index: usize, children: Children) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let revealed = use_reveal(node, RevealTarget::Element.threshold());
    let effect = RevealEffect::footer_section(index);

    view! {
        <div node_ref=node class="footer-section" style=move || effect.style(revealed.get())>
            {children()}
        </div>
    }
}

#[component]
fn FooterIcon(index: usize, link: SocialLink, revealed: ReadSignal<bool>) -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let timer = expect_context::<HighlightTimer>();
    let effect = RevealEffect::footer_icon(index);
    let external = link.href.starts_with("http");
    let section = Section::from_href(link.href);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(section) = section {
            ev.prevent_default();
            follow_anchor(section, page, timer);
        }
    };

    view! {
        <a
            href=link.href
            aria-label=link.label
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            style=move || effect.style(revealed.get())
            on:click=on_click
        >
            <i class=link.icon></i>
        </a>
    }
}

#[component]
fn FooterIcons() -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let revealed = use_reveal(node, RevealTarget::FooterIcons.threshold());

    view! {
        <div node_ref=node class="footer-icons">
            {SOCIAL_LINKS
                .iter()
                .enumerate()
                .map(|(i, &link)| view! { <FooterIcon index=i link=link revealed=revealed/> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-content">
                <FooterSection index=0>
                    <h3>{OWNER_NAME}</h3>
                    <p>{OWNER_ROLE}</p>
                </FooterSection>
                <FooterSection index=1>
                    <h3>"Quick Links"</h3>
                    <ul>
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <li><SectionLink section=section/></li> })
                            .collect_view()}
                    </ul>
                </FooterSection>
                <FooterSection index=2>
                    <h3>"Connect"</h3>
                    <FooterIcons/>
                </FooterSection>
            </div>
            <div class="footer-bottom">
                <p>{format!("\u{00a9} {OWNER_NAME}. All rights reserved.")}</p>
            </div>
        </footer>
    }
}
