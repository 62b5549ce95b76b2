//! Skills section. Bars fill once the skills block is half visible.

use leptos::prelude::*;

use crate::components::page_section::PageSection;
use crate::content::{SKILLS, Skill};
use crate::state::page::Section;
use crate::util::reveal::{RevealEffect, RevealTarget, use_reveal};

#[component]
fn SkillBar(skill: Skill, filled: ReadSignal<bool>) -> impl IntoView {
    let effect = RevealEffect::Fill { percent: skill.percent };

    view! {
        <div class="skill">
            <div class="skill-info">
                <span>{skill.name}</span>
                <span>{format!("{}%", skill.percent)}</span>
            </div>
            <div class="skill-bar">
                <div
                    class="skill-bar-fill"
                    data-width=skill.data_width()
                    style=move || effect.style(filled.get())
                ></div>
            </div>
        </div>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let bars = NodeRef::<leptos::html::Div>::new();
    let filled = use_reveal(bars, RevealTarget::SkillBars.threshold());

    view! {
        <PageSection section=Section::Skills class="section skills">
            <h2 class="section-title">"Skills"</h2>
            <div node_ref=bars class="skills-section">
                <div class="skills-grid">
                    {SKILLS.iter().map(|&skill| view! { <SkillBar skill=skill filled=filled/> }).collect_view()}
                </div>
            </div>
        </PageSection>
    }
}
