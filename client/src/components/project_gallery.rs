//! Projects section: filter bar, cards, and the detail modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog arrives as an `Arc<Catalog>` context from `app`. Card
//! visibility lives in `GalleryState`; this module only schedules the
//! delayed half of each filter step and projects state onto styles.

use std::sync::Arc;

use leptos::prelude::*;
use projects::{Catalog, Filter, ProjectRecord};

use crate::components::page_section::PageSection;
use crate::components::project_modal::{ModalControl, ProjectModal, modal_control};
use crate::state::gallery::{GalleryState, scroll_lock_write};
use crate::state::page::Section;
use crate::util::dom;
use crate::util::reveal::{RevealEffect, RevealTarget, use_reveal};
use crate::util::schedule::TimerSet;

#[component]
fn FilterButton(value: Filter, label: String, select: Callback<Filter>) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let data_filter = value.as_str().to_owned();
    let active = {
        let value = value.clone();
        move || gallery.with(|g| g.filter == value)
    };

    view! {
        <button
            class=move || if active() { "filter-btn active" } else { "filter-btn" }
            data-filter=data_filter
            on:click=move |_| select.run(value.clone())
        >
            {label}
        </button>
    }
}

#[component]
fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let control = expect_context::<ModalControl>();
    let node = NodeRef::<leptos::html::Div>::new();
    let revealed = use_reveal(node, RevealTarget::Element.threshold());

    let id = project.id.clone();
    let card_id = project.id.clone();
    let data_project = project.id.clone();

    view! {
        <div
            node_ref=node
            class=move || RevealEffect::FadeIn.class("project-card", revealed.get())
            data-category=project.category_attr()
            style=move || gallery.with(|g| g.card(&card_id).style())
        >
            <div class="project-image">
                <img src=project.image.clone() alt=project.title.clone()/>
            </div>
            <div class="project-info">
                <h3>{project.title.clone()}</h3>
                <p>{project.summary.clone()}</p>
                <div class="project-tags">
                    {project.tech_stack.iter().map(|tech| view! { <span>{tech.clone()}</span> }).collect_view()}
                </div>
                <button class="details-btn" data-project=data_project on:click=move |_| control.open.run(id.clone())>
                    "View Details"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsSection(catalog: Arc<Catalog>) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let timers = TimerSet::new();

    let select = {
        let catalog = Arc::clone(&catalog);
        Callback::new(move |filter: Filter| {
            timers.cancel_all();
            let plan = gallery
                .try_update(|g| g.select_filter(&catalog, filter))
                .unwrap_or_default();
            for step in plan {
                timers.push(step.delay_ms(), move || gallery.update(|g| g.settle(&step)));
            }
        })
    };

    provide_context(modal_control(Arc::clone(&catalog), gallery));

    // Entrance stagger for the initial card set; effects only run in the browser.
    Effect::new(move |_| select.run(Filter::All));
    Effect::new(move |previous: Option<bool>| {
        let locked = gallery.with(GalleryState::scroll_locked);
        if let Some(write) = scroll_lock_write(previous, locked) {
            dom::set_scroll_locked(write);
        }
        locked
    });

    let buttons = std::iter::once((Filter::All, "All".to_owned()))
        .chain(
            catalog
                .categories()
                .iter()
                .map(|c| (Filter::Category(c.id.clone()), c.label.clone())),
        )
        .map(|(value, label)| view! { <FilterButton value=value label=label select=select/> })
        .collect_view();

    let cards = catalog
        .projects()
        .iter()
        .cloned()
        .map(|project| view! { <ProjectCard project=project/> })
        .collect_view();

    view! {
        <PageSection section=Section::Projects class="section projects">
            <h2 class="section-title">"Projects"</h2>
            <div class="filter-buttons">{buttons}</div>
            <div class="projects-grid">{cards}</div>
        </PageSection>
        <ProjectModal catalog=catalog/>
    }
}
