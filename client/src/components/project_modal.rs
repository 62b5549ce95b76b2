//! Project detail modal.
//!
//! DESIGN
//! ======
//! The body is a pure function of the record: [`modal_blocks`] lists the
//! blocks in display order and each block's entrance delay comes from its
//! index. Blocks render hidden and transition in once `modal_entered` flips,
//! so every block animates from the same starting frame.

#[cfg(test)]
#[path = "project_modal_test.rs"]
mod project_modal_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use projects::{Catalog, ProjectRecord};

use crate::state::gallery::{GalleryState, MODAL_ENTER_DELAY_MS, MODAL_FADE_MS};
use crate::util::schedule::TimerSlot;

/// Delay of the first block once the modal has entered.
pub const BLOCK_BASE_DELAY_MS: u32 = 100;
/// Extra delay per block.
pub const BLOCK_STEP_MS: u32 = 100;

/// Open/close handles shared by the cards and the modal.
#[derive(Clone, Copy)]
pub struct ModalControl {
    pub open: Callback<String>,
    pub close: Callback<()>,
}

/// One animated child of `.modal-body`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalBlock {
    Title(String),
    Image { src: String, alt: String },
    Paragraph(String),
    Heading(&'static str),
    Features(Vec<String>),
    TechStack(Vec<String>),
    Link(String),
}

#[must_use]
pub fn modal_blocks(record: &ProjectRecord) -> Vec<ModalBlock> {
    vec![
        ModalBlock::Title(record.title.clone()),
        ModalBlock::Image { src: record.image.clone(), alt: record.title.clone() },
        ModalBlock::Paragraph(record.description.clone()),
        ModalBlock::Heading("Features"),
        ModalBlock::Features(record.features.clone()),
        ModalBlock::Heading("Technology Stack"),
        ModalBlock::TechStack(record.tech_stack.clone()),
        ModalBlock::Heading("Challenges"),
        ModalBlock::Paragraph(record.challenges.clone()),
        ModalBlock::Heading("Solution"),
        ModalBlock::Paragraph(record.solution.clone()),
        ModalBlock::Link(record.link.clone()),
    ]
}

#[must_use]
pub fn block_delay_ms(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    BLOCK_BASE_DELAY_MS.saturating_add(index.saturating_mul(BLOCK_STEP_MS))
}

#[must_use]
pub fn block_style(index: usize, entered: bool) -> String {
    let (opacity, offset) = if entered { (1, 0) } else { (0, 20) };
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); transition: all 0.5s ease; transition-delay: {}ms;",
        block_delay_ms(index)
    )
}

impl ModalBlock {
    fn render(self, style: impl Fn() -> String + Send + Sync + 'static) -> AnyView {
        match self {
            Self::Title(title) => view! { <h2 style=style>{title}</h2> }.into_any(),
            Self::Image { src, alt } => {
                view! { <img src=src alt=alt class="project-screenshot" style=style/> }.into_any()
            }
            Self::Paragraph(text) => view! { <p style=style>{text}</p> }.into_any(),
            Self::Heading(text) => view! { <h3 style=style>{text}</h3> }.into_any(),
            Self::Features(items) => view! {
                <ul style=style>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
            }
            .into_any(),
            Self::TechStack(items) => view! {
                <div class="tech-stack" style=style>
                    {items.into_iter().map(|item| view! { <span>{item}</span> }).collect_view()}
                </div>
            }
            .into_any(),
            Self::Link(href) => view! {
                <div class="project-links" style=style>
                    <a href=href target="_blank" rel="noopener noreferrer" class="project-link">
                        <i class="fab fa-github"></i>
                        " View on GitHub"
                    </a>
                </div>
            }
            .into_any(),
        }
    }
}

/// Build the open/close callbacks for the gallery's modal.
pub fn modal_control(catalog: Arc<Catalog>, gallery: RwSignal<GalleryState>) -> ModalControl {
    let enter = TimerSlot::new();
    let fade = TimerSlot::new();

    let open = Callback::new(move |project_id: String| {
        let opened = gallery
            .try_update(|g| g.open_detail(&catalog, &project_id))
            .unwrap_or(false);
        if opened {
            fade.cancel();
            enter.schedule(MODAL_ENTER_DELAY_MS, move || gallery.update(GalleryState::enter_modal));
        }
    });
    let close = Callback::new(move |()| {
        if gallery.try_update(GalleryState::close_modal).unwrap_or(false) {
            fade.schedule(MODAL_FADE_MS, move || gallery.update(GalleryState::finish_close));
        }
    });
    ModalControl { open, close }
}

#[component]
pub fn ProjectModal(catalog: Arc<Catalog>) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let control = expect_context::<ModalControl>();

    let project = Memo::new(move |_| gallery.with(|g| g.modal_project(&catalog).cloned()));
    let entered = Memo::new(move |_| gallery.with(|g| g.modal_entered));

    view! {
        <div
            class="project-modal"
            style=move || gallery.with(GalleryState::modal_style)
            on:click=move |_| control.close.run(())
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <span class="close-modal" on:click=move |_| control.close.run(())>"\u{00d7}"</span>
                <div class="modal-body">
                    {move || {
                        project
                            .get()
                            .map(|record| {
                                modal_blocks(&record)
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, block)| block.render(move || block_style(i, entered.get())))
                                    .collect_view()
                            })
                    }}
                </div>
            </div>
        </div>
    }
}
