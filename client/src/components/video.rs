//! Intro video with a custom play overlay.

use leptos::prelude::*;

use crate::util::reveal::{RevealEffect, RevealTarget, use_reveal};

#[component]
pub fn VideoPlayer(src: &'static str) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let video = NodeRef::<leptos::html::Video>::new();
    let revealed = use_reveal(container, RevealTarget::Element.threshold());
    let playing = RwSignal::new(false);

    let play = move || {
        #[cfg(feature = "hydrate")]
        if let Some(el) = video.get_untracked() {
            let _ = el.play();
        }
        playing.set(true);
    };

    let on_video_click = move |_| {
        if playing.get_untracked() {
            #[cfg(feature = "hydrate")]
            if let Some(el) = video.get_untracked() {
                let _ = el.pause();
            }
            playing.set(false);
        } else {
            play();
        }
    };

    view! {
        <div
            node_ref=container
            class=move || {
                let base = if playing.get() { "video-container playing" } else { "video-container" };
                RevealEffect::FadeIn.class(base, revealed.get())
            }
        >
            <video
                node_ref=video
                src=src
                preload="metadata"
                playsinline=true
                on:click=on_video_click
                on:ended=move |_| playing.set(false)
            ></video>
            <button class="play-button" aria-label="Play video" on:click=move |_| play()>
                <i class="fas fa-play"></i>
            </button>
        </div>
    }
}
