//! Reveal-on-enter: apply an element's final visual state the first time it
//! scrolls into view, then release the watch.
//!
//! [`use_reveal`] is the one place an `IntersectionObserver` is created.
//! Components pass a `NodeRef`, a threshold, and read back a `revealed`
//! signal; [`RevealEffect`] turns that flag into classes and inline styles.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::prelude::*;
use leptos::tachys::html::element::ElementType;
use leptos::wasm_bindgen::JsCast;

/// Fraction of an element that must be visible for most reveals.
const DEFAULT_THRESHOLD: f64 = 0.1;
/// Skills section and footer icon row wait until half visible.
const HALF_THRESHOLD: f64 = 0.5;

/// What is being watched; decides how much of it must be on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTarget {
    /// Sections, cards, text blocks, media, forms, footer sections.
    Element,
    /// The skills block whose bars fill together.
    SkillBars,
    /// The footer icon row, watched as one container.
    FooterIcons,
}

impl RevealTarget {
    #[must_use]
    pub fn threshold(self) -> f64 {
        match self {
            Self::Element => DEFAULT_THRESHOLD,
            Self::SkillBars | Self::FooterIcons => HALF_THRESHOLD,
        }
    }
}

/// Direction a text section slides in from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Visual change applied once an element is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEffect {
    /// Adds the `fade-in` class.
    FadeIn,
    /// Keyframe slide (`fadeInLeft` / `fadeInRight`).
    Slide(Side),
    /// Profile image: rise and scale up.
    Rise,
    /// Skill bar grows to `percent` width.
    Fill { percent: u8 },
    /// Rise from `offset_px`, delayed by `index * step_ms`.
    Stagger { index: usize, step_ms: u32, offset_px: u32, duration_ms: u32 },
}

impl RevealEffect {
    /// Footer section `index`.
    #[must_use]
    pub fn footer_section(index: usize) -> Self {
        Self::Stagger { index, step_ms: 150, offset_px: 30, duration_ms: 700 }
    }

    /// Footer icon `index`.
    #[must_use]
    pub fn footer_icon(index: usize) -> Self {
        Self::Stagger { index, step_ms: 150, offset_px: 20, duration_ms: 500 }
    }

    /// Text sections inside the alternate container slide in from the left.
    #[must_use]
    pub fn text_section(alternate: bool) -> Self {
        Self::Slide(if alternate { Side::Left } else { Side::Right })
    }

    /// Class list for an element whose own classes are `base`.
    #[must_use]
    pub fn class(self, base: &str, revealed: bool) -> String {
        if revealed && self == Self::FadeIn { format!("{base} fade-in") } else { base.to_owned() }
    }

    /// Inline style for the current reveal state.
    #[must_use]
    pub fn style(self, revealed: bool) -> String {
        match (self, revealed) {
            (Self::FadeIn, _) | (Self::Slide(_), false) => String::new(),
            (Self::Slide(Side::Left), true) => "animation: fadeInLeft 1s ease-out forwards;".to_owned(),
            (Self::Slide(Side::Right), true) => "animation: fadeInRight 1s ease-out forwards;".to_owned(),
            (Self::Rise, false) => {
                "opacity: 0; transform: translateY(30px) scale(0.9); transition: all 0.8s ease;".to_owned()
            }
            (Self::Rise, true) => {
                "opacity: 1; transform: translateY(0) scale(1); transition: all 0.8s ease;".to_owned()
            }
            (Self::Fill { percent }, true) => format!("width: {percent}%;"),
            (Self::Fill { .. }, false) => "width: 0%;".to_owned(),
            (Self::Stagger { offset_px, duration_ms, .. }, false) => {
                format!("opacity: 0; transform: translateY({offset_px}px); transition: all {duration_ms}ms ease;")
            }
            (Self::Stagger { index, step_ms, duration_ms, .. }, true) => {
                let delay = u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms);
                format!(
                    "opacity: 1; transform: translateY(0); transition: all {duration_ms}ms ease; transition-delay: {delay}ms;"
                )
            }
        }
    }
}

/// Watch `node` and flip the returned signal once it is at least
/// `threshold` visible. The watch is one-shot.
pub fn use_reveal<E>(node: NodeRef<E>, threshold: f64) -> ReadSignal<bool>
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + 'static,
{
    let (revealed, set_revealed) = signal(false);
    node.on_load(move |el| {
        #[cfg(feature = "hydrate")]
        observe_once(&el.unchecked_into::<web_sys::Element>(), threshold, move || set_revealed.set(true));
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (el, threshold, set_revealed);
        }
    });
    revealed
}

#[cfg(feature = "hydrate")]
fn observe_once(target: &web_sys::Element, threshold: f64, on_enter: impl FnOnce() + 'static) {
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    let on_enter = Rc::new(Cell::new(Some(on_enter)));
    let on_enter_cb = Rc::clone(&on_enter);
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let entered = entries
                .iter()
                .any(|entry| entry.unchecked_into::<web_sys::IntersectionObserverEntry>().is_intersecting());
            if !entered {
                return;
            }
            observer.disconnect();
            if let Some(f) = on_enter_cb.take() {
                f();
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(target);
            callback.forget();
        }
        Err(_) => {
            // No observer support: show the final state right away.
            if let Some(f) = on_enter.take() {
                f();
            }
        }
    }
}
