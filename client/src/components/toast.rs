//! Transient notification shown after a contact form send.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::toast::{
    TOAST_REMOVE_DELAY_MS, TOAST_SHOW_DELAY_MS, TOAST_VISIBLE_MS, ToastKind, ToastPhase, ToastState,
};
use crate::util::schedule::TimerSet;

/// Context handle for raising toasts.
#[derive(Clone, Copy)]
pub struct Toaster {
    pub state: RwSignal<ToastState>,
    timers: TimerSet,
}

impl Toaster {
    pub fn new() -> Self {
        Self { state: RwSignal::new(ToastState::default()), timers: TimerSet::new() }
    }

    /// Replace any current toast and run the new one's lifecycle.
    pub fn show(&self, kind: ToastKind, message: &str) {
        self.timers.cancel_all();
        let mut seq = 0;
        self.state.update(|s| seq = s.show(kind, message));

        let state = self.state;
        self.timers.push(TOAST_SHOW_DELAY_MS, move || {
            state.update(|s| {
                s.advance(seq, ToastPhase::Shown);
            });
        });
        self.timers.push(TOAST_VISIBLE_MS, move || {
            state.update(|s| {
                s.advance(seq, ToastPhase::Leaving);
            });
        });
        self.timers.push(TOAST_VISIBLE_MS + TOAST_REMOVE_DELAY_MS, move || {
            state.update(|s| {
                s.dismiss(seq);
            });
        });
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    move || {
        toaster.state.get().current.map(|toast| {
            let class = toast.class();
            let icon = toast.kind.icon_class();
            view! {
                <div class=class>
                    <i class=icon></i>
                    <span>{toast.message}</span>
                </div>
            }
        })
    }
}
