//! Cancellable timers for transition sequencing.
//!
//! Handles live in `LocalStorage`-backed `StoredValue`s, so they are `Copy`
//! and can be captured by event handlers. Dropping a pending
//! `gloo_timers` handle cancels it: rescheduling a [`TimerSlot`], clearing
//! a [`TimerSet`], or disposing the owning component all cancel outstanding
//! callbacks. Without `hydrate` nothing is ever scheduled.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::{Interval, Timeout};
#[cfg(feature = "hydrate")]
use leptos::prelude::*;

/// At most one pending callback; scheduling replaces the previous one.
#[derive(Clone, Copy)]
pub struct TimerSlot {
    #[cfg(feature = "hydrate")]
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            pending: StoredValue::new_local(None),
        }
    }

    /// Run `f` after `delay_ms`, cancelling whatever was pending.
    pub fn schedule(&self, delay_ms: u32, f: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            self.pending.set_value(Some(Timeout::new(delay_ms, f)));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, f);
        }
    }

    pub fn cancel(&self) {
        #[cfg(feature = "hydrate")]
        {
            self.pending.set_value(None);
        }
    }
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// A batch of pending callbacks cancelled together.
#[derive(Clone, Copy)]
pub struct TimerSet {
    #[cfg(feature = "hydrate")]
    pending: StoredValue<Vec<Timeout>, LocalStorage>,
}

impl TimerSet {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            pending: StoredValue::new_local(Vec::new()),
        }
    }

    pub fn push(&self, delay_ms: u32, f: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let timeout = Timeout::new(delay_ms, f);
            self.pending.update_value(|pending| pending.push(timeout));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, f);
        }
    }

    pub fn cancel_all(&self) {
        #[cfg(feature = "hydrate")]
        {
            self.pending.update_value(Vec::clear);
        }
    }
}

impl Default for TimerSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `f` every `period_ms` until the calling component is disposed.
pub fn every(period_ms: u32, f: impl FnMut() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        let handle = StoredValue::new_local(Some(Interval::new(period_ms, f)));
        on_cleanup(move || handle.set_value(None));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (period_ms, f);
    }
}
