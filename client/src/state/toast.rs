//! Transient notification state.
//!
//! At most one toast exists. Showing a new one replaces its predecessor and
//! bumps the sequence number; lifecycle transitions carry the sequence they
//! were scheduled for and are dropped if it no longer matches.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Delay before `show` is added, so the entrance transition registers.
pub const TOAST_SHOW_DELAY_MS: u32 = 100;
/// Time from insertion until the exit transition starts.
pub const TOAST_VISIBLE_MS: u32 = 3000;
/// Exit transition length before the toast is removed.
pub const TOAST_REMOVE_DELAY_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted, not yet shown.
    Entering,
    Shown,
    /// Exit transition running.
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub seq: u64,
    pub kind: ToastKind,
    pub message: String,
    pub phase: ToastPhase,
}

impl Toast {
    #[must_use]
    pub fn class(&self) -> String {
        match self.phase {
            ToastPhase::Shown => format!("toast {} show", self.kind.as_str()),
            ToastPhase::Entering | ToastPhase::Leaving => format!("toast {}", self.kind.as_str()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub current: Option<Toast>,
    next_seq: u64,
}

impl ToastState {
    /// Replace any current toast and return the new toast's sequence number.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.current = Some(Toast { seq, kind, message: message.into(), phase: ToastPhase::Entering });
        seq
    }

    /// Move toast `seq` to `phase`. Returns `false` for a stale sequence.
    pub fn advance(&mut self, seq: u64, phase: ToastPhase) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.seq == seq => {
                toast.phase = phase;
                true
            }
            _ => false,
        }
    }

    /// Remove toast `seq`. Returns `false` for a stale sequence.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.seq == seq) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
