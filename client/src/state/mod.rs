//! Typed UI state for every interactive part of the page.
//!
//! DESIGN
//! ======
//! Each model is held in an `RwSignal` provided via context. Components read
//! the model and project it onto classes and inline styles; nothing reads
//! state back out of the DOM.

pub mod contact;
pub mod gallery;
pub mod nav;
pub mod page;
pub mod theme;
pub mod toast;
