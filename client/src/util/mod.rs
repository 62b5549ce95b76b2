//! Browser glue shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` calls from component logic. Every
//! helper compiles to a no-op without the `hydrate` feature so server
//! rendering and native tests stay deterministic.

pub mod dom;
pub mod reveal;
pub mod schedule;
pub mod theme;
