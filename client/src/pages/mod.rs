//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single route. The page owns section ordering and delegates
//! rendering details to `components`.

pub mod home;
