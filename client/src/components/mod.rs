//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections while reading/writing shared state from
//! Leptos context providers set up in `app`.

pub mod about;
pub mod back_to_top;
pub mod contact_form;
pub mod footer;
pub mod header;
pub mod hero;
pub mod mobile_nav;
pub mod page_section;
pub mod project_gallery;
pub mod project_modal;
pub mod section_link;
pub mod skills;
pub mod theme_toggle;
pub mod toast;
pub mod video;
