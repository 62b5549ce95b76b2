//! Outbound HTTP calls made from the browser.

pub mod emailjs;
