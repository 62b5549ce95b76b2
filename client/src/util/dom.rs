//! Document-level side effects that sit outside the Leptos view tree.

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let list = body.class_list();
            let _ = if enabled { list.add_1(class) } else { list.remove_1(class) };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (class, enabled);
    }
}

/// Lock or restore page scrolling via `body.style.overflow`.
pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body
                .style()
                .set_property("overflow", if locked { "hidden" } else { "auto" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// Current vertical scroll offset of the window.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll the window to `top`.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

/// Document offset of the element with `id`, if it exists.
pub fn element_offset_top(id: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let el = web_sys::window()?.document()?.get_element_by_id(id)?;
        let el: web_sys::HtmlElement = el.dyn_into().ok()?;
        Some(f64::from(el.offset_top()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}
