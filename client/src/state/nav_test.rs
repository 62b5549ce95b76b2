use super::*;

#[test]
fn default_is_closed() {
    let nav = NavState::default();
    assert!(!nav.open);
    assert_eq!(nav.panel_class(), "mobile-nav");
    assert_eq!(nav.overlay_class(), "menu-overlay");
    assert_eq!(nav.icon_class(), "fas fa-bars");
}

#[test]
fn toggle_moves_panel_overlay_and_icon_together() {
    let mut nav = NavState::default();
    nav.toggle();
    assert_eq!(nav.panel_class(), "mobile-nav show");
    assert_eq!(nav.overlay_class(), "menu-overlay show");
    assert_eq!(nav.icon_class(), "fas fa-times");

    nav.toggle();
    assert_eq!(nav, NavState::default());
}

#[test]
fn close_is_idempotent() {
    let mut nav = NavState { open: true };
    nav.close();
    nav.close();
    assert!(!nav.open);
    assert_eq!(nav.icon_class(), "fas fa-bars");
}
