use super::*;

#[test]
fn back_to_top_appears_strictly_past_threshold() {
    assert!(!back_to_top_visible_at(0.0));
    assert!(!back_to_top_visible_at(300.0));
    assert!(back_to_top_visible_at(300.5));
    assert!(!PageState::new().back_to_top_visible);
}

#[test]
fn anchor_target_subtracts_header() {
    assert!((anchor_scroll_target(1000.0) - 920.0).abs() < f64::EPSILON);
}

#[test]
fn section_href_round_trips() {
    for section in Section::ALL {
        assert_eq!(Section::from_href(&section.href()), Some(section));
    }
    assert_eq!(Section::from_href("about"), None);
    assert_eq!(Section::from_href("#missing"), None);
}

#[test]
fn role_rotation_wraps() {
    let mut page = PageState::new();
    assert_eq!(page.role(), "A passionate");
    for _ in 0..ROLES.len() {
        page.fade_role();
        assert!(!page.role_visible);
        page.next_role();
        assert!(page.role_visible);
    }
    assert_eq!(page.role(), "A passionate");
    page.next_role();
    assert_eq!(page.role(), "A creative");
}

#[test]
fn highlighted_section_gets_extra_class() {
    let mut page = PageState::new();
    page.highlighted = Some(Section::About);
    assert_eq!(page.section_class(Section::About, "section"), "section highlight-section");
    assert_eq!(page.section_class(Section::Skills, "section"), "section");
}
