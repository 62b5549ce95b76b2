use super::*;
use crate::state::page::Section;

#[test]
fn in_page_social_links_resolve_to_sections() {
    let anchors: Vec<_> = SOCIAL_LINKS.iter().filter(|l| l.href.starts_with('#')).collect();
    assert!(!anchors.is_empty());
    for link in anchors {
        assert!(Section::from_href(link.href).is_some(), "{} has no section", link.href);
    }
    assert_eq!(Section::from_href("#contact"), Some(Section::Contact));
}

#[test]
fn external_social_links_do_not_resolve() {
    for link in SOCIAL_LINKS.iter().filter(|l| l.href.starts_with("http")) {
        assert_eq!(Section::from_href(link.href), None);
    }
}

#[test]
fn skill_percent_fits_bar() {
    for skill in SKILLS {
        assert!(skill.percent <= 100, "{} over 100", skill.name);
    }
}

#[test]
fn data_width_is_bare_number() {
    assert_eq!(SKILLS[0].data_width(), "90");
    assert!(SKILLS.iter().all(|s| s.data_width().parse::<u8>() == Ok(s.percent)));
}
