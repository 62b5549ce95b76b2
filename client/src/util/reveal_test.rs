use super::*;

#[test]
fn fade_in_only_changes_class() {
    let effect = RevealEffect::FadeIn;
    assert_eq!(effect.class("section", false), "section");
    assert_eq!(effect.class("section", true), "section fade-in");
    assert_eq!(effect.style(true), "");
}

#[test]
fn other_effects_keep_base_class() {
    assert_eq!(RevealEffect::Rise.class("profile", true), "profile");
    assert_eq!(RevealEffect::text_section(true).class("text-section", true), "text-section");
}

#[test]
fn text_sections_slide_by_container() {
    assert_eq!(RevealEffect::text_section(true), RevealEffect::Slide(Side::Left));
    assert_eq!(RevealEffect::text_section(false), RevealEffect::Slide(Side::Right));
    assert_eq!(
        RevealEffect::Slide(Side::Left).style(true),
        "animation: fadeInLeft 1s ease-out forwards;"
    );
    assert_eq!(RevealEffect::Slide(Side::Right).style(false), "");
}

#[test]
fn rise_starts_hidden_and_scaled() {
    let hidden = RevealEffect::Rise.style(false);
    assert!(hidden.contains("opacity: 0"));
    assert!(hidden.contains("translateY(30px) scale(0.9)"));
    let shown = RevealEffect::Rise.style(true);
    assert!(shown.contains("opacity: 1"));
    assert!(shown.contains("translateY(0) scale(1)"));
}

#[test]
fn fill_uses_percent_once_revealed() {
    let effect = RevealEffect::Fill { percent: 85 };
    assert_eq!(effect.style(false), "width: 0%;");
    assert_eq!(effect.style(true), "width: 85%;");
}

#[test]
fn stagger_delays_by_index() {
    assert!(RevealEffect::footer_section(0).style(true).contains("transition-delay: 0ms"));
    assert!(RevealEffect::footer_section(3).style(true).contains("transition-delay: 450ms"));
    assert!(RevealEffect::footer_section(1).style(false).contains("translateY(30px)"));
    assert!(RevealEffect::footer_icon(2).style(false).contains("translateY(20px)"));
    assert!(RevealEffect::footer_icon(2).style(true).contains("transition: all 500ms ease"));
}

#[test]
fn only_skill_bars_and_footer_icons_wait_for_half() {
    assert!((RevealTarget::Element.threshold() - 0.1).abs() < f64::EPSILON);
    assert!((RevealTarget::SkillBars.threshold() - 0.5).abs() < f64::EPSILON);
    assert!((RevealTarget::FooterIcons.threshold() - 0.5).abs() < f64::EPSILON);
}
