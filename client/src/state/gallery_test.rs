use super::*;

fn catalog() -> Catalog {
    Catalog::embedded().expect("embedded catalog")
}

fn settle_all(state: &mut GalleryState, plan: &[CardStep]) {
    for step in plan {
        state.settle(step);
    }
}

fn visible_ids(state: &GalleryState, catalog: &Catalog) -> Vec<String> {
    catalog
        .projects()
        .iter()
        .filter(|p| {
            let card = state.card(&p.id);
            card.displayed && card.faded_in
        })
        .map(|p| p.id.clone())
        .collect()
}

// =============================================================
// Filter planning
// =============================================================

#[test]
fn plan_all_shows_every_card_with_stagger() {
    let catalog = catalog();
    let plan = plan_filter(&catalog, &Filter::All);
    assert_eq!(plan.len(), catalog.projects().len());
    for (i, step) in plan.iter().enumerate() {
        let expected = u32::try_from(i).unwrap() * CARD_STAGGER_MS;
        assert!(matches!(step, CardStep::Show { delay_ms, .. } if *delay_ms == expected));
    }
}

#[test]
fn plan_category_staggers_by_visible_rank() {
    let catalog = catalog();
    let plan = plan_filter(&catalog, &Filter::Category("web".to_owned()));
    let shows: Vec<_> = plan
        .iter()
        .filter_map(|s| match s {
            CardStep::Show { id, delay_ms } => Some((id.as_str(), *delay_ms)),
            CardStep::Hide { .. } => None,
        })
        .collect();
    assert_eq!(shows, vec![("ew", 0)]);
    assert!(
        plan.iter()
            .filter(|s| matches!(s, CardStep::Hide { .. }))
            .all(|s| s.delay_ms() == CARD_HIDE_DELAY_MS)
    );
}

// =============================================================
// Filter application
// =============================================================

#[test]
fn new_state_displays_every_card_before_fade_in() {
    let catalog = catalog();
    let state = GalleryState::new(&catalog);
    for project in catalog.projects() {
        assert_eq!(state.card(&project.id), CardView { displayed: true, faded_in: false });
    }
}

#[test]
fn selecting_all_after_settle_shows_every_card() {
    let catalog = catalog();
    let mut state = GalleryState::new(&catalog);
    let plan = state.select_filter(&catalog, Filter::Category("game".to_owned()));
    settle_all(&mut state, &plan);
    let plan = state.select_filter(&catalog, Filter::All);
    settle_all(&mut state, &plan);
    assert_eq!(visible_ids(&state, &catalog).len(), catalog.projects().len());
}

#[test]
fn selecting_category_shows_exactly_members() {
    let catalog = catalog();
    let mut state = GalleryState::new(&catalog);
    let plan = state.select_filter(&catalog, Filter::Category("database".to_owned()));
    settle_all(&mut state, &plan);
    assert_eq!(visible_ids(&state, &catalog), vec!["sms".to_owned()]);
    assert_eq!(state.filter.as_str(), "database");
}

#[test]
fn hide_fades_immediately_and_leaves_layout_on_settle() {
    let catalog = catalog();
    let mut state = GalleryState::new(&catalog);
    let plan = state.select_filter(&catalog, Filter::All);
    settle_all(&mut state, &plan);

    let plan = state.select_filter(&catalog, Filter::Category("web".to_owned()));
    let atm = state.card("atm");
    assert!(atm.displayed);
    assert!(!atm.faded_in);

    settle_all(&mut state, &plan);
    assert!(!state.card("atm").displayed);
    assert!(state.card("ew").displayed);
}

#[test]
fn card_style_projects_view() {
    assert_eq!(
        CardView { displayed: true, faded_in: true }.style(),
        "display: block; opacity: 1; transform: translateY(0px);"
    );
    assert_eq!(
        CardView { displayed: false, faded_in: false }.style(),
        "display: none; opacity: 0; transform: translateY(20px);"
    );
}

// =============================================================
// Modal
// =============================================================

#[test]
fn open_detail_known_id_opens_modal() {
    let catalog = catalog();
    let mut state = GalleryState::new(&catalog);
    assert!(state.open_detail(&catalog, "atm"));
    assert_eq!(state.modal, ModalState::Open { project_id: "atm".to_owned() });
    assert!(state.scroll_locked());
    assert_eq!(state.modal_project(&catalog).map(|p| p.title.as_str()), Some("ATM Interface"));
}

#[test]
fn open_detail_unknown_id_is_ignored() {
    let catalog = catalog();
    let mut state = GalleryState::new(&catalog);
    assert!(!state.open_detail(&catalog, "nope"));
    assert_eq!(state.modal, ModalState::Closed);
    assert!(!state.modal_visible());
    assert_eq!(state.modal_style(), "display: none;");
}

#[test]
fn open_detail_unknown_id_keeps_current_modal() {
    let catalog = catalog();
    let mut state = GalleryState::new(&catalog);
    state.open_detail(&catalog, "sms");
    state.enter_modal();
    assert!(!state.open_detail(&catalog, "nope"));
    assert_eq!(state.modal, ModalState::Open { project_id: "sms".to_owned() });
    assert!(state.modal_entered);
}

#[test]
fn close_then_finish_restores_scroll_and_hides() {
    let catalog = catalog();
    let mut state = GalleryState::new(&catalog);
    state.open_detail(&catalog, "voting");
    state.enter_modal();

    assert!(state.close_modal());
    assert_eq!(state.modal_style(), "display: block; opacity: 0;");
    assert!(state.scroll_locked());

    state.finish_close();
    assert_eq!(state.modal, ModalState::Closed);
    assert!(!state.scroll_locked());
    assert!(!state.modal_entered);
    assert_eq!(state.modal_style(), "display: none;");
}

#[test]
fn close_when_closed_is_noop() {
    let catalog = catalog();
    let mut state = GalleryState::new(&catalog);
    assert!(!state.close_modal());
    state.finish_close();
    assert_eq!(state.modal, ModalState::Closed);
}

#[test]
fn finish_close_does_not_hide_a_reopened_modal() {
    let catalog = catalog();
    let mut state = GalleryState::new(&catalog);
    state.open_detail(&catalog, "sms");
    state.close_modal();
    state.open_detail(&catalog, "atm");
    state.finish_close();
    assert_eq!(state.modal, ModalState::Open { project_id: "atm".to_owned() });
}

// =============================================================
// Scroll lock writes
// =============================================================

#[test]
fn scroll_lock_initial_unlocked_state_writes_nothing() {
    assert_eq!(scroll_lock_write(None, false), None);
}

#[test]
fn scroll_lock_writes_only_on_transitions() {
    assert_eq!(scroll_lock_write(None, true), Some(true));
    assert_eq!(scroll_lock_write(Some(false), true), Some(true));
    assert_eq!(scroll_lock_write(Some(true), true), None);
    assert_eq!(scroll_lock_write(Some(true), false), Some(false));
    assert_eq!(scroll_lock_write(Some(false), false), None);
}

#[test]
fn filter_and_settle_keep_scroll_unlocked() {
    let catalog = catalog();
    let mut state = GalleryState::new(&catalog);
    let plan = state.select_filter(&catalog, Filter::parse("java"));
    settle_all(&mut state, &plan);
    assert_eq!(scroll_lock_write(Some(false), state.scroll_locked()), None);
}
