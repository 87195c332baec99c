use portfolio_core::{
    Catalog, Category, PortfolioService, ProjectId, ProjectRecord, Selection, EMPTY_STATE_MESSAGE,
};

fn service() -> PortfolioService {
    PortfolioService::new(Catalog::builtin())
}

#[test]
fn default_selection_renders_all_cards_with_wildcard_active() {
    let service = service();
    let view = service.render(&Selection::default());

    assert_eq!(view.cards.len(), service.catalog().len());
    assert_eq!(view.active_label(), Some("All"));
    assert_eq!(view.controls.iter().filter(|c| c.active).count(), 1);
    assert!(view.empty_state.is_none());
}

#[test]
fn controls_follow_category_set_order() {
    let view = service().render(&Selection::default());
    let labels: Vec<_> = view.controls.iter().map(|c| c.label).collect();
    assert_eq!(
        labels,
        vec![
            "All",
            "Robotics & Automation",
            "Perception",
            "AI & ML",
            "Embedded Systems"
        ]
    );
}

#[test]
fn category_selection_marks_control_and_filters_cards() {
    let service = service();
    let mut selection = Selection::default();
    selection.select_category("AI & ML");
    selection.set_query("xgboost");

    let view = service.render(&selection);
    assert_eq!(view.active_label(), Some("AI & ML"));
    let titles: Vec<_> = view.cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Energy Consumption Forecasting (LSTM)",
            "Water Potability Classification"
        ]
    );
}

#[test]
fn card_subtitle_joins_org_and_year() {
    let catalog = Catalog::with_derived_categories(vec![
        ProjectRecord::new("Arm", "Lab", "2021–2022", Category::RoboticsAutomation)
            .with_bullets(["Moved."]),
        ProjectRecord::new("Placeholder", "", "2025", Category::RoboticsAutomation)
            .with_bullets(["Impact."]),
    ]);
    let view = PortfolioService::new(catalog).render(&Selection::default());

    assert_eq!(view.cards[0].subtitle, "Lab • 2021–2022");
    assert_eq!(view.cards[1].subtitle, " • 2025");
    assert_eq!(view.cards[1].id, ProjectId::new(1));
}

#[test]
fn no_match_renders_empty_state_message() {
    let view = service().render(
        &Selection::default()
            .with_category("Perception")
            .with_query("zzzznomatch"),
    );
    assert!(view.is_empty());
    assert_eq!(view.empty_state, Some(EMPTY_STATE_MESSAGE));
    assert_eq!(view.active_label(), Some("Perception"));
}

#[test]
fn unknown_category_renders_empty_state_without_active_control() {
    let view = service().render(&Selection::default().with_category("Quantum"));
    assert!(view.cards.is_empty());
    assert_eq!(view.empty_state, Some(EMPTY_STATE_MESSAGE));
    assert_eq!(view.active_label(), None);
}

#[test]
fn view_serializes_for_external_renderers() {
    let view = service().render(&Selection::default().with_query("schmitt"));
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["cards"][0]["title"], "Schmitt Trigger Circuit");
    assert_eq!(json["cards"][0]["id"], 14);
    assert!(json["empty_state"].is_null());
}
