//! # Editing Scenarios
//!
//! End-to-end checks through the public API: gestures applied to a session,
//! the resulting template, and the rendered page in both media.

use pretty_assertions::assert_eq;
use serde_json::{Map, Value, json};

use stencil::document::{Direction, ElementId, ElementKind, Template};
use stencil::fields::{Field, FieldCatalog};
use stencil::render::{Medium, ViewMode};
use stencil::session::{Gesture, Outcome, Session};

fn patch(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

fn add(session: &mut Session, kind: ElementKind) -> ElementId {
    match session.apply(Gesture::Add { kind }).unwrap() {
        Outcome::Added(id) => id,
        other => panic!("expected Added, got {:?}", other),
    }
}

#[test]
fn test_inspector_row_preview() {
    let catalog = FieldCatalog::sample();
    let mut session = Session::new();
    let id = add(&mut session, ElementKind::Row);

    let left = json!({"left": {
        "label": "Inspector",
        "mapping": "none",
        "hide_label": false,
        "label_as_header": false,
        "stacked": false
    }});
    session.apply(Gesture::EditProps { id: id.clone(), props: patch(left) }).unwrap();
    let bound = json!({"left": {
        "label": "Inspector",
        "mapping": "supervisor_name",
        "hide_label": false,
        "label_as_header": false,
        "stacked": false
    }});
    session.apply(Gesture::EditProps { id, props: patch(bound) }).unwrap();

    let editing = session.page(&catalog);
    assert_eq!(editing.find("tp-link").unwrap().text_content(), "[supervisor_name]");

    session.apply(Gesture::SetView { view: ViewMode::Previewing }).unwrap();
    let page = session.page(&catalog);
    let column = page.find("tp-row__col").unwrap();
    assert_eq!(column.find("tp-row__label").unwrap().text_content(), "Inspector:");
    assert_eq!(column.find("tp-row__value").unwrap().text_content(), "Jane Smith");
    assert!(page.find("tp-link").is_none());
}

#[test]
fn test_unbound_table_shape() {
    let catalog = FieldCatalog::sample();
    let mut session = Session::new();
    let id = add(&mut session, ElementKind::Table);
    session
        .apply(Gesture::EditProps {
            id,
            props: patch(json!({"static_row_count": 3, "table_mapping": "none"})),
        })
        .unwrap();

    for view in [ViewMode::Editing, ViewMode::Previewing] {
        session.set_view(view);
        let page = session.page(&catalog);
        assert_eq!(page.find_all("tp-table__header").len(), 1);
        assert_eq!(page.find_all("tp-table__th").len(), 2);
        let rows = page.find_all("tp-table__row");
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.text_content().is_empty()));
    }
}

#[test]
fn test_choice_group_exact_match() {
    let catalog = FieldCatalog::new(vec![Field::list("chosen", "Chosen", &["A"])]).unwrap();
    let mut session = Session::new();
    let id = add(&mut session, ElementKind::ChoiceGroup);
    session
        .apply(Gesture::EditProps {
            id,
            props: patch(json!({"options": ["A", "B"], "columns": 2, "mapping": "chosen"})),
        })
        .unwrap();
    session.set_view(ViewMode::Previewing);

    let page = session.page(&catalog);
    let marked: Vec<bool> = page
        .find_all("tp-checkbox-item")
        .iter()
        .map(|item| item.find("tp-checkbox-box--checked").is_some())
        .collect();
    assert_eq!(marked, vec![true, false]);
}

#[test]
fn test_props_keys_match_default_schema() {
    let mut session = Session::new();
    for &kind in ElementKind::ALL {
        let id = add(&mut session, kind);
        let element = session.template().get(&id).unwrap();
        let mut actual: Vec<String> = element.props().to_value().as_object().unwrap().keys().cloned().collect();
        let mut expected: Vec<String> = kind.default_props().to_value().as_object().unwrap().keys().cloned().collect();
        actual.sort();
        expected.sort();
        assert_eq!(actual, expected, "{:?}", kind);
    }
    let mut ids = session.template().ids();
    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    ids.dedup();
    assert_eq!(ids.len(), ElementKind::ALL.len());
}

#[test]
fn test_merge_is_additive() {
    let mut session = Session::new();
    let id = add(&mut session, ElementKind::SectionHeader);
    session.update_props(&id, &patch(json!({"text": "WITNESSES"}))).unwrap();
    session.update_props(&id, &patch(json!({"bg_color": "#222222"}))).unwrap();

    let props = session.template().get(&id).unwrap().props().to_value();
    assert_eq!(
        props,
        json!({"text": "WITNESSES", "bg_color": "#222222", "text_color": "#ffffff"})
    );
}

#[test]
fn test_move_controls_and_bounds() {
    let mut session = Session::new();
    let a = add(&mut session, ElementKind::Title);
    let b = add(&mut session, ElementKind::Row);
    let c = add(&mut session, ElementKind::Signature);

    assert_eq!(session.apply(Gesture::Move { index: 0, direction: Direction::Up }).unwrap(), Outcome::Unchanged);
    assert_eq!(session.apply(Gesture::Move { index: 2, direction: Direction::Down }).unwrap(), Outcome::Unchanged);

    session.apply(Gesture::Move { index: 2, direction: Direction::Up }).unwrap();
    assert_eq!(session.template().ids(), vec![a.clone(), c.clone(), b.clone()]);
    session.apply(Gesture::Move { index: 1, direction: Direction::Down }).unwrap();
    assert_eq!(session.template().ids(), vec![a, b, c]);
}

#[test]
fn test_removal_and_selection() {
    let mut session = Session::new();
    let a = add(&mut session, ElementKind::Row);
    let b = add(&mut session, ElementKind::Row);
    assert_eq!(session.selection(), Some(&b));

    session.apply(Gesture::Remove { id: a }).unwrap();
    assert_eq!(session.selection(), Some(&b));
    session.apply(Gesture::Remove { id: b.clone() }).unwrap();
    assert_eq!(session.selection(), None);

    assert_eq!(session.apply(Gesture::Remove { id: b }).unwrap(), Outcome::Unchanged);
}

#[test]
fn test_print_medium_excludes_affordances() {
    let catalog = FieldCatalog::sample();
    let mut session = Session::new();
    add(&mut session, ElementKind::SectionHeader);
    add(&mut session, ElementKind::TextArea);

    let screen = session.render(&catalog, Medium::Screen);
    let print = session.render(&catalog, Medium::Print);
    assert!(screen.contains("tp-controls"));
    assert!(screen.contains("Enter details..."));
    assert!(!print.contains("tp-controls"));
    assert!(!print.contains("tp-drag-handle"));
    assert!(!print.contains("Enter details..."));

    let section = print.find("tp-section-header").unwrap();
    let text_area = print.find("tp-text-area").unwrap();
    assert!(section < text_area);
}

#[test]
fn test_template_file_round_trip() {
    let mut template = Template::new();
    template.add(ElementKind::MainHeader);
    template.add(ElementKind::FourFieldGrid);

    let json = serde_json::to_string(&template).unwrap();
    let loaded: Template = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, template);

    let catalog = FieldCatalog::sample();
    let mut session = Session::with_template(loaded);
    session.set_view(ViewMode::Previewing);
    let html = session.render(&catalog, Medium::Print);
    assert!(html.contains("Logo Area"));
}
