use separator_viz::data::health::{HealthMonitor, ServiceCatalog};
use separator_viz::data::input::{AddPoint, PointClass};
use separator_viz::panels::*;
use separator_viz::{EditorAction, EditorStore, EditorView, Point};

#[test]
fn run_label_switches_while_computing() {
    assert_eq!(ControlsPanel::run_label(false), ControlsPanel::RUN_LABEL);
    assert_eq!(ControlsPanel::run_label(true), ControlsPanel::COMPUTING_LABEL);
}

#[test]
fn full_label_contains_both_icon_and_title() {
    let p = ResultsPanel::default();
    let label = p.title_and_icon();
    assert!(label.contains(p.title()));
    assert!(label.contains(p.icon_only().unwrap()));
}

#[test]
fn every_panel_has_an_icon() {
    assert!(StatusPanel::default().icon_only().is_some());
    assert!(ControlsPanel::default().icon_only().is_some());
    assert!(CanvasPanel::default().icon_only().is_some());
    assert!(ResultsPanel::default().icon_only().is_some());
}

#[test]
fn view_returns_actions_in_request_order() {
    let store = EditorStore::default();
    let health = HealthMonitor::default();
    let catalog = ServiceCatalog::default();
    let mut view = EditorView::new(&store, &health, &catalog);
    let add = EditorAction::AddPoint(AddPoint {
        point: Point::new(1.0, 2.0),
        class: PointClass::Blue,
    });
    view.request(add.clone());
    view.request(EditorAction::Compute);
    assert_eq!(view.into_actions(), vec![add, EditorAction::Compute]);
}
