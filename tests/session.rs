use separator_viz::data::input::PointClass;
use separator_viz::data::session::{load_session_from_path, save_session_to_path, SessionFile};
use separator_viz::error::SessionError;
use separator_viz::{Algorithm, EditorStore, Point};

#[test]
fn saved_points_load_back_into_a_fresh_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("points.json");

    let mut store = EditorStore::default();
    store.add_point(Point::new(100.0, 100.0), PointClass::Red);
    store.add_point(Point::new(300.0, 300.0), PointClass::Blue);
    store.set_algorithm(Algorithm::TwoSquares);
    save_session_to_path(&store, &path).unwrap();

    let mut restored = EditorStore::default();
    load_session_from_path(&path).unwrap().apply_to(&mut restored);
    assert_eq!(restored.red_points(), store.red_points());
    assert_eq!(restored.blue_points(), store.blue_points());
    assert_eq!(restored.algorithm(), Algorithm::TwoSquares);
    assert!(restored.result().is_none());
}

#[test]
fn missing_optional_fields_default() {
    let s: SessionFile =
        serde_json::from_str(r#"{"red_points": [{"x": 1.0, "y": 2.0}]}"#).unwrap();
    assert_eq!(s.algorithm, Algorithm::TwoRectangles);
    assert!(s.blue_points.is_empty());
    assert_eq!(s.saved_at, None);
}

#[test]
fn garbage_file_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(load_session_from_path(&path), Err(SessionError::Json(_))));
}
