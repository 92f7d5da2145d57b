use separator_viz::data::input::{map_click, Modifiers, PointClass, PointerClick};
use separator_viz::Point;

fn click(x: f64, y: f64, modifiers: Modifiers) -> PointerClick {
    PointerClick {
        screen_x: x,
        screen_y: y,
        modifiers,
    }
}

#[test]
fn plain_click_adds_red_in_surface_coordinates() {
    let intent = map_click(&click(150.0, 130.0, Modifiers::NONE), Point::new(50.0, 30.0));
    assert_eq!(intent.class, PointClass::Red);
    assert_eq!(intent.point, Point::new(100.0, 100.0));
}

#[test]
fn shift_click_adds_blue() {
    let intent = map_click(&click(10.5, 20.25, Modifiers::SHIFT), Point::new(0.0, 0.0));
    assert_eq!(intent.class, PointClass::Blue);
    assert!(intent.class.is_secondary());
    assert_eq!(intent.point, Point::new(10.5, 20.25));
}

#[test]
fn other_modifiers_do_not_select_blue() {
    let ctrl = Modifiers {
        ctrl: true,
        alt: true,
        ..Modifiers::NONE
    };
    assert_eq!(map_click(&click(1.0, 1.0, ctrl), Point::new(0.0, 0.0)).class, PointClass::Red);
}

#[test]
fn clicks_outside_the_surface_are_not_clamped() {
    let intent = map_click(&click(5.0, 5.0, Modifiers::NONE), Point::new(20.0, 10.0));
    assert_eq!(intent.point, Point::new(-15.0, -5.0));
}

#[test]
fn egui_modifiers_convert() {
    let m: Modifiers = egui::Modifiers::SHIFT.into();
    assert!(m.shift);
    assert!(!m.ctrl);
}
