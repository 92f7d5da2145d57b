use separator_viz::error::RenderError;
use separator_viz::render::{render_surface, save_png, to_rgba_image};
use separator_viz::{Point, Shape};

fn rgb(pixmap: &tiny_skia::Pixmap, x: u32, y: u32) -> (u8, u8, u8) {
    let px = pixmap.pixel(x, y).unwrap().demultiply();
    (px.red(), px.green(), px.blue())
}

fn close(a: (u8, u8, u8), b: (u8, u8, u8)) -> bool {
    a.0.abs_diff(b.0) <= 3 && a.1.abs_diff(b.1) <= 3 && a.2.abs_diff(b.2) <= 3
}

#[test]
fn identical_inputs_render_identical_pixels() {
    let red = [Point::new(100.0, 100.0), Point::new(420.0, 310.0)];
    let blue = [Point::new(300.0, 300.0)];
    let shapes = [Shape { x: 90.0, y: 90.0, width: 20.0, height: 20.0 }];
    let a = render_surface(&red, &blue, &shapes, 800, 600).unwrap();
    let b = render_surface(&red, &blue, &shapes, 800, 600).unwrap();
    assert_eq!(a.data(), b.data());
}

#[test]
fn background_is_white_away_from_the_grid() {
    let p = render_surface(&[], &[], &[], 800, 600).unwrap();
    assert_eq!(rgb(&p, 10, 10), (255, 255, 255));
    assert_eq!(rgb(&p, 777, 533), (255, 255, 255));
}

#[test]
fn red_is_drawn_over_blue_at_the_same_spot() {
    let spot = [Point::new(110.0, 110.0)];
    let p = render_surface(&spot, &spot, &[], 800, 600).unwrap();
    assert!(close(rgb(&p, 110, 110), (0xef, 0x44, 0x44)), "got {:?}", rgb(&p, 110, 110));

    let only_blue = render_surface(&[], &spot, &[], 800, 600).unwrap();
    assert!(close(rgb(&only_blue, 110, 110), (0x3b, 0x82, 0xf6)));
}

#[test]
fn shapes_tint_their_interior() {
    let shapes = [Shape { x: 200.0, y: 200.0, width: 100.0, height: 100.0 }];
    let p = render_surface(&[], &[], &shapes, 800, 600).unwrap();
    let (r, g, b) = rgb(&p, 260, 260);
    assert!(r < 255, "interior should be tinted, got {:?}", (r, g, b));
    assert!(b > g);
    // Outside the shape stays white.
    assert_eq!(rgb(&p, 360, 360), (255, 255, 255));
}

#[test]
fn points_outside_the_surface_are_clipped_silently() {
    let far = [Point::new(-500.0, 9000.0)];
    let p = render_surface(&far, &far, &[], 800, 600).unwrap();
    let empty = render_surface(&[], &[], &[], 800, 600).unwrap();
    assert_eq!(p.data(), empty.data());
}

#[test]
fn zero_sized_surface_is_an_error() {
    let err = render_surface(&[], &[], &[], 0, 600).unwrap_err();
    assert!(matches!(err, RenderError::EmptySurface { width: 0, height: 600 }));
}

#[test]
fn png_export_writes_the_surface() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.png");
    let p = render_surface(&[Point::new(20.0, 20.0)], &[], &[], 120, 80).unwrap();
    save_png(&p, &path).unwrap();

    let loaded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(loaded.dimensions(), (120, 80));
    assert_eq!(loaded, to_rgba_image(&p));
}
