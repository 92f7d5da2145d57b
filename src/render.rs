//! Raster rendering of the editor canvas with tiny-skia.
//!
//! Layers, back to front: white background, reference grid, shapes, blue
//! points, red points. Red is drawn last so that it wins on an exact
//! coordinate collision. Nothing is culled here; anything outside the
//! surface is clipped by the rasterizer.

use std::path::Path;

use image::{Rgba, RgbaImage};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::data::geometry::{Point, Shape};
use crate::error::RenderError;

/// Colours and sizes used by [`render_surface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStyle {
    pub background: [u8; 4],
    pub grid_color: [u8; 4],
    pub grid_period: f32,
    pub grid_width: f32,
    pub shape_fill: [u8; 4],
    pub shape_stroke: [u8; 4],
    pub shape_stroke_width: f32,
    pub red: [u8; 4],
    pub blue: [u8; 4],
    pub point_border: [u8; 4],
    pub point_radius: f32,
    pub point_border_width: f32,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            background: [0xff, 0xff, 0xff, 0xff],
            grid_color: [0xe0, 0xe0, 0xe0, 0xff],
            grid_period: 50.0,
            grid_width: 0.5,
            // 15% opacity violet
            shape_fill: [0x8b, 0x5c, 0xf6, 38],
            shape_stroke: [0x8b, 0x5c, 0xf6, 0xff],
            shape_stroke_width: 2.0,
            red: [0xef, 0x44, 0x44, 0xff],
            blue: [0x3b, 0x82, 0xf6, 0xff],
            point_border: [0xff, 0xff, 0xff, 0xff],
            point_radius: 6.0,
            point_border_width: 2.0,
        }
    }
}

/// Render with the default style.
pub fn render_surface(
    red: &[Point],
    blue: &[Point],
    shapes: &[Shape],
    width: u32,
    height: u32,
) -> Result<Pixmap, RenderError> {
    render_surface_with_style(red, blue, shapes, width, height, &SurfaceStyle::default())
}

/// Pure function of its arguments: identical inputs give identical pixels.
pub fn render_surface_with_style(
    red: &[Point],
    blue: &[Point],
    shapes: &[Shape],
    width: u32,
    height: u32,
    style: &SurfaceStyle,
) -> Result<Pixmap, RenderError> {
    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::EmptySurface { width, height })?;
    pixmap.fill(color(style.background));

    draw_grid(&mut pixmap, style);
    for shape in shapes {
        draw_shape(&mut pixmap, shape, style);
    }
    for p in blue {
        draw_point(&mut pixmap, p, style.blue, style);
    }
    for p in red {
        draw_point(&mut pixmap, p, style.red, style);
    }
    Ok(pixmap)
}

fn color([r, g, b, a]: [u8; 4]) -> Color {
    Color::from_rgba8(r, g, b, a)
}

fn paint([r, g, b, a]: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn stroke(width: f32) -> Stroke {
    Stroke {
        width,
        ..Stroke::default()
    }
}

fn draw_grid(pixmap: &mut Pixmap, style: &SurfaceStyle) {
    if style.grid_period <= 0.0 {
        return;
    }
    let (w, h) = (pixmap.width() as f32, pixmap.height() as f32);
    let paint = paint(style.grid_color);
    let stroke = stroke(style.grid_width);

    let mut line = |x0: f32, y0: f32, x1: f32, y1: f32| {
        let mut pb = PathBuilder::new();
        pb.move_to(x0, y0);
        pb.line_to(x1, y1);
        if let Some(path) = pb.finish() {
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    };

    let mut x = 0.0;
    while x <= w {
        line(x, 0.0, x, h);
        x += style.grid_period;
    }
    let mut y = 0.0;
    while y <= h {
        line(0.0, y, w, y);
        y += style.grid_period;
    }
}

fn draw_shape(pixmap: &mut Pixmap, shape: &Shape, style: &SurfaceStyle) {
    let Some(rect) = Rect::from_xywh(
        shape.x as f32,
        shape.y as f32,
        shape.width as f32,
        shape.height as f32,
    ) else {
        return;
    };
    let path = PathBuilder::from_rect(rect);
    pixmap.fill_path(
        &path,
        &paint(style.shape_fill),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
    pixmap.stroke_path(
        &path,
        &paint(style.shape_stroke),
        &stroke(style.shape_stroke_width),
        Transform::identity(),
        None,
    );
}

fn draw_point(pixmap: &mut Pixmap, p: &Point, fill: [u8; 4], style: &SurfaceStyle) {
    let Some(path) = PathBuilder::from_circle(p.x as f32, p.y as f32, style.point_radius) else {
        return;
    };
    pixmap.fill_path(
        &path,
        &paint(fill),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
    pixmap.stroke_path(
        &path,
        &paint(style.point_border),
        &stroke(style.point_border_width),
        Transform::identity(),
        None,
    );
}

/// Straight-alpha copy of a rendered surface.
pub fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut out = RgbaImage::new(pixmap.width(), pixmap.height());
    for (i, px) in pixmap.pixels().iter().enumerate() {
        let c = px.demultiply();
        let x = i as u32 % pixmap.width();
        let y = i as u32 / pixmap.width();
        out.put_pixel(x, y, Rgba([c.red(), c.green(), c.blue(), c.alpha()]));
    }
    out
}

pub fn save_png(pixmap: &Pixmap, path: &Path) -> Result<(), RenderError> {
    to_rgba_image(pixmap).save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
