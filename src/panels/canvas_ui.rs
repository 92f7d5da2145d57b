use egui::{Color32, ColorImage, Pos2, Rect, Sense, TextureHandle, TextureOptions, Ui, Vec2};
use tiny_skia::Pixmap;
use tracing::warn;

use super::panel_trait::{Panel, PanelState};
use crate::data::geometry::Point;
use crate::data::input::{map_click, PointerClick};
use crate::data::view::{EditorAction, EditorView};
use crate::render::render_surface;

/// Convert a rendered surface into an egui image.
pub fn to_color_image(pixmap: &Pixmap) -> ColorImage {
    ColorImage::from_rgba_premultiplied(
        [pixmap.width() as usize, pixmap.height() as usize],
        pixmap.data(),
    )
}

/// The drawing surface. Re-renders only when the store revision moves.
pub struct CanvasPanel {
    pub state: PanelState,
    texture: Option<TextureHandle>,
    rendered_revision: Option<u64>,
}

impl Default for CanvasPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Canvas", egui_phosphor::regular::CROSSHAIR),
            texture: None,
            rendered_revision: None,
        }
    }
}

impl CanvasPanel {
    fn refresh_texture(&mut self, ui: &Ui, view: &EditorView<'_>) {
        let store = view.store;
        if self.texture.is_some() && self.rendered_revision == Some(store.revision()) {
            return;
        }
        let shapes = store.result().map(|r| r.shapes.as_slice()).unwrap_or(&[]);
        let canvas = store.canvas();
        match render_surface(
            store.red_points(),
            store.blue_points(),
            shapes,
            canvas.width,
            canvas.height,
        ) {
            Ok(pixmap) => {
                let image = to_color_image(&pixmap);
                match &mut self.texture {
                    Some(tex) => tex.set(image, TextureOptions::NEAREST),
                    None => {
                        self.texture = Some(ui.ctx().load_texture("canvas", image, TextureOptions::NEAREST))
                    }
                }
                self.rendered_revision = Some(store.revision());
            }
            Err(e) => warn!(error = %e, "canvas render failed"),
        }
    }
}

impl Panel for CanvasPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, view: &mut EditorView<'_>) {
        self.refresh_texture(ui, view);
        let Some(texture) = &self.texture else {
            ui.label("Canvas unavailable");
            return;
        };

        // One surface unit per egui point.
        let canvas = view.store.canvas();
        let size = Vec2::new(canvas.width as f32, canvas.height as f32);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        ui.painter().image(
            texture.id(),
            rect,
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
        ui.painter().rect_stroke(
            rect,
            8.0,
            egui::Stroke::new(2.0, Color32::from_gray(0xcc)),
            egui::StrokeKind::Outside,
        );
        let response = response.on_hover_cursor(egui::CursorIcon::Crosshair);

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let click = PointerClick {
                    screen_x: pos.x as f64,
                    screen_y: pos.y as f64,
                    modifiers: ui.input(|i| i.modifiers).into(),
                };
                let origin = Point::new(rect.min.x as f64, rect.min.y as f64);
                view.request(EditorAction::AddPoint(map_click(&click, origin)));
            }
        }
    }
}
