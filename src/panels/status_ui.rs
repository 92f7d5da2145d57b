use egui::{Color32, RichText, Ui};

use super::panel_trait::{Panel, PanelState};
use crate::data::health::HealthMonitor;
use crate::data::view::{EditorAction, EditorView};

const ERROR_FILL: Color32 = Color32::from_rgb(0xfe, 0xe2, 0xe2);
const ERROR_TEXT: Color32 = Color32::from_rgb(0x99, 0x1b, 0x1b);

/// Header: title, connectivity badge and service version.
pub struct StatusPanel {
    pub state: PanelState,
    pub headline: String,
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Status", egui_phosphor::regular::PLUGS_CONNECTED),
            headline: "Asymmetric Separator Visualizer".to_string(),
        }
    }
}

impl StatusPanel {
    pub const CONNECTED_LABEL: &'static str = "API Connected";
    pub const DISCONNECTED_LABEL: &'static str = "API Disconnected";
    pub const CHECKING_LABEL: &'static str = "Checking API...";

    /// Badge text and colour for the current health state.
    pub fn badge(health: &HealthMonitor) -> (&'static str, Color32) {
        match health.status() {
            Some(s) if s.is_healthy() => (Self::CONNECTED_LABEL, Color32::from_rgb(0x10, 0xb9, 0x81)),
            Some(_) => (Self::DISCONNECTED_LABEL, Color32::from_rgb(0xef, 0x44, 0x44)),
            None => (Self::CHECKING_LABEL, Color32::GRAY),
        }
    }
}

impl Panel for StatusPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, view: &mut EditorView<'_>) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(&self.headline);
                ui.label(RichText::new("Compute optimal separators for bichromatic point sets").weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (label, color) = Self::badge(view.health);
                let badge = ui.label(RichText::new(format!("● {label}")).color(color));
                if let Some(status) = view.health.status() {
                    let db = if status.database_connected { "connected" } else { "not connected" };
                    badge.on_hover_text(format!(
                        "{}\nversion: {}\ndatabase: {db}",
                        status.message, status.version
                    ));
                }
                if let Some(v) = view.catalog.version() {
                    ui.label(RichText::new(format!("{} v{} ({})", v.name, v.version, v.mode)).small().weak());
                }
            });
        });
    }
}

/// Dismissible banner for the active error message, if any.
pub fn error_banner(ui: &mut Ui, view: &mut EditorView<'_>) {
    let store = view.store;
    let Some(message) = store.error() else {
        return;
    };
    let mut dismiss = false;
    egui::Frame::group(ui.style()).fill(ERROR_FILL).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("⚠ {message}")).color(ERROR_TEXT));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                dismiss = ui.small_button("×").on_hover_text("Dismiss").clicked();
            });
        });
    });
    if dismiss {
        view.request(EditorAction::DismissError);
    }
}
