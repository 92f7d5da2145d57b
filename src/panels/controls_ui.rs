use egui::{Color32, RichText, Ui};

use super::panel_trait::{Panel, PanelState};
use crate::data::geometry::Algorithm;
use crate::data::view::{EditorAction, EditorView};

pub const RED_COLOR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const BLUE_COLOR: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);

/// Algorithm selector, action buttons, instructions and point counters.
pub struct ControlsPanel {
    pub state: PanelState,
}

impl Default for ControlsPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Controls", egui_phosphor::regular::SLIDERS),
        }
    }
}

impl ControlsPanel {
    pub const RUN_LABEL: &'static str = "▶ Run Algorithm";
    pub const COMPUTING_LABEL: &'static str = "⏳ Computing...";
    pub const RANDOM_LABEL: &'static str = "🎲 Random Points";
    pub const CLEAR_LABEL: &'static str = "🗑 Clear All";
    pub const SAVE_SESSION_LABEL: &'static str = "💾 Save points...";
    pub const LOAD_SESSION_LABEL: &'static str = "📂 Load points...";
    pub const EXPORT_PNG_LABEL: &'static str = "🖼 Export PNG...";

    /// Label of the compute button for the given busy state.
    pub fn run_label(computing: bool) -> &'static str {
        if computing {
            Self::COMPUTING_LABEL
        } else {
            Self::RUN_LABEL
        }
    }
}

impl Panel for ControlsPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, view: &mut EditorView<'_>) {
        let store = view.store;
        let busy = store.is_computing();

        ui.heading(self.title_and_icon());
        ui.separator();

        ui.label("Algorithm");
        let mut selected = store.algorithm();
        ui.add_enabled_ui(!busy, |ui| {
            egui::ComboBox::from_id_salt("algorithm")
                .selected_text(selected.label())
                .show_ui(ui, |ui| {
                    for a in Algorithm::ALL {
                        ui.selectable_value(&mut selected, *a, a.label());
                    }
                });
        });
        if selected != store.algorithm() {
            view.request(EditorAction::SetAlgorithm(selected));
        }

        if let Some(info) = view.catalog.algorithm(selected) {
            ui.small(&info.name);
            ui.small(format!("Time: {}", info.time_complexity));
            ui.small(format!("Space: {}", info.space_complexity));
            if let Some(use_case) = &info.use_case {
                ui.small(use_case).on_hover_text(&info.description);
            }
        }

        let mut save = store.save_to_db();
        if ui
            .add_enabled(!busy, egui::Checkbox::new(&mut save, "Save to database"))
            .changed()
        {
            view.request(EditorAction::SetSaveToDb(save));
        }

        ui.add_space(8.0);
        ui.vertical_centered_justified(|ui| {
            let run = ui.add_enabled(store.can_compute(), egui::Button::new(Self::run_label(busy)));
            let run = if store.red_points().is_empty() {
                run.on_disabled_hover_text("Add at least one red point first")
            } else {
                run
            };
            if run.clicked() {
                view.request(EditorAction::Compute);
            }
            if ui.add_enabled(!busy, egui::Button::new(Self::RANDOM_LABEL)).clicked() {
                view.request(EditorAction::Randomize);
            }
            if ui.add_enabled(!busy, egui::Button::new(Self::CLEAR_LABEL)).clicked() {
                view.request(EditorAction::Clear);
            }
        });

        ui.add_space(8.0);
        ui.collapsing("Instructions", |ui| {
            ui.label(RichText::new("● Click to add red points").color(RED_COLOR));
            ui.label(RichText::new("● Shift + Click to add blue points").color(BLUE_COLOR));
            ui.label("Select an algorithm and click \"Run Algorithm\"");
        });

        ui.separator();
        ui.label(RichText::new(format!("● Red Points: {}", store.red_points().len())).color(RED_COLOR));
        ui.label(RichText::new(format!("● Blue Points: {}", store.blue_points().len())).color(BLUE_COLOR));

        ui.separator();
        ui.add_enabled_ui(!busy, |ui| {
            if ui.button(Self::SAVE_SESSION_LABEL).clicked() {
                view.request(EditorAction::SaveSession);
            }
            if ui.button(Self::LOAD_SESSION_LABEL).clicked() {
                view.request(EditorAction::LoadSession);
            }
        });
        if ui.button(Self::EXPORT_PNG_LABEL).clicked() {
            view.request(EditorAction::ExportPng);
        }
    }
}
