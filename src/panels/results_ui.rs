use egui::{Color32, RichText, Ui};

use super::controls_ui::{BLUE_COLOR, RED_COLOR};
use super::panel_trait::{Panel, PanelState};
use crate::data::result::{ComputationResult, ResultSummary};
use crate::data::view::EditorView;

const SUCCESS_COLOR: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
const INFO_COLOR: Color32 = Color32::from_rgb(0x8b, 0x5c, 0xf6);

/// Coverage statistics and shape details of the last computation.
pub struct ResultsPanel {
    pub state: PanelState,
}

impl Default for ResultsPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Results", egui_phosphor::regular::CHART_BAR),
        }
    }
}

fn card(ui: &mut Ui, label: &str, value: String, subtitle: String, color: Color32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(label).small());
        ui.label(RichText::new(value).heading().color(color));
        ui.label(RichText::new(subtitle).small().weak());
    });
}

impl ResultsPanel {
    pub fn show_result(&self, ui: &mut Ui, result: &ComputationResult) {
        let summary = ResultSummary::new(result);

        card(
            ui,
            "Red Points Covered",
            result.red.covered.to_string(),
            format!("of {} total", result.red.total),
            RED_COLOR,
        );
        card(
            ui,
            "Blue Points Covered",
            result.blue.covered.to_string(),
            format!("of {} total", result.blue.total),
            BLUE_COLOR,
        );
        card(
            ui,
            "Efficiency",
            format!("{}%", summary.efficiency_label()),
            "Coverage optimization".to_string(),
            SUCCESS_COLOR,
        );
        card(
            ui,
            "Execution Time",
            summary.execution_time_label(),
            "milliseconds".to_string(),
            INFO_COLOR,
        );

        ui.add_space(6.0);
        egui::Grid::new("result_details").num_columns(2).show(ui, |ui| {
            ui.label("Algorithm:");
            ui.strong(summary.algorithm());
            ui.end_row();
            ui.label("Shapes Found:");
            ui.strong(summary.shape_count().to_string());
            ui.end_row();
            if let Some(id) = result.computation_id {
                ui.label("Saved as:");
                ui.strong(format!("#{id}"));
                ui.end_row();
            }
        });

        let lines = summary.shape_lines();
        if !lines.is_empty() {
            ui.separator();
            ui.label(RichText::new("Shape Details").strong());
            egui::ScrollArea::vertical().show(ui, |ui| {
                for line in lines {
                    ui.label(RichText::new(format!("Shape {}", line.number)).strong());
                    ui.label(format!("Position: {}", line.position));
                    ui.label(format!("Size: {}", line.size));
                    ui.add_space(4.0);
                }
            });
        }
    }
}

impl Panel for ResultsPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, view: &mut EditorView<'_>) {
        ui.heading(self.title_and_icon());
        ui.separator();
        match view.store.result() {
            Some(result) => self.show_result(ui, result),
            None if view.store.is_computing() => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Computing...");
                });
            }
            None => {
                ui.label(RichText::new("Run the algorithm to see results").weak());
            }
        }
    }
}
