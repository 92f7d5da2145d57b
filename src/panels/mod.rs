pub mod canvas_ui;
pub mod controls_ui;
pub mod panel_trait;
pub mod results_ui;
pub mod status_ui;

pub use canvas_ui::CanvasPanel;
pub use controls_ui::ControlsPanel;
pub use panel_trait::{Panel, PanelState};
pub use results_ui::ResultsPanel;
pub use status_ui::{error_banner, StatusPanel};
