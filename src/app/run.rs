//! Top-level entry point for running the visualizer as a native window.

use eframe::egui;
use tracing::{error, info};

use crate::api::client::ServiceClient;
use crate::api::http::HttpService;
use crate::config::SeparatorConfig;

use super::separator_app::SeparatorApp;

/// Launch the visualizer in a native window.
///
/// 1. Builds the HTTP service for `cfg.api_base_url` and starts its worker.
/// 2. Opens a native window and enters the eframe event loop.
///
/// The call blocks until the window is closed.
pub fn run_app(mut cfg: SeparatorConfig) -> eframe::Result<()> {
    let service = HttpService::new(&cfg.api_base_url, cfg.request_timeout).map_err(|e| {
        error!(url = %cfg.api_base_url, error = %e, "cannot build HTTP client");
        eframe::Error::AppCreation(Box::new(e))
    })?;
    info!(url = service.base_url(), timeout = ?cfg.request_timeout, "using separator service");
    let client = ServiceClient::spawn(service, cfg.request_timeout);
    let app = SeparatorApp::new(&cfg, client);

    let title = cfg.title.clone();
    let mut opts = cfg.native_options.take().unwrap_or_default();

    // Room for the canvas plus both side panels.
    if opts.viewport.inner_size.is_none() {
        let w = cfg.canvas.width as f32 + 620.0;
        let h = cfg.canvas.height as f32 + 160.0;
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(w, h));
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(app))
        }),
    )
}
