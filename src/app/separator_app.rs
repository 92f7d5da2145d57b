//! Standalone application that implements [`eframe::App`].
//!
//! [`SeparatorApp`] owns the editor store, the health/catalog records and the
//! handle to the service worker. Each frame it:
//!
//! 1. Fires the one-shot startup calls (health probe, catalog).
//! 2. Applies every service outcome that has arrived.
//! 3. Lays out the panels, which only read state and queue actions.
//! 4. Applies the queued actions in order.

use std::path::Path;
use std::time::Duration;

use eframe::egui;
use tracing::{debug, info, warn};

use crate::api::client::{ClientTargets, ServiceClient};
use crate::config::SeparatorConfig;
use crate::data::health::{HealthMonitor, ServiceCatalog};
use crate::data::session::{load_session_from_path, save_session_to_path};
use crate::data::store::EditorStore;
use crate::data::view::{EditorAction, EditorView};
use crate::panels::{error_banner, CanvasPanel, ControlsPanel, Panel, ResultsPanel, StatusPanel};
use crate::render::{render_surface, save_png};

pub struct SeparatorApp {
    pub store: EditorStore,
    pub health: HealthMonitor,
    pub catalog: ServiceCatalog,
    client: ServiceClient,

    status_panel: StatusPanel,
    controls_panel: ControlsPanel,
    canvas_panel: CanvasPanel,
    results_panel: ResultsPanel,

    started: bool,
}

impl SeparatorApp {
    pub fn new(config: &SeparatorConfig, client: ServiceClient) -> Self {
        let mut store = EditorStore::new(config.canvas, config.random, config.algorithm);
        store.set_save_to_db(config.save_to_db);
        let status_panel = StatusPanel {
            headline: config.title.clone(),
            ..StatusPanel::default()
        };
        Self {
            store,
            health: HealthMonitor::default(),
            catalog: ServiceCatalog::default(),
            client,
            status_panel,
            controls_panel: ControlsPanel::default(),
            canvas_panel: CanvasPanel::default(),
            results_panel: ResultsPanel::default(),
            started: false,
        }
    }

    /// Fire the startup calls. Subsequent calls do nothing.
    pub fn start(&mut self) {
        if std::mem::replace(&mut self.started, true) {
            return;
        }
        self.client.check_health(&mut self.health);
        self.client.fetch_catalog(&mut self.catalog);
    }

    /// Apply outcomes that arrived from the worker.
    pub fn poll_service(&mut self) -> usize {
        self.client.poll(ClientTargets {
            store: &mut self.store,
            health: &mut self.health,
            catalog: &mut self.catalog,
        })
    }

    pub fn apply_action(&mut self, action: EditorAction) {
        match action {
            EditorAction::AddPoint(intent) => {
                debug!(x = intent.point.x, y = intent.point.y, class = intent.class.label(), "add point");
                self.store.apply(intent);
            }
            EditorAction::Compute => {
                if let Ok(seq) = self.client.compute(&mut self.store) {
                    info!(
                        seq,
                        red = self.store.red_points().len(),
                        blue = self.store.blue_points().len(),
                        algorithm = self.store.algorithm().wire_name(),
                        "computation started"
                    );
                }
            }
            EditorAction::Clear => self.store.clear(),
            EditorAction::Randomize => {
                self.store.randomize();
                info!(
                    red = self.store.red_points().len(),
                    blue = self.store.blue_points().len(),
                    "generated random points"
                );
            }
            EditorAction::SetAlgorithm(a) => self.store.set_algorithm(a),
            EditorAction::SetSaveToDb(save) => self.store.set_save_to_db(save),
            EditorAction::DismissError => self.store.dismiss_error(),
            EditorAction::SaveSession => self.save_session(),
            EditorAction::LoadSession => self.load_session(),
            EditorAction::ExportPng => self.export_png(),
        }
    }

    fn default_file_name(prefix: &str, ext: &str) -> String {
        format!("{prefix}_{}.{ext}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
    }

    fn save_session(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(Self::default_file_name("points", "json"))
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };
        match save_session_to_path(&self.store, &path) {
            Ok(()) => info!(?path, "saved points"),
            Err(e) => self.report_file_error("save points", &path, e),
        }
    }

    fn load_session(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };
        match load_session_from_path(&path) {
            Ok(session) => {
                session.apply_to(&mut self.store);
                info!(?path, "loaded points");
            }
            Err(e) => self.report_file_error("load points", &path, e),
        }
    }

    fn export_png(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(Self::default_file_name("separators", "png"))
            .add_filter("PNG", &["png"])
            .save_file()
        else {
            return;
        };
        let shapes = self.store.result().map(|r| r.shapes.as_slice()).unwrap_or(&[]);
        let canvas = self.store.canvas();
        let outcome = render_surface(
            self.store.red_points(),
            self.store.blue_points(),
            shapes,
            canvas.width,
            canvas.height,
        )
        .and_then(|pixmap| save_png(&pixmap, &path));
        match outcome {
            Ok(()) => info!(?path, "exported canvas"),
            Err(e) => self.report_file_error("export PNG", &path, e),
        }
    }

    fn report_file_error(&mut self, what: &str, path: &Path, e: impl std::fmt::Display) {
        warn!(?path, error = %e, "failed to {what}");
        self.store.set_error(format!("Failed to {what}: {e}"));
    }
}

impl eframe::App for SeparatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.start();
        self.poll_service();

        let show_results = self.store.result().is_some() || self.store.is_computing();
        let mut view = EditorView::new(&self.store, &self.health, &self.catalog);

        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            self.status_panel.render_panel(ui, &mut view);
        });
        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.controls_panel.render_panel(ui, &mut view);
                });
            });
        if show_results {
            egui::SidePanel::right("results")
                .resizable(true)
                .default_width(260.0)
                .show(ctx, |ui| {
                    self.results_panel.render_panel(ui, &mut view);
                });
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            error_banner(ui, &mut view);
            egui::ScrollArea::both().show(ui, |ui| {
                self.canvas_panel.render_panel(ui, &mut view);
            });
        });

        for action in view.into_actions() {
            self.apply_action(action);
        }

        if !self.client.is_idle() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
