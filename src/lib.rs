//! Separator visualizer crate root: re-exports and module wiring.
//!
//! An interactive editor for bichromatic (red/blue) point sets. Points are
//! placed on a drawing surface, sent to a remote separator service, and the
//! returned shapes are drawn over them together with coverage statistics.
//!
//! - `data`: geometry, point-set store, health and result summaries
//! - `api`: wire types, the HTTP service and the background client
//! - `render`: rasterisation of the drawing surface
//! - `panels`: egui panels reading an [`EditorView`]
//! - `app`: the eframe application and [`run_app`]
//! - `config`: defaults, YAML file and environment overrides

pub mod api;
pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod panels;
pub mod render;

// Public re-exports for a compact external API
pub use api::client::ServiceClient;
pub use api::http::HttpService;
pub use api::SeparatorService;
pub use app::{run_app, SeparatorApp};
pub use config::SeparatorConfig;
pub use data::geometry::{Algorithm, CanvasSize, Point, Shape};
pub use data::store::EditorStore;
pub use data::view::{EditorAction, EditorView};
pub use error::ApiError;
