//! Application shell for the visualizer.
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`separator_app`] | [`SeparatorApp`] (eframe) wiring of store, service worker and panels |
//! | [`run`]           | Top-level [`run_app()`] entry point |

mod run;
mod separator_app;

// ── Public re-exports consumed by lib.rs ─────────────────────────────────────
pub use run::run_app;
pub use separator_app::SeparatorApp;
