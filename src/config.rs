//! Application configuration.
//!
//! Values come from, in increasing precedence: built-in defaults, an optional
//! YAML file (`~/.separator-viz/config.yaml` unless a path is given), the
//! `SEPARATOR_API_URL` environment variable and command-line flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::data::geometry::{Algorithm, CanvasSize};
use crate::error::ConfigError;

pub const API_URL_ENV: &str = "SEPARATOR_API_URL";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

// ─────────────────────────────────────────────────────────────────────────────
// Random layout
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters of the "random points" action.
///
/// Counts are inclusive ranges. Blue is expected to outnumber red, and
/// `padding` keeps generated points away from every edge of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomLayout {
    pub red_count: (usize, usize),
    pub blue_count: (usize, usize),
    pub padding: f64,
}

impl Default for RandomLayout {
    fn default() -> Self {
        Self {
            red_count: (10, 15),
            blue_count: (15, 25),
            padding: 50.0,
        }
    }
}

impl RandomLayout {
    pub fn validate(&self, canvas: CanvasSize) -> Result<(), ConfigError> {
        for (name, (lo, hi)) in [("red_count", self.red_count), ("blue_count", self.blue_count)] {
            if lo > hi {
                return Err(ConfigError::Invalid(format!(
                    "{name} range {lo}..={hi} is inverted"
                )));
            }
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "padding must be a non-negative number, got {}",
                self.padding
            )));
        }
        let min_side = canvas.width.min(canvas.height) as f64;
        if 2.0 * self.padding >= min_side {
            return Err(ConfigError::Invalid(format!(
                "padding {} leaves no interior on a {}x{} canvas",
                self.padding, canvas.width, canvas.height
            )));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SeparatorConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field              | Purpose |
/// |--------------------|---------|
/// | `api_base_url`     | Root of the separator service |
/// | `request_timeout`  | Upper bound for every service call |
/// | `canvas`           | Drawing surface extent |
/// | `random`           | "Random points" parameters |
/// | `algorithm`        | Initially selected algorithm |
/// | `save_to_db`       | Initial state of the persistence flag |
pub struct SeparatorConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub canvas: CanvasSize,
    pub random: RandomLayout,
    pub algorithm: Algorithm,
    pub save_to_db: bool,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            canvas: CanvasSize::default(),
            random: RandomLayout::default(),
            algorithm: Algorithm::default(),
            save_to_db: false,
            title: "Asymmetric Separator Visualizer".to_string(),
            native_options: None,
        }
    }
}

impl Clone for SeparatorConfig {
    fn clone(&self) -> Self {
        Self {
            api_base_url: self.api_base_url.clone(),
            request_timeout: self.request_timeout,
            canvas: self.canvas,
            random: self.random,
            algorithm: self.algorithm,
            save_to_db: self.save_to_db,
            title: self.title.clone(),
            native_options: self.native_options.clone(),
        }
    }
}

impl std::fmt::Debug for SeparatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeparatorConfig")
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout", &self.request_timeout)
            .field("canvas", &self.canvas)
            .field("random", &self.random)
            .field("algorithm", &self.algorithm)
            .field("save_to_db", &self.save_to_db)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl SeparatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("API base URL is empty".to_string()));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid("request timeout must be positive".to_string()));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas {}x{} has no area",
                self.canvas.width, self.canvas.height
            )));
        }
        self.random.validate(self.canvas)
    }

    /// Overlay the fields present in `file`.
    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(url) = file.api_base_url {
            self.api_base_url = url;
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout = Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO);
        }
        if let Some(canvas) = file.canvas {
            self.canvas = canvas;
        }
        if let Some(random) = file.random {
            self.random = random;
        }
        if let Some(algorithm) = file.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(save) = file.save_to_db {
            self.save_to_db = save;
        }
        if let Some(title) = file.title {
            self.title = title;
        }
    }

    /// Honour `SEPARATOR_API_URL` when it is set and non-empty.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_base_url = url;
            }
        }
    }

    /// Apply command-line overrides and re-validate the result.
    pub fn apply_cli(&mut self, api_url: Option<String>, save_to_db: bool) -> Result<(), ConfigError> {
        if let Some(url) = api_url {
            self.api_base_url = url;
        }
        if save_to_db {
            self.save_to_db = true;
        }
        self.validate()
    }

    /// Defaults, then `path` (or the default file if it exists), then env.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        match path {
            Some(p) => cfg.apply_file(ConfigFile::load(p)?),
            None => {
                if let Some(p) = default_config_path().filter(|p| p.exists()) {
                    cfg.apply_file(ConfigFile::load(&p)?);
                }
            }
        }
        cfg.apply_env();
        cfg.validate()?;
        Ok(cfg)
    }
}

/// `~/.separator-viz/config.yaml`, if `HOME` is set.
pub fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".separator-viz").join("config.yaml"))
}

// ─────────────────────────────────────────────────────────────────────────────
// ConfigFile
// ─────────────────────────────────────────────────────────────────────────────

/// On-disk form of the configuration. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub api_base_url: Option<String>,
    pub request_timeout_secs: Option<f64>,
    pub canvas: Option<CanvasSize>,
    pub random: Option<RandomLayout>,
    pub algorithm: Option<Algorithm>,
    pub save_to_db: Option<bool>,
    pub title: Option<String>,
}

impl ConfigFile {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&s)
    }
}
