//! Shared value types: points, separator shapes, the algorithm selector and
//! the canvas extent.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in surface space. Origin is the top-left corner, y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle returned by the separator service.
///
/// `(x, y)` is the top-left corner. The client never builds these itself;
/// they only arrive inside a computation response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Shape {
    /// `true` if every field is finite and both extents are non-negative.
    pub fn is_well_formed(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

/// Which remote algorithm computes the separators.
///
/// Serialized with the wire names the service expects (`"rectangles"`,
/// `"squares"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "rectangles")]
    TwoRectangles,
    #[serde(rename = "squares")]
    TwoSquares,
}

impl Algorithm {
    pub const ALL: &'static [Algorithm] = &[Algorithm::TwoRectangles, Algorithm::TwoSquares];

    /// Name used in requests and as key of the `/api/algorithms` catalog.
    pub fn wire_name(self) -> &'static str {
        match self {
            Algorithm::TwoRectangles => "rectangles",
            Algorithm::TwoSquares => "squares",
        }
    }

    /// Human readable label for selectors.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::TwoRectangles => "Two Rectangles",
            Algorithm::TwoSquares => "Two Squares",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pixel extent of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}
