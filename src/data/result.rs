//! The last completed computation and the statistics derived from it.

use crate::api::ComputeResponse;
use crate::error::ApiError;

use super::geometry::Shape;

/// Covered / total count for one point class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coverage {
    pub covered: usize,
    pub total: usize,
}

/// Outcome of one successful compute call.
///
/// Coverage counts are kept as the service reported them, even when a
/// covered count exceeds its total.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputationResult {
    pub shapes: Vec<Shape>,
    pub red: Coverage,
    pub blue: Coverage,
    pub execution_time_ms: f64,
    /// Algorithm name as the service reported it.
    pub algorithm: String,
    /// Present only when persistence was requested and succeeded.
    pub computation_id: Option<i64>,
    pub created_at: Option<String>,
}

impl TryFrom<ComputeResponse> for ComputationResult {
    type Error = ApiError;

    fn try_from(r: ComputeResponse) -> Result<Self, Self::Error> {
        if let Some(i) = r.shapes.iter().position(|s| !s.is_well_formed()) {
            return Err(ApiError::Malformed(format!(
                "shape {} has a negative or non-finite extent",
                i + 1
            )));
        }
        if !r.execution_time_ms.is_finite() {
            return Err(ApiError::Malformed(
                "execution time is not a number".to_string(),
            ));
        }
        Ok(Self {
            shapes: r.shapes,
            red: Coverage {
                covered: r.red_covered,
                total: r.total_red,
            },
            blue: Coverage {
                covered: r.blue_covered,
                total: r.total_blue,
            },
            execution_time_ms: r.execution_time_ms,
            algorithm: r.algorithm,
            computation_id: r.computation_id,
            created_at: r.created_at,
        })
    }
}

/// Percentage of blue points kept out of the shapes.
///
/// Defined as 100 when there are no blue points at all.
pub fn efficiency(blue: Coverage) -> f64 {
    if blue.total == 0 {
        100.0
    } else {
        (1.0 - blue.covered as f64 / blue.total as f64) * 100.0
    }
}

/// Display strings for a [`ComputationResult`].
///
/// Built on demand from a borrowed result, never stored next to it.
#[derive(Debug, Clone, Copy)]
pub struct ResultSummary<'a> {
    result: &'a ComputationResult,
}

impl<'a> ResultSummary<'a> {
    pub fn new(result: &'a ComputationResult) -> Self {
        Self { result }
    }

    pub fn efficiency(&self) -> f64 {
        efficiency(self.result.blue)
    }

    /// One decimal, e.g. `"75.0"`.
    pub fn efficiency_label(&self) -> String {
        format!("{:.1}", self.efficiency())
    }

    /// e.g. `"1 of 1"`.
    pub fn red_coverage_label(&self) -> String {
        coverage_label(self.result.red)
    }

    pub fn blue_coverage_label(&self) -> String {
        coverage_label(self.result.blue)
    }

    /// Milliseconds with two decimals, e.g. `"3.20"`.
    pub fn execution_time_label(&self) -> String {
        format!("{:.2}", self.result.execution_time_ms)
    }

    pub fn algorithm(&self) -> &str {
        &self.result.algorithm
    }

    pub fn shape_count(&self) -> usize {
        self.result.shapes.len()
    }

    /// Per-shape lines, numbered from 1 in service order.
    pub fn shape_lines(&self) -> Vec<ShapeLine> {
        self.result
            .shapes
            .iter()
            .enumerate()
            .map(|(i, s)| ShapeLine {
                number: i + 1,
                position: format!("({:.1}, {:.1})", s.x, s.y),
                size: format!("{:.1} × {:.1}", s.width, s.height),
            })
            .collect()
    }
}

fn coverage_label(c: Coverage) -> String {
    format!("{} of {}", c.covered, c.total)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeLine {
    pub number: usize,
    pub position: String,
    pub size: String,
}
