//! The editor state container.
//!
//! [`EditorStore`] is the only writer of the two point sequences, the last
//! [`ComputationResult`] and the error message. Every operation below is a
//! complete state transition; nothing else in the crate reaches into these
//! fields.
//!
//! Computations are tracked with a sequence number. [`EditorStore::begin_compute`]
//! hands out a [`ComputeTicket`] carrying a snapshot of the request, and
//! [`EditorStore::finish_compute`] only applies the outcome whose sequence is the
//! latest one issued. Editing points does not advance the sequence, so a
//! response for an older snapshot of the points is still shown once it lands.

use rand::Rng;
use tracing::debug;

use crate::api::{ComputeRequest, ComputeResponse};
use crate::config::RandomLayout;
use crate::error::ApiError;

use super::geometry::{Algorithm, CanvasSize, Point};
use super::input::{AddPoint, PointClass};
use super::result::ComputationResult;

pub const NO_RED_POINTS_MESSAGE: &str = "Please add at least one red point";
pub const COMPUTE_FAILED_MESSAGE: &str = "Failed to compute separators";

/// Snapshot handed to the computation client when a compute starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeTicket {
    pub seq: u64,
    pub request: ComputeRequest,
}

/// What [`EditorStore::finish_compute`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    Applied,
    Failed,
    /// A newer compute was issued after this one; the outcome was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct EditorStore {
    red: Vec<Point>,
    blue: Vec<Point>,
    algorithm: Algorithm,
    save_to_db: bool,
    result: Option<ComputationResult>,
    error: Option<String>,
    in_flight: Option<u64>,
    next_seq: u64,
    revision: u64,
    canvas: CanvasSize,
    layout: RandomLayout,
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new(CanvasSize::default(), RandomLayout::default(), Algorithm::default())
    }
}

impl EditorStore {
    pub fn new(canvas: CanvasSize, layout: RandomLayout, algorithm: Algorithm) -> Self {
        Self {
            red: Vec::new(),
            blue: Vec::new(),
            algorithm,
            save_to_db: false,
            result: None,
            error: None,
            in_flight: None,
            next_seq: 1,
            revision: 0,
            canvas,
            layout,
        }
    }

    // ── Reads ───────────────────────────────────────────────────────────────

    pub fn red_points(&self) -> &[Point] {
        &self.red
    }

    pub fn blue_points(&self) -> &[Point] {
        &self.blue
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn save_to_db(&self) -> bool {
        self.save_to_db
    }

    pub fn result(&self) -> Option<&ComputationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_computing(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Bumped whenever anything that is drawn on the canvas changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Compute may be triggered: nothing outstanding and at least one red point.
    pub fn can_compute(&self) -> bool {
        !self.is_computing() && !self.red.is_empty()
    }

    // ── Point mutations ─────────────────────────────────────────────────────

    /// Append a point to the sequence selected by `class`.
    ///
    /// Invalidates the result; the error message is left alone.
    pub fn add_point(&mut self, point: Point, class: PointClass) {
        match class {
            PointClass::Red => self.red.push(point),
            PointClass::Blue => self.blue.push(point),
        }
        self.invalidate_result();
    }

    pub fn apply(&mut self, intent: AddPoint) {
        self.add_point(intent.point, intent.class);
    }

    /// Empty both sequences, drop the result and the error.
    pub fn clear(&mut self) {
        self.red.clear();
        self.blue.clear();
        self.error = None;
        self.invalidate_result();
    }

    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Replace both sequences with freshly generated points.
    ///
    /// Counts are drawn from the layout ranges, coordinates uniformly from the
    /// canvas interior inset by the layout padding.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        let red_count = sample_count(rng, self.layout.red_count);
        let blue_count = sample_count(rng, self.layout.blue_count);
        self.red = self.random_points(rng, red_count);
        self.blue = self.random_points(rng, blue_count);
        self.error = None;
        self.invalidate_result();
    }

    /// Replace both sequences wholesale, e.g. from a session file.
    pub fn replace_points(&mut self, red: Vec<Point>, blue: Vec<Point>) {
        self.red = red;
        self.blue = blue;
        self.error = None;
        self.invalidate_result();
    }

    fn random_points<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<Point> {
        let pad = self.layout.padding;
        let (w, h) = (self.canvas.width as f64, self.canvas.height as f64);
        (0..count)
            .map(|_| Point::new(sample_axis(rng, pad, w - pad), sample_axis(rng, pad, h - pad)))
            .collect()
    }

    // ── Settings ────────────────────────────────────────────────────────────

    /// The displayed result keeps describing the last computation that ran,
    /// so this does not invalidate it.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn set_save_to_db(&mut self, save: bool) {
        self.save_to_db = save;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    // ── Computation lifecycle ───────────────────────────────────────────────

    /// Validate and start a computation.
    ///
    /// With no red points this records the validation message as the error
    /// and returns it; no ticket is issued. Otherwise the previous result and
    /// error are cleared, the store becomes busy and the request snapshot is
    /// returned.
    pub fn begin_compute(&mut self) -> Result<ComputeTicket, ApiError> {
        if self.red.is_empty() {
            let err = ApiError::Validation(NO_RED_POINTS_MESSAGE.to_string());
            self.error = Some(err.user_message(COMPUTE_FAILED_MESSAGE));
            return Err(err);
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);
        self.error = None;
        self.invalidate_result();
        Ok(ComputeTicket {
            seq,
            request: ComputeRequest {
                red_points: self.red.clone(),
                blue_points: self.blue.clone(),
                algorithm: self.algorithm,
                save_to_db: self.save_to_db,
            },
        })
    }

    /// Commit the outcome of the computation identified by `seq`.
    ///
    /// Clears the busy flag when `seq` is the latest issued computation.
    pub fn finish_compute(
        &mut self,
        seq: u64,
        outcome: Result<ComputeResponse, ApiError>,
    ) -> FinishOutcome {
        if self.in_flight != Some(seq) {
            debug!(seq, latest = ?self.in_flight, "dropping stale compute response");
            return FinishOutcome::Stale;
        }
        self.in_flight = None;
        self.revision += 1;
        match outcome.and_then(ComputationResult::try_from) {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                FinishOutcome::Applied
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.user_message(COMPUTE_FAILED_MESSAGE));
                FinishOutcome::Failed
            }
        }
    }

    fn invalidate_result(&mut self) {
        self.result = None;
        self.revision += 1;
    }
}

fn sample_count<R: Rng>(rng: &mut R, (lo, hi): (usize, usize)) -> usize {
    rng.random_range(lo.min(hi)..=hi.max(lo))
}

fn sample_axis<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}
