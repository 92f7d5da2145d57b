//! Read-only view handed to panels, and the actions they can request.
//!
//! Panels never mutate editor state directly. They read through
//! [`EditorView`] and queue [`EditorAction`]s, which the application applies
//! in order after the frame's UI has been laid out.

use super::geometry::Algorithm;
use super::health::{HealthMonitor, ServiceCatalog};
use super::input::AddPoint;
use super::store::EditorStore;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    AddPoint(AddPoint),
    Compute,
    Clear,
    Randomize,
    SetAlgorithm(Algorithm),
    SetSaveToDb(bool),
    DismissError,
    SaveSession,
    LoadSession,
    ExportPng,
}

pub struct EditorView<'a> {
    pub store: &'a EditorStore,
    pub health: &'a HealthMonitor,
    pub catalog: &'a ServiceCatalog,
    pending: Vec<EditorAction>,
}

impl<'a> EditorView<'a> {
    pub fn new(store: &'a EditorStore, health: &'a HealthMonitor, catalog: &'a ServiceCatalog) -> Self {
        Self {
            store,
            health,
            catalog,
            pending: Vec::new(),
        }
    }

    pub fn request(&mut self, action: EditorAction) {
        self.pending.push(action);
    }

    /// Actions queued so far, in request order.
    pub fn into_actions(self) -> Vec<EditorAction> {
        self.pending
    }
}
