//! Session files: save and load the edited point sets as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

use super::geometry::{Algorithm, Point};
use super::store::EditorStore;

/// Serializable snapshot of the editable state.
///
/// Results are not part of a session; they are recomputed after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    #[serde(default)]
    pub algorithm: Algorithm,
    pub red_points: Vec<Point>,
    #[serde(default)]
    pub blue_points: Vec<Point>,
    #[serde(default)]
    pub saved_at: Option<String>,
}

impl From<&EditorStore> for SessionFile {
    fn from(store: &EditorStore) -> Self {
        Self {
            algorithm: store.algorithm(),
            red_points: store.red_points().to_vec(),
            blue_points: store.blue_points().to_vec(),
            saved_at: Some(chrono::Local::now().to_rfc3339()),
        }
    }
}

impl SessionFile {
    /// Load into `store`. Counts as a point mutation: the result is dropped.
    pub fn apply_to(self, store: &mut EditorStore) {
        store.set_algorithm(self.algorithm);
        store.replace_points(self.red_points, self.blue_points);
    }
}

pub fn save_session_to_path(store: &EditorStore, path: &Path) -> Result<(), SessionError> {
    let json = serde_json::to_string_pretty(&SessionFile::from(store))?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn load_session_from_path(path: &Path) -> Result<SessionFile, SessionError> {
    let s = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&s)?)
}
