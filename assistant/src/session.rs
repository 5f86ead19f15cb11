//! Editing-session ownership.
//!
//! The assistant never resolves a global editor singleton; it is handed a
//! [`SessionProvider`] capability instead. [`EditorWorkspace`] is the
//! in-process implementation: at most one active session, with replaced
//! sessions parked on a deferred-release queue until the end of the current
//! submit cycle.

use std::path::PathBuf;

use crate::scene::{SaveError, Session};

/// Access to "the scene currently being edited".
pub trait SessionProvider {
    fn active(&self) -> Option<&Session>;

    fn active_mut(&mut self) -> Option<&mut Session>;

    /// Install a new active session. Any previous session is released
    /// through the deferred-destruction queue, not dropped in place.
    fn replace(&mut self, session: Session);

    /// Persist the active session. Returns `Ok(false)` when there is no
    /// session to save; that is a no-op, not an error.
    fn save_active(&mut self) -> Result<bool, SaveError>;

    /// Drain the deferred-release queue. Called once per submit cycle.
    fn flush_deferred(&mut self) {}
}

/// In-process session owner used by the editor shell and by tests.
pub struct EditorWorkspace {
    active: Option<Session>,
    pending_release: Vec<Session>,
    scene_path: PathBuf,
}

impl EditorWorkspace {
    pub fn new(scene_path: impl Into<PathBuf>) -> Self {
        EditorWorkspace {
            active: None,
            pending_release: Vec::new(),
            scene_path: scene_path.into(),
        }
    }

    pub fn scene_path(&self) -> &std::path::Path {
        &self.scene_path
    }

    /// Sessions replaced but not yet released.
    pub fn deferred_count(&self) -> usize {
        self.pending_release.len()
    }
}

impl Default for EditorWorkspace {
    fn default() -> Self {
        EditorWorkspace::new(crate::scene::default_scene_path())
    }
}

impl SessionProvider for EditorWorkspace {
    fn active(&self) -> Option<&Session> {
        self.active.as_ref()
    }

    fn active_mut(&mut self) -> Option<&mut Session> {
        self.active.as_mut()
    }

    fn replace(&mut self, session: Session) {
        if let Some(previous) = self.active.take() {
            self.pending_release.push(previous);
        }
        self.active = Some(session);
    }

    fn save_active(&mut self) -> Result<bool, SaveError> {
        match &self.active {
            Some(session) => {
                session.save_to(&self.scene_path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn flush_deferred(&mut self) {
        self.pending_release.clear();
    }
}
