use callbreak_core::game::serialization::SessionSnapshot;
use callbreak_core::game::session::GameSession;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// JSON file persistence for the play sequence. Load failures of any kind
/// fall back to an empty session; the tracker must never refuse to start
/// over a damaged save file.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode state for {path:?}: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
        path: PathBuf,
    },
    #[error("failed to write state file {path:?}: {source}")]
    Write {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to remove state file {path:?}: {source}")]
    Remove {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session. A missing, unreadable, or inconsistent
    /// record loads as a fresh game.
    pub fn load(&self) -> GameSession {
        if !self.path.exists() {
            return GameSession::new();
        }
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "state file unreadable, starting fresh");
                return GameSession::new();
            }
        };
        let snapshot = match SessionSnapshot::from_json(&text) {
            Ok(snapshot) => snapshot,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "state file corrupt, starting fresh");
                return GameSession::new();
            }
        };
        match snapshot.restore() {
            Ok(session) => session,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "state file inconsistent, starting fresh");
                GameSession::new()
            }
        }
    }

    pub fn save(&self, session: &GameSession) -> Result<(), StoreError> {
        let json = SessionSnapshot::to_json(session).map_err(|source| StoreError::Encode {
            source,
            path: self.path.clone(),
        })?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                    source,
                    path: self.path.clone(),
                })?;
            }
        }
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            source,
            path: self.path.clone(),
        })
    }

    /// Remove the record; a missing file counts as already cleared.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Remove {
                source,
                path: self.path.clone(),
            }),
        }
    }
}
