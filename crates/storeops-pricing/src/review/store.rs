use super::ReviewSession;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Persistence port for review progress.
pub trait ReviewSessionStore: Send + Sync {
    fn load(&self) -> Result<ReviewSession, SessionStoreError>;
    fn save(&self, session: &ReviewSession) -> Result<(), SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("failed to access review session at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("review session at {path} is not valid JSON: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("review session store unavailable: {0}")]
    Unavailable(String),
}

/// Stores the session as a JSON document. A missing file loads as an empty
/// session.
#[derive(Debug, Clone)]
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SessionStoreError {
        SessionStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn format_error(&self, source: serde_json::Error) -> SessionStoreError {
        SessionStoreError::Format {
            path: self.path.clone(),
            source,
        }
    }
}

impl ReviewSessionStore for JsonFileSessionStore {
    fn load(&self) -> Result<ReviewSession, SessionStoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved review session");
                return Ok(ReviewSession::default());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        serde_json::from_str(&raw).map_err(|err| self.format_error(err))
    }

    fn save(&self, session: &ReviewSession) -> Result<(), SessionStoreError> {
        let payload = serde_json::to_string_pretty(session).map_err(|err| self.format_error(err))?;
        std::fs::write(&self.path, payload).map_err(|err| self.io_error(err))?;
        debug!(path = %self.path.display(), entries = session.len(), "review session saved");
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemorySessionStore {
    session: Arc<Mutex<ReviewSession>>,
}

impl ReviewSessionStore for InMemorySessionStore {
    fn load(&self) -> Result<ReviewSession, SessionStoreError> {
        self.session
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| SessionStoreError::Unavailable("session mutex poisoned".to_string()))
    }

    fn save(&self, session: &ReviewSession) -> Result<(), SessionStoreError> {
        let mut guard = self
            .session
            .lock()
            .map_err(|_| SessionStoreError::Unavailable("session mutex poisoned".to_string()))?;
        *guard = session.clone();
        Ok(())
    }
}
