//! # Session Token Store
//!
//! Holds the bearer token attached to every backend request. Written only at
//! login/logout, read on every request.
//!
//! - [`MemoryTokenStore`]: process-lifetime storage (browser-tab equivalent)
//! - [`FileTokenStore`]: persisted to a small JSON file (device storage equivalent)

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// Storage for the session token.
pub trait TokenStore: Send + Sync {
    /// Current token, if a session is active.
    fn token(&self) -> Option<String>;

    /// Replace the stored token.
    fn set_token(&self, token: &str) -> Result<()>;

    /// Forget the stored token.
    fn clear(&self) -> Result<()>;
}

/// In-memory token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn set_token(&self, token: &str) -> Result<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.write() = None;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// Token store persisted as `{"token": "..."}` at a fixed path.
///
/// The file is read once on open; afterwards reads are served from memory and
/// writes go to both.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    cached: RwLock<Option<String>>,
}

impl FileTokenStore {
    /// Open the store, loading an existing session file if there is one.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cached = Self::load(&path)?;
        tracing::debug!(path = %path.display(), has_token = cached.is_some(), "Token store opened");
        Ok(Self {
            path,
            cached: RwLock::new(cached),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let session: StoredSession = serde_json::from_str(&raw)?;
        Ok(Some(session.token))
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        self.cached.read().clone()
    }

    fn set_token(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let body = serde_json::to_string(&StoredSession {
            token: token.to_string(),
        })?;
        fs::write(&self.path, body)?;
        *self.cached.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        *self.cached.write() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.token(), None);

        store.set_token("abc").unwrap();
        assert_eq!(store.token().as_deref(), Some("abc"));

        store.clear().unwrap();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = FileTokenStore::open(&path).unwrap();
        assert_eq!(store.token(), None);
        store.set_token("persisted-token").unwrap();

        let reopened = FileTokenStore::open(&path).unwrap();
        assert_eq!(reopened.token().as_deref(), Some("persisted-token"));

        reopened.clear().unwrap();
        assert!(!path.exists());
        // Clearing twice is fine.
        reopened.clear().unwrap();
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let err = FileTokenStore::open(&path).unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
