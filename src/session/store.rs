//! Persisted session token storage
//!
//! The file store keeps one token per backend origin under the well-known
//! `access_token` key:
//!
//! ```yaml
//! origins:
//!   http://localhost:8000:
//!     access_token: eyJhbGciOi...
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{orientor_dir, write_private};
use crate::error::{Result, SessionError};

/// Storage key holding the raw token string
pub const SESSION_KEY: &str = "access_token";

/// Holds one credential value across command invocations.
pub trait SessionStore: Send + Sync {
    /// Return the stored token, or `None`. Never fails.
    fn get(&self) -> Option<String>;

    /// Persist the token, replacing any previous value.
    fn set(&self, token: &str) -> Result<()>;

    /// Remove the token. Removing an absent token is a no-op.
    fn clear(&self) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    origins: BTreeMap<String, BTreeMap<String, String>>,
}

/// Session store backed by a YAML file, scoped to one backend origin
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
    origin: String,
}

impl FileSessionStore {
    /// Create a store for `origin` at `path`
    pub fn new(path: impl Into<PathBuf>, origin: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            origin: origin.into(),
        }
    }

    /// Default session file location (`~/.orientor/session.yaml`)
    pub fn default_path() -> Result<PathBuf> {
        Ok(orientor_dir()?.join("session.yaml"))
    }

    /// Resolve an optional override into a concrete session file path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn read_file(&self) -> std::result::Result<SessionFile, String> {
        if !self.path.exists() {
            return Ok(SessionFile::default());
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|e| e.to_string())?;
        if contents.trim().is_empty() {
            return Ok(SessionFile::default());
        }
        serde_yaml::from_str(&contents).map_err(|e| e.to_string())
    }

    fn write_file(&self, file: &SessionFile) -> Result<()> {
        let contents =
            serde_yaml::to_string(file).map_err(|e| SessionError::Storage(e.to_string()))?;
        write_private(&self.path, &contents)
    }

    /// Load for modification. A corrupt file is replaced rather than blocking login.
    fn read_for_write(&self) -> SessionFile {
        self.read_file().unwrap_or_else(|e| {
            log::warn!(
                "Discarding unreadable session file {}: {}",
                self.path.display(),
                e
            );
            SessionFile::default()
        })
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<String> {
        match self.read_file() {
            Ok(file) => {
                let token = file
                    .origins
                    .get(&self.origin)
                    .and_then(|entry| entry.get(SESSION_KEY))
                    .filter(|t| !t.is_empty())
                    .cloned();
                log::debug!(
                    "Session lookup for {}: {}",
                    self.origin,
                    if token.is_some() { "present" } else { "absent" }
                );
                token
            }
            Err(e) => {
                log::warn!(
                    "Could not read session file {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<()> {
        let mut file = self.read_for_write();
        file.origins
            .entry(self.origin.clone())
            .or_default()
            .insert(SESSION_KEY.to_string(), token.to_string());
        self.write_file(&file)?;
        log::debug!("Stored session for {}", self.origin);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut file = self.read_for_write();
        let removed = match file.origins.get_mut(&self.origin) {
            Some(entry) => {
                let removed = entry.remove(SESSION_KEY).is_some();
                if entry.is_empty() {
                    file.origins.remove(&self.origin);
                }
                removed
            }
            None => false,
        };
        if removed {
            self.write_file(&file)?;
            log::debug!("Cleared session for {}", self.origin);
        }
        Ok(())
    }
}

/// In-process session store
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: std::sync::Mutex::new(Some(token.into())),
        }
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn set(&self, token: &str) -> Result<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| SessionError::Storage(e.to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| SessionError::Storage(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}
