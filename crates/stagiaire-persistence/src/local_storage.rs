//! Local key/value storage.
//!
//! A flat JSON object of string values on disk. Every mutation rewrites the
//! file atomically before returning, so a crash never leaves a stale session.

use stagiaire_core::{StagiaireError, StagiaireResult, Theme};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::store::AtomicWriter;

/// Id of the signed-in user.
pub const AUTH_USER_ID_KEY: &str = "auth_user_id";
/// Profile picture as a data URL.
pub const PROFILE_IMAGE_KEY: &str = "profileImage";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl LocalStorage {
    /// Opens the storage file; a missing file is an empty storage.
    pub async fn open(path: impl AsRef<Path>) -> StagiaireResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            let bytes = AtomicWriter::read_all(&path).await?;
            serde_json::from_slice(&bytes).map_err(|e| {
                StagiaireError::Serialization(format!(
                    "Invalid storage file {}: {}",
                    path.display(),
                    e
                ))
            })?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub async fn set(&mut self, key: &str, value: impl Into<String>) -> StagiaireResult<()> {
        self.entries.insert(key.to_string(), value.into());
        self.flush().await
    }

    pub async fn remove(&mut self, key: &str) -> StagiaireResult<Option<String>> {
        let previous = self.entries.remove(key);
        if previous.is_some() {
            self.flush().await?;
        }
        Ok(previous)
    }

    pub async fn clear(&mut self) -> StagiaireResult<()> {
        self.entries.clear();
        self.flush().await
    }

    async fn flush(&self) -> StagiaireResult<()> {
        let bytes = serde_json::to_vec_pretty(&self.entries)
            .map_err(|e| StagiaireError::Serialization(e.to_string()))?;
        AtomicWriter::write_atomic(&self.path, &bytes).await
    }

    pub fn session_user_id(&self) -> Option<&str> {
        self.get(AUTH_USER_ID_KEY).filter(|id| !id.is_empty())
    }

    pub async fn set_session_user_id(&mut self, user_id: &str) -> StagiaireResult<()> {
        self.set(AUTH_USER_ID_KEY, user_id).await
    }

    pub async fn clear_session(&mut self) -> StagiaireResult<()> {
        self.remove(AUTH_USER_ID_KEY).await.map(|_| ())
    }

    pub fn profile_image(&self) -> Option<&str> {
        self.get(PROFILE_IMAGE_KEY)
    }

    pub async fn set_profile_image(&mut self, data_url: String) -> StagiaireResult<()> {
        self.set(PROFILE_IMAGE_KEY, data_url).await
    }

    /// Stored theme; unreadable values are ignored.
    pub fn theme(&self) -> Option<Theme> {
        self.get(THEME_KEY).and_then(|t| t.parse().ok())
    }

    pub async fn set_theme(&mut self, theme: Theme) -> StagiaireResult<()> {
        self.set(THEME_KEY, theme.as_str()).await
    }
}
