use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use stagiaire_core::{StagiaireError, StagiaireResult};
use std::path::Path;
use uuid::Uuid;

/// Current on-disk format of the data file.
pub const FORMAT_VERSION: u32 = 1;

/// Header stored next to the dataset in every data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceMetadata {
    pub format_version: u32,
    /// Store instance that wrote the file.
    pub instance_id: Uuid,
    pub saved_at: DateTime<Utc>,
    /// Crate version of the writer; absent in files written by hand.
    #[serde(default)]
    pub app_version: Option<String>,
}

impl PersistenceMetadata {
    pub fn new(instance_id: Uuid) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            instance_id,
            saved_at: Utc::now(),
            app_version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }
    }
}

/// A dataset as plain JSON plus the metadata it was or will be saved with.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub data: serde_json::Value,
    pub metadata: PersistenceMetadata,
}

impl StoreSnapshot {
    pub fn encode<T: Serialize>(value: &T, instance_id: Uuid) -> StagiaireResult<Self> {
        let data = serde_json::to_value(value)
            .map_err(|e| StagiaireError::Serialization(e.to_string()))?;
        Ok(Self {
            data,
            metadata: PersistenceMetadata::new(instance_id),
        })
    }

    pub fn decode<T: DeserializeOwned>(self) -> StagiaireResult<T> {
        serde_json::from_value(self.data).map_err(|e| StagiaireError::Serialization(e.to_string()))
    }
}

#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Writes the snapshot and returns the metadata actually stored.
    async fn save(&self, snapshot: StoreSnapshot) -> StagiaireResult<PersistenceMetadata>;

    async fn load(&self) -> StagiaireResult<StoreSnapshot>;

    async fn exists(&self) -> bool;

    fn path(&self) -> &Path;
}
