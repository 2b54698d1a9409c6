use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{PersistenceMetadata, PersistenceStore, StoreSnapshot, FORMAT_VERSION};
use serde::{Deserialize, Serialize};
use stagiaire_core::{StagiaireError, StagiaireResult};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Data file written as one pretty-printed JSON document:
/// `{ "version": 1, "metadata": { .. }, "data": { .. } }`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    instance_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    metadata: PersistenceMetadata,
    data: serde_json::Value,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_instance_id(path, Uuid::new_v4())
    }

    pub fn with_instance_id(path: impl AsRef<Path>, instance_id: Uuid) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id,
        }
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    fn parse(&self, bytes: &[u8]) -> StagiaireResult<Envelope> {
        let envelope: Envelope = serde_json::from_slice(bytes).map_err(|e| {
            StagiaireError::Serialization(format!("{}: {}", self.path.display(), e))
        })?;
        if envelope.version != FORMAT_VERSION {
            return Err(StagiaireError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }
        Ok(envelope)
    }
}

#[async_trait::async_trait]
impl PersistenceStore for JsonFileStore {
    async fn save(&self, snapshot: StoreSnapshot) -> StagiaireResult<PersistenceMetadata> {
        let metadata = PersistenceMetadata {
            instance_id: self.instance_id,
            saved_at: chrono::Utc::now(),
            ..snapshot.metadata
        };
        let envelope = Envelope {
            version: FORMAT_VERSION,
            metadata,
            data: snapshot.data,
        };
        let bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| StagiaireError::Serialization(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &bytes).await?;

        tracing::info!(bytes = bytes.len(), path = %self.path.display(), "saved data file");
        Ok(envelope.metadata)
    }

    async fn load(&self) -> StagiaireResult<StoreSnapshot> {
        let bytes = AtomicWriter::read_all(&self.path).await?;
        let envelope = self.parse(&bytes)?;

        tracing::info!(
            bytes = bytes.len(),
            writer = %envelope.metadata.instance_id,
            "loaded data file"
        );
        Ok(StoreSnapshot {
            data: envelope.data,
            metadata: envelope.metadata,
        })
    }

    async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_saved_file_carries_envelope() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));
        let data = json!({ "interns": [{ "id": "stg-001" }], "projects": [] });

        let snapshot = StoreSnapshot::encode(&data, Uuid::new_v4()).unwrap();
        let metadata = store.save(snapshot).await.unwrap();
        assert_eq!(metadata.instance_id, store.instance_id());
        assert_eq!(metadata.app_version.as_deref(), Some(env!("CARGO_PKG_VERSION")));

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(store.path()).unwrap()).unwrap();
        assert_eq!(raw["version"], FORMAT_VERSION);
        assert_eq!(raw["data"]["interns"][0]["id"], "stg-001");

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.data, data);
        assert_eq!(loaded.metadata.instance_id, store.instance_id());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));
        assert!(!store.exists().await);
        assert!(store.load().await.is_err());
    }

    #[tokio::test]
    async fn test_file_without_app_version_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hand.json");
        let envelope = json!({
            "version": 1,
            "metadata": {
                "format_version": 1,
                "instance_id": Uuid::new_v4(),
                "saved_at": chrono::Utc::now(),
            },
            "data": { "tasks": [] }
        });
        std::fs::write(&path, serde_json::to_vec(&envelope).unwrap()).unwrap();

        let loaded = JsonFileStore::new(&path).load().await.unwrap();
        assert!(loaded.metadata.app_version.is_none());
        assert_eq!(loaded.data["tasks"], json!([]));
    }

    #[tokio::test]
    async fn test_unsupported_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("future.json");
        let envelope = json!({
            "version": 99,
            "metadata": {
                "format_version": 99,
                "instance_id": Uuid::new_v4(),
                "saved_at": chrono::Utc::now(),
            },
            "data": {}
        });
        std::fs::write(&path, serde_json::to_vec(&envelope).unwrap()).unwrap();

        let err = JsonFileStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, StagiaireError::Serialization(_)));
        assert!(err.to_string().contains("Unsupported format version: 99"));
    }

    #[tokio::test]
    async fn test_garbage_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().await.unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
