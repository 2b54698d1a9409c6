use stagiaire_core::StagiaireResult;
use stagiaire_domain::{fixtures, Dataset};
use std::path::Path;

use crate::store::JsonFileStore;
use crate::traits::{PersistenceStore, StoreSnapshot};

/// Reads and writes the whole [`Dataset`] through a [`JsonFileStore`].
#[derive(Debug, Clone)]
pub struct DatasetStore {
    store: JsonFileStore,
}

impl DatasetStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// The stored dataset, or the fixtures when no file exists yet.
    pub async fn load_or_seed(&self) -> StagiaireResult<Dataset> {
        if !self.store.exists().await {
            tracing::info!(path = %self.path().display(), "no data file, using fixtures");
            return Ok(fixtures::dataset());
        }
        self.store.load().await?.decode()
    }

    pub async fn save(&self, data: &Dataset) -> StagiaireResult<()> {
        let snapshot = StoreSnapshot::encode(data, self.store.instance_id())?;
        self.store.save(snapshot).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagiaire_domain::TaskStatus;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_seeds_fixtures() {
        let dir = tempdir().unwrap();
        let store = DatasetStore::new(dir.path().join("data.json"));
        let data = store.load_or_seed().await.unwrap();
        assert_eq!(data.users.len(), 6);
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_save_then_load_keeps_changes() {
        let dir = tempdir().unwrap();
        let store = DatasetStore::new(dir.path().join("data.json"));
        let mut data = store.load_or_seed().await.unwrap();
        data.tasks[2].status = TaskStatus::Bug;
        data.counters.task = 40;
        store.save(&data).await.unwrap();

        let reloaded = DatasetStore::new(store.path()).load_or_seed().await.unwrap();
        assert_eq!(reloaded.tasks[2].status, TaskStatus::Bug);
        assert_eq!(reloaded.counters.task, 40);
        assert_eq!(reloaded.interns.len(), data.interns.len());
    }
}
