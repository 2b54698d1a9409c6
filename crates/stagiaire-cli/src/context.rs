use stagiaire_core::{AppConfig, StagiaireError, StagiaireResult, Theme};
use stagiaire_domain::Workspace;
use stagiaire_persistence::{DatasetStore, LocalStorage};
use std::ops::{Deref, DerefMut};
use std::path::Path;

/// One CLI invocation: the workspace loaded from the data file, with the
/// session restored from local storage.
pub struct CliContext {
    workspace: Workspace,
    pub storage: LocalStorage,
    pub config: AppConfig,
    store: DatasetStore,
}

impl CliContext {
    pub async fn load(config: AppConfig, data_file: &Path, storage_file: &Path) -> StagiaireResult<Self> {
        let store = DatasetStore::new(data_file);
        let data = store.load_or_seed().await?;
        let storage = LocalStorage::open(storage_file).await?;

        let mut workspace = Workspace::new(data);
        if workspace.restore_session(storage.session_user_id()) {
            tracing::debug!("Session restored from {}", storage.path().display());
        }

        Ok(Self {
            workspace,
            storage,
            config,
            store,
        })
    }

    pub fn require_session(&self) -> StagiaireResult<()> {
        if self.workspace.session().is_authenticated() {
            Ok(())
        } else {
            Err(StagiaireError::Authentication(
                "Not signed in. Run `stagiaire login` first".to_string(),
            ))
        }
    }

    pub fn theme(&self) -> Theme {
        self.storage
            .theme()
            .unwrap_or_else(|| self.config.effective_theme())
    }

    pub async fn save(&self) -> StagiaireResult<()> {
        self.store.save(self.workspace.data()).await
    }
}

impl Deref for CliContext {
    type Target = Workspace;

    fn deref(&self) -> &Workspace {
        &self.workspace
    }
}

impl DerefMut for CliContext {
    fn deref_mut(&mut self) -> &mut Workspace {
        &mut self.workspace
    }
}
