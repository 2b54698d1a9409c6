use stagiaire_core::StagiaireResult;
use std::path::Path;
use tokio::fs;

/// Whole-file writes staged in a sibling temp file and persisted over the
/// target, so readers see either the old or the new contents.
pub struct AtomicWriter;

impl AtomicWriter {
    /// Missing parent directories are created.
    pub async fn write_atomic(path: &Path, data: &[u8]) -> StagiaireResult<()> {
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => std::env::current_dir()?,
        };
        fs::create_dir_all(&dir).await?;

        let staged = tempfile::Builder::new()
            .prefix(".stagiaire-")
            .suffix(".tmp")
            .tempfile_in(&dir)?;
        fs::write(staged.path(), data).await?;
        staged.persist(path).map_err(|e| e.error)?;

        tracing::debug!(bytes = data.len(), path = %path.display(), "atomic write");
        Ok(())
    }

    pub async fn read_all(path: &Path) -> StagiaireResult<Vec<u8>> {
        Ok(fs::read(path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("storage.json");

        AtomicWriter::write_atomic(&file_path, b"First").await.unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second").await.unwrap();

        let read_data = AtomicWriter::read_all(&file_path).await.unwrap();
        assert_eq!(read_data, b"Second");
    }

    #[tokio::test]
    async fn test_atomic_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("stagiaire").join("nested").join("data.json");

        AtomicWriter::write_atomic(&file_path, b"{}").await.unwrap();

        assert!(file_path.exists());
        let names: Vec<_> = std::fs::read_dir(file_path.parent().unwrap())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("data.json")]);
    }
}
