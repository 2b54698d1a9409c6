use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use stagiaire_core::{StagiaireError, StagiaireResult};
use std::path::Path;

use crate::store::AtomicWriter;

/// MIME type from the file extension.
pub fn mime_for_path(path: &Path) -> StagiaireResult<&'static str> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "gif" => Ok("image/gif"),
        "svg" => Ok("image/svg+xml"),
        "webp" => Ok("image/webp"),
        _ => Err(StagiaireError::Validation(format!(
            "Unsupported image type '{}'. Use png, jpg, gif, svg or webp",
            path.display()
        ))),
    }
}

/// Reads an image file into a `data:<mime>;base64,<payload>` URL.
pub async fn image_data_url(path: &Path) -> StagiaireResult<String> {
    let mime = mime_for_path(path)?;
    let bytes = AtomicWriter::read_all(path).await?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_mime_types() {
        assert_eq!(mime_for_path(Path::new("me.PNG")).unwrap(), "image/png");
        assert_eq!(mime_for_path(Path::new("me.jpeg")).unwrap(), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("me.svg")).unwrap(), "image/svg+xml");
        assert!(matches!(
            mime_for_path(Path::new("me.bmp")),
            Err(StagiaireError::Validation(_))
        ));
        assert!(mime_for_path(Path::new("noext")).is_err());
    }

    #[tokio::test]
    async fn test_data_url() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("avatar.gif");
        std::fs::write(&path, b"GIF89a").unwrap();
        let url = image_data_url(&path).await.unwrap();
        assert_eq!(url, "data:image/gif;base64,R0lGODlh");
    }
}
