//! Filesystem storage for the media library.
//!
//! Files land flat under the upload root with a uuid prefix and are served
//! back at `/uploads/{filename}`.

use std::path::{Component, Path, PathBuf};

use bytes::Bytes;
use slug::slugify;
use thiserror::Error;
use tokio::{fs, io::AsyncWriteExt};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum UploadStorageError {
    #[error("invalid stored filename")]
    InvalidPath,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("uploaded file is empty")]
    EmptyPayload,
}

#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: i64,
}

#[derive(Debug)]
pub struct UploadStorage {
    root: PathBuf,
}

impl UploadStorage {
    /// Initialise storage rooted at the provided directory, creating it if
    /// necessary.
    pub fn new(root: PathBuf) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn store(
        &self,
        original_name: &str,
        data: Bytes,
    ) -> Result<StoredUpload, UploadStorageError> {
        if data.is_empty() {
            return Err(UploadStorageError::EmptyPayload);
        }

        let filename = build_filename(original_name);
        let absolute = self.resolve(&filename)?;
        let mime_type = mime_guess::from_path(original_name)
            .first_or_octet_stream()
            .to_string();

        let mut file = fs::File::create(&absolute).await?;
        file.write_all(&data).await?;
        file.flush().await?;

        Ok(StoredUpload {
            filename,
            mime_type,
            size_bytes: data.len() as i64,
        })
    }

    pub async fn read(&self, filename: &str) -> Result<Bytes, UploadStorageError> {
        let absolute = self.resolve(filename)?;
        let contents = fs::read(&absolute).await?;
        Ok(Bytes::from(contents))
    }

    /// Remove a stored file. Missing files are treated as success so a
    /// dangling catalogue row can always be cleaned up.
    pub async fn delete(&self, filename: &str) -> Result<(), UploadStorageError> {
        let absolute = self.resolve(filename)?;
        match fs::remove_file(&absolute).await {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(UploadStorageError::Io(err)),
        }
    }

    fn resolve(&self, filename: &str) -> Result<PathBuf, UploadStorageError> {
        let relative = Path::new(filename);
        if relative.is_absolute()
            || relative.components().any(|component| {
                matches!(component, Component::ParentDir | Component::Prefix(_))
            })
        {
            return Err(UploadStorageError::InvalidPath);
        }
        Ok(self.root.join(relative))
    }
}

fn build_filename(original_name: &str) -> String {
    let path = Path::new(original_name);
    let stem = path
        .file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("upload");
    let mut base = slugify(stem);
    if base.is_empty() {
        base = "upload".to_string();
    }

    let extension = path
        .extension()
        .and_then(|value| value.to_str())
        .map(|value| value.trim_matches('.').to_ascii_lowercase())
        .filter(|value| !value.is_empty());

    let identifier = Uuid::new_v4();
    match extension {
        Some(ext) => format!("{identifier}-{base}.{ext}"),
        None => format!("{identifier}-{base}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_and_delete_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = UploadStorage::new(dir.path().to_path_buf()).expect("storage");

        let stored = storage
            .store("My Photo.PNG", Bytes::from_static(b"png-bytes"))
            .await
            .expect("store");
        assert!(stored.filename.ends_with("-my-photo.png"));
        assert_eq!(stored.mime_type, "image/png");
        assert_eq!(stored.size_bytes, 9);
        assert!(dir.path().join(&stored.filename).exists());

        storage.delete(&stored.filename).await.expect("delete");
        assert!(!dir.path().join(&stored.filename).exists());
        // Deleting again is not an error.
        storage.delete(&stored.filename).await.expect("idempotent");
    }

    #[tokio::test]
    async fn empty_payloads_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = UploadStorage::new(dir.path().to_path_buf()).expect("storage");
        let err = storage.store("a.txt", Bytes::new()).await.unwrap_err();
        assert!(matches!(err, UploadStorageError::EmptyPayload));
    }

    #[tokio::test]
    async fn traversal_filenames_are_refused() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = UploadStorage::new(dir.path().to_path_buf()).expect("storage");
        let err = storage.delete("../escape.txt").await.unwrap_err();
        assert!(matches!(err, UploadStorageError::InvalidPath));
    }
}
