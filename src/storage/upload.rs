//! Upload commit path.
//!
//! Each incoming file is handled independently: sanitize the client
//! name, compute the destination id, then either commit the bytes or
//! report a conflict when something already occupies that path. A
//! conflicting upload is discarded, never overwritten; the batch-level
//! signal is the route's concern.

use crate::error::{AppError, Result};
use crate::storage::{child_id, FileStore};

/// Outcome of a single file within an upload batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadDisposition {
    /// Committed under this id.
    Stored(String),
    /// Something already exists at the destination; bytes were dropped.
    Conflict(String),
}

/// Strips every character outside `[A-Za-z0-9._-]`. No path separator
/// survives, which is the primary traversal defense for uploads.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-'))
        .collect()
}

impl FileStore {
    /// Commits one uploaded file into `folder` (or the root when absent).
    pub async fn store_upload(
        &self,
        folder: Option<&str>,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<UploadDisposition> {
        let sanitized = sanitize_file_name(original_name);
        if sanitized.is_empty() {
            return Err(AppError::InvalidPath(original_name.to_string()));
        }

        let id = match folder {
            Some(folder) if !folder.is_empty() => child_id(folder, &sanitized),
            _ => sanitized.clone(),
        };

        let dest = self.resolver().resolve(&id)?;
        if tokio::fs::metadata(&dest).await.is_ok() {
            return Ok(UploadDisposition::Conflict(sanitized));
        }

        tokio::fs::write(&dest, bytes).await?;

        Ok(UploadDisposition::Stored(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::open(dir.path()).expect("store");
        (dir, store)
    }

    #[test]
    fn sanitize_strips_everything_outside_the_whitelist() {
        assert_eq!(sanitize_file_name("a b@#c.png"), "abc.png");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "....etcpasswd");
        assert_eq!(sanitize_file_name("clean_name-1.txt"), "clean_name-1.txt");
    }

    #[tokio::test]
    async fn second_upload_of_same_name_conflicts_and_keeps_first_bytes() {
        let (dir, store) = store();

        let first = store
            .store_upload(None, "a b@#c.png", b"first")
            .await
            .expect("first upload");
        assert_eq!(first, UploadDisposition::Stored("abc.png".to_string()));

        let second = store
            .store_upload(None, "ab c.png", b"second")
            .await
            .expect("second upload");
        assert_eq!(second, UploadDisposition::Conflict("abc.png".to_string()));

        let kept = std::fs::read(dir.path().join("abc.png")).expect("read");
        assert_eq!(kept, b"first");
    }

    #[tokio::test]
    async fn upload_lands_inside_the_target_folder() {
        let (dir, store) = store();
        std::fs::create_dir(dir.path().join("photos")).expect("mkdir");

        let outcome = store
            .store_upload(Some("/photos"), "cat.png", b"png-bytes")
            .await
            .expect("upload");

        assert_eq!(
            outcome,
            UploadDisposition::Stored("/photos/cat.png".to_string())
        );
        assert!(dir.path().join("photos/cat.png").is_file());
    }

    #[tokio::test]
    async fn upload_conflicts_with_an_existing_directory_too() {
        let (dir, store) = store();
        std::fs::create_dir(dir.path().join("taken")).expect("mkdir");

        let outcome = store
            .store_upload(None, "taken", b"bytes")
            .await
            .expect("upload");

        assert_eq!(outcome, UploadDisposition::Conflict("taken".to_string()));
        assert!(dir.path().join("taken").is_dir());
    }

    #[tokio::test]
    async fn name_that_sanitizes_to_nothing_is_rejected() {
        let (_dir, store) = store();
        assert!(matches!(
            store.store_upload(None, "@@@", b"bytes").await,
            Err(AppError::InvalidPath(_))
        ));
    }

    #[tokio::test]
    async fn upload_into_missing_folder_is_an_io_error() {
        let (_dir, store) = store();
        assert!(matches!(
            store.store_upload(Some("/nope"), "cat.png", b"bytes").await,
            Err(AppError::Io(_))
        ));
    }
}
