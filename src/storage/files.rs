//! File listing, description, and deletion.
//!
//! Descriptors are snapshots rebuilt on every call: mime type from the
//! file name, dimensions probed from the image header for `image/*`
//! types, URLs derived from the id. A probe failure on any file fails
//! the whole listing call rather than returning a degraded descriptor.

use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::{CropBounds, FileDescriptor};
use crate::storage::{transform, FileStore};

impl FileStore {
    /// Lists the regular files directly inside `dir` ("" for the root).
    pub fn list_files(&self, dir: &str) -> Result<Vec<FileDescriptor>> {
        if !self.resolver().is_directory(dir) {
            return Err(AppError::NotFound(dir.to_string()));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(self.resolver().resolve(dir)?)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            files.push(self.describe_path(&file_id(dir, &name), &entry.path())?);
        }

        Ok(files)
    }

    /// Describes a single file, optionally cropping it first.
    pub fn describe_file(&self, id: &str, bounds: Option<CropBounds>) -> Result<FileDescriptor> {
        if !self.resolver().is_file(id) {
            return Err(AppError::NotFound(id.to_string()));
        }

        let path = self.resolver().resolve(id)?;
        if let Some(bounds) = bounds {
            transform::crop_in_place(&path, bounds)?;
        }

        self.describe_path(id, &path)
    }

    /// Unlinks the file `id`; success is re-checked against the filesystem.
    pub fn delete_file(&self, id: &str) -> Result<bool> {
        if !self.resolver().is_file(id) {
            return Err(AppError::NotFound(id.to_string()));
        }

        fs::remove_file(self.resolver().resolve(id)?)?;

        Ok(!self.resolver().is_file(id))
    }

    fn describe_path(&self, id: &str, path: &Path) -> Result<FileDescriptor> {
        let name = id.rsplit('/').next().unwrap_or(id).to_string();
        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        let (width, height) = if mime.starts_with("image/") {
            image::image_dimensions(path)?
        } else {
            (0, 0)
        };

        let url = file_url(id);

        Ok(FileDescriptor {
            id: id.to_string(),
            name,
            thumbnail_url: url.clone(),
            url,
            mime,
            width,
            height,
        })
    }
}

/// Joins a directory id and file name into the file's id. Root-level
/// files carry no leading slash on the wire.
fn file_id(dir: &str, name: &str) -> String {
    let dir = dir.trim_matches('/');
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("/{dir}/{name}")
    }
}

/// Root-relative URL for a file id, served from the `/uploads` mount.
/// Spaces are the one character the original escaped; everything else
/// in an id is already URL-safe after upload sanitization.
fn file_url(id: &str) -> String {
    let rooted = if id.starts_with('/') {
        id.to_string()
    } else {
        format!("/{id}")
    };
    format!("/uploads{}", rooted.replace(' ', "%20"))
}
