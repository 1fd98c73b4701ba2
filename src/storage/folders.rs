//! Folder CRUD against the managed root.
//!
//! - `list_children`: immediate subdirectories of a node, lazy children
//! - `create_folder`: mkdir with collision check and post-check
//! - `rename_folder`: sibling rename, target must not exist
//! - `remove_folder`: rmdir, refuses non-empty directories
//!
//! Mutations re-check the filesystem after the OS call and report
//! `CreateFailed`/`RenameFailed` on a mismatch, which signals permission
//! or mount anomalies rather than caller mistakes.

use std::fs;

use crate::error::{AppError, Result};
use crate::models::FolderNode;
use crate::storage::{child_id, FileStore};

impl FileStore {
    /// Lists the immediate subdirectories of `parent` ("" for the root).
    ///
    /// Entries come back in filesystem enumeration order; callers must
    /// not assume any particular ordering.
    pub fn list_children(&self, parent: &str) -> Result<Vec<FolderNode>> {
        if !self.resolver().is_directory(parent) {
            return Err(AppError::NotFound(parent.to_string()));
        }

        let mut nodes = Vec::new();
        for entry in fs::read_dir(self.resolver().resolve(parent)?)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            nodes.push(FolderNode::new(child_id(parent, &name), name));
        }

        Ok(nodes)
    }

    pub fn create_folder(&self, parent: &str, name: &str) -> Result<FolderNode> {
        let id = child_id(parent, name);

        if self.resolver().is_directory(&id) {
            return Err(AppError::AlreadyExists(id));
        }

        fs::create_dir(self.resolver().resolve(&id)?)?;

        if !self.resolver().is_directory(&id) {
            return Err(AppError::CreateFailed(id));
        }

        Ok(FolderNode::new(id, name))
    }

    /// Renames the directory `id` to `new_name` within its parent.
    ///
    /// Returns the renamed node with its new id; any previously loaded
    /// children carry stale path-derived ids and must be reloaded by the
    /// caller.
    pub fn rename_folder(&self, id: &str, new_name: &str) -> Result<FolderNode> {
        if !self.resolver().is_directory(id) {
            return Err(AppError::NotFound(id.to_string()));
        }

        let mut segments: Vec<&str> = id.split('/').collect();
        if let Some(last) = segments.last_mut() {
            *last = new_name;
        }
        let new_id = segments.join("/");

        if self.resolver().resolve(&new_id)?.exists() {
            return Err(AppError::AlreadyExists(new_id));
        }

        fs::rename(self.resolver().resolve(id)?, self.resolver().resolve(&new_id)?)?;

        if !self.resolver().is_directory(&new_id) {
            return Err(AppError::RenameFailed(new_id));
        }

        Ok(FolderNode::new(new_id, new_name))
    }

    /// Removes the directory `id`. Never cascades: a directory with any
    /// entries fails with `NotEmpty` before the OS call.
    pub fn remove_folder(&self, id: &str) -> Result<bool> {
        if !self.resolver().is_directory(id) {
            return Err(AppError::NotFound(id.to_string()));
        }

        let path = self.resolver().resolve(id)?;
        if fs::read_dir(&path)?.next().is_some() {
            return Err(AppError::NotEmpty(id.to_string()));
        }

        fs::remove_dir(&path)?;

        Ok(!self.resolver().is_directory(id))
    }
}
