//! Filesystem-backed resource management.
//!
//! `FileStore` maps opaque node/file identifiers (root-relative path
//! strings) to locations under one managed root directory and implements
//! folder CRUD, file listing/describe/delete, the upload pipeline, and
//! the crop transform. Every identifier passes through the `PathResolver`
//! boundary exactly once, so traversal defense lives in a single place.

pub mod files;
pub mod folders;
pub mod resolver;
pub mod transform;
pub mod upload;

use std::path::Path;
use std::sync::Arc;

pub use resolver::PathResolver;
pub use upload::UploadDisposition;

use crate::error::Result;

pub struct FileStore {
    resolver: PathResolver,
}

impl FileStore {
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        Ok(Self {
            resolver: PathResolver::new(root)?,
        })
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }
}

/// Joins a parent folder id and a child name into the child's id.
///
/// A root-level child gets a leading slash (`"" + "photos"` → `/photos`),
/// matching the wire format the client navigates by.
pub fn child_id(parent: &str, name: &str) -> String {
    format!("{}/{}", parent.trim_end_matches('/'), name)
}

pub type SharedStore = Arc<FileStore>;
