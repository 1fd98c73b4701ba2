//! Folder tree DTOs.
//!
//! - `FolderNode`: Single folder in a tree listing (FolderTree sidebar)
//!
//! A node's id is its root-relative path and doubles as its physical
//! location suffix under the managed root. Children are always sent
//! empty; the client loads them lazily per node.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderNode {
    pub id: String,
    pub name: String,
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }
}
