//! Coordinator for the folder tree, file list, and current selection.
//!
//! Holds the one piece of process-wide client state: the currently
//! selected folder id. Mutations never patch state from a
//! stale response; they clear or reload, and a load that arrives for a
//! folder that is no longer current is discarded.

use crate::client::list::FileListStore;
use crate::client::tree::{FolderTreeStore, TreeError};
use crate::models::FileDescriptor;

#[derive(Debug, Default)]
pub struct FileManagerState {
    pub tree: FolderTreeStore,
    pub list: FileListStore,
    current_folder: Option<String>,
}

impl FileManagerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_folder(&self) -> Option<&str> {
        self.current_folder.as_deref()
    }

    /// The folder id to list files for: the selection, or the root.
    pub fn effective_folder(&self) -> &str {
        self.current_folder.as_deref().unwrap_or("")
    }

    pub fn folder_selected(&mut self, id: &str) -> Result<(), TreeError> {
        self.tree.select(id)?;
        self.current_folder = Some(id.to_string());
        Ok(())
    }

    pub fn folder_deselected(&mut self) {
        self.tree.deselect();
        self.current_folder = None;
    }

    /// Applies a server-confirmed folder removal. Removing the selected
    /// folder clears the selection first (the tree refuses otherwise);
    /// the caller then reloads files for the effective folder, which has
    /// fallen back to the root.
    pub fn folder_removed(&mut self, id: &str) -> Result<(), TreeError> {
        if self.current_folder.as_deref() == Some(id) {
            self.folder_deselected();
        }
        self.tree.remove(id)
    }

    /// Applies a completed file load. Returns `false` (discarding the
    /// payload) when the response is for a folder that is no longer the
    /// current one — late responses from superseded navigations.
    pub fn files_loaded(&mut self, folder_id: &str, files: Vec<FileDescriptor>) -> bool {
        if folder_id != self.effective_folder() {
            return false;
        }
        self.list.set_files(files);
        true
    }

    /// Delete targets for the "delete selected" aggregate: one id per
    /// selected raw file. The caller issues one delete call per id, each
    /// reported independently, then reloads the list once.
    pub fn delete_selection(&self) -> Vec<String> {
        self.list.selected_ids()
    }
}
