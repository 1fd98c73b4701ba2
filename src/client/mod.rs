//! Client-side view state.
//!
//! The view half of the file manager: pure in-memory stores that a UI
//! drives with decoded server responses. No I/O happens here — network
//! calls are external collaborators whose results are applied through
//! these APIs, which keeps every state transition synchronous and
//! directly testable.
//!
//! - `tree`: lazy folder tree with an explicit per-node load state
//! - `list`: raw file list plus the derived searched/filtered view
//! - `manager`: ties both to the current-folder selection lifecycle

pub mod list;
pub mod manager;
pub mod tree;

pub use list::{FileEntry, FileListStore, TypeFilter};
pub use manager::FileManagerState;
pub use tree::{FolderTreeStore, NodeChildren, TreeError, TreeNode};
