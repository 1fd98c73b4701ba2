//! Lazy folder tree store.
//!
//! Each node carries an explicit `NodeChildren` state machine so "not
//! yet fetched" and "fetched, empty" stay distinct. Collapsing a node
//! discards its loaded subtree; the next expand refetches, trading
//! requests for always-fresh data.

use thiserror::Error;

use crate::models::FolderNode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeChildren {
    Unloaded,
    Loaded(Vec<TreeNode>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    pub children: NodeChildren,
}

impl From<FolderNode> for TreeNode {
    /// Server listings always send `children: []`; the tree treats every
    /// incoming node as unloaded until it is expanded.
    fn from(folder: FolderNode) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
            children: NodeChildren::Unloaded,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("unknown folder node: {0}")]
    UnknownNode(String),

    #[error("folder is the active selection: {0}")]
    SelectionActive(String),
}

#[derive(Debug, Default)]
pub struct FolderTreeStore {
    roots: Vec<TreeNode>,
    selected: Option<String>,
}

impl FolderTreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the root listing wholesale.
    pub fn set_roots(&mut self, folders: Vec<FolderNode>) {
        self.roots = folders.into_iter().map(TreeNode::from).collect();
    }

    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        find_in(&self.roots, id)
    }

    /// Applies an expand: the node's children are replaced wholesale,
    /// never merged, so a re-expand cannot duplicate entries.
    pub fn expand(&mut self, id: &str, children: Vec<FolderNode>) -> Result<(), TreeError> {
        let node = find_in_mut(&mut self.roots, id)
            .ok_or_else(|| TreeError::UnknownNode(id.to_string()))?;
        node.children = NodeChildren::Loaded(children.into_iter().map(TreeNode::from).collect());
        Ok(())
    }

    /// Collapses a node back to `Unloaded`, discarding its subtree.
    pub fn collapse(&mut self, id: &str) -> Result<(), TreeError> {
        let node = find_in_mut(&mut self.roots, id)
            .ok_or_else(|| TreeError::UnknownNode(id.to_string()))?;
        node.children = NodeChildren::Unloaded;
        Ok(())
    }

    /// Inserts a freshly created child under its parent. An unloaded
    /// parent is left untouched: its next expand fetches fresh children
    /// including the new one.
    pub fn add_child(&mut self, parent_id: &str, folder: FolderNode) -> Result<(), TreeError> {
        let parent = find_in_mut(&mut self.roots, parent_id)
            .ok_or_else(|| TreeError::UnknownNode(parent_id.to_string()))?;
        if let NodeChildren::Loaded(children) = &mut parent.children {
            children.push(TreeNode::from(folder));
        }
        Ok(())
    }

    /// Inserts a freshly created root-level folder.
    pub fn add_root(&mut self, folder: FolderNode) {
        self.roots.push(TreeNode::from(folder));
    }

    /// Applies a server-confirmed rename: id and name are replaced,
    /// children are left as they are. Loaded descendants carry stale
    /// path-derived ids, so callers collapse and re-expand afterwards.
    pub fn rename(&mut self, id: &str, renamed: FolderNode) -> Result<(), TreeError> {
        let node = find_in_mut(&mut self.roots, id)
            .ok_or_else(|| TreeError::UnknownNode(id.to_string()))?;
        node.id = renamed.id.clone();
        node.name = renamed.name;
        if self.selected.as_deref() == Some(id) {
            self.selected = Some(renamed.id);
        }
        Ok(())
    }

    /// Removes a node and its subtree. Refuses to remove the active
    /// selection: the caller must clear the selection first.
    pub fn remove(&mut self, id: &str) -> Result<(), TreeError> {
        if self.selected.as_deref() == Some(id) {
            return Err(TreeError::SelectionActive(id.to_string()));
        }
        if remove_in(&mut self.roots, id) {
            Ok(())
        } else {
            Err(TreeError::UnknownNode(id.to_string()))
        }
    }

    pub fn select(&mut self, id: &str) -> Result<(), TreeError> {
        if self.find(id).is_none() {
            return Err(TreeError::UnknownNode(id.to_string()));
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

fn find_in<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let NodeChildren::Loaded(children) = &node.children {
            if let Some(found) = find_in(children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn find_in_mut<'a>(nodes: &'a mut [TreeNode], id: &str) -> Option<&'a mut TreeNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let NodeChildren::Loaded(children) = &mut node.children {
            if let Some(found) = find_in_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn remove_in(nodes: &mut Vec<TreeNode>, id: &str) -> bool {
    if let Some(position) = nodes.iter().position(|node| node.id == id) {
        nodes.remove(position);
        return true;
    }
    for node in nodes {
        if let NodeChildren::Loaded(children) = &mut node.children {
            if remove_in(children, id) {
                return true;
            }
        }
    }
    false
}
