//! In-memory file tree model
//!
//! This module provides the node types the search engine operates on: a
//! `Node` sum type discriminating between files and directories. A directory
//! owns its children exclusively, so the tree is finite and acyclic by
//! construction.

use crate::errors::{FindError, FindResult};

/// A node in the file tree, either a file or a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Leaf node with a size
    File(File),
    /// Internal node with ordered children
    Directory(Directory),
}

impl Node {
    /// Get the node name
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => file.name(),
            Node::Directory(dir) => dir.name(),
        }
    }

    /// Check whether the node is a directory
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Node::File(file)
    }
}

impl From<Directory> for Node {
    fn from(dir: Directory) -> Self {
        Node::Directory(dir)
    }
}

/// A file: a leaf node with a name and a size in bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    size: u64,
}

impl File {
    /// Create a new File with the given name and size
    ///
    /// The name must not be empty. Sizes are unsigned, so a negative size
    /// is unrepresentable.
    pub fn new(name: impl Into<String>, size: u64) -> FindResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(FindError::EmptyName);
        }
        Ok(Self { name, size })
    }

    /// Get the file name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file size in bytes
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// A directory: an internal node holding children in insertion order
///
/// Insertion order is significant; the search engine visits children in the
/// order they were added, which fixes the document order of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    name: String,
    children: Vec<Node>,
}

impl Directory {
    /// Create a new empty Directory with the given name
    ///
    /// The name must not be empty.
    pub fn new(name: impl Into<String>) -> FindResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(FindError::EmptyName);
        }
        Ok(Self {
            name,
            children: Vec::new(),
        })
    }

    /// Get the directory name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a child node
    pub fn add_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Append a child node, builder style
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.add_child(child);
        self
    }

    /// Get the children in insertion order
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}
