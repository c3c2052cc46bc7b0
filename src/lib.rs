//! A library for searching an in-memory file tree with composable criteria
//!
//! This library models a hierarchical file tree (files and directories) and
//! supports querying it via boolean predicates combined with AND/OR logic:
//! - A tree model with files (name, size) and directories (ordered children)
//! - Atomic criteria: name substring match, size threshold
//! - AND/OR combinators that are themselves criteria, nestable to arbitrary
//!   depth
//! - A depth-first search returning matches in document order
//!
//! # Example
//!
//! ```
//! use tree_find::tree::{Directory, File, Node};
//! use tree_find::finder::criteria::{CriteriaAnd, NameContains, SizeGreaterThan};
//! use tree_find::finder::search;
//!
//! # fn main() -> tree_find::errors::FindResult<()> {
//! // Build a small tree
//! let mut root = Directory::new("docs")?;
//! root.add_child(File::new("readme.txt", 5)?);
//! root.add_child(File::new("notes.txt", 3)?);
//! let tree: Node = root.into();
//!
//! // name contains "txt" AND size > 4
//! let mut criteria = CriteriaAnd::new();
//! criteria.add(NameContains::new("txt")?);
//! criteria.add(SizeGreaterThan::new(4));
//!
//! let matches = search(&tree, &criteria);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].name(), "readme.txt");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod errors;
pub mod finder;
pub mod tree;

// Re-export main types for convenience
pub use errors::{FindError, FindResult};
pub use finder::{search, Criterion};
pub use tree::{Directory, File, Node};
