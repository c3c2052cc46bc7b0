//! Tree search engine
//!
//! This module walks an in-memory file tree and collects the files matching
//! a criterion.

pub mod criteria;

use log::debug;

pub use self::criteria::Criterion;
use crate::tree::{File, Node};

/// Find files in the tree matching the given criteria
///
/// The traversal is depth-first and pre-order: a file is judged where it is
/// encountered, a directory is never judged itself and its children are
/// visited in insertion order. Matches are returned in document order, so a
/// change of criteria can only filter the result, never reorder it.
///
/// A file root is the single candidate and is judged directly.
pub fn search<'a>(root: &'a Node, criteria: &dyn Criterion) -> Vec<&'a File> {
    debug!(
        "Searching '{}' for files matching {}",
        root.name(),
        criteria.description()
    );

    let mut matches = Vec::new();
    visit(root, criteria, &mut matches);

    debug!("Found {} matching file(s)", matches.len());
    matches
}

/// Recursively visit a node, accumulating matching files
fn visit<'a>(node: &'a Node, criteria: &dyn Criterion, matches: &mut Vec<&'a File>) {
    match node {
        Node::File(file) => {
            if criteria.judge(file) {
                matches.push(file);
            }
        }
        Node::Directory(dir) => {
            for child in dir.children() {
                visit(child, criteria, matches);
            }
        }
    }
}
