//! Prerequisite read model for query output
//!
//! Aggregates the result of a prerequisite query in the shape the
//! formatters consume.

use super::tree_view::TreeView;
use serde::Serialize;

/// Main read model for a prerequisite query
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PrerequisiteReadModel {
    /// Queried target
    pub target: String,
    /// Whether prerequisites were expanded transitively
    pub recursive: bool,
    /// Leaf names in first-seen order
    pub leaves: Vec<String>,
    /// Hex digest of the sorted leaf files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Leaf files that did not exist while hashing
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_files: Vec<String>,
    /// Flattened tree, present only when a rendering was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<TreeView>,
}
