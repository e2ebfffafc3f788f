//! Tree view structs for the read model
//!
//! The tree is kept flat, mirroring the arena it is built from, so that
//! neither rendering nor serialization has to recurse.

use serde::Serialize;

/// One node of the flattened tree
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NodeView {
    pub id: usize,
    pub name: String,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

/// Flattened dependency tree; the root is always `nodes[0]`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TreeView {
    pub nodes: Vec<NodeView>,
}

impl TreeView {
    pub fn root(&self) -> Option<&NodeView> {
        self.nodes.first()
    }

    pub fn node(&self, id: usize) -> Option<&NodeView> {
        self.nodes.get(id)
    }
}
