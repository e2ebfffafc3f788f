use crate::prerequisite_analysis::domain::{DependencyTree, LeafSet};

/// LeafExtractor service for collecting the leaves below the root
pub struct LeafExtractor;

impl LeafExtractor {
    /// Names of every childless descendant of the root, deduplicated.
    ///
    /// The root itself is never included, even when it has no children.
    pub fn extract(tree: &DependencyTree) -> LeafSet {
        let mut leaves = LeafSet::new();
        for id in tree.descendants(tree.root()) {
            let node = tree.node(id);
            if node.is_leaf() {
                leaves.insert(node.name());
            }
        }
        leaves
    }
}
