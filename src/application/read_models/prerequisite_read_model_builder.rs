//! Builder for constructing PrerequisiteReadModel from the use case response

use super::prerequisite_read_model::PrerequisiteReadModel;
use super::tree_view::{NodeView, TreeView};
use crate::application::dto::PrerequisiteResponse;
use crate::prerequisite_analysis::domain::DependencyTree;

/// Builder for constructing PrerequisiteReadModel from domain objects
pub struct PrerequisiteReadModelBuilder;

impl PrerequisiteReadModelBuilder {
    pub fn build(response: &PrerequisiteResponse) -> PrerequisiteReadModel {
        PrerequisiteReadModel {
            target: response.target.clone(),
            recursive: response.mode.is_recursive(),
            leaves: response.leaves.iter().map(str::to_string).collect(),
            hash: response.digest.clone(),
            missing_files: response.missing_files.clone(),
            tree: response
                .include_tree
                .then(|| Self::build_tree(&response.tree)),
        }
    }

    /// Converts the arena tree to its flat view representation
    fn build_tree(tree: &DependencyTree) -> TreeView {
        let nodes = tree
            .nodes()
            .map(|(id, node)| NodeView {
                id: id.index(),
                name: node.name().to_string(),
                parent: node.parent().map(|parent| parent.index()),
                children: node.children().iter().map(|child| child.index()).collect(),
            })
            .collect();

        TreeView { nodes }
    }
}
