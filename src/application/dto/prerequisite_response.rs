use crate::prerequisite_analysis::domain::{DependencyTree, ExpansionMode, LeafSet};

/// PrerequisiteResponse - Internal response DTO from the list-prerequisites use case
///
/// Carries the domain objects; formatters work from the read model built
/// out of this response.
#[derive(Debug, Clone)]
pub struct PrerequisiteResponse {
    /// Queried target
    pub target: String,
    /// Expansion mode used to build the tree
    pub mode: ExpansionMode,
    /// The reconstructed tree (always built, rendered only on request)
    pub tree: DependencyTree,
    /// Deduplicated leaves in first-seen order
    pub leaves: LeafSet,
    /// Hex digest of the sorted leaf files, when hashing was requested
    pub digest: Option<String>,
    /// Leaf files skipped during hashing because they did not exist
    pub missing_files: Vec<String>,
    /// Whether the tree should be rendered
    pub include_tree: bool,
}
