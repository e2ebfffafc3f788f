pub mod dependency_map;
pub mod dependency_tree;
pub mod expansion_mode;
pub mod leaf_set;

pub use dependency_map::DependencyMap;
pub use dependency_tree::{DependencyNode, DependencyTree, NodeId};
pub use expansion_mode::ExpansionMode;
pub use leaf_set::LeafSet;
