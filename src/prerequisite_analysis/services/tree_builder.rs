use crate::prerequisite_analysis::domain::{DependencyMap, DependencyTree, ExpansionMode, NodeId};
use crate::shared::error::PrereqError;
use crate::shared::Result;
use std::collections::HashSet;
use std::slice;

/// A node whose prerequisites are still being attached
struct Frame<'a> {
    node: NodeId,
    pending: slice::Iter<'a, String>,
}

/// TreeBuilder service for reconstructing the prerequisite tree of a target
///
/// Pure algorithm over an immutable `DependencyMap`; no I/O.
pub struct TreeBuilder;

impl TreeBuilder {
    /// Builds the tree rooted at `root_name` with no bound on its size
    ///
    /// # Errors
    /// - `PrereqError::TargetNotFound` if `root_name` is not a key of `map`
    /// - `PrereqError::DependencyCycle` if transitive expansion revisits a
    ///   target on the current path
    pub fn build(
        root_name: &str,
        map: &DependencyMap,
        mode: ExpansionMode,
    ) -> Result<DependencyTree> {
        Self::build_with_limit(root_name, map, mode, None)
    }

    /// Like `build`, optionally failing once the tree holds `max_nodes` nodes
    ///
    /// Shared prerequisites are expanded once per parent, so diamond-shaped
    /// graphs grow exponentially with depth.
    ///
    /// # Errors
    /// Those of `build`, plus `PrereqError::TreeTooLarge` when transitive
    /// expansion would go past `max_nodes`
    pub fn build_with_limit(
        root_name: &str,
        map: &DependencyMap,
        mode: ExpansionMode,
        max_nodes: Option<usize>,
    ) -> Result<DependencyTree> {
        if !map.contains_target(root_name) {
            return Err(PrereqError::TargetNotFound {
                target: root_name.to_string(),
            }
            .into());
        }

        let mut tree = DependencyTree::new(root_name);

        match mode {
            ExpansionMode::Direct => {
                let root = tree.root();
                for prerequisite in map.prerequisites(root_name) {
                    tree.add_child(root, prerequisite.as_str());
                }
            }
            ExpansionMode::Transitive => Self::expand(&mut tree, map, max_nodes)?,
        }

        Ok(tree)
    }

    /// Depth-first expansion with an explicit stack.
    ///
    /// `path` mirrors the stack: the names from the root down to the node
    /// currently being expanded, with `on_path` holding the same names for
    /// membership tests. Only prerequisites with prerequisites of their own
    /// are pushed, so leaves never take part in cycle checks.
    fn expand(
        tree: &mut DependencyTree,
        map: &DependencyMap,
        node_limit: Option<usize>,
    ) -> Result<()> {
        let root_name = tree.root_name().to_string();
        let mut stack = vec![Frame {
            node: tree.root(),
            pending: map.prerequisites(&root_name).iter(),
        }];
        let mut path: Vec<&str> = vec![root_name.as_str()];
        let mut on_path: HashSet<&str> = HashSet::from([root_name.as_str()]);

        while let Some(frame) = stack.last_mut() {
            let Some(prerequisite) = frame.pending.next() else {
                stack.pop();
                if let Some(name) = path.pop() {
                    on_path.remove(name);
                }
                continue;
            };
            let parent = frame.node;

            if let Some(limit) = node_limit {
                if tree.len() >= limit {
                    return Err(PrereqError::TreeTooLarge {
                        target: root_name.clone(),
                        limit,
                    }
                    .into());
                }
            }

            let child = tree.add_child(parent, prerequisite.as_str());
            let grandchildren = map.prerequisites(prerequisite);
            if grandchildren.is_empty() {
                continue;
            }

            if on_path.contains(prerequisite.as_str()) {
                let start = path
                    .iter()
                    .position(|name| *name == prerequisite.as_str())
                    .unwrap_or(0);
                let mut cycle: Vec<String> = path[start..].iter().map(|name| name.to_string()).collect();
                cycle.push(prerequisite.clone());
                return Err(PrereqError::DependencyCycle { cycle }.into());
            }

            path.push(prerequisite.as_str());
            on_path.insert(prerequisite.as_str());
            stack.push(Frame {
                node: child,
                pending: grandchildren.iter(),
            });
        }

        Ok(())
    }
}
