/// Index of a node inside a `DependencyTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single target or file in the reconstructed tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    depth: usize,
}

impl DependencyNode {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of edges between the root and this node
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// DependencyTree aggregate - arena of nodes rooted at the queried target
///
/// Nodes are owned by the arena and refer to each other by `NodeId`.
/// The same name may appear in several nodes when a prerequisite is shared
/// by more than one parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyTree {
    nodes: Vec<DependencyNode>,
    max_depth: usize,
}

impl DependencyTree {
    /// Creates a tree holding only the root node
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![DependencyNode {
                name: root_name.into(),
                parent: None,
                children: Vec::new(),
                depth: 0,
            }],
            max_depth: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn root_name(&self) -> &str {
        self.nodes[0].name()
    }

    /// Appends a child under `parent` and returns its id
    pub fn add_child(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        self.nodes.push(DependencyNode {
            name: name.into(),
            parent: Some(parent),
            children: Vec::new(),
            depth,
        });
        self.nodes[parent.0].children.push(id);
        self.max_depth = self.max_depth.max(depth);
        id
    }

    pub fn node(&self, id: NodeId) -> &DependencyNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in insertion order, paired with their ids
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &DependencyNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// Pre-order walk over everything below `id`, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.node(id).children.clone();
        stack.reverse();
        Descendants { tree: self, stack }
    }

    /// Number of edges between the root and `id`
    pub fn depth(&self, id: NodeId) -> usize {
        self.node(id).depth
    }

    /// Depth of the deepest node, tracked as children are added
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// Iterator returned by `DependencyTree::descendants`
pub struct Descendants<'a> {
    tree: &'a DependencyTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.node(id).children.iter().rev().copied());
        Some(id)
    }
}
