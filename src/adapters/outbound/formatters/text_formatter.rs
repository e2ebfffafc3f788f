use crate::application::read_models::{PrerequisiteReadModel, TreeView};
use crate::ports::outbound::ResultFormatter;
use crate::shared::Result;

/// Branch prefix for a child that has siblings after it
const BRANCH: &str = "├── ";

/// Branch prefix for the last child of a node
const LAST_BRANCH: &str = "└── ";

/// Indent continuing a branch past a non-last child
const VERTICAL: &str = "│   ";

/// Indent below a last child
const BLANK: &str = "    ";

/// TextFormatter adapter for plain line-oriented output
///
/// Prints the digest on one line when hashing, otherwise one leaf per line.
/// With a tree in the model, its rendering comes first followed by a blank
/// separator line.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Draws the tree with box-drawing branches, root on the first line
    fn render_tree(tree: &TreeView, output: &mut String) {
        let Some(root) = tree.root() else {
            return;
        };
        output.push_str(&root.name);
        output.push('\n');

        // (node id, prefix inherited from ancestors, is last sibling)
        let mut stack: Vec<(usize, String, bool)> = Vec::new();
        Self::push_children(&mut stack, &root.children, "");

        while let Some((id, prefix, is_last)) = stack.pop() {
            let Some(node) = tree.node(id) else {
                continue;
            };
            output.push_str(&prefix);
            output.push_str(if is_last { LAST_BRANCH } else { BRANCH });
            output.push_str(&node.name);
            output.push('\n');

            let child_prefix = format!("{}{}", prefix, if is_last { BLANK } else { VERTICAL });
            Self::push_children(&mut stack, &node.children, &child_prefix);
        }
    }

    /// Pushes children in reverse so the first child is rendered first
    fn push_children(stack: &mut Vec<(usize, String, bool)>, children: &[usize], prefix: &str) {
        let last = children.len().saturating_sub(1);
        for (position, child) in children.iter().enumerate().rev() {
            stack.push((*child, prefix.to_string(), position == last));
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for TextFormatter {
    fn format(&self, model: &PrerequisiteReadModel) -> Result<String> {
        let mut output = String::new();

        if let Some(tree) = &model.tree {
            Self::render_tree(tree, &mut output);
            output.push('\n');
        }

        match &model.hash {
            Some(digest) => {
                output.push_str(digest);
                output.push('\n');
            }
            None => {
                for leaf in &model.leaves {
                    output.push_str(leaf);
                    output.push('\n');
                }
            }
        }

        Ok(output)
    }
}
