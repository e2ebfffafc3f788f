/// How far the tree builder follows prerequisites below the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionMode {
    /// Only the root's direct prerequisites (tree depth <= 1)
    #[default]
    Direct,
    /// Every prerequisite that has prerequisites of its own is expanded
    Transitive,
}

impl ExpansionMode {
    pub fn from_recursive_flag(recursive: bool) -> Self {
        if recursive {
            ExpansionMode::Transitive
        } else {
            ExpansionMode::Direct
        }
    }

    pub fn is_recursive(self) -> bool {
        matches!(self, ExpansionMode::Transitive)
    }
}
