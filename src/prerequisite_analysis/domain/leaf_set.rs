use std::collections::HashSet;

/// LeafSet - deduplicated leaf names, kept in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl LeafSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` unless it is already present; returns whether it was added
    pub fn insert(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.ordered.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Names sorted lexicographically, the order used for hashing
    pub fn sorted(&self) -> Vec<String> {
        let mut names = self.ordered.clone();
        names.sort();
        names
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
