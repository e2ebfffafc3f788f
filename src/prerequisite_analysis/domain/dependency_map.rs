use std::collections::HashMap;

/// DependencyMap - target name to its direct prerequisites, in rule order
///
/// Built once from a make database dump and read-only afterwards.
/// A name that is not a key has no known prerequisites and is a leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    targets: HashMap<String, Vec<String>>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the prerequisites of `target`, replacing any earlier entry
    pub fn insert(&mut self, target: String, prerequisites: Vec<String>) {
        self.targets.insert(target, prerequisites);
    }

    /// Direct prerequisites of `target`; empty when the target is unknown
    pub fn prerequisites(&self, target: &str) -> &[String] {
        self.targets
            .get(target)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains_target(&self, target: &str) -> bool {
        self.targets.contains_key(target)
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }
}

impl From<HashMap<String, Vec<String>>> for DependencyMap {
    fn from(targets: HashMap<String, Vec<String>>) -> Self {
        Self { targets }
    }
}

impl<T, P> FromIterator<(T, Vec<P>)> for DependencyMap
where
    T: Into<String>,
    P: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (T, Vec<P>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (target, prerequisites) in iter {
            map.insert(
                target.into(),
                prerequisites.into_iter().map(Into::into).collect(),
            );
        }
        map
    }
}
