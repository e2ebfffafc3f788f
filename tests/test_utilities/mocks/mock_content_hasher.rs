use make_prereqs::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ContentHasher that records the paths it receives
///
/// The digest is the received paths joined with commas, which makes the
/// hashing order visible to assertions.
#[derive(Default, Clone)]
pub struct MockContentHasher {
    pub calls: Arc<Mutex<Vec<Vec<String>>>>,
    pub missing: Vec<String>,
}

impl MockContentHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths reported as missing on every call
    pub fn with_missing(mut self, path: &str) -> Self {
        self.missing.push(path.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl ContentHasher for MockContentHasher {
    fn hash_files(&self, paths: &[String], policy: MissingFilePolicy) -> Result<HashOutcome> {
        self.calls.lock().unwrap().push(paths.to_vec());

        let missing: Vec<String> = paths
            .iter()
            .filter(|path| self.missing.contains(path))
            .cloned()
            .collect();

        if let (MissingFilePolicy::Fail, Some(first)) = (policy, missing.first()) {
            return Err(PrereqError::MissingFile {
                path: first.into(),
            }
            .into());
        }

        Ok(HashOutcome {
            digest: paths.join(","),
            missing,
        })
    }
}
