use crate::prerequisite_analysis::policies::MissingFilePolicy;
use crate::shared::Result;

/// Result of hashing a list of files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashOutcome {
    /// Lowercase hex digest over the concatenated file contents
    pub digest: String,
    /// Paths skipped because they did not exist (only with `MissingFilePolicy::Skip`)
    pub missing: Vec<String>,
}

/// ContentHasher port for digesting leaf file contents
pub trait ContentHasher {
    /// Feeds every file, in the given order, into a single digest
    ///
    /// # Arguments
    /// * `paths` - Files to hash; the caller sorts them for a stable digest
    /// * `policy` - What to do with paths that do not exist
    ///
    /// # Errors
    /// Returns an error if a file exists but cannot be read, or if a file is
    /// missing and `policy` is `MissingFilePolicy::Fail`
    fn hash_files(&self, paths: &[String], policy: MissingFilePolicy) -> Result<HashOutcome>;
}
