/// MissingFilePolicy - what hashing does with a leaf that does not exist
///
/// Phony targets and not-yet-generated files show up as leaves, so the
/// default skips them and the caller reports each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFilePolicy {
    /// Report the path and hash it as if it were empty
    #[default]
    Skip,
    /// Abort hashing with `PrereqError::MissingFile`
    Fail,
}

impl MissingFilePolicy {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            MissingFilePolicy::Fail
        } else {
            MissingFilePolicy::Skip
        }
    }
}
