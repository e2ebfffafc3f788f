use crate::prerequisite_analysis::domain::ExpansionMode;
use crate::prerequisite_analysis::policies::MissingFilePolicy;
use crate::shared::error::PrereqError;
use crate::shared::Result;

/// PrerequisiteRequest - Internal request DTO for the list-prerequisites use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerequisiteRequest {
    /// Target whose prerequisites are listed
    pub target: String,
    /// One level or full transitive expansion
    pub mode: ExpansionMode,
    /// Whether to digest the contents of the leaf files
    pub hash: bool,
    /// Treatment of leaf files that do not exist while hashing
    pub missing_file_policy: MissingFilePolicy,
    /// Whether the response should carry the tree for rendering
    pub include_tree: bool,
    /// Optional upper bound on tree nodes during transitive expansion
    pub max_nodes: Option<usize>,
}

impl PrerequisiteRequest {
    pub fn new(target: String, mode: ExpansionMode, hash: bool) -> Self {
        Self {
            target,
            mode,
            hash,
            missing_file_policy: MissingFilePolicy::default(),
            include_tree: false,
            max_nodes: None,
        }
    }

    pub fn builder() -> PrerequisiteRequestBuilder {
        PrerequisiteRequestBuilder::default()
    }
}

/// Builder for `PrerequisiteRequest`
#[derive(Debug, Default)]
pub struct PrerequisiteRequestBuilder {
    target: Option<String>,
    mode: ExpansionMode,
    hash: bool,
    missing_file_policy: MissingFilePolicy,
    include_tree: bool,
    max_nodes: Option<usize>,
}

impl PrerequisiteRequestBuilder {
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn mode(mut self, mode: ExpansionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn recursive(self, recursive: bool) -> Self {
        self.mode(ExpansionMode::from_recursive_flag(recursive))
    }

    pub fn hash(mut self, hash: bool) -> Self {
        self.hash = hash;
        self
    }

    pub fn missing_file_policy(mut self, policy: MissingFilePolicy) -> Self {
        self.missing_file_policy = policy;
        self
    }

    pub fn include_tree(mut self, include_tree: bool) -> Self {
        self.include_tree = include_tree;
        self
    }

    pub fn max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// # Errors
    /// Returns `PrereqError::Validation` if no target was set or it is blank
    pub fn build(self) -> Result<PrerequisiteRequest> {
        let target = self.target.unwrap_or_default();
        if target.trim().is_empty() {
            return Err(PrereqError::Validation {
                message: "target must not be empty".to_string(),
            }
            .into());
        }

        if self.max_nodes == Some(0) {
            return Err(PrereqError::Validation {
                message: "max_nodes must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(PrerequisiteRequest {
            target,
            mode: self.mode,
            hash: self.hash,
            missing_file_policy: self.missing_file_policy,
            include_tree: self.include_tree,
            max_nodes: self.max_nodes,
        })
    }
}
