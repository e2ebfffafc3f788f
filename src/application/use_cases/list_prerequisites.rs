use crate::application::dto::{PrerequisiteRequest, PrerequisiteResponse};
use crate::ports::outbound::{ContentHasher, DatabaseReader, ProgressReporter};
use crate::prerequisite_analysis::services::{DatabaseParser, LeafExtractor, TreeBuilder};
use crate::shared::Result;

/// ListPrerequisitesUseCase - Core use case for prerequisite queries
///
/// Orchestrates database read, parse, tree construction, leaf extraction and
/// optional hashing, with every piece of infrastructure injected.
///
/// # Type Parameters
/// * `DR` - DatabaseReader implementation
/// * `CH` - ContentHasher implementation
/// * `PR` - ProgressReporter implementation
pub struct ListPrerequisitesUseCase<DR, CH, PR> {
    database_reader: DR,
    content_hasher: CH,
    progress_reporter: PR,
}

impl<DR, CH, PR> ListPrerequisitesUseCase<DR, CH, PR>
where
    DR: DatabaseReader,
    CH: ContentHasher,
    PR: ProgressReporter,
{
    /// Creates a new ListPrerequisitesUseCase with injected dependencies
    pub fn new(database_reader: DR, content_hasher: CH, progress_reporter: PR) -> Self {
        Self {
            database_reader,
            content_hasher,
            progress_reporter,
        }
    }

    /// Executes the prerequisite query
    ///
    /// # Errors
    /// Fails without partial output when the database cannot be read, the
    /// target is unknown, the prerequisites form a cycle, or hashing fails
    /// under a strict missing-file policy.
    pub fn execute(&self, request: PrerequisiteRequest) -> Result<PrerequisiteResponse> {
        // Step 1: Read the make database
        self.progress_reporter.start_activity(&format!(
            "📖 Reading make database from {}...",
            self.database_reader.describe()
        ));
        let raw = self.database_reader.read_database();
        self.progress_reporter.finish_activity("✅ Make database loaded");
        let raw = raw?;

        // Step 2: Parse rule lines
        let dependency_map = DatabaseParser::parse(&raw);
        self.progress_reporter.report(&format!(
            "   - Targets with rules: {}",
            dependency_map.target_count()
        ));

        // Step 3: Build the tree
        let tree = TreeBuilder::build_with_limit(
            &request.target,
            &dependency_map,
            request.mode,
            request.max_nodes,
        )?;
        self.progress_reporter.report(&format!(
            "🌳 Built tree for '{}': {} node(s), depth {}",
            request.target,
            tree.len(),
            tree.max_depth()
        ));

        // Step 4: Extract leaves
        let leaves = LeafExtractor::extract(&tree);
        self.progress_reporter
            .report(&format!("   - Leaf prerequisites: {}", leaves.len()));

        // Step 5: Hash leaf contents if requested
        let (digest, missing_files) = if request.hash {
            self.progress_reporter
                .report("🔐 Hashing leaf file contents...");

            let outcome = self
                .content_hasher
                .hash_files(&leaves.sorted(), request.missing_file_policy)?;

            for path in &outcome.missing {
                self.progress_reporter
                    .report_error(&format!("File '{}' not found.", path));
            }

            (Some(outcome.digest), outcome.missing)
        } else {
            (None, Vec::new())
        };

        Ok(PrerequisiteResponse {
            target: request.target,
            mode: request.mode,
            tree,
            leaves,
            digest,
            missing_files,
            include_tree: request.include_tree,
        })
    }
}
