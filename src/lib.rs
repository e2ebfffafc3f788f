//! make-prereqs - leaf prerequisites of make targets
//!
//! This library lists the files a make target ultimately depends on, as
//! reported by `make -pq`, and can digest their contents into a single
//! cache key. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`prerequisite_analysis`): Parsing, tree construction and leaf extraction
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use make_prereqs::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let database_reader = MakeDatabaseReader::new(MakeInvocation::default());
//! let content_hasher = Sha256FileHasher::new();
//! let progress_reporter = StderrProgressReporter::new(false);
//!
//! // Create use case
//! let use_case =
//!     ListPrerequisitesUseCase::new(database_reader, content_hasher, progress_reporter);
//!
//! // Execute
//! let request = PrerequisiteRequest::builder()
//!     .target("all")
//!     .recursive(true)
//!     .hash(true)
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let read_model = PrerequisiteReadModelBuilder::build(&response);
//! let output = TextFormatter::new().format(&read_model)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod prerequisite_analysis;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DumpFileReader, Sha256FileHasher, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::make::{MakeDatabaseReader, MakeInvocation};
    pub use crate::application::dto::{
        OutputFormat, PrerequisiteRequest, PrerequisiteResponse,
    };
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::{
        PrerequisiteReadModel, PrerequisiteReadModelBuilder,
    };
    pub use crate::application::use_cases::ListPrerequisitesUseCase;
    pub use crate::ports::outbound::{
        ContentHasher, DatabaseReader, HashOutcome, OutputPresenter, ProgressReporter,
        ResultFormatter,
    };
    pub use crate::prerequisite_analysis::domain::{
        DependencyMap, DependencyTree, ExpansionMode, LeafSet, NodeId,
    };
    pub use crate::prerequisite_analysis::policies::MissingFilePolicy;
    pub use crate::prerequisite_analysis::services::{DatabaseParser, LeafExtractor, TreeBuilder};
    pub use crate::shared::error::{ExitCode, PrereqError};
    pub use crate::shared::Result;
}
