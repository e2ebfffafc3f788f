mod cli;
mod config;

use cli::Args;
use config::ResolvedOptions;
use make_prereqs::adapters::outbound::console::StderrProgressReporter;
use make_prereqs::adapters::outbound::filesystem::{
    DumpFileReader, Sha256FileHasher, StdoutPresenter,
};
use make_prereqs::adapters::outbound::make::MakeDatabaseReader;
use make_prereqs::application::dto::PrerequisiteRequest;
use make_prereqs::application::factories::FormatterFactory;
use make_prereqs::application::read_models::PrerequisiteReadModelBuilder;
use make_prereqs::application::use_cases::ListPrerequisitesUseCase;
use make_prereqs::ports::outbound::{DatabaseReader, OutputPresenter};
use make_prereqs::prerequisite_analysis::policies::MissingFilePolicy;
use make_prereqs::shared::error::{ExitCode, PrereqError};
use make_prereqs::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    if let Some(directory) = &args.directory {
        validate_make_directory(directory)?;
    }

    // Merge CLI arguments over the config file
    let config = config::load_for_args(&args)?;
    let options = ResolvedOptions::resolve(args, config)?;

    // Create adapters (Dependency Injection)
    let database_reader: Box<dyn DatabaseReader> = match &options.database {
        Some(path) => Box::new(DumpFileReader::new(path.clone())),
        None => {
            let reader = MakeDatabaseReader::new(options.invocation.clone());
            if options.verbose {
                Box::new(reader.with_stderr_sink(|text| eprintln!("{}", text)))
            } else {
                Box::new(reader)
            }
        }
    };
    let content_hasher = match &options.invocation.directory {
        Some(directory) => Sha256FileHasher::new().with_base_dir(directory.clone()),
        None => Sha256FileHasher::new(),
    };
    let progress_reporter = StderrProgressReporter::new(options.verbose);

    // Create use case with injected dependencies
    let use_case =
        ListPrerequisitesUseCase::new(database_reader, content_hasher, progress_reporter);

    // Create request
    let request = PrerequisiteRequest::builder()
        .target(options.target)
        .recursive(options.recursive)
        .hash(options.hash)
        .missing_file_policy(MissingFilePolicy::from_strict_flag(options.strict))
        .include_tree(options.debug)
        .max_nodes(options.max_nodes)
        .build()?;

    // Execute use case
    let response = use_case.execute(request)?;

    // Build read model and format it
    let read_model = PrerequisiteReadModelBuilder::build(&response);
    let formatter = FormatterFactory::create(options.format);
    let formatted_output = formatter.format(&read_model)?;

    // Present output
    StdoutPresenter::new().present(&formatted_output)?;

    Ok(())
}

/// Rejects a `-C` directory make could not change into
///
/// make's exit status is not checked, so a failed `-C` would otherwise
/// surface as a misleading "target not found".
fn validate_make_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(PrereqError::InvalidDirectory {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(PrereqError::InvalidDirectory {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
