use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow build scripts to distinguish a missing target from
/// an environment problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - leaves listed or digest printed
    Success = 0,
    /// The requested target does not exist in the make database
    TargetNotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (make could not run, dependency cycle, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned by the application
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<PrereqError>() {
            Some(PrereqError::TargetNotFound { .. }) => ExitCode::TargetNotFound,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::TargetNotFound => write!(f, "Target Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for prerequisite analysis.
#[derive(Debug, Error)]
pub enum PrereqError {
    #[error("Failed to run '{program}' to dump the make database\nDetails: {details}\n\n💡 Hint: Check that make is installed and on PATH, or pass --make <PROGRAM>")]
    DatabaseUnavailable { program: String, details: String },

    #[error("'{program}' did not finish within {seconds} second(s) and was killed\n\n💡 Hint: Increase --timeout or check the Makefile for blocking $(shell ...) calls")]
    DatabaseTimeout { program: String, seconds: u64 },

    #[error("Failed to read make database dump: {path}\nDetails: {details}\n\n💡 Hint: Create a dump with `make -pq > database.txt`")]
    DatabaseReadError { path: PathBuf, details: String },

    #[error("Target '{target}' not found in the Makefile.")]
    TargetNotFound { target: String },

    #[error("Dependency cycle detected: {}\n\n💡 Hint: make itself drops circular dependencies; fix the rule that closes the loop", .cycle.join(" -> "))]
    DependencyCycle { cycle: Vec<String> },

    #[error("Dependency tree for '{target}' exceeds {limit} nodes\n\n💡 Hint: Raise --max-nodes or drop it to expand without a limit")]
    TreeTooLarge { target: String, limit: usize },

    #[error("File '{path}' not found.\n\n💡 Hint: Build the missing file first or drop --strict to skip it")]
    MissingFile { path: PathBuf },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid directory: {path}\nReason: {reason}\n\n💡 Hint: Pass an existing directory containing a Makefile to -C/--directory")]
    InvalidDirectory { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the path is a regular file and you have read permissions")]
    FileReadError { path: PathBuf, details: String },
}
