use clap::Parser;
use std::path::PathBuf;

use make_prereqs::application::dto::OutputFormat;

/// List the leaf prerequisites of a make target
#[derive(Parser, Debug)]
#[command(name = "make-prereqs")]
#[command(version)]
#[command(
    about = "List the leaf prerequisites of a make target and optionally hash their contents",
    long_about = None
)]
pub struct Args {
    /// Target whose prerequisites are listed
    pub target: String,

    /// Follow prerequisites transitively down to the leaves
    #[arg(short, long, overrides_with = "no_recursive")]
    pub recursive: bool,

    /// List direct prerequisites only, even when the config file sets `recursive`
    #[arg(long, overrides_with = "recursive")]
    pub no_recursive: bool,

    /// Print a SHA-256 digest of the leaf files' contents instead of their names
    #[arg(long)]
    pub hash: bool,

    /// Print the dependency tree before the result
    #[arg(short, long)]
    pub debug: bool,

    /// Run make in this directory (also where the config file is looked up)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Makefile passed to make with -f
    #[arg(short = 'f', long = "file", value_name = "MAKEFILE")]
    pub makefile: Option<PathBuf>,

    /// make executable to run [default: make]
    #[arg(long = "make", value_name = "PROGRAM")]
    pub make_program: Option<String>,

    /// Read a saved `make -pq` dump instead of running make ("-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Output format: text or json [default: text]
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Fail when a leaf file is missing while hashing
    #[arg(long, overrides_with = "no_strict")]
    pub strict: bool,

    /// Skip missing leaf files, even when the config file sets `strict`
    #[arg(long, overrides_with = "strict")]
    pub no_strict: bool,

    /// Abort recursive expansion once the tree holds this many nodes [default: unlimited]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_nodes: Option<u64>,

    /// Kill make if it has not finished after this many seconds
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Path to a config file (default: make-prereqs.config.yml in the make directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show progress messages and make's stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Extra arguments forwarded to make, e.g. `-- CC=clang`
    #[arg(last = true, value_name = "MAKE_ARGS")]
    pub make_args: Vec<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// `Some(true)` for `--recursive`, `Some(false)` for `--no-recursive`
    pub fn recursive_flag(&self) -> Option<bool> {
        explicit_flag(self.recursive, self.no_recursive)
    }

    /// `Some(true)` for `--strict`, `Some(false)` for `--no-strict`
    pub fn strict_flag(&self) -> Option<bool> {
        explicit_flag(self.strict, self.no_strict)
    }
}

/// Collapses a `--flag`/`--no-flag` pair; `None` when neither was given
fn explicit_flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}
