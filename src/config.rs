//! Configuration file support for make-prereqs.
//!
//! Provides YAML-based configuration through `make-prereqs.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Args;
use make_prereqs::adapters::outbound::make::MakeInvocation;
use make_prereqs::application::dto::OutputFormat;
use make_prereqs::shared::Result;

pub const CONFIG_FILENAME: &str = "make-prereqs.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub make_program: Option<String>,
    pub makefile: Option<PathBuf>,
    pub make_args: Option<Vec<String>>,
    pub recursive: Option<bool>,
    pub strict: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub max_nodes: Option<u64>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to null, which is not a mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref program) = config.make_program {
        if program.trim().is_empty() {
            bail!(
                "Invalid config: make_program must not be empty.\n\n\
                 💡 Hint: Remove the field to use 'make', or name an executable such as 'gmake'."
            );
        }
    }

    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Remove the field to let make run without a time limit."
        );
    }

    if config.max_nodes == Some(0) {
        bail!(
            "Invalid config: max_nodes must be greater than 0.\n\n\
             💡 Hint: Remove the field to expand without a node limit."
        );
    }

    if let Some(ref format) = config.format {
        if let Err(message) = format.parse::<OutputFormat>() {
            bail!("Invalid config: {}", message);
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings after merging CLI arguments over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub target: String,
    pub recursive: bool,
    pub hash: bool,
    pub debug: bool,
    pub strict: bool,
    pub verbose: bool,
    pub max_nodes: Option<usize>,
    pub format: OutputFormat,
    pub database: Option<PathBuf>,
    pub invocation: MakeInvocation,
}

impl ResolvedOptions {
    /// Merges with precedence CLI > config file > built-in default.
    pub fn resolve(args: Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let recursive = args.recursive_flag().or(config.recursive).unwrap_or(false);
        let strict = args.strict_flag().or(config.strict).unwrap_or(false);
        let max_nodes = args
            .max_nodes
            .or(config.max_nodes)
            .map(usize::try_from)
            .transpose()
            .context("max_nodes is too large for this platform")?;

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(raw)) => raw.parse::<OutputFormat>().map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::default(),
        };

        let defaults = MakeInvocation::default();
        let make_args = if args.make_args.is_empty() {
            config.make_args.unwrap_or_default()
        } else {
            args.make_args
        };

        let invocation = MakeInvocation {
            program: args
                .make_program
                .or(config.make_program)
                .unwrap_or(defaults.program),
            directory: args.directory,
            makefile: args.makefile.or(config.makefile),
            extra_args: make_args,
            timeout: args
                .timeout
                .or(config.timeout_secs)
                .map(Duration::from_secs),
        };

        Ok(Self {
            target: args.target,
            recursive,
            hash: args.hash,
            debug: args.debug,
            strict,
            verbose: args.verbose,
            max_nodes,
            format,
            database: args.database,
            invocation,
        })
    }
}

/// Loads the explicit config when given, otherwise looks in the make directory.
pub fn load_for_args(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None => {
            let dir = args
                .directory
                .clone()
                .unwrap_or_else(|| PathBuf::from("."));
            discover_config(&dir)
        }
    }
}
