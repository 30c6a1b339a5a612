//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use mergelog_core::config::{load_config, load_config_or_default};
use mergelog_core::Config;

use commands::{BuildCommand, InitCommand, ValidateCommand};

/// mergelog - changelog builder for merged pull requests
#[derive(Debug, Parser)]
#[command(name = "mergelog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a changelog from merged pull requests
    Build(BuildCommand),

    /// Write a default mergelog configuration
    Init(InitCommand),

    /// Validate the configuration
    Validate(ValidateCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Build(ref cmd) => cmd.execute(&self),
            Commands::Init(ref cmd) => cmd.execute(&self),
            Commands::Validate(ref cmd) => cmd.execute(&self),
        }
    }
}

/// Load an explicitly given config, or search from `cwd` and fall back to defaults
pub fn resolve_config(
    explicit: Option<&Path>,
    cwd: &Path,
) -> anyhow::Result<(Config, Option<PathBuf>)> {
    match explicit {
        Some(path) => Ok((load_config(path)?, Some(path.to_path_buf()))),
        None => Ok(load_config_or_default(cwd)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from([
            "mergelog", "--format", "json", "build", "--input", "prs.json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Build(_)));
    }

    #[test]
    fn test_resolve_explicit_config() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("custom.yaml");
        std::fs::write(&path, "sort: ASC\n").unwrap();

        let (config, found) = resolve_config(Some(&path), temp.path()).unwrap();
        assert_eq!(config.sort, mergelog_core::SortOrder::Asc);
        assert_eq!(found, Some(path));
    }

    #[test]
    fn test_resolve_discovered_invalid_config_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("mergelog.yaml"), "pr_template: \"\"\n").unwrap();
        assert!(resolve_config(None, temp.path()).is_err());
    }

    #[test]
    fn test_resolve_missing_explicit_config_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("missing.yaml");
        assert!(resolve_config(Some(&path), temp.path()).is_err());
    }
}
