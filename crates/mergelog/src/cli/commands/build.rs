//! Build command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use mergelog_changelog::ChangelogGenerator;
use mergelog_core::workflow::{load_pull_requests, read_pull_requests, write_changelog};

use crate::cli::{output, resolve_config, Cli, OutputFormat};

/// Build a changelog from merged pull requests
#[derive(Debug, Args)]
pub struct BuildCommand {
    /// JSON file with the merged pull requests (`-` for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Configuration file (default: search from the working directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write to file instead of printing to stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Prepend to an existing output file instead of replacing it
    #[arg(long, requires = "output")]
    pub prepend: bool,
}

impl BuildCommand {
    /// Execute the build command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(input = %self.input.display(), output = ?self.output, "executing build command");
        let cwd = std::env::current_dir()?;
        let (config, config_path) = resolve_config(self.config.as_deref(), &cwd)?;
        if let Some(path) = &config_path {
            info!(path = %path.display(), "using configuration");
        }

        let prs = if self.input.as_os_str() == "-" {
            read_pull_requests(std::io::stdin().lock())?
        } else {
            load_pull_requests(&self.input)?
        };

        let generator = ChangelogGenerator::new(config);
        let classification = generator.classify(&prs);
        let changelog = generator.format(&classification);

        if let Some(path) = &self.output {
            write_changelog(path, &changelog, self.prepend)?;
            if !cli.quiet {
                output::success(&format!(
                    "Changelog for {} pull request(s) written to {}",
                    prs.len(),
                    output::path_style().apply_to(path.display())
                ));
            }
            return Ok(());
        }

        match cli.format {
            OutputFormat::Json => {
                let report = serde_json::json!({
                    "pull_requests": prs.len(),
                    "categories": classification.categories,
                    "uncategorized": classification.uncategorized,
                    "changelog": changelog,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                print!("{}", changelog);
            }
        }

        Ok(())
    }
}
