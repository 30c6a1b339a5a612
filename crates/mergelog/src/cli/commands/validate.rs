//! Validate command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use mergelog_changelog::CompiledRule;
use mergelog_core::config::{config_warnings, find_config, load_config};

use crate::cli::{output, Cli, OutputFormat};
use crate::exit_codes::{self, CommandExit};

/// Validate the configuration
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Configuration file (default: search from the working directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Strict mode - treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(strict = self.strict, "executing validate command");
        let cwd = std::env::current_dir()?;

        let Some(config_path) = self.config.clone().or_else(|| find_config(&cwd)) else {
            output::warning("No configuration file found; defaults would be used.");
            return Err(CommandExit::new(exit_codes::CONFIG_ERROR).into());
        };

        let mut errors: Vec<String> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        match load_config(&config_path) {
            Ok(config) => {
                warnings.extend(config_warnings(&config));

                for (i, transformer) in config.transformers.iter().enumerate() {
                    if let Err(e) = CompiledRule::compile(transformer) {
                        warnings.push(format!("transformers[{}]: {}", i, e));
                    }
                }
            }
            Err(e) => errors.push(format!("Configuration: {}", e)),
        }

        // If strict, promote warnings to errors
        if self.strict {
            errors.append(&mut warnings);
        }

        let passed = errors.is_empty();

        match cli.format {
            OutputFormat::Json => {
                let report = serde_json::json!({
                    "valid": passed,
                    "config_path": config_path.to_string_lossy(),
                    "errors": errors,
                    "warnings": warnings
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{}", output::header("Validation Results"));
                    println!();
                    println!(
                        "{}",
                        output::key_value(
                            "Config",
                            &output::path_style()
                                .apply_to(config_path.display())
                                .to_string()
                        )
                    );
                    println!();

                    if !errors.is_empty() {
                        println!("{}", style("Errors:").red().bold());
                        for error in &errors {
                            println!("  {} {}", style("✗").red(), error);
                        }
                        println!();
                    }

                    if !warnings.is_empty() {
                        println!("{}", style("Warnings:").yellow().bold());
                        for warning in &warnings {
                            println!("  {} {}", style("!").yellow(), warning);
                        }
                        println!();
                    }

                    if passed {
                        if warnings.is_empty() {
                            println!("{}", style("✓ All checks passed").green().bold());
                        } else {
                            println!(
                                "{} with {} warning(s)",
                                style("✓ Validation passed").green().bold(),
                                warnings.len()
                            );
                        }
                    } else {
                        println!(
                            "{} with {} error(s)",
                            style("✗ Validation failed").red().bold(),
                            errors.len()
                        );
                    }
                }
            }
        }

        if !passed {
            return Err(CommandExit::new(exit_codes::VALIDATION_ERROR).into());
        }

        Ok(())
    }
}
