//! Mergelog Core - Core library for pull-request changelogs
//!
//! This crate provides the pull-request record type, error handling and the
//! configuration layer used by the changelog pipeline and the CLI.

pub mod config;
pub mod error;
pub mod types;
pub mod workflow;

pub use config::{Category, Config, SortOrder, Transformer};
pub use error::{ChangelogError, ConfigError, MergelogError, Result};
pub use types::PullRequestInfo;
