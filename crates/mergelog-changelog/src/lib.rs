//! Mergelog Changelog - Changelog rendering for merged pull requests
//!
//! This crate turns a list of pull requests and a resolved configuration into
//! a changelog document: ordering, per pull request templating, regex
//! rewriting, label classification and document assembly.

pub mod classify;
pub mod formatter;
pub mod generator;
pub mod ordering;
pub mod template;
pub mod transform;
pub mod types;

pub use classify::classify;
pub use formatter::{ChangelogFormatter, TemplateFormatter};
pub use generator::{build_changelog, ChangelogGenerator};
pub use ordering::sort_pull_requests;
pub use template::{fill_template, Placeholder};
pub use transform::{apply_rules, compile_rules, CompiledRule};
pub use types::{CategorySection, Classification, RenderedEntry};
