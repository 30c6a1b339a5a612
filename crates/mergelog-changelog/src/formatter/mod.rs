//! Changelog formatters

mod document;

pub use document::TemplateFormatter;

use mergelog_core::Config;

use crate::types::Classification;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format classified entries into the final document
    fn format(&self, classification: &Classification, config: &Config) -> String;

    /// Short name of the formatter, used in logs
    fn name(&self) -> &'static str;
}
