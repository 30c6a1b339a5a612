//! Template-driven document formatter

use mergelog_core::config::{CHANGELOG_PLACEHOLDER, UNCATEGORIZED_PLACEHOLDER};
use mergelog_core::Config;
use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::Classification;

/// Fills the configured outer template with the categorized and
/// uncategorized sections
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateFormatter;

impl TemplateFormatter {
    /// Create a new template formatter
    pub fn new() -> Self {
        Self
    }

    /// Category headings with their entries; empty categories are skipped
    pub fn categorized_section(&self, classification: &Classification) -> String {
        let mut output = String::new();

        for section in classification.non_empty_categories() {
            output.push_str(&section.title);
            output.push_str("\n\n");

            for entry in &section.entries {
                output.push_str(entry);
                output.push('\n');
            }

            output.push('\n');
        }

        output
    }

    /// Uncategorized entries, one per line
    pub fn uncategorized_section(&self, classification: &Classification) -> String {
        let mut output = String::new();
        for entry in &classification.uncategorized {
            output.push_str(entry);
            output.push('\n');
        }
        output
    }
}

impl ChangelogFormatter for TemplateFormatter {
    #[instrument(skip_all, fields(categories = classification.categories.len()))]
    fn format(&self, classification: &Classification, config: &Config) -> String {
        let categorized = self.categorized_section(classification);
        let uncategorized = self.uncategorized_section(classification);

        let output = config
            .template
            .replacen(CHANGELOG_PLACEHOLDER, &categorized, 1)
            .replacen(UNCATEGORIZED_PLACEHOLDER, &uncategorized, 1);

        debug!(output_len = output.len(), "template filled");
        output
    }

    fn name(&self) -> &'static str {
        "template"
    }
}
