//! Changelog generation

use mergelog_core::{Config, PullRequestInfo};
use tracing::{debug, info, instrument};

use crate::classify::classify;
use crate::formatter::{ChangelogFormatter, TemplateFormatter};
use crate::ordering::sort_pull_requests;
use crate::template::fill_template;
use crate::transform::{apply_rules, compile_rules};
use crate::types::{Classification, RenderedEntry};

/// Changelog generator
pub struct ChangelogGenerator {
    formatter: Box<dyn ChangelogFormatter>,
    config: Config,
}

impl ChangelogGenerator {
    /// Create a new generator with the template formatter
    pub fn new(config: Config) -> Self {
        Self {
            formatter: Box::new(TemplateFormatter::new()),
            config,
        }
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Sort, render, rewrite and classify pull requests
    #[instrument(skip(self, prs), fields(pr_count = prs.len()))]
    pub fn classify(&self, prs: &[PullRequestInfo]) -> Classification {
        let sorted = sort_pull_requests(prs, self.config.sort);
        info!(sort = %self.config.sort, "sorted pull requests");

        let included: Vec<&PullRequestInfo> = sorted
            .into_iter()
            .filter(|pr| !pr.has_any_label(&self.config.ignore_labels))
            .collect();
        if included.len() < prs.len() {
            debug!(
                ignored = prs.len() - included.len(),
                "skipped pull requests with ignored labels"
            );
        }

        let rules = compile_rules(&self.config.transformers);
        info!(count = rules.len(), "using transformers to adjust messages");

        let entries: Vec<RenderedEntry<'_>> = included
            .into_iter()
            .map(|pr| {
                let filled = fill_template(pr, &self.config.pr_template);
                RenderedEntry::new(pr, apply_rules(&filled, &rules))
            })
            .collect();
        info!(count = entries.len(), "wrote messages for pull requests");

        let classification = classify(&entries, &self.config.categories);
        info!(
            categories = self.config.categories.len(),
            categorized = classification.categorized_count(),
            uncategorized = classification.uncategorized.len(),
            "ordered pull requests into categories"
        );

        classification
    }

    /// Assemble the document for classified entries
    pub fn format(&self, classification: &Classification) -> String {
        if classification.is_empty() {
            if let Some(empty) = &self.config.empty_template {
                debug!("nothing to list, using empty template");
                return empty.clone();
            }
        }

        let output = self.formatter.format(classification, &self.config);
        debug!(
            formatter = self.formatter.name(),
            output_len = output.len(),
            "changelog formatted"
        );
        output
    }

    /// Generate and format in one step
    #[instrument(skip(self, prs), fields(pr_count = prs.len()))]
    pub fn generate(&self, prs: &[PullRequestInfo]) -> String {
        let classification = self.classify(prs);
        self.format(&classification)
    }
}

/// Build a changelog document from pull requests and a resolved configuration
pub fn build_changelog(prs: &[PullRequestInfo], config: &Config) -> String {
    ChangelogGenerator::new(config.clone()).generate(prs)
}
