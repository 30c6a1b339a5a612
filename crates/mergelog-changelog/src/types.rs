//! Changelog types

use mergelog_core::PullRequestInfo;
use serde::Serialize;

/// The rendered text of one pull request, tied to its source record
#[derive(Debug, Clone)]
pub struct RenderedEntry<'a> {
    /// Source pull request
    pub pull_request: &'a PullRequestInfo,
    /// Rendered and rewritten text
    pub body: String,
}

impl<'a> RenderedEntry<'a> {
    /// Create a new rendered entry
    pub fn new(pull_request: &'a PullRequestInfo, body: impl Into<String>) -> Self {
        Self {
            pull_request,
            body: body.into(),
        }
    }

    /// Labels of the source pull request
    pub fn labels(&self) -> &[String] {
        &self.pull_request.labels
    }
}

/// A category and the entries assigned to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySection {
    /// Category title
    pub title: String,
    /// Entry bodies in changelog order
    pub entries: Vec<String>,
}

impl CategorySection {
    /// Create a new empty section
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Add an entry to the section
    pub fn add_entry(&mut self, body: impl Into<String>) {
        self.entries.push(body.into());
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Entries grouped by category, plus those no category claimed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// One section per configured category, in configuration order
    pub categories: Vec<CategorySection>,
    /// Entries that matched no category
    pub uncategorized: Vec<String>,
}

impl Classification {
    /// Sections that received at least one entry
    pub fn non_empty_categories(&self) -> impl Iterator<Item = &CategorySection> {
        self.categories.iter().filter(|section| !section.is_empty())
    }

    /// Number of category placements (an entry in two categories counts twice)
    pub fn categorized_count(&self) -> usize {
        self.categories.iter().map(|section| section.entries.len()).sum()
    }

    /// Check if nothing was classified at all
    pub fn is_empty(&self) -> bool {
        self.uncategorized.is_empty() && self.categories.iter().all(CategorySection::is_empty)
    }
}
