//! Core types for mergelog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A merged pull request as delivered by the source host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestInfo {
    /// Pull request number, unique within one input list
    pub number: u64,
    /// Title
    pub title: String,
    /// Web URL of the pull request
    #[serde(alias = "htmlURL", alias = "html_url")]
    pub url: String,
    /// Merge timestamp
    #[serde(alias = "mergedAt")]
    pub merged_at: DateTime<Utc>,
    /// Author login
    pub author: String,
    /// Labels in the order the host reports them
    #[serde(default)]
    pub labels: Vec<String>,
    /// Description body
    #[serde(default)]
    pub body: String,
    /// Milestone title
    #[serde(default)]
    pub milestone: Option<String>,
    /// Assignee logins
    #[serde(default)]
    pub assignees: Vec<String>,
    /// Requested reviewer logins
    #[serde(default, alias = "requestedReviewers")]
    pub requested_reviewers: Vec<String>,
}

impl PullRequestInfo {
    /// Create a new PullRequestInfo with the required fields
    pub fn new(
        number: u64,
        title: impl Into<String>,
        url: impl Into<String>,
        author: impl Into<String>,
        merged_at: DateTime<Utc>,
    ) -> Self {
        Self {
            number,
            title: title.into(),
            url: url.into(),
            merged_at,
            author: author.into(),
            labels: Vec::new(),
            body: String::new(),
            milestone: None,
            assignees: Vec::new(),
            requested_reviewers: Vec::new(),
        }
    }

    /// Set the labels
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Set the body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the milestone
    pub fn with_milestone(mut self, milestone: impl Into<String>) -> Self {
        self.milestone = Some(milestone.into());
        self
    }

    /// Set the assignees
    pub fn with_assignees<I, S>(mut self, assignees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assignees = assignees.into_iter().map(Into::into).collect();
        self
    }

    /// Set the requested reviewers
    pub fn with_reviewers<I, S>(mut self, reviewers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requested_reviewers = reviewers.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this pull request carries any of the given labels
    pub fn has_any_label(&self, labels: &[String]) -> bool {
        labels.iter().any(|label| self.labels.contains(label))
    }
}
