//! Per pull request template rendering
//!
//! Templates reference pull request fields through `${{NAME}}` tokens. Each
//! recognized token is replaced once, at its first occurrence; later
//! occurrences and unrecognized tokens stay as literal text.

use chrono::SecondsFormat;
use mergelog_core::PullRequestInfo;

/// A recognized template token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Number,
    Title,
    Url,
    MergedAt,
    Author,
    Labels,
    Milestone,
    Body,
    Assignees,
    Reviewers,
}

impl Placeholder {
    /// All tokens, in substitution order
    pub const ALL: [Placeholder; 10] = [
        Self::Number,
        Self::Title,
        Self::Url,
        Self::MergedAt,
        Self::Author,
        Self::Labels,
        Self::Milestone,
        Self::Body,
        Self::Assignees,
        Self::Reviewers,
    ];

    /// The literal token as written in templates
    pub fn token(&self) -> &'static str {
        match self {
            Self::Number => "${{NUMBER}}",
            Self::Title => "${{TITLE}}",
            Self::Url => "${{URL}}",
            Self::MergedAt => "${{MERGED_AT}}",
            Self::Author => "${{AUTHOR}}",
            Self::Labels => "${{LABELS}}",
            Self::Milestone => "${{MILESTONE}}",
            Self::Body => "${{BODY}}",
            Self::Assignees => "${{ASSIGNEES}}",
            Self::Reviewers => "${{REVIEWERS}}",
        }
    }

    /// The value this token takes for a pull request
    pub fn value(&self, pr: &PullRequestInfo) -> String {
        match self {
            Self::Number => pr.number.to_string(),
            Self::Title => pr.title.clone(),
            Self::Url => pr.url.clone(),
            // e.g. 2024-01-01T00:00:00.000Z
            Self::MergedAt => pr.merged_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            Self::Author => pr.author.clone(),
            Self::Labels => pr.labels.join(", "),
            Self::Milestone => pr.milestone.clone().unwrap_or_default(),
            Self::Body => pr.body.clone(),
            Self::Assignees => pr.assignees.join(", "),
            Self::Reviewers => pr.requested_reviewers.join(", "),
        }
    }
}

/// Render a pull request through `template`
pub fn fill_template(pr: &PullRequestInfo, template: &str) -> String {
    Placeholder::ALL
        .iter()
        .fold(template.to_string(), |filled, placeholder| {
            if filled.contains(placeholder.token()) {
                filled.replacen(placeholder.token(), &placeholder.value(pr), 1)
            } else {
                filled
            }
        })
}
