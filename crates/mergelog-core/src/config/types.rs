//! Configuration types

use serde::{Deserialize, Serialize};

use super::defaults::{DEFAULT_PR_TEMPLATE, DEFAULT_TEMPLATE};

/// Main configuration for mergelog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Merge-time ordering of pull requests
    pub sort: SortOrder,

    /// Template rendered once per pull request
    pub pr_template: String,

    /// Outer document template holding the two section placeholders
    pub template: String,

    /// Returned verbatim instead of `template` when there is nothing to list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_template: Option<String>,

    /// Pull requests carrying any of these labels are left out
    pub ignore_labels: Vec<String>,

    /// Find/replace rules applied to every rendered pull request
    pub transformers: Vec<Transformer>,

    /// Output categories, in display order
    pub categories: Vec<Category>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sort: SortOrder::default(),
            pr_template: DEFAULT_PR_TEMPLATE.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            empty_template: None,
            ignore_labels: Vec::new(),
            transformers: super::defaults::default_transformers(),
            categories: Vec::new(),
        }
    }
}

/// Direction in which pull requests are ordered by merge time
///
/// Parsed leniently: `ASC` in any case selects ascending order and every
/// other token selects descending order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortOrder {
    /// Oldest merge first
    Asc,
    /// Newest merge first
    #[default]
    Desc,
}

impl SortOrder {
    /// Resolve a configured sort token
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("ASC") {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    /// Returns the canonical token
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl From<String> for SortOrder {
    fn from(token: String) -> Self {
        Self::from_token(&token)
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        order.as_str().to_string()
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A regex find/replace rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformer {
    /// Regular expression source
    pub pattern: String,
    /// Replacement, may reference capture groups as `$1` or `${name}`
    #[serde(default)]
    pub target: String,
}

impl Transformer {
    /// Create a new transformer
    pub fn new(pattern: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            target: target.into(),
        }
    }
}

/// A titled output section selected by label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Heading written above the section
    pub title: String,
    /// A pull request belongs here if it has at least one of these labels
    pub labels: Vec<String>,
}

impl Category {
    /// Create a new category
    pub fn new<I, S>(title: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether any of `labels` selects this category
    pub fn matches(&self, labels: &[String]) -> bool {
        self.labels.iter().any(|label| labels.contains(label))
    }
}
