//! Label-based classification of rendered entries

use mergelog_core::Category;
use tracing::debug;

use crate::types::{CategorySection, Classification, RenderedEntry};

/// Assign entries to categories by label overlap.
///
/// Every category is checked for every entry, so an entry whose labels
/// intersect several categories is listed under each of them. Entries that
/// match none end up in `uncategorized`, once. Order within each bucket
/// follows the order of `entries`.
pub fn classify(entries: &[RenderedEntry<'_>], categories: &[Category]) -> Classification {
    let mut sections: Vec<CategorySection> = categories
        .iter()
        .map(|category| CategorySection::new(&category.title))
        .collect();
    let mut uncategorized = Vec::new();

    for entry in entries {
        let mut matched = false;

        for (category, section) in categories.iter().zip(sections.iter_mut()) {
            if category.matches(entry.labels()) {
                section.add_entry(entry.body.clone());
                matched = true;
            }
        }

        if !matched {
            uncategorized.push(entry.body.clone());
        }
    }

    debug!(
        categories = categories.len(),
        categorized = sections.iter().map(|s| s.entries.len()).sum::<usize>(),
        uncategorized = uncategorized.len(),
        "entries classified"
    );

    Classification {
        categories: sections,
        uncategorized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mergelog_core::PullRequestInfo;

    fn make_pr(number: u64, labels: &[&str]) -> PullRequestInfo {
        PullRequestInfo::new(number, "title", "url", "author", Utc::now())
            .with_labels(labels.iter().copied())
    }

    fn entries(prs: &[PullRequestInfo]) -> Vec<RenderedEntry<'_>> {
        prs.iter()
            .map(|pr| RenderedEntry::new(pr, format!("#{}", pr.number)))
            .collect()
    }

    #[test]
    fn test_single_category_and_uncategorized() {
        let prs = vec![make_pr(1, &["bug"]), make_pr(2, &["feature"])];
        let categories = vec![Category::new("Bugs", ["bug"])];

        let result = classify(&entries(&prs), &categories);

        assert_eq!(result.categories[0].entries, vec!["#1".to_string()]);
        assert_eq!(result.uncategorized, vec!["#2".to_string()]);
    }

    #[test]
    fn test_entry_in_multiple_categories() {
        let prs = vec![make_pr(1, &["bug", "ui"])];
        let categories = vec![
            Category::new("Bugs", ["bug"]),
            Category::new("Docs", ["docs"]),
            Category::new("UI", ["ui"]),
        ];

        let result = classify(&entries(&prs), &categories);

        assert_eq!(result.categories[0].entries, vec!["#1".to_string()]);
        assert!(result.categories[1].entries.is_empty());
        assert_eq!(result.categories[2].entries, vec!["#1".to_string()]);
        assert!(result.uncategorized.is_empty());
    }

    #[test]
    fn test_unmatched_entry_listed_once() {
        let prs = vec![make_pr(1, &["chore"])];
        let categories = vec![Category::new("Bugs", ["bug"]), Category::new("UI", ["ui"])];

        let result = classify(&entries(&prs), &categories);

        assert_eq!(result.uncategorized, vec!["#1".to_string()]);
        assert_eq!(result.categorized_count(), 0);
    }

    #[test]
    fn test_entry_without_labels_is_uncategorized() {
        let prs = vec![make_pr(1, &[])];
        let categories = vec![Category::new("Bugs", ["bug"])];

        let result = classify(&entries(&prs), &categories);
        assert_eq!(result.uncategorized.len(), 1);
    }

    #[test]
    fn test_order_preserved_within_buckets() {
        let prs = vec![
            make_pr(3, &["bug"]),
            make_pr(1, &["other"]),
            make_pr(2, &["bug"]),
            make_pr(4, &["other"]),
        ];
        let categories = vec![Category::new("Bugs", ["bug"])];

        let result = classify(&entries(&prs), &categories);

        assert_eq!(result.categories[0].entries, vec!["#3", "#2"]);
        assert_eq!(result.uncategorized, vec!["#1", "#4"]);
    }

    #[test]
    fn test_sections_follow_category_order() {
        let categories = vec![Category::new("Z", ["z"]), Category::new("A", ["a"])];
        let result = classify(&[], &categories);

        let titles: Vec<&str> = result.categories.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Z", "A"]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_no_categories() {
        let prs = vec![make_pr(1, &["bug"]), make_pr(2, &[])];
        let result = classify(&entries(&prs), &[]);

        assert!(result.categories.is_empty());
        assert_eq!(result.uncategorized.len(), 2);
    }
}
