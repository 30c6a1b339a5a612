//! Merge-time ordering of pull requests

use mergelog_core::{PullRequestInfo, SortOrder};

/// Order pull requests by merge time.
///
/// The sort is stable: pull requests merged at the same instant keep their
/// input order in both directions.
pub fn sort_pull_requests(prs: &[PullRequestInfo], order: SortOrder) -> Vec<&PullRequestInfo> {
    let mut sorted: Vec<&PullRequestInfo> = prs.iter().collect();
    match order {
        SortOrder::Asc => sorted.sort_by(|a, b| a.merged_at.cmp(&b.merged_at)),
        SortOrder::Desc => sorted.sort_by(|a, b| b.merged_at.cmp(&a.merged_at)),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_pr(number: u64, day: u32) -> PullRequestInfo {
        PullRequestInfo::new(
            number,
            format!("PR {}", number),
            format!("https://example.com/pull/{}", number),
            "author",
            Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        )
    }

    fn numbers(prs: &[&PullRequestInfo]) -> Vec<u64> {
        prs.iter().map(|pr| pr.number).collect()
    }

    #[test]
    fn test_ascending() {
        let prs = vec![make_pr(1, 3), make_pr(2, 1), make_pr(3, 2)];
        assert_eq!(numbers(&sort_pull_requests(&prs, SortOrder::Asc)), vec![2, 3, 1]);
    }

    #[test]
    fn test_descending() {
        let prs = vec![make_pr(1, 3), make_pr(2, 1), make_pr(3, 2)];
        assert_eq!(numbers(&sort_pull_requests(&prs, SortOrder::Desc)), vec![1, 3, 2]);
    }

    #[test]
    fn test_directions_are_reversed() {
        let prs = vec![make_pr(1, 5), make_pr(2, 9), make_pr(3, 1), make_pr(4, 7)];
        let asc = numbers(&sort_pull_requests(&prs, SortOrder::Asc));
        let mut desc = numbers(&sort_pull_requests(&prs, SortOrder::Desc));
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_stable_for_equal_timestamps() {
        let prs = vec![make_pr(1, 2), make_pr(2, 1), make_pr(3, 2), make_pr(4, 1)];

        assert_eq!(numbers(&sort_pull_requests(&prs, SortOrder::Asc)), vec![2, 4, 1, 3]);
        assert_eq!(numbers(&sort_pull_requests(&prs, SortOrder::Desc)), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_empty_input() {
        assert!(sort_pull_requests(&[], SortOrder::Asc).is_empty());
    }
}
