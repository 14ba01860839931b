//! Filter/sort/paginate pipeline
//!
//! The logic behind the job browser: given the full fetched list, the
//! active criteria, a sort key and a page index, produce the visible page.
//! Everything here is a pure function of its inputs; re-running with the
//! same inputs yields the same output, and the full pipeline re-runs on
//! every input change rather than updating incrementally.

use crate::domain::{FilterCriteria, JobListing, SortKey};

/// Run the full pipeline: filter, then sort, then slice out one page.
///
/// `page` is 1-based. Out-of-range pages produce an empty slice, never an
/// error.
pub fn apply(
    all: &[JobListing],
    criteria: &FilterCriteria,
    sort_key: SortKey,
    page: usize,
    page_size: usize,
) -> Vec<JobListing> {
    let mut matched = filter(all, criteria);
    sort(&mut matched, sort_key);
    paginate(&matched, page, page_size)
        .iter()
        .map(|job| (*job).clone())
        .collect()
}

/// Retain jobs matching every provided criterion.
///
/// An absent or blank field imposes no constraint, so empty criteria are
/// the identity filter.
pub fn filter<'a>(all: &'a [JobListing], criteria: &FilterCriteria) -> Vec<&'a JobListing> {
    all.iter().filter(|job| matches(job, criteria)).collect()
}

fn matches(job: &JobListing, criteria: &FilterCriteria) -> bool {
    if let Some(keyword) = provided(&criteria.keyword)
        && !matches_keyword(job, &keyword)
    {
        return false;
    }
    if let Some(location) = provided(&criteria.location)
        && !job.location.to_lowercase().contains(&location)
    {
        return false;
    }
    if let Some(job_type) = provided(&criteria.job_type)
        && job.job_type.to_lowercase() != job_type
    {
        return false;
    }
    // Advanced criteria match against the tag list: the backend exposes no
    // dedicated columns for them, the records carry them as tags.
    for field in [
        &criteria.experience,
        &criteria.salary_band,
        &criteria.date_posted,
        &criteria.industry,
        &criteria.education,
        &criteria.company_size,
    ] {
        if let Some(value) = provided(field)
            && !job.tags.iter().any(|tag| tag.to_lowercase() == value)
        {
            return false;
        }
    }
    true
}

/// A criterion counts as provided only when it is non-blank.
fn provided(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Keyword matches case-insensitively as a substring of the title, company,
/// description or any skill tag.
fn matches_keyword(job: &JobListing, keyword: &str) -> bool {
    job.title.to_lowercase().contains(keyword)
        || job.company.to_lowercase().contains(keyword)
        || job.description.to_lowercase().contains(keyword)
        || job.tags.iter().any(|tag| tag.to_lowercase().contains(keyword))
}

/// Reorder in place according to the sort key.
///
/// All sorts are stable, so `Relevance` is a no-op and ties everywhere else
/// keep their fetched order.
pub fn sort(jobs: &mut [&JobListing], sort_key: SortKey) {
    match sort_key {
        SortKey::Relevance => {}
        SortKey::Recent => jobs.sort_by_key(|job| recency_rank(&job.posted)),
        SortKey::SalaryHigh => {
            jobs.sort_by_key(|job| std::cmp::Reverse(salary_amount(&job.salary)))
        }
        SortKey::SalaryLow => jobs.sort_by_key(|job| salary_amount(&job.salary)),
    }
}

/// Coarse age rank from the posted-date label: "today" first, then labels
/// in day units, then week units, then everything older. No numeric date
/// parsing happens here on purpose.
fn recency_rank(posted: &str) -> u8 {
    let label = posted.to_lowercase();
    if label.contains("today") {
        0
    } else if label.contains("day") {
        1
    } else if label.contains("week") {
        2
    } else {
        3
    }
}

/// Parse the first run of digits out of a formatted salary string.
/// "$85,000 per year" parses as 85; a string with no digits parses as 0.
fn salary_amount(salary: &str) -> u64 {
    let digits: String = salary
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Slice out the 1-based `page` of size `page_size`.
pub fn paginate<'a>(jobs: &[&'a JobListing], page: usize, page_size: usize) -> Vec<&'a JobListing> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= jobs.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(jobs.len());
    jobs[start..end].to_vec()
}

/// Number of pages needed for `total` items; 0 for an empty list.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// The visible page-number window for the pagination control.
///
/// At most `max_visible` consecutive page numbers, centered on the current
/// page and clamped to `[1, total_pages]`.
pub fn page_window(current: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    if total_pages == 0 || max_visible == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let half = max_visible / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = (start + max_visible - 1).min(total_pages);
    // Re-anchor when the window ran into the last page.
    start = end.saturating_sub(max_visible - 1).max(1);
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, title: &str, salary: &str, posted: &str, tags: &[&str]) -> JobListing {
        JobListing {
            id: id.to_string(),
            title: title.to_string(),
            company: "Acme Corp".to_string(),
            job_type: "full time".to_string(),
            salary: salary.to_string(),
            description: "Generic description".to_string(),
            location: "Remote".to_string(),
            posted: posted.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            logo_url: String::new(),
        }
    }

    fn sample() -> Vec<JobListing> {
        vec![
            job("1", "Frontend Developer", "$85,000 per year", "today", &["React", "CSS"]),
            job("2", "Backend Developer", "$120,000 per year", "3 days ago", &["Rust"]),
            job("3", "Data Analyst", "$70,000 per year", "2 weeks ago", &["SQL"]),
            job("4", "Designer", "$60,000 per year", "1 day ago", &["Figma"]),
            job("5", "DevOps Engineer", "$110,000 per year", "2 months ago", &["AWS"]),
            job("6", "QA Engineer", "$65,000 per year", "today", &["Selenium"]),
            job("7", "Product Manager", "$95,000 per year", "1 week ago", &["Roadmaps"]),
        ]
    }

    fn ids(jobs: &[JobListing]) -> Vec<&str> {
        jobs.iter().map(|j| j.id.as_str()).collect()
    }

    #[test]
    fn empty_criteria_are_the_identity_filter() {
        let all = sample();
        let out = apply(&all, &FilterCriteria::default(), SortKey::Relevance, 1, 100);
        assert_eq!(ids(&out), vec!["1", "2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn keyword_matches_title_company_description_or_tag() {
        let all = sample();
        let criteria = FilterCriteria {
            keyword: Some("react".to_string()),
            ..Default::default()
        };
        let out = apply(&all, &criteria, SortKey::Relevance, 1, 100);
        assert_eq!(ids(&out), vec!["1"]);

        // Company name is in every sample job, so this keyword keeps them all.
        let criteria = FilterCriteria {
            keyword: Some("ACME".to_string()),
            ..Default::default()
        };
        assert_eq!(apply(&all, &criteria, SortKey::Relevance, 1, 100).len(), 7);
    }

    #[test]
    fn keyword_exclusion_is_complete() {
        let all = sample();
        let criteria = FilterCriteria {
            keyword: Some("developer".to_string()),
            ..Default::default()
        };
        let out = apply(&all, &criteria, SortKey::Relevance, 1, 100);
        assert_eq!(ids(&out), vec!["1", "2"]);
        for excluded in all.iter().filter(|j| !out.iter().any(|o| o.id == j.id)) {
            assert!(!excluded.title.to_lowercase().contains("developer"));
            assert!(!excluded.description.to_lowercase().contains("developer"));
            assert!(
                !excluded.tags.iter().any(|t| t.to_lowercase().contains("developer"))
            );
        }
    }

    #[test]
    fn location_is_a_case_insensitive_substring() {
        let mut all = sample();
        all[2].location = "New York".to_string();
        let criteria = FilterCriteria {
            location: Some("york".to_string()),
            ..Default::default()
        };
        let out = apply(&all, &criteria, SortKey::Relevance, 1, 100);
        assert_eq!(ids(&out), vec!["3"]);
    }

    #[test]
    fn job_type_requires_exact_equality() {
        let mut all = sample();
        all[1].job_type = "part time".to_string();
        let criteria = FilterCriteria {
            job_type: Some("Part Time".to_string()),
            ..Default::default()
        };
        let out = apply(&all, &criteria, SortKey::Relevance, 1, 100);
        assert_eq!(ids(&out), vec!["2"]);

        // Substrings are not enough for the job-type field.
        let criteria = FilterCriteria {
            job_type: Some("part".to_string()),
            ..Default::default()
        };
        assert!(apply(&all, &criteria, SortKey::Relevance, 1, 100).is_empty());
    }

    #[test]
    fn advanced_criteria_match_tags_exactly() {
        let all = sample();
        let criteria = FilterCriteria {
            industry: Some("rust".to_string()),
            ..Default::default()
        };
        let out = apply(&all, &criteria, SortKey::Relevance, 1, 100);
        assert_eq!(ids(&out), vec!["2"]);
    }

    #[test]
    fn recent_sort_orders_today_then_days_then_weeks() {
        let all = sample();
        let out = apply(&all, &FilterCriteria::default(), SortKey::Recent, 1, 100);
        assert_eq!(ids(&out), vec!["1", "6", "2", "4", "3", "7", "5"]);
    }

    #[test]
    fn salary_sorts_are_exact_reversals() {
        let all = sample();
        let high = apply(&all, &FilterCriteria::default(), SortKey::SalaryHigh, 1, 100);
        let low = apply(&all, &FilterCriteria::default(), SortKey::SalaryLow, 1, 100);
        let mut reversed = ids(&low);
        reversed.reverse();
        assert_eq!(ids(&high), reversed);
        assert_eq!(high[0].id, "2");
        assert_eq!(low[0].id, "4");
    }

    #[test]
    fn malformed_salaries_sort_as_zero() {
        let mut all = sample();
        all[0].salary = "negotiable".to_string();
        let low = apply(&all, &FilterCriteria::default(), SortKey::SalaryLow, 1, 100);
        assert_eq!(low[0].id, "1");
    }

    #[test]
    fn pagination_length_matches_the_arithmetic() {
        let all = sample();
        for page in 1..=4 {
            let out = apply(&all, &FilterCriteria::default(), SortKey::Relevance, page, 3);
            let expected = 3usize.min(all.len().saturating_sub((page - 1) * 3));
            assert_eq!(out.len(), expected, "page {}", page);
        }
    }

    #[test]
    fn seven_jobs_at_page_size_five_split_five_two_zero() {
        let all = sample();
        let criteria = FilterCriteria::default();
        assert_eq!(apply(&all, &criteria, SortKey::Relevance, 1, 5).len(), 5);
        assert_eq!(apply(&all, &criteria, SortKey::Relevance, 2, 5).len(), 2);
        assert_eq!(apply(&all, &criteria, SortKey::Relevance, 3, 5).len(), 0);
    }

    #[test]
    fn empty_input_yields_empty_output_and_zero_pages() {
        let out = apply(&[], &FilterCriteria::default(), SortKey::Recent, 1, 5);
        assert!(out.is_empty());
        assert_eq!(total_pages(0, 5), 0);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(7, 5), 2);
        assert_eq!(total_pages(10, 5), 2);
        assert_eq!(total_pages(11, 5), 3);
        assert_eq!(total_pages(1, 5), 1);
    }

    #[test]
    fn page_window_centers_and_clamps() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(99, 3, 5), vec![1, 2, 3]);
        assert!(page_window(1, 0, 5).is_empty());
    }

    #[test]
    fn rerunning_with_identical_inputs_is_deterministic() {
        let all = sample();
        let criteria = FilterCriteria {
            keyword: Some("engineer".to_string()),
            ..Default::default()
        };
        let first = apply(&all, &criteria, SortKey::SalaryHigh, 1, 5);
        let second = apply(&all, &criteria, SortKey::SalaryHigh, 1, 5);
        assert_eq!(ids(&first), ids(&second));
    }
}
