//! Filter criteria and sort key domain types

use serde::{Deserialize, Serialize};

/// The set of user-entered predicates narrowing the visible job list.
///
/// Every field is optional; an absent or empty field imposes no constraint,
/// so the default value is the identity filter. A new submission replaces
/// the previous criteria wholesale, there is no merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text keyword matched against title, company, description and tags.
    pub keyword: Option<String>,
    /// Location substring.
    pub location: Option<String>,
    /// Job-type label, exact case-insensitive match.
    pub job_type: Option<String>,
    pub experience: Option<String>,
    pub salary_band: Option<String>,
    pub date_posted: Option<String>,
    pub industry: Option<String>,
    pub education: Option<String>,
    pub company_size: Option<String>,
}

impl FilterCriteria {
    /// True when no field constrains the result (the "clear" state).
    pub fn is_empty(&self) -> bool {
        fn unset(field: &Option<String>) -> bool {
            field.as_deref().is_none_or(|s| s.trim().is_empty())
        }

        unset(&self.keyword)
            && unset(&self.location)
            && unset(&self.job_type)
            && unset(&self.experience)
            && unset(&self.salary_band)
            && unset(&self.date_posted)
            && unset(&self.industry)
            && unset(&self.education)
            && unset(&self.company_size)
    }
}

/// The ordering strategy applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Preserve the fetched/filtered order.
    #[default]
    Relevance,
    /// Coarse relative-age ordering from the posted-date label.
    Recent,
    /// Numeric descending on the parsed salary.
    SalaryHigh,
    /// Numeric ascending on the parsed salary.
    SalaryLow,
}

impl SortKey {
    /// Parse the CLI/query spelling of a sort key.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "relevance" => Some(SortKey::Relevance),
            "recent" => Some(SortKey::Recent),
            "salary-high" => Some(SortKey::SalaryHigh),
            "salary-low" => Some(SortKey::SalaryLow),
            _ => None,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SortKey::Relevance => "relevance",
            SortKey::Recent => "recent",
            SortKey::SalaryHigh => "salary-high",
            SortKey::SalaryLow => "salary-low",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_criteria_are_empty() {
        assert!(FilterCriteria::default().is_empty());
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let criteria = FilterCriteria {
            keyword: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(criteria.is_empty());
    }

    #[test]
    fn any_set_field_makes_criteria_non_empty() {
        let criteria = FilterCriteria {
            industry: Some("fintech".to_string()),
            ..Default::default()
        };
        assert!(!criteria.is_empty());
    }

    #[test]
    fn sort_key_round_trips_through_display() {
        for key in [
            SortKey::Relevance,
            SortKey::Recent,
            SortKey::SalaryHigh,
            SortKey::SalaryLow,
        ] {
            assert_eq!(SortKey::parse(&key.to_string()), Some(key));
        }
        assert_eq!(SortKey::parse("salary"), None);
    }
}
