//! Scholarship finder.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{Scholarship, ScholarshipType};

/// Category entry meaning a scholarship applies to every field.
pub const ALL_CATEGORIES: &str = "All Categories";

/// Fields of study offered as category filters.
pub const KNOWN_CATEGORIES: [&str; 7] = [
    "Engineering",
    "Medical",
    "Science",
    "Arts",
    "Commerce",
    "Sports",
    "Research",
];

/// Deadlines within this many days are flagged as near.
pub const DEADLINE_WARNING_DAYS: i64 = 30;

/// Options applied conjunctively by the scholarship finder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScholarshipFilter {
    /// Case-insensitive substring matched against name and provider.
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub scholarship_type: Option<ScholarshipType>,
    /// Matches scholarships listing this category or [`ALL_CATEGORIES`].
    #[serde(default)]
    pub category: Option<String>,
}

impl ScholarshipFilter {
    pub fn matches(&self, scholarship: &Scholarship) -> bool {
        let needle = self.query.to_lowercase();
        let matches_query = scholarship.name.to_lowercase().contains(&needle)
            || scholarship.provider.to_lowercase().contains(&needle);
        let matches_type = self
            .scholarship_type
            .map_or(true, |t| scholarship.scholarship_type == t);
        let matches_category = self.category.as_deref().map_or(true, |cat| {
            cat.is_empty()
                || scholarship
                    .category
                    .iter()
                    .any(|c| c == cat || c == ALL_CATEGORIES)
        });

        matches_query && matches_type && matches_category
    }
}

/// Scholarships matching `filter`, in listing order.
pub fn filter_scholarships<'a>(
    scholarships: &'a [Scholarship],
    filter: &ScholarshipFilter,
) -> Vec<&'a Scholarship> {
    scholarships.iter().filter(|s| filter.matches(s)).collect()
}

/// Whether `deadline` falls within the next [`DEADLINE_WARNING_DAYS`] days.
///
/// A deadline of today or in the past is not near.
pub fn is_deadline_near(deadline: NaiveDate, today: NaiveDate) -> bool {
    let days = (deadline - today).num_days();
    days > 0 && days <= DEADLINE_WARNING_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scholarship(id: &str, name: &str, provider: &str, t: ScholarshipType, cats: &[&str]) -> Scholarship {
        Scholarship {
            id: id.into(),
            name: name.into(),
            provider: provider.into(),
            amount: 50_000,
            scholarship_type: t,
            category: cats.iter().map(|c| c.to_string()).collect(),
            eligibility: vec![],
            deadline: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            description: String::new(),
            website: "https://example.org".into(),
        }
    }

    fn sample() -> Vec<Scholarship> {
        vec![
            scholarship("1", "National Scholarship Portal", "Government of India", ScholarshipType::Need, &[ALL_CATEGORIES]),
            scholarship("2", "INSPIRE Scholarship", "Department of Science & Technology", ScholarshipType::Merit, &["Science", "Engineering"]),
            scholarship("5", "Sports Scholarship", "Sports Authority of India", ScholarshipType::Sports, &["Sports"]),
        ]
    }

    fn ids(found: &[&Scholarship]) -> Vec<String> {
        found.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn empty_filter_returns_all() {
        let list = sample();
        assert_eq!(filter_scholarships(&list, &ScholarshipFilter::default()).len(), 3);
    }

    #[test]
    fn query_matches_name_or_provider() {
        let list = sample();
        let by_provider = ScholarshipFilter {
            query: "india".into(),
            ..ScholarshipFilter::default()
        };
        assert_eq!(ids(&filter_scholarships(&list, &by_provider)), vec!["1", "5"]);

        let by_name = ScholarshipFilter {
            query: "INSPIRE".into(),
            ..ScholarshipFilter::default()
        };
        assert_eq!(ids(&filter_scholarships(&list, &by_name)), vec!["2"]);
    }

    #[test]
    fn category_includes_all_categories_entries() {
        let list = sample();
        let filter = ScholarshipFilter {
            category: Some("Engineering".into()),
            ..ScholarshipFilter::default()
        };
        assert_eq!(ids(&filter_scholarships(&list, &filter)), vec!["1", "2"]);
    }

    #[test]
    fn type_filter_is_exact() {
        let list = sample();
        let filter = ScholarshipFilter {
            scholarship_type: Some(ScholarshipType::Sports),
            ..ScholarshipFilter::default()
        };
        assert_eq!(ids(&filter_scholarships(&list, &filter)), vec!["5"]);
    }

    #[test]
    fn deadline_window() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let day = |d: u32| NaiveDate::from_ymd_opt(2024, 12, d).unwrap();
        assert!(is_deadline_near(day(31), today));
        assert!(is_deadline_near(day(2), today));
        assert!(!is_deadline_near(day(1), today));
        assert!(!is_deadline_near(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), today));
        assert!(!is_deadline_near(NaiveDate::from_ymd_opt(2024, 11, 30).unwrap(), today));
    }
}
