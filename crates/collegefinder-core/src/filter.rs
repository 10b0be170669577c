//! College finder: conjunctive filtering and stable sorting over a catalog.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{College, InstitutionType};

/// Default annual fee ceiling offered by the finder.
pub const DEFAULT_MAX_FEE: u64 = 500_000;

/// Sort order for finder results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending NIRF rank.
    #[default]
    Rank,
    /// Ascending annual fee.
    Fee,
    /// Name order.
    Name,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Rank => write!(f, "rank"),
            SortKey::Fee => write!(f, "fee"),
            SortKey::Name => write!(f, "name"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rank" => Ok(SortKey::Rank),
            "fee" | "fees" => Ok(SortKey::Fee),
            "name" => Ok(SortKey::Name),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Options applied conjunctively by the finder. Unset options always pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Case-insensitive substring matched against name, city, and courses.
    #[serde(default)]
    pub query: String,
    /// Exact city match.
    #[serde(default)]
    pub location: Option<String>,
    /// Exact institution type match.
    #[serde(default)]
    pub institution_type: Option<InstitutionType>,
    /// Inclusive upper bound on the annual fee.
    #[serde(default)]
    pub max_fee: Option<u64>,
    #[serde(default)]
    pub sort: SortKey,
}

impl FilterConfig {
    /// Whether `college` satisfies every active predicate.
    pub fn matches(&self, college: &College) -> bool {
        let query = self.query.to_lowercase();
        self.matches_with_needle(college, &query)
    }

    fn matches_with_needle(&self, college: &College, needle: &str) -> bool {
        let matches_query = needle.is_empty() || college.matches_text(needle);
        let matches_location = self
            .location
            .as_deref()
            .map_or(true, |loc| loc.is_empty() || college.city == loc);
        let matches_type = self
            .institution_type
            .map_or(true, |t| college.institution_type == t);
        let matches_fee = self.max_fee.map_or(true, |max| college.fees.annual <= max);

        matches_query && matches_location && matches_type && matches_fee
    }
}

/// Colleges satisfying every active predicate, in catalog order.
pub fn filter_colleges<'a>(colleges: &'a [College], config: &FilterConfig) -> Vec<&'a College> {
    let needle = config.query.to_lowercase();
    colleges
        .iter()
        .filter(|c| config.matches_with_needle(c, &needle))
        .collect()
}

/// Filter, then sort by `config.sort`. Ties keep catalog order.
pub fn filter_and_sort<'a>(colleges: &'a [College], config: &FilterConfig) -> Vec<&'a College> {
    let mut results = filter_colleges(colleges, config);
    sort_colleges(&mut results, config.sort);
    tracing::debug!(
        total = colleges.len(),
        matched = results.len(),
        sort = %config.sort,
        "filtered catalog"
    );
    results
}

/// Stable sort by `key`.
pub fn sort_colleges(colleges: &mut [&College], key: SortKey) {
    match key {
        SortKey::Rank => colleges.sort_by_key(|c| c.nirf_rank),
        SortKey::Fee => colleges.sort_by_key(|c| c.fees.annual),
        SortKey::Name => colleges.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }
}

/// Name comparison that approximates a locale collation: case is ignored
/// first and only breaks ties between otherwise equal names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::college;

    fn sample() -> Vec<College> {
        vec![
            college("1", "IIT Delhi", "Delhi", InstitutionType::Central, 1, 200_000),
            college("5", "BITS Pilani", "Pilani", InstitutionType::Deemed, 25, 450_000),
            college("3", "AIIMS Delhi", "Delhi", InstitutionType::Central, 1, 5_000),
            college("8", "Manipal Institute", "Manipal", InstitutionType::Deemed, 45, 350_000),
            college("6", "JNU", "Delhi", InstitutionType::Central, 3, 15_000),
        ]
    }

    fn ids(results: &[&College]) -> Vec<String> {
        results.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn sort_key_display_and_parse() {
        assert_eq!(SortKey::Fee.to_string(), "fee");
        assert_eq!("NAME".parse::<SortKey>().unwrap(), SortKey::Name);
        assert!("rating".parse::<SortKey>().is_err());
    }

    #[test]
    fn max_fee_scenario() {
        let colleges = vec![
            college("1", "IIT Delhi", "Delhi", InstitutionType::Central, 1, 200_000),
            college("5", "BITS Pilani", "Pilani", InstitutionType::Deemed, 25, 450_000),
        ];
        let config = FilterConfig {
            max_fee: Some(300_000),
            ..FilterConfig::default()
        };
        assert_eq!(ids(&filter_and_sort(&colleges, &config)), vec!["1"]);
    }

    #[test]
    fn max_fee_is_inclusive() {
        let colleges = sample();
        let config = FilterConfig {
            max_fee: Some(200_000),
            ..FilterConfig::default()
        };
        assert!(ids(&filter_colleges(&colleges, &config)).contains(&"1".to_string()));
    }

    #[test]
    fn empty_config_returns_catalog_in_order() {
        let colleges = sample();
        let config = FilterConfig {
            max_fee: Some(450_000),
            ..FilterConfig::default()
        };
        assert_eq!(ids(&filter_colleges(&colleges, &config)), vec!["1", "5", "3", "8", "6"]);
        assert_eq!(
            filter_colleges(&colleges, &FilterConfig::default()).len(),
            colleges.len()
        );
    }

    #[test]
    fn empty_location_string_is_no_constraint() {
        let colleges = sample();
        let config = FilterConfig {
            location: Some(String::new()),
            ..FilterConfig::default()
        };
        assert_eq!(filter_colleges(&colleges, &config).len(), colleges.len());
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let colleges = sample();
        let by_name = FilterConfig {
            query: "pIlAn".into(),
            ..FilterConfig::default()
        };
        assert_eq!(ids(&filter_colleges(&colleges, &by_name)), vec!["5"]);

        let by_course = FilterConfig {
            query: "mechanical".into(),
            ..FilterConfig::default()
        };
        assert_eq!(filter_colleges(&colleges, &by_course).len(), colleges.len());

        let nothing = FilterConfig {
            query: "zoology".into(),
            ..FilterConfig::default()
        };
        assert!(filter_colleges(&colleges, &nothing).is_empty());
    }

    #[test]
    fn predicates_combine_with_and() {
        let colleges = sample();
        let config = FilterConfig {
            query: "delhi".into(),
            location: Some("Delhi".into()),
            institution_type: Some(InstitutionType::Central),
            max_fee: Some(10_000),
            sort: SortKey::Fee,
        };
        assert_eq!(ids(&filter_and_sort(&colleges, &config)), vec!["3"]);
    }

    #[test]
    fn location_is_exact_match() {
        let colleges = sample();
        let config = FilterConfig {
            location: Some("delhi".into()),
            ..FilterConfig::default()
        };
        assert!(filter_colleges(&colleges, &config).is_empty());
    }

    #[test]
    fn filter_is_sound_and_complete() {
        let colleges = sample();
        let configs = [
            FilterConfig {
                query: "i".into(),
                institution_type: Some(InstitutionType::Deemed),
                ..FilterConfig::default()
            },
            FilterConfig {
                location: Some("Delhi".into()),
                max_fee: Some(20_000),
                ..FilterConfig::default()
            },
            FilterConfig {
                query: "science".into(),
                max_fee: Some(0),
                ..FilterConfig::default()
            },
        ];
        for config in &configs {
            let result = filter_colleges(&colleges, config);
            for c in &colleges {
                let included = result.iter().any(|r| r.id == c.id);
                assert_eq!(included, config.matches(c), "college {} with {config:?}", c.id);
            }
        }
    }

    #[test]
    fn sort_by_rank_is_stable() {
        let colleges = sample();
        let results = filter_and_sort(&colleges, &FilterConfig::default());
        assert!(results.windows(2).all(|w| w[0].nirf_rank <= w[1].nirf_rank));
        // IIT Delhi and AIIMS Delhi share rank 1; catalog order is kept.
        assert_eq!(ids(&results), vec!["1", "3", "6", "5", "8"]);
    }

    #[test]
    fn sort_by_fee_is_non_decreasing() {
        let colleges = sample();
        let config = FilterConfig {
            sort: SortKey::Fee,
            ..FilterConfig::default()
        };
        let results = filter_and_sort(&colleges, &config);
        assert!(results.windows(2).all(|w| w[0].fees.annual <= w[1].fees.annual));
        assert_eq!(ids(&results), vec!["3", "6", "1", "8", "5"]);
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let mut colleges = sample();
        colleges.push(college("11", "amity University", "Noida", InstitutionType::Private, 60, 300_000));
        let config = FilterConfig {
            sort: SortKey::Name,
            ..FilterConfig::default()
        };
        let results = filter_and_sort(&colleges, &config);
        assert_eq!(ids(&results), vec!["3", "11", "5", "1", "6", "8"]);
        assert!(results
            .windows(2)
            .all(|w| compare_names(&w[0].name, &w[1].name) != Ordering::Greater));
    }

    #[test]
    fn sort_by_fee_ties_keep_catalog_order() {
        let colleges = vec![
            college("a", "A", "X", InstitutionType::Private, 9, 100),
            college("b", "B", "X", InstitutionType::Private, 1, 100),
            college("c", "C", "X", InstitutionType::Private, 5, 50),
        ];
        let config = FilterConfig {
            sort: SortKey::Fee,
            ..FilterConfig::default()
        };
        assert_eq!(ids(&filter_and_sort(&colleges, &config)), vec!["c", "a", "b"]);
    }

    #[test]
    fn sort_by_name_ties_keep_catalog_order() {
        let colleges = vec![
            college("b", "X", "Delhi", InstitutionType::Private, 9, 100),
            college("c", "W", "Delhi", InstitutionType::Private, 5, 100),
            college("a", "X", "Pune", InstitutionType::Central, 1, 50),
        ];
        let config = FilterConfig {
            sort: SortKey::Name,
            ..FilterConfig::default()
        };
        assert_eq!(ids(&filter_and_sort(&colleges, &config)), vec!["c", "b", "a"]);
    }
}
