//! The dataset shipped with collegefinder, embedded at compile time.

use std::path::Path;

use anyhow::Result;

use crate::model::{Catalog, Scholarship};
use crate::parser::{parse_catalog_str, parse_quiz_str, parse_scholarships_str};
use crate::quiz::Quiz;

const COLLEGES_TOML: &str = include_str!("../data/colleges.toml");
const SCHOLARSHIPS_TOML: &str = include_str!("../data/scholarships.toml");
const QUIZ_TOML: &str = include_str!("../data/quiz.toml");

/// The built-in college catalog.
pub fn builtin_catalog() -> Result<Catalog> {
    parse_catalog_str(COLLEGES_TOML, Path::new("data/colleges.toml"))
}

/// The built-in scholarship listing.
pub fn builtin_scholarships() -> Result<Vec<Scholarship>> {
    parse_scholarships_str(SCHOLARSHIPS_TOML, Path::new("data/scholarships.toml"))
}

/// The built-in career quiz.
pub fn builtin_quiz() -> Result<Quiz> {
    parse_quiz_str(QUIZ_TOML, Path::new("data/quiz.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter_and_sort, FilterConfig, SortKey};
    use crate::model::InstitutionType;
    use crate::parser::{validate_catalog, validate_quiz};
    use crate::quiz::{top_categories, Category, QuizState, MAX_TOP_CATEGORIES};

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.len(), 10);
        assert!(validate_catalog(&catalog).is_empty());
        assert_eq!(catalog.max_annual_fee(), 2_500_000);
    }

    #[test]
    fn builtin_scholarships_parse() {
        let list = builtin_scholarships().unwrap();
        assert_eq!(list.len(), 6);
        assert_eq!(list[5].name, "Research Fellowship");
    }

    #[test]
    fn builtin_quiz_is_valid() {
        let quiz = builtin_quiz().unwrap();
        assert_eq!(quiz.len(), 5);
        assert!(validate_quiz(&quiz).is_empty());
        assert!(quiz.questions.iter().all(|q| q.options.len() == 5));
    }

    #[test]
    fn iit_delhi_and_bits_fee_ceiling() {
        let catalog = builtin_catalog().unwrap();
        let config = FilterConfig {
            query: "i".into(),
            max_fee: Some(300_000),
            ..FilterConfig::default()
        };
        let names: Vec<&str> = filter_and_sort(&catalog.colleges, &config)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert!(names.contains(&"Indian Institute of Technology Delhi"));
        assert!(!names.contains(&"BITS Pilani"));
    }

    #[test]
    fn full_ceiling_returns_whole_catalog_in_order() {
        let catalog = builtin_catalog().unwrap();
        let config = FilterConfig {
            max_fee: Some(catalog.max_annual_fee()),
            ..FilterConfig::default()
        };
        let ids: Vec<&str> = crate::filter::filter_colleges(&catalog.colleges, &config)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        let expected: Vec<&str> = catalog.colleges.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn deemed_colleges_by_fee() {
        let catalog = builtin_catalog().unwrap();
        let config = FilterConfig {
            institution_type: Some(InstitutionType::Deemed),
            sort: SortKey::Fee,
            ..FilterConfig::default()
        };
        let names: Vec<&str> = filter_and_sort(&catalog.colleges, &config)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Vellore Institute of Technology",
                "Manipal Institute of Technology",
                "BITS Pilani"
            ]
        );
    }

    #[test]
    fn builtin_quiz_all_engineering() {
        let quiz = builtin_quiz().unwrap();
        // engineering is option 0, 4, 4, 0, 4
        let state = [0, 4, 4, 0, 4]
            .into_iter()
            .try_fold(QuizState::new(), |s, k| s.record_answer(&quiz, k))
            .unwrap();
        let top = top_categories(state.scores().unwrap(), MAX_TOP_CATEGORIES);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].category, Category::Engineering);
        assert_eq!(top[0].score, 12);
        assert_eq!(top[0].percentage, 100);
    }

    #[test]
    fn builtin_quiz_tie_favours_earlier_answer() {
        let quiz = builtin_quiz().unwrap();
        // management on Q1, medical on Q2, both ending on 5 points
        let state = [4, 1, 1, 3, 3]
            .into_iter()
            .try_fold(QuizState::new(), |s, k| s.record_answer(&quiz, k))
            .unwrap();
        let top = top_categories(state.scores().unwrap(), MAX_TOP_CATEGORIES);
        let summary: Vec<(Category, u32)> = top.iter().map(|r| (r.category, r.percentage)).collect();
        assert_eq!(
            summary,
            vec![
                (Category::Management, 100),
                (Category::Medical, 100),
                (Category::Arts, 40)
            ]
        );
    }
}
