//! Career quiz: question model, answer state machine, and category scoring.
//!
//! A quiz is a fixed, linear sequence of single-choice questions. Every
//! option adds a weight to one career [`Category`]. Once the last question is
//! answered the quiz completes with per-category totals, which
//! [`top_categories`] ranks for display.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Maximum number of categories shown as recommendations.
pub const MAX_TOP_CATEGORIES: usize = 3;

/// Career field a quiz option counts towards.
///
/// Declaration order is the tie-break order when two categories score the
/// same total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Engineering,
    Medical,
    Science,
    Arts,
    Management,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Engineering,
        Category::Medical,
        Category::Science,
        Category::Arts,
        Category::Management,
    ];

    /// Descriptive recommendation shown for this category in quiz results.
    pub fn recommendation(&self) -> Recommendation {
        match self {
            Category::Engineering => Recommendation {
                title: "Engineering & Technology",
                description: "You have a strong aptitude for technical problem-solving and building innovative solutions.",
                courses: &["Computer Science", "Mechanical Engineering", "Electronics", "Civil Engineering"],
                careers: &["Software Engineer", "Mechanical Engineer", "Data Scientist", "Robotics Engineer"],
            },
            Category::Medical => Recommendation {
                title: "Medical & Health Sciences",
                description: "You show great potential for caring for others and interest in health and medicine.",
                courses: &["MBBS", "Nursing", "Pharmacy", "Physiotherapy", "Dental"],
                careers: &["Doctor", "Nurse", "Pharmacist", "Medical Researcher", "Healthcare Administrator"],
            },
            Category::Science => Recommendation {
                title: "Science & Research",
                description: "You have a natural curiosity for understanding how things work and discovering new knowledge.",
                courses: &["Physics", "Chemistry", "Biology", "Mathematics", "Environmental Science"],
                careers: &["Research Scientist", "Lab Technician", "Science Teacher", "Environmental Consultant"],
            },
            Category::Arts => Recommendation {
                title: "Arts & Creative Fields",
                description: "You have strong creative abilities and enjoy expressing ideas through various mediums.",
                courses: &["Fine Arts", "Literature", "Psychology", "Mass Communication", "Design"],
                careers: &["Graphic Designer", "Writer", "Psychologist", "Journalist", "Art Director"],
            },
            Category::Management => Recommendation {
                title: "Business & Management",
                description: "You show leadership potential and interest in business operations and strategy.",
                courses: &["BBA", "Economics", "Marketing", "Finance", "Human Resources"],
                careers: &["Business Manager", "Marketing Executive", "Financial Analyst", "Entrepreneur"],
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Engineering => write!(f, "engineering"),
            Category::Medical => write!(f, "medical"),
            Category::Science => write!(f, "science"),
            Category::Arts => write!(f, "arts"),
            Category::Management => write!(f, "management"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "engineering" => Ok(Category::Engineering),
            "medical" => Ok(Category::Medical),
            "science" => Ok(Category::Science),
            "arts" => Ok(Category::Arts),
            "management" => Ok(Category::Management),
            other => Err(format!("unknown quiz category: {other}")),
        }
    }
}

/// Recommended courses and careers for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub courses: &'static [&'static str],
    pub careers: &'static [&'static str],
}

/// One answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    /// Category this option counts towards.
    pub category: Category,
    /// Points added to the category when chosen.
    pub weight: u32,
}

/// A single-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<QuizOption>,
}

/// A fixed sequence of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The option chosen by `option` on question `question`, if both exist.
    pub fn option(&self, question: usize, option: usize) -> Option<&QuizOption> {
        self.questions.get(question)?.options.get(option)
    }
}

/// Question index → chosen option index.
pub type Answers = BTreeMap<usize, usize>;

/// Accumulated result for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Sum of the chosen options' weights.
    pub total: u32,
    /// Lowest question index that scored this category. Breaks ranking ties.
    pub first_question: usize,
}

/// Category → accumulated score.
pub type CategoryScores = BTreeMap<Category, CategoryScore>;

/// Progress through a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    InProgress { current: usize, answers: Answers },
    Completed { answers: Answers, scores: CategoryScores },
}

impl Default for QuizState {
    fn default() -> Self {
        QuizState::InProgress {
            current: 0,
            answers: Answers::new(),
        }
    }
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `option` for the current question and advance.
    ///
    /// Answering the last question completes the quiz and computes scores.
    pub fn record_answer(self, quiz: &Quiz, option: usize) -> Result<QuizState, QuizError> {
        let QuizState::InProgress {
            current,
            mut answers,
        } = self
        else {
            return Err(QuizError::AlreadyCompleted);
        };

        let available = quiz.questions.get(current).map_or(0, |q| q.options.len());
        if option >= available {
            return Err(QuizError::OptionOutOfRange {
                question: current,
                option,
                available,
            });
        }

        answers.insert(current, option);

        if current + 1 >= quiz.len() {
            let scores = score_answers(quiz, &answers);
            tracing::debug!(answered = answers.len(), ?scores, "quiz completed");
            Ok(QuizState::Completed { answers, scores })
        } else {
            Ok(QuizState::InProgress {
                current: current + 1,
                answers,
            })
        }
    }

    /// Discard all answers and start over from the first question.
    pub fn reset(self) -> QuizState {
        QuizState::default()
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, QuizState::Completed { .. })
    }

    /// Index of the question awaiting an answer, or `None` once completed.
    pub fn current_question(&self) -> Option<usize> {
        match self {
            QuizState::InProgress { current, .. } => Some(*current),
            QuizState::Completed { .. } => None,
        }
    }

    pub fn answers(&self) -> &Answers {
        match self {
            QuizState::InProgress { answers, .. } | QuizState::Completed { answers, .. } => answers,
        }
    }

    /// Final scores, once completed.
    pub fn scores(&self) -> Option<&CategoryScores> {
        match self {
            QuizState::Completed { scores, .. } => Some(scores),
            QuizState::InProgress { .. } => None,
        }
    }

    /// Fraction of questions answered, in `0.0..=1.0`.
    pub fn progress(&self, quiz: &Quiz) -> f64 {
        if quiz.is_empty() {
            return 1.0;
        }
        self.answers().len() as f64 / quiz.len() as f64
    }
}

/// Sum option weights per category over a set of (question, option) answers.
///
/// Answers that do not name an existing question and option are skipped.
/// Accumulation order has no effect on the result: totals are sums and the
/// first question is a minimum.
pub fn score_answers<'a>(
    quiz: &Quiz,
    answers: impl IntoIterator<Item = (&'a usize, &'a usize)>,
) -> CategoryScores {
    let mut scores = CategoryScores::new();
    for (&question, &option) in answers {
        if let Some(chosen) = quiz.option(question, option) {
            let entry = scores.entry(chosen.category).or_insert(CategoryScore {
                total: 0,
                first_question: question,
            });
            entry.total += chosen.weight;
            entry.first_question = entry.first_question.min(question);
        }
    }
    scores
}

/// A category ranked for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCategory {
    pub category: Category,
    /// Raw accumulated weight.
    pub score: u32,
    /// Score relative to the best category, rounded to a whole percent.
    pub percentage: u32,
}

/// Rank categories by descending score and keep the best `n` (at most
/// [`MAX_TOP_CATEGORIES`]).
///
/// Equal scores rank the category answered on an earlier question first.
/// Percentages are relative to the highest score among all categories, so
/// the first entry is always 100. Returns an empty list when nothing scored.
pub fn top_categories(scores: &CategoryScores, n: usize) -> Vec<RankedCategory> {
    let max_score = scores.values().map(|s| s.total).max().unwrap_or(0);
    if max_score == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(Category, CategoryScore)> =
        scores.iter().map(|(c, s)| (*c, *s)).collect();
    ranked.sort_by(|a, b| {
        b.1.total
            .cmp(&a.1.total)
            .then(a.1.first_question.cmp(&b.1.first_question))
    });

    ranked
        .into_iter()
        .take(n.min(MAX_TOP_CATEGORIES))
        .map(|(category, score)| RankedCategory {
            category,
            score: score.total,
            percentage: (100.0 * f64::from(score.total) / f64::from(max_score)).round() as u32,
        })
        .collect()
}
