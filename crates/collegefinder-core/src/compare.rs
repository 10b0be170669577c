//! Side-by-side comparison: named field accessors and display formatting.
//!
//! Every comparable field is a [`ComparisonField`] variant with its own
//! accessor, so there is no runtime path walking to fail. The dotted paths
//! are kept only as stable names for lookups coming from user input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CompareError;
use crate::model::{Catalog, College};

/// Maximum number of colleges in one comparison.
pub const MAX_COMPARED: usize = 3;

/// How a raw field value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Rupee amount with grouped thousands.
    Currency,
    /// Decimal rating shown with a star.
    Rating,
    /// Cardinality of a list.
    Count,
    /// Rank shown as `#n`.
    Rank,
    /// Passed through unchanged.
    Text,
}

/// Raw value read from a college.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(u64),
    Decimal(f64),
    Text(String),
    List(Vec<String>),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Decimal(x) => write!(f, "{x}"),
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

/// A value formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum DisplayValue {
    /// Rendered text.
    Text(String),
    /// A rating, rendered next to a star icon.
    Rating(f64),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Text(s) => write!(f, "{s}"),
            DisplayValue::Rating(r) => write!(f, "★ {r}"),
        }
    }
}

/// A field shown in the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonField {
    NirfRank,
    Rating,
    Type,
    Location,
    AnnualFee,
    TotalFee,
    Courses,
}

impl ComparisonField {
    /// Fields in the order the comparison table shows them.
    pub const ALL: [ComparisonField; 7] = [
        ComparisonField::NirfRank,
        ComparisonField::Rating,
        ComparisonField::Type,
        ComparisonField::Location,
        ComparisonField::AnnualFee,
        ComparisonField::TotalFee,
        ComparisonField::Courses,
    ];

    /// Row label.
    pub fn label(&self) -> &'static str {
        match self {
            ComparisonField::NirfRank => "NIRF Rank",
            ComparisonField::Rating => "Rating",
            ComparisonField::Type => "Type",
            ComparisonField::Location => "Location",
            ComparisonField::AnnualFee => "Annual Fee",
            ComparisonField::TotalFee => "Total Fee",
            ComparisonField::Courses => "Courses",
        }
    }

    /// Declared display kind.
    pub fn kind(&self) -> ValueKind {
        match self {
            ComparisonField::NirfRank => ValueKind::Rank,
            ComparisonField::Rating => ValueKind::Rating,
            ComparisonField::Type | ComparisonField::Location => ValueKind::Text,
            ComparisonField::AnnualFee | ComparisonField::TotalFee => ValueKind::Currency,
            ComparisonField::Courses => ValueKind::Count,
        }
    }

    /// Dotted path naming this field.
    pub fn path(&self) -> &'static str {
        match self {
            ComparisonField::NirfRank => "nirfRank",
            ComparisonField::Rating => "rating",
            ComparisonField::Type => "type",
            ComparisonField::Location => "city",
            ComparisonField::AnnualFee => "fees.annual",
            ComparisonField::TotalFee => "fees.total",
            ComparisonField::Courses => "courses",
        }
    }

    /// Resolve a dotted path. Unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<ComparisonField> {
        Self::ALL.into_iter().find(|f| f.path() == path)
    }

    /// Read the raw value from `college`.
    pub fn value(&self, college: &College) -> FieldValue {
        match self {
            ComparisonField::NirfRank => FieldValue::Integer(u64::from(college.nirf_rank)),
            ComparisonField::Rating => FieldValue::Decimal(college.rating),
            ComparisonField::Type => FieldValue::Text(college.institution_type.to_string()),
            ComparisonField::Location => FieldValue::Text(college.city.clone()),
            ComparisonField::AnnualFee => FieldValue::Integer(college.fees.annual),
            ComparisonField::TotalFee => FieldValue::Integer(college.fees.total),
            ComparisonField::Courses => FieldValue::List(college.courses.clone()),
        }
    }

    /// Read and format the value using this field's declared kind.
    pub fn display(&self, college: &College) -> DisplayValue {
        format_value(&self.value(college), self.kind())
    }
}

/// Render `value` as `kind`. A value that does not fit `kind` falls back to
/// its plain text.
pub fn format_value(value: &FieldValue, kind: ValueKind) -> DisplayValue {
    match (kind, value) {
        (ValueKind::Currency, FieldValue::Integer(n)) => {
            DisplayValue::Text(format!("₹{}", group_thousands(*n)))
        }
        (ValueKind::Rating, FieldValue::Decimal(r)) => DisplayValue::Rating(*r),
        (ValueKind::Rating, FieldValue::Integer(n)) => DisplayValue::Rating(*n as f64),
        (ValueKind::Count, FieldValue::List(items)) => {
            DisplayValue::Text(format!("{} courses", items.len()))
        }
        (ValueKind::Rank, FieldValue::Integer(n)) => DisplayValue::Text(format!("#{n}")),
        _ => DisplayValue::Text(value.to_string()),
    }
}

/// Resolve `path` on `college` and format it as `kind`.
///
/// Returns `None` when the path names no known field.
pub fn extract_field(college: &College, path: &str, kind: ValueKind) -> Option<DisplayValue> {
    let field = ComparisonField::from_path(path)?;
    Some(format_value(&field.value(college), kind))
}

/// `1234567` → `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One labelled row of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub field: ComparisonField,
    pub label: &'static str,
    /// One value per compared college, in selection order.
    pub values: Vec<DisplayValue>,
}

/// Build the comparison table for `colleges`.
pub fn comparison_rows(colleges: &[&College]) -> Vec<ComparisonRow> {
    ComparisonField::ALL
        .into_iter()
        .map(|field| ComparisonRow {
            field,
            label: field.label(),
            values: colleges.iter().map(|c| field.display(c)).collect(),
        })
        .collect()
}

/// Colleges picked for comparison, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    selected: Vec<String>,
}

impl Comparison {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a college by id.
    pub fn add(&mut self, id: &str) -> Result<(), CompareError> {
        if self.contains(id) {
            return Err(CompareError::AlreadySelected(id.to_string()));
        }
        if self.selected.len() >= MAX_COMPARED {
            return Err(CompareError::SelectionFull { max: MAX_COMPARED });
        }
        self.selected.push(id.to_string());
        Ok(())
    }

    /// Remove a college by id. Returns whether it was selected.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| s != id);
        self.selected.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.selected
    }

    pub fn is_full(&self) -> bool {
        self.selected.len() >= MAX_COMPARED
    }

    /// Selected colleges resolved against `catalog`. Unknown ids are skipped.
    pub fn colleges<'a>(&self, catalog: &'a Catalog) -> Vec<&'a College> {
        self.selected
            .iter()
            .filter_map(|id| catalog.get(id))
            .collect()
    }

    /// Unselected colleges whose name contains `search` (case-insensitive).
    pub fn available<'a>(&self, catalog: &'a Catalog, search: &str) -> Vec<&'a College> {
        let needle = search.to_lowercase();
        catalog
            .colleges
            .iter()
            .filter(|c| !self.contains(&c.id) && c.name.to_lowercase().contains(&needle))
            .collect()
    }
}
