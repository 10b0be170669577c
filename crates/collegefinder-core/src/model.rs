//! Core data model types for collegefinder.
//!
//! These are the catalog entities every other module reads: colleges,
//! the catalog that holds them, and the scholarship listing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single college in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct College {
    /// Unique identifier within the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Campus image URL.
    #[serde(default)]
    pub image: String,
    /// City the campus is in. Location filters match on this exactly.
    pub city: String,
    /// State the campus is in.
    pub state: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Kind of institution.
    #[serde(rename = "type")]
    pub institution_type: InstitutionType,
    /// NIRF rank. Lower is better and ranks are not unique across disciplines.
    pub nirf_rank: u32,
    /// Average rating out of 5.
    pub rating: f64,
    /// Offered courses, in display order.
    #[serde(default)]
    pub courses: Vec<String>,
    /// Fee structure in rupees.
    pub fees: Fees,
    /// Admission requirements.
    pub admission: Admission,
    /// Contact details.
    pub contact: Contact,
}

impl College {
    /// Case-insensitive substring match against name, city, and courses.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.city.to_lowercase().contains(needle)
            || self
                .courses
                .iter()
                .any(|course| course.to_lowercase().contains(needle))
    }
}

/// Fee amounts in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fees {
    pub annual: u64,
    pub total: u64,
    pub additional: u64,
}

/// Admission requirements for a college.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admission {
    /// Entrance exam name (e.g. "JEE Advanced").
    pub entrance: String,
    pub eligibility: String,
    pub process: String,
    /// Documents required at admission time.
    #[serde(default)]
    pub documents: Vec<String>,
}

/// Contact details for a college.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub website: String,
}

/// Kind of institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstitutionType {
    Government,
    Private,
    Central,
    Deemed,
    Autonomous,
}

impl InstitutionType {
    /// Every institution type, in the order the finder lists them.
    pub const ALL: [InstitutionType; 5] = [
        InstitutionType::Government,
        InstitutionType::Private,
        InstitutionType::Central,
        InstitutionType::Deemed,
        InstitutionType::Autonomous,
    ];
}

impl fmt::Display for InstitutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstitutionType::Government => write!(f, "Government"),
            InstitutionType::Private => write!(f, "Private"),
            InstitutionType::Central => write!(f, "Central"),
            InstitutionType::Deemed => write!(f, "Deemed"),
            InstitutionType::Autonomous => write!(f, "Autonomous"),
        }
    }
}

impl FromStr for InstitutionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "government" | "govt" => Ok(InstitutionType::Government),
            "private" => Ok(InstitutionType::Private),
            "central" => Ok(InstitutionType::Central),
            "deemed" => Ok(InstitutionType::Deemed),
            "autonomous" => Ok(InstitutionType::Autonomous),
            other => Err(format!("unknown institution type: {other}")),
        }
    }
}

/// Cities offered as location filters in the finder.
pub const KNOWN_LOCATIONS: [&str; 8] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Hyderabad",
    "Chennai",
    "Pune",
    "Kolkata",
    "Ahmedabad",
];

/// An ordered, immutable list of colleges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Human-readable name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Colleges in catalog order. Sorting ties fall back to this order.
    #[serde(default)]
    pub colleges: Vec<College>,
}

impl Catalog {
    /// Look up a college by id.
    pub fn get(&self, id: &str) -> Option<&College> {
        self.colleges.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.colleges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colleges.is_empty()
    }

    /// Highest annual fee in the catalog, or 0 for an empty catalog.
    pub fn max_annual_fee(&self) -> u64 {
        self.colleges
            .iter()
            .map(|c| c.fees.annual)
            .max()
            .unwrap_or(0)
    }
}

/// A scholarship listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scholarship {
    pub id: String,
    pub name: String,
    /// Awarding body.
    pub provider: String,
    /// Award amount in rupees.
    pub amount: u64,
    #[serde(rename = "type")]
    pub scholarship_type: ScholarshipType,
    /// Fields of study the scholarship applies to. May contain
    /// [`ALL_CATEGORIES`](crate::scholarship::ALL_CATEGORIES).
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub eligibility: Vec<String>,
    /// Last day to apply.
    pub deadline: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub website: String,
}

/// Basis on which a scholarship is awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScholarshipType {
    Merit,
    Need,
    Minority,
    Sports,
    Research,
}

impl ScholarshipType {
    /// Label shown next to a scholarship in listings.
    pub fn label(&self) -> &'static str {
        match self {
            ScholarshipType::Merit => "Merit Based",
            ScholarshipType::Need => "Need Based",
            ScholarshipType::Minority => "Minority",
            ScholarshipType::Sports => "Sports",
            ScholarshipType::Research => "Research",
        }
    }
}

impl fmt::Display for ScholarshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScholarshipType::Merit => write!(f, "merit"),
            ScholarshipType::Need => write!(f, "need"),
            ScholarshipType::Minority => write!(f, "minority"),
            ScholarshipType::Sports => write!(f, "sports"),
            ScholarshipType::Research => write!(f, "research"),
        }
    }
}

impl FromStr for ScholarshipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "merit" => Ok(ScholarshipType::Merit),
            "need" => Ok(ScholarshipType::Need),
            "minority" => Ok(ScholarshipType::Minority),
            "sports" => Ok(ScholarshipType::Sports),
            "research" => Ok(ScholarshipType::Research),
            other => Err(format!("unknown scholarship type: {other}")),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Build a college with the fields the filters and sorts care about.
    pub fn college(
        id: &str,
        name: &str,
        city: &str,
        institution_type: InstitutionType,
        nirf_rank: u32,
        annual_fee: u64,
    ) -> College {
        College {
            id: id.into(),
            name: name.into(),
            image: String::new(),
            city: city.into(),
            state: city.into(),
            address: String::new(),
            institution_type,
            nirf_rank,
            rating: 4.5,
            courses: vec!["Computer Science".into(), "Mechanical Engineering".into()],
            fees: Fees {
                annual: annual_fee,
                total: annual_fee * 4,
                additional: 10_000,
            },
            admission: Admission {
                entrance: "JEE Main".into(),
                eligibility: "Class XII".into(),
                process: "Counselling".into(),
                documents: vec![],
            },
            contact: Contact {
                phone: String::new(),
                email: String::new(),
                website: format!("https://{id}.example.edu"),
            },
        }
    }
}
