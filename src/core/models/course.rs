//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::student::Term;

/// Catalog category a course belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Core (major) course
    Core,
    /// Elective group 1
    E1,
    /// Elective group 2
    E2,
    /// Elective group 3
    E3,
    /// Elective group 4
    E4,
    /// Elective group 5
    E5,
    /// Elective group 6
    E6,
    /// University-wide requirement
    UniversityRequirement,
    /// University-wide elective
    UniversityElective,
}

impl Category {
    /// Every category, in catalog display order
    pub const ALL: [Self; 9] = [
        Self::Core,
        Self::E1,
        Self::E2,
        Self::E3,
        Self::E4,
        Self::E5,
        Self::E6,
        Self::UniversityRequirement,
        Self::UniversityElective,
    ];

    /// Name as stored in the catalog (e.g., "University Requirement")
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::E1 => "E1",
            Self::E2 => "E2",
            Self::E3 => "E3",
            Self::E4 => "E4",
            Self::E5 => "E5",
            Self::E6 => "E6",
            Self::UniversityRequirement => "University Requirement",
            Self::UniversityElective => "University Elective",
        }
    }

    /// Elective groups E1..E6 and university electives
    #[must_use]
    pub const fn is_elective(&self) -> bool {
        matches!(
            self,
            Self::E1 | Self::E2 | Self::E3 | Self::E4 | Self::E5 | Self::E6 | Self::UniversityElective
        )
    }

    /// Core courses and university requirements
    #[must_use]
    pub const fn is_mandatory(&self) -> bool {
        matches!(self, Self::Core | Self::UniversityRequirement)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|cat| cat.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown category '{wanted}'"))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terms in which a course is offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfferedTerm {
    /// Offered in Fall only
    Fall,
    /// Offered in Spring only
    Spring,
    /// Offered every term (including Summer)
    Both,
}

impl OfferedTerm {
    /// Whether a course with this offering runs in `term`
    #[must_use]
    pub const fn includes(&self, term: Term) -> bool {
        matches!(
            (self, term),
            (Self::Both, _) | (Self::Fall, Term::Fall) | (Self::Spring, Term::Spring)
        )
    }

    /// Name as stored in the catalog
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fall => "Fall",
            Self::Spring => "Spring",
            Self::Both => "Both",
        }
    }
}

impl FromStr for OfferedTerm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fall" => Ok(Self::Fall),
            "spring" => Ok(Self::Spring),
            "both" => Ok(Self::Both),
            other => Err(format!("unknown offering term '{other}'")),
        }
    }
}

impl fmt::Display for OfferedTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A course fact loaded from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course code (e.g., "CSE015")
    pub code: String,

    /// Course name (e.g., "Object Oriented Programming")
    pub name: String,

    /// Catalog category
    pub category: Category,

    /// Prerequisite course codes, in catalog order
    pub prerequisites: Vec<String>,

    /// Co-requisite course codes, in catalog order
    pub corequisites: Vec<String>,

    /// Credit hours (can be fractional, zero for non-credit courses)
    pub credit_hours: f64,

    /// Terms in which the course is offered
    pub offered: OfferedTerm,

    /// Semester of the study plan the course belongs to
    pub target_semester: u32,
}

/// Prerequisite sentinel that stands for senior standing rather than a course
pub const SENIOR_STANDING: &str = "SENIOR STANDING";

impl CourseRecord {
    /// Create a new course with no requisites, offered in both terms, in semester 1
    #[must_use]
    pub const fn new(code: String, name: String, category: Category, credit_hours: f64) -> Self {
        Self {
            code,
            name,
            category,
            prerequisites: Vec::new(),
            corequisites: Vec::new(),
            credit_hours,
            offered: OfferedTerm::Both,
            target_semester: 1,
        }
    }

    /// Add a prerequisite by course code
    pub fn add_prerequisite(&mut self, code: String) {
        if !self.prerequisites.contains(&code) {
            self.prerequisites.push(code);
        }
    }

    /// Add a co-requisite by course code
    pub fn add_corequisite(&mut self, code: String) {
        if !self.corequisites.contains(&code) {
            self.corequisites.push(code);
        }
    }

    /// True when the only prerequisite is the senior-standing sentinel
    #[must_use]
    pub fn requires_senior_standing(&self) -> bool {
        self.prerequisites.len() == 1 && self.prerequisites[0] == SENIOR_STANDING
    }

    /// A zero-credit course is admitted regardless of the credit limit
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_non_credit(&self) -> bool {
        self.credit_hours == 0.0
    }
}
