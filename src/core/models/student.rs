//! Student model

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::course::{CourseRecord, SENIOR_STANDING};
use crate::core::error::AdvisorError;

/// Academic term the recommendation is made for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Fall semester
    Fall,
    /// Spring semester
    Spring,
    /// Summer session (reduced credit limit)
    Summer,
}

impl Term {
    /// Name as presented to users
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fall => "Fall",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
        }
    }
}

impl FromStr for Term {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fall" => Ok(Self::Fall),
            "Spring" => Ok(Self::Spring),
            "Summer" => Ok(Self::Summer),
            _ => Err(AdvisorError::InvalidInput(format!(
                "Current semester must be 'Fall', 'Spring', or 'Summer' (got '{s}')."
            ))),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw student input as supplied by a caller, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    /// Semester the student is about to enter
    pub semester: u32,
    /// Cumulative GPA on a 4.0 scale. Clamped to 0.0..=4.0; NaN and infinities count as 0.0.
    pub cgpa: f64,
    /// Codes of passed courses
    pub passed_courses: Vec<String>,
    /// Codes of failed courses (and elective selections carried as retakes)
    pub failed_courses: Vec<String>,
    /// Total credit hours passed so far
    pub total_credits_passed: u32,
    /// Upcoming term name: "Fall", "Spring", or "Summer"
    pub current_term: String,
}

/// Validated student fact the rule engine matches against
#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfile {
    /// Semester the student is about to enter
    pub semester: u32,
    /// Cumulative GPA on a 4.0 scale
    pub cgpa: f64,
    /// Passed course codes
    pub passed: BTreeSet<String>,
    /// Failed course codes, in the order the caller listed them
    pub failed: Vec<String>,
    /// Total credit hours passed so far
    pub total_credits_passed: u32,
    /// Upcoming term
    pub term: Term,
}

/// Semester from which a student counts as senior
pub const SENIOR_SEMESTER: u32 = 9;

/// Passed credits from which a student counts as senior
pub const SENIOR_CREDITS: u32 = 125;

impl StudentProfile {
    /// Create a profile from already-typed values
    ///
    /// Course codes are trimmed; blank codes and repeated failed codes are dropped. The CGPA
    /// is clamped to the 4.0 scale, and a non-finite CGPA is taken as 0.0.
    #[must_use]
    pub fn new<P, F>(
        semester: u32,
        cgpa: f64,
        passed: P,
        failed: F,
        total_credits_passed: u32,
        term: Term,
    ) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        let passed = passed
            .into_iter()
            .map(|code| code.as_ref().trim().to_string())
            .filter(|code| !code.is_empty())
            .collect();

        let mut failed_codes: Vec<String> = Vec::new();
        for code in failed {
            let code = code.as_ref().trim();
            if !code.is_empty() && !failed_codes.iter().any(|c| c == code) {
                failed_codes.push(code.to_string());
            }
        }

        let cgpa = if cgpa.is_finite() { cgpa.clamp(0.0, 4.0) } else { 0.0 };

        Self {
            semester,
            cgpa,
            passed,
            failed: failed_codes,
            total_credits_passed,
            term,
        }
    }

    /// Whether the student has passed `code`
    #[must_use]
    pub fn has_passed(&self, code: &str) -> bool {
        self.passed.contains(code)
    }

    /// Senior standing: semester 9 or later, or 125+ passed credits
    #[must_use]
    pub const fn is_senior(&self) -> bool {
        self.semester >= SENIOR_SEMESTER || self.total_credits_passed >= SENIOR_CREDITS
    }

    /// Prerequisites of `course` the student has not met. A senior student meets the
    /// senior-standing sentinel; anyone else is missing it.
    #[must_use]
    pub fn missing_prerequisites<'c>(&self, course: &'c CourseRecord) -> Vec<&'c str> {
        if course.requires_senior_standing() {
            return if self.is_senior() {
                Vec::new()
            } else {
                vec![SENIOR_STANDING]
            };
        }
        course
            .prerequisites
            .iter()
            .filter(|prereq| !self.has_passed(prereq))
            .map(String::as_str)
            .collect()
    }

    /// A course is within reach when it is a catch-up or at most one semester ahead
    #[must_use]
    pub const fn can_take_semester(&self, course_semester: u32) -> bool {
        self.semester >= course_semester || course_semester - self.semester <= 1
    }
}

impl TryFrom<&StudentInput> for StudentProfile {
    type Error = AdvisorError;

    fn try_from(input: &StudentInput) -> Result<Self, Self::Error> {
        let term: Term = input.current_term.parse()?;
        Ok(Self::new(
            input.semester,
            input.cgpa,
            &input.passed_courses,
            &input.failed_courses,
            input.total_credits_passed,
            term,
        ))
    }
}
