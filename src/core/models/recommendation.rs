//! Recommendation and explanation models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A course the engine recommends for next semester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    /// Recommended course code
    pub course_code: String,
    /// Recommended course name
    pub course_name: String,
    /// Credit hours of the catalog record that was recommended
    #[serde(default)]
    pub credit_hours: f64,
    /// Short rationale tag (e.g., "Retake due to previous failure")
    pub reason: String,
}

impl RecommendationEntry {
    /// Create a new recommendation entry
    #[must_use]
    pub fn new(
        course_code: &str,
        course_name: &str,
        credit_hours: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            course_code: course_code.to_string(),
            course_name: course_name.to_string(),
            credit_hours,
            reason: reason.into(),
        }
    }
}

/// A per-course explanation recorded while evaluating rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationEntry {
    /// Course the explanation is about
    pub course_code: String,
    /// Explanation text
    pub message: String,
}

/// Result of one recommendation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Recommended courses; failed-course retakes come first
    pub recommendations: Vec<RecommendationEntry>,

    /// Reserved for per-elective course options. Always empty.
    pub elective_options: BTreeMap<String, Vec<String>>,

    /// Human-readable trail of every decision, in evaluation order
    pub explanations: Vec<String>,

    /// Structured per-course explanations, in evaluation order
    pub explanation_facts: Vec<ExplanationEntry>,

    /// Credit limit computed for this run
    pub credit_limit: u32,

    /// Credit hours accumulated by the recommended courses
    pub total_credit_hours: f64,
}

impl Recommendations {
    /// Recommended course codes, in order
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.recommendations
            .iter()
            .map(|entry| entry.course_code.as_str())
            .collect()
    }

    /// Find the recommendation for `code`, if any
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&RecommendationEntry> {
        self.recommendations
            .iter()
            .find(|entry| entry.course_code == code)
    }

    /// All structured explanations recorded for `code`
    pub fn explanations_for<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.explanation_facts
            .iter()
            .filter(move |fact| fact.course_code == code)
            .map(|fact| fact.message.as_str())
    }

    /// Whether nothing was recommended
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}
