//! Report generation for recommendation runs
//!
//! Renders a student's recommendations, credit totals, and the explanation trail as
//! Markdown or HTML.

pub mod formats;

use crate::core::models::{Recommendations, StudentProfile};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// One recommended course as shown in a report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// 1-based position in the recommendation list
    pub position: usize,
    /// Course code
    pub code: String,
    /// Course name
    pub name: String,
    /// Credit hours, formatted
    pub credits: String,
    /// Rationale tag
    pub reason: String,
}

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// The advised student
    pub student: &'a StudentProfile,
    /// Result of the recommendation run
    pub result: &'a Recommendations,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(student: &'a StudentProfile, result: &'a Recommendations) -> Self {
        Self { student, result }
    }

    /// Recommendations flattened into display rows
    #[must_use]
    pub fn rows(&self) -> Vec<ReportRow> {
        self.result
            .recommendations
            .iter()
            .enumerate()
            .map(|(idx, entry)| ReportRow {
                position: idx + 1,
                code: entry.course_code.clone(),
                name: entry.course_name.clone(),
                credits: format!("{:.1}", entry.credit_hours),
                reason: entry.reason.clone(),
            })
            .collect()
    }

    /// Passed courses, comma separated
    #[must_use]
    pub fn passed_list(&self) -> String {
        join_or_none(self.student.passed.iter())
    }

    /// Failed courses, comma separated
    #[must_use]
    pub fn failed_list(&self) -> String {
        join_or_none(self.student.failed.iter())
    }

    /// CGPA with two decimals
    #[must_use]
    pub fn cgpa(&self) -> String {
        format!("{:.2}", self.student.cgpa)
    }

    /// Total recommended credit hours, formatted
    #[must_use]
    pub fn total_credits(&self) -> String {
        format!("{:.1}", self.result.total_credit_hours)
    }
}

fn join_or_none<'s>(codes: impl Iterator<Item = &'s String>) -> String {
    let joined = codes.map(String::as_str).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "None".to_string()
    } else {
        joined
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
