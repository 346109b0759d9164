//! Credit limit policy

use crate::core::models::Term;

/// Credit limit for a run and the one-line rationale behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditLimit {
    /// Maximum credit hours that may be recommended
    pub hours: u32,
    /// Explanation trail line
    pub rationale: String,
}

/// Summer sessions cap the load regardless of standing
pub const SUMMER_LIMIT: u32 = 9;
/// Limit for students on academic probation
pub const PROBATION_LIMIT: u32 = 12;
/// Limit for students in good standing
pub const STANDARD_LIMIT: u32 = 20;
/// Limit for honor students
pub const HONORS_LIMIT: u32 = 22;

/// Compute the credit limit. The first matching branch wins; the low-CGPA branches overlap
/// and are checked in this exact order.
#[must_use]
pub fn credit_limit(cgpa: f64, semester: u32, term: Term) -> CreditLimit {
    let (hours, rationale) = if term == Term::Summer {
        (SUMMER_LIMIT, format!("Credit limit set to {SUMMER_LIMIT} for Summer semester."))
    } else if cgpa < 1.67 && semester >= 2 {
        (
            PROBATION_LIMIT,
            format!("Credit limit set to {PROBATION_LIMIT} due to CGPA {cgpa:.2} < 1.67 after 2 semesters."),
        )
    } else if cgpa < 2.00 && semester >= 3 {
        (
            PROBATION_LIMIT,
            format!("Credit limit set to {PROBATION_LIMIT} due to CGPA {cgpa:.2} < 2.00 after 3 semesters."),
        )
    } else if cgpa < 2.00 {
        (
            PROBATION_LIMIT,
            format!("Credit limit set to {PROBATION_LIMIT} due to CGPA {cgpa:.2} < 2.00."),
        )
    } else if cgpa < 3.00 {
        (
            STANDARD_LIMIT,
            format!("Credit limit set to {STANDARD_LIMIT} due to CGPA {cgpa:.2} between 2.00 and 2.99."),
        )
    } else {
        (
            HONORS_LIMIT,
            format!("Credit limit set to {HONORS_LIMIT} due to CGPA {cgpa:.2} >= 3.00."),
        )
    };

    CreditLimit { hours, rationale }
}
