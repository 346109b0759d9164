//! Data models for `CourseAdvisor`

pub mod course;
pub mod recommendation;
pub mod student;

pub use course::{Category, CourseRecord, OfferedTerm, SENIOR_STANDING};
pub use recommendation::{ExplanationEntry, RecommendationEntry, Recommendations};
pub use student::{StudentInput, StudentProfile, Term};
