//! Core module: catalog, rule engine, and reports shared by every frontend

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod report;

pub use engine::{evaluate, evaluate_detailed, Evaluation, RuleEngine};
pub use error::{AdvisorError, StoreError};

/// Returns the current version of the `CourseAdvisor` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
