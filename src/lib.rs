//! Shared library for `CourseAdvisor`
//! Contains the recommendation core, catalog stores, and reporting used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::{config, evaluate, get_version};
