//! CLI command handlers for `CourseAdvisor`.
//!
//! Each subcommand lives in its own module and returns `Err(message)` on failure;
//! `main` reports the message and exits non-zero.

pub mod catalog;
pub mod config;
pub mod recommend;

use std::io::{self, Write};

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no.
pub fn confirm(question: &str) -> bool {
    print!("{question} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}
