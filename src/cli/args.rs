//! CLI argument definitions for `CourseAdvisor`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_advisor::config::ConfigOverrides;
use course_advisor::logger::Level;

/// Highest semester the advising form accepts
pub const MAX_SEMESTER: u32 = 12;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Parse a CGPA on the 4.0 scale
fn parse_cgpa(value: &str) -> Result<f64, String> {
    let cgpa: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if (0.0..=4.0).contains(&cgpa) {
        Ok(cgpa)
    } else {
        Err(format!("CGPA must be between 0.00 and 4.00 (got {value})"))
    }
}

/// Accept any casing of a term name; unknown names pass through for the engine to reject
#[allow(clippy::unnecessary_wraps)]
fn parse_term(value: &str) -> Result<String, String> {
    let canonical = match value.trim().to_ascii_lowercase().as_str() {
        "fall" => "Fall",
        "spring" => "Spring",
        "summer" => "Summer",
        _ => return Ok(value.to_string()),
    };
    Ok(canonical.to_string())
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `catalog`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Course fields accepted by `catalog add` and `catalog edit`
#[derive(Debug, Clone, Default, Args)]
pub struct CourseFields {
    /// Course name
    #[arg(long)]
    pub name: Option<String>,
    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,
    /// Comma-separated prerequisite codes (or "SENIOR STANDING")
    #[arg(long, value_name = "CODES")]
    pub prerequisites: Option<String>,
    /// Comma-separated co-requisite codes
    #[arg(long, value_name = "CODES")]
    pub corequisites: Option<String>,
    /// Credit hours
    #[arg(long, value_name = "HOURS")]
    pub credits: Option<String>,
    /// Offering term: Fall, Spring, or Both
    #[arg(long, value_name = "TERM")]
    pub offered: Option<String>,
    /// Target semester in the study plan
    #[arg(long)]
    pub semester: Option<String>,
    /// Category: Core, E1..E6, University Requirement, University Elective
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CatalogSubcommand {
    /// List catalog courses, grouped by category.
    List {
        /// Only list this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one course.
    Show {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Add a course.
    Add {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
        #[command(flatten)]
        fields: CourseFields,
    },
    /// Edit every catalog entry with CODE. Omitted fields keep their current value.
    Edit {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
        #[command(flatten)]
        fields: CourseFields,
    },
    /// Delete every catalog entry with CODE.
    Delete {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Recommend courses for next semester.
    ///
    /// Evaluates the advising rules against the configured catalog and prints the
    /// recommended courses with the explanation trail.
    Recommend {
        /// Semester the student is about to enter
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SEMESTER)))]
        semester: u32,

        /// Cumulative GPA (0.00 - 4.00)
        #[arg(long, value_parser = parse_cgpa)]
        cgpa: f64,

        /// Passed course codes, comma separated
        #[arg(long, value_name = "CODES", value_delimiter = ',')]
        passed: Vec<String>,

        /// Failed course codes, comma separated
        #[arg(long, value_name = "CODES", value_delimiter = ',')]
        failed: Vec<String>,

        /// Total credit hours passed
        #[arg(long, default_value_t = 0)]
        credits: u32,

        /// Upcoming term: Fall, Spring, or Summer (any case)
        #[arg(long, value_parser = parse_term)]
        term: String,

        /// Also write a report in this format (markdown, html)
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,

        /// Report output path (defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Administer the course catalog.
    Catalog {
        #[command(subcommand)]
        subcommand: CatalogSubcommand,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "advisor",
    about = "Rule-based course advisor",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalog path
    #[arg(long = "config-catalog", value_name = "PATH")]
    pub config_catalog: Option<PathBuf>,

    /// Override config catalog path (short form)
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--catalog`) take precedence over long-form flags
    /// (e.g., `--config-catalog`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            catalog_path: path_string(self.catalog.as_ref())
                .or_else(|| path_string(self.config_catalog.as_ref())),
            reports_dir: path_string(self.reports_dir.as_ref())
                .or_else(|| path_string(self.config_reports_dir.as_ref())),
        }
    }
}
