//! Command-line interface entry point for `CourseAdvisor`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use course_advisor::config::Config;
use course_advisor::core::models::StudentInput;
use course_advisor::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use course_advisor::info;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }
    set_level(level);

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));
    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let outcome = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Recommend {
            semester,
            cgpa,
            passed,
            failed,
            credits,
            term,
            report,
            output,
        } => {
            let input = StudentInput {
                semester,
                cgpa,
                passed_courses: passed,
                failed_courses: failed,
                total_credits_passed: credits,
                current_term: term,
            };
            // -o alone picks the format from the file extension
            let report = match (report, output) {
                (Some(format), output) => Some(commands::recommend::ReportRequest { format, output }),
                (None, Some(path)) => Some(commands::recommend::ReportRequest {
                    format: path
                        .extension()
                        .map(|ext| ext.to_string_lossy().to_string())
                        .unwrap_or_default(),
                    output: Some(path),
                }),
                (None, None) => None,
            };
            commands::recommend::run(&input, report, &config)
        }
        Command::Catalog { subcommand } => commands::catalog::run(subcommand, &config),
    };

    if let Err(message) = outcome {
        eprintln!("✗ {message}");
        std::process::exit(1);
    }
}
