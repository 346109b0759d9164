//! Recommend command handler

use course_advisor::config::Config;
use course_advisor::core::catalog::CsvCatalogStore;
use course_advisor::core::models::StudentInput;
use course_advisor::core::report::{ReportContext, ReportFormat};
use course_advisor::core::{evaluate_detailed, Evaluation};
use course_advisor::{error, verbose};
use std::path::{Path, PathBuf};

/// Where and how to write an optional report
pub struct ReportRequest {
    /// Format name as typed by the user
    pub format: String,
    /// Explicit output path
    pub output: Option<PathBuf>,
}

/// Run the recommendation engine against the configured catalog and print the result
pub fn run(input: &StudentInput, report: Option<ReportRequest>, config: &Config) -> Result<(), String> {
    // Reject a bad report format before doing any work
    let format = report
        .as_ref()
        .map(|request| request.format.parse::<ReportFormat>())
        .transpose()?;

    if config.catalog.path.is_empty() {
        return Err("No catalog configured. Use --catalog or `advisor config set catalog <PATH>`.".to_string());
    }
    let store = CsvCatalogStore::new(&config.catalog.path);
    verbose!("Using catalog {}", store.path().display());

    let evaluation = evaluate_detailed(&store, input).map_err(|e| {
        error!("Recommendation failed: {e}");
        e.to_string()
    })?;
    print_evaluation(&evaluation);

    if let (Some(format), Some(request)) = (format, report) {
        let path = request
            .output
            .unwrap_or_else(|| default_report_path(&config.paths.reports_dir, &evaluation, format));
        write_report(&evaluation, format, &path)?;
        println!("\n✓ Report generated: {}", path.display());
    }
    Ok(())
}

fn print_evaluation(evaluation: &Evaluation) {
    let student = &evaluation.student;
    let result = &evaluation.recommendations;

    println!(
        "\n=== Recommendations: semester {}, {} ===\n",
        student.semester, student.term
    );
    if result.is_empty() {
        println!("  (no courses could be recommended)");
    }
    for (idx, entry) in result.recommendations.iter().enumerate() {
        println!(
            "  {:>2}. {:<8} {} ({})",
            idx + 1,
            entry.course_code,
            entry.course_name,
            entry.reason
        );
    }
    println!(
        "\nTotal credit hours: {} (limit {})",
        result.total_credit_hours, result.credit_limit
    );

    println!("\nExplanations:");
    for line in &result.explanations {
        println!("  - {line}");
    }
}

fn default_report_path(reports_dir: &str, evaluation: &Evaluation, format: ReportFormat) -> PathBuf {
    let dir = if reports_dir.is_empty() { "." } else { reports_dir };
    let term = evaluation.student.term.as_str().to_lowercase();
    Path::new(dir).join(format!(
        "recommendation_semester{}_{term}.{}",
        evaluation.student.semester,
        format.extension()
    ))
}

fn write_report(evaluation: &Evaluation, format: ReportFormat, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!("Failed to create reports directory {}: {e}", parent.display())
            })?;
        }
    }

    let ctx = ReportContext::new(&evaluation.student, &evaluation.recommendations);
    format
        .generator()
        .generate(&ctx, path)
        .map_err(|e| format!("Failed to write {format} report: {e}"))
}
