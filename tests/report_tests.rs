//! Integration tests for recommendation reports

use course_advisor::core::catalog::{CatalogRow, CsvCatalogStore, MemoryCatalogStore};
use course_advisor::core::evaluate_detailed;
use course_advisor::core::models::StudentInput;
use course_advisor::core::report::{ReportContext, ReportFormat, ReportGenerator};
use course_advisor::core::report::{HtmlReporter, MarkdownReporter};
use tempfile::TempDir;

const SAMPLE_CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/catalog/courses.csv");

fn row(code: &str, category: &str, credits: &str, semester: &str) -> CatalogRow {
    CatalogRow {
        code: code.to_string(),
        name: format!("Course {code}"),
        credit_hours: credits.to_string(),
        offered: "Both".to_string(),
        semester: semester.to_string(),
        category: category.to_string(),
        ..CatalogRow::default()
    }
}

fn scenario() -> course_advisor::core::Evaluation {
    let input = StudentInput {
        semester: 2,
        cgpa: 3.7,
        passed_courses: ["MEC011", "PHY212", "CSE014", "UC11XX", "MAT123", "MAT112", "MAT131", "CSE315"]
            .iter()
            .map(ToString::to_string)
            .collect(),
        failed_courses: vec!["CSE015".to_string()],
        total_credits_passed: 30,
        current_term: "Fall".to_string(),
    };
    evaluate_detailed(&CsvCatalogStore::new(SAMPLE_CATALOG), &input).unwrap()
}

#[test]
fn test_context_rows() {
    let evaluation = scenario();
    let ctx = ReportContext::new(&evaluation.student, &evaluation.recommendations);

    let rows = ctx.rows();
    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[0].code, "CSE015");
    assert_eq!(rows[0].credits, "3.0");
    assert_eq!(ctx.total_credits(), "21.0");
    assert_eq!(ctx.cgpa(), "3.70");
    assert_eq!(ctx.failed_list(), "CSE015");
}

#[test]
fn test_markdown_report() {
    let evaluation = scenario();
    let ctx = ReportContext::new(&evaluation.student, &evaluation.recommendations);

    let report = MarkdownReporter::new().render(&ctx).unwrap();
    assert!(report.contains("# Course Recommendations"));
    assert!(report.contains("| 1 | CSE015 | Object Oriented Programming | 3.0 | Retake due to previous failure |"));
    assert!(report.contains("Credit limit: **22** hours. Recommended: **21.0** hours."));
    assert!(report.contains("- Not recommended CSE112: Missing prerequisites: CSE015."));
}

#[test]
fn test_html_report_escapes_text() {
    let mut evaluation = scenario();
    evaluation.recommendations.recommendations[0].course_name = "OOP <Java & C++>".to_string();
    let ctx = ReportContext::new(&evaluation.student, &evaluation.recommendations);

    let report = HtmlReporter::new().render(&ctx).unwrap();
    assert!(report.starts_with("<!DOCTYPE html>"));
    assert!(report.contains("OOP &lt;Java &amp; C++&gt;"));
    assert!(!report.contains("<Java"));
    assert!(report.contains("<li>Credit limit set to 22 due to CGPA 3.70 &gt;= 3.00.</li>"));
}

#[test]
fn test_generate_writes_file() {
    let evaluation = scenario();
    let ctx = ReportContext::new(&evaluation.student, &evaluation.recommendations);
    let dir = TempDir::new().unwrap();

    for format in [ReportFormat::Markdown, ReportFormat::Html] {
        let path = dir.path().join(format!("report.{}", format.extension()));
        format.generator().generate(&ctx, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("CSE015"));
    }
}

#[test]
fn test_duplicate_code_shows_hours_of_recommended_record() {
    let mut spring_only = row("CSE351", "E1", "2", "1");
    spring_only.offered = "Spring".to_string();
    let store = MemoryCatalogStore::new(vec![spring_only, row("CSE351", "Core", "4", "1")]);
    let input = StudentInput {
        semester: 1,
        cgpa: 3.0,
        failed_courses: vec!["CSE351".to_string()],
        current_term: "Fall".to_string(),
        ..StudentInput::default()
    };
    let evaluation = evaluate_detailed(&store, &input).unwrap();
    let ctx = ReportContext::new(&evaluation.student, &evaluation.recommendations);

    // The first catalog record is not offered in Fall, so the Core record is the one retaken
    let rows = ctx.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].credits, "4.0");
    assert_eq!(ctx.total_credits(), "4.0");
}
