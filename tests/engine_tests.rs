//! Integration tests for the recommendation engine

use course_advisor::core::catalog::{CatalogRow, CatalogStore, CsvCatalogStore, MemoryCatalogStore};
use course_advisor::core::models::StudentInput;
use course_advisor::core::{evaluate, AdvisorError, StoreError};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

const SAMPLE_CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/catalog/courses.csv");

fn sample_store() -> CsvCatalogStore {
    CsvCatalogStore::new(SAMPLE_CATALOG)
}

fn input(semester: u32, cgpa: f64, passed: &[&str], failed: &[&str], credits: u32, term: &str) -> StudentInput {
    StudentInput {
        semester,
        cgpa,
        passed_courses: passed.iter().map(ToString::to_string).collect(),
        failed_courses: failed.iter().map(ToString::to_string).collect(),
        total_credits_passed: credits,
        current_term: term.to_string(),
    }
}

fn second_semester_student() -> StudentInput {
    input(
        2,
        3.7,
        &["MEC011", "PHY212", "CSE014", "UC11XX", "MAT123", "MAT112", "MAT131", "CSE315"],
        &["CSE015"],
        30,
        "Fall",
    )
}

fn row(code: &str, category: &str, credits: &str, semester: &str, prerequisites: &str) -> CatalogRow {
    CatalogRow {
        code: code.to_string(),
        name: format!("Course {code}"),
        prerequisites: prerequisites.to_string(),
        credit_hours: credits.to_string(),
        offered: "Both".to_string(),
        semester: semester.to_string(),
        category: category.to_string(),
        ..CatalogRow::default()
    }
}

/// Store that counts reads, to prove the catalog was never consulted
#[derive(Default)]
struct CountingStore {
    inner: MemoryCatalogStore,
    reads: AtomicUsize,
}

impl CatalogStore for CountingStore {
    fn list_all_courses(&self) -> Result<Vec<CatalogRow>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.list_all_courses()
    }
    fn insert(&self, row: CatalogRow) -> Result<(), StoreError> {
        self.inner.insert(row)
    }
    fn update(&self, code: &str, row: CatalogRow) -> Result<(), StoreError> {
        self.inner.update(code, row)
    }
    fn delete(&self, code: &str) -> Result<(), StoreError> {
        self.inner.delete(code)
    }
}

#[test]
fn test_second_semester_retake_scenario() {
    let result = evaluate(&sample_store(), &second_semester_student()).unwrap();

    assert_eq!(result.credit_limit, 22);
    assert_eq!(result.recommendations[0].course_code, "CSE015");
    assert_eq!(result.recommendations[0].reason, "Retake due to previous failure");
    assert!(result.total_credit_hours <= 22.0);
    assert_eq!(
        result.codes(),
        vec![
            "CSE015", "CSE011", "LAN022", "MAT124", "PHY213L", "PHY213", "UC12XX", "CSE113", "E1XX",
            "UE1XX",
        ]
    );
    assert!((result.total_credit_hours - 21.0).abs() < f64::EPSILON);
    assert!(result.elective_options.is_empty());

    assert_eq!(
        result.explanations[0],
        "Credit limit set to 22 due to CGPA 3.70 >= 3.00."
    );
    assert_eq!(
        result.explanations[1],
        "Prioritized CSE015: Retake due to previous failure."
    );
    assert!(result
        .explanations
        .contains(&"Eligible courses for E1XX (E1): E1XX, CSE352.".to_string()));
}

#[test]
fn test_unmet_prerequisite_is_explained() {
    let result = evaluate(&sample_store(), &second_semester_student()).unwrap();

    assert!(result.get("CSE112").is_none());
    assert!(result
        .explanations
        .contains(&"Not recommended CSE112: Missing prerequisites: CSE015.".to_string()));
    assert_eq!(
        result.explanations_for("CSE112").collect::<Vec<_>>(),
        vec!["Missing prerequisites: CSE015."]
    );
}

#[test]
fn test_recommendations_are_unique_and_repeatable() {
    let store = sample_store();
    let first = evaluate(&store, &second_semester_student()).unwrap();
    let second = evaluate(&store, &second_semester_student()).unwrap();

    let unique: HashSet<&str> = first.codes().into_iter().collect();
    assert_eq!(unique.len(), first.recommendations.len());
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_evaluations_share_a_store() {
    let store = sample_store();
    let expected = evaluate(&store, &second_semester_student()).unwrap();

    let store = &store;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || evaluate(store, &second_semester_student())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}

#[test]
fn test_invalid_term_fails_before_reading_catalog() {
    let store = CountingStore::default();
    let err = evaluate(&store, &input(2, 3.0, &[], &[], 30, "Winter")).unwrap_err();

    assert!(matches!(err, AdvisorError::InvalidInput(_)));
    assert!(err.to_string().contains("Winter"));
    assert_eq!(store.reads.load(Ordering::SeqCst), 0);

    for miscased in ["spring", "FALL", " Summer"] {
        let err = evaluate(&store, &input(2, 3.0, &[], &[], 30, miscased)).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidInput(_)));
    }
    assert_eq!(store.reads.load(Ordering::SeqCst), 0);

    evaluate(&store, &input(2, 3.0, &[], &[], 30, "Spring")).unwrap();
    assert_eq!(store.reads.load(Ordering::SeqCst), 1);
}

#[test]
fn test_missing_catalog_file_is_a_store_error() {
    let store = CsvCatalogStore::new("/nonexistent/catalog/courses.csv");
    let err = evaluate(&store, &second_semester_student()).unwrap_err();
    assert!(matches!(err, AdvisorError::Catalog(StoreError::Io(_))));
}

#[test]
fn test_senior_standing_gate() {
    let store = MemoryCatalogStore::new(vec![row("CSE491", "Core", "3", "9", "SENIOR STANDING")]);

    let junior = evaluate(&store, &input(8, 3.2, &[], &[], 100, "Fall")).unwrap();
    assert!(junior.is_empty());
    assert_eq!(
        junior.explanations_for("CSE491").collect::<Vec<_>>(),
        vec!["Requires senior standing (Semester >= 9 or 125+ credits)."]
    );

    let by_credits = evaluate(&store, &input(8, 3.2, &[], &[], 130, "Fall")).unwrap();
    assert_eq!(by_credits.codes(), vec!["CSE491"]);

    let by_semester = evaluate(&store, &input(9, 3.2, &[], &[], 0, "Spring")).unwrap();
    assert_eq!(by_semester.codes(), vec!["CSE491"]);
    assert_eq!(
        by_semester.recommendations[0].reason,
        "Core course, prerequisites met"
    );
}

#[test]
fn test_summer_limit_and_unknown_failed_course() {
    let store = MemoryCatalogStore::new(vec![
        row("CSE015", "Core", "3", "2", ""),
        row("MAT124", "Core", "4", "2", ""),
        row("PHY213", "Core", "4", "2", ""),
    ]);
    let result = evaluate(&store, &input(2, 3.5, &[], &["XYZ999", "CSE015"], 30, "Summer")).unwrap();

    assert_eq!(result.credit_limit, 9);
    assert_eq!(result.codes(), vec!["CSE015", "MAT124"]);
    assert!(result
        .explanations
        .contains(&"Not recommended XYZ999: Course not found in course database.".to_string()));
    assert!(result
        .explanations
        .contains(&"Not recommended PHY213: Exceeds credit limit of 9 (current: 7).".to_string()));
}

#[test]
fn test_passed_failed_course_is_not_retaken() {
    let store = MemoryCatalogStore::new(vec![row("CSE015", "Core", "3", "2", "")]);
    let result = evaluate(&store, &input(3, 3.0, &["CSE015"], &["CSE015"], 40, "Fall")).unwrap();

    assert!(result.is_empty());
    assert!(result.explanations_for("CSE015").next().is_none());
}

#[test]
fn test_low_cgpa_blocks_advanced_courses_only() {
    let store = MemoryCatalogStore::new(vec![
        row("MAT124", "Core", "3", "3", "MAT123"),
        row("UC21XX", "University Requirement", "2", "3", "MAT123"),
        row("CSE113", "Core", "3", "3", ""),
    ]);
    let result = evaluate(&store, &input(3, 1.8, &["MAT123"], &[], 40, "Fall")).unwrap();

    assert_eq!(result.credit_limit, 12);
    assert_eq!(result.codes(), vec!["UC21XX", "CSE113"]);
    assert_eq!(
        result.explanations_for("MAT124").collect::<Vec<_>>(),
        vec!["CGPA 1.80 below 2.00 for advanced course."]
    );
}

#[test]
fn test_malformed_rows_are_skipped_and_explained() {
    let store = MemoryCatalogStore::new(vec![
        row("CSE015", "Core", "three", "2", ""),
        row("MAT124", "Core", "3", "2", ""),
    ]);
    let result = evaluate(&store, &input(2, 3.0, &[], &["CSE015"], 30, "Fall")).unwrap();

    assert_eq!(result.codes(), vec!["MAT124"]);
    assert!(result.explanations[0].starts_with("Skipped course CSE015: Invalid data ("));
    assert!(result
        .explanations
        .contains(&"Not recommended CSE015: Course not found in course database.".to_string()));
}

#[test]
fn test_non_finite_cgpa_gets_probation_limit() {
    let result = evaluate(&MemoryCatalogStore::default(), &input(2, f64::NAN, &[], &[], 30, "Fall")).unwrap();

    assert_eq!(result.credit_limit, 12);
    assert_eq!(
        result.explanations[0],
        "Credit limit set to 12 due to CGPA 0.00 < 1.67 after 2 semesters."
    );
}
