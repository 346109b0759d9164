//! Converts raw catalog rows into typed course facts

use crate::core::catalog::store::CatalogRow;
use crate::core::models::{Category, CourseRecord, OfferedTerm};

/// Course facts for one evaluation run, plus explanations for rows that were skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFacts {
    /// Successfully parsed courses, in catalog order
    pub courses: Vec<CourseRecord>,
    /// One "Skipped course ..." explanation per malformed row
    pub skipped: Vec<String>,
}

/// Load course facts from catalog rows.
///
/// A row that fails to parse is dropped entirely and explained; it never becomes a fact.
#[must_use]
pub fn load_facts(rows: &[CatalogRow]) -> CatalogFacts {
    let mut facts = CatalogFacts::default();

    for row in rows {
        match parse_row(row) {
            Ok(course) => facts.courses.push(course),
            Err(cause) => {
                crate::warn!("Skipping catalog row {}: {cause}", row.code);
                facts
                    .skipped
                    .push(format!("Skipped course {}: Invalid data ({cause}).", row.code));
            }
        }
    }

    crate::debug!(
        "Loaded {} course facts ({} rows skipped)",
        facts.courses.len(),
        facts.skipped.len()
    );
    facts
}

/// Parse one catalog row into a course fact
///
/// # Errors
/// Returns the cause when a numeric field, the category, or the offering term is invalid
pub fn parse_row(row: &CatalogRow) -> Result<CourseRecord, String> {
    let credit_hours = parse_credit_hours(&row.credit_hours)?;
    let target_semester = parse_semester(&row.semester)?;
    let category: Category = row.category.parse()?;
    let offered: OfferedTerm = row.offered.parse()?;

    let mut course = CourseRecord::new(
        row.code.trim().to_string(),
        row.name.trim().to_string(),
        category,
        credit_hours,
    );
    course.offered = offered;
    course.target_semester = target_semester;
    for code in split_codes(&row.prerequisites) {
        course.add_prerequisite(code);
    }
    for code in split_codes(&row.corequisites) {
        course.add_corequisite(code);
    }

    Ok(course)
}

/// Blank means zero credits
fn parse_credit_hours(raw: &str) -> Result<f64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    let hours: f64 = raw
        .parse()
        .map_err(|e| format!("credit hours '{raw}': {e}"))?;
    if !hours.is_finite() || hours < 0.0 {
        return Err(format!("credit hours '{raw}' must be a non-negative number"));
    }
    Ok(hours)
}

/// Blank means semester 1
fn parse_semester(raw: &str) -> Result<u32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(1);
    }
    match raw.parse::<u32>() {
        Ok(0) => Err("semester must be at least 1".to_string()),
        Ok(semester) => Ok(semester),
        Err(e) => Err(format!("semester '{raw}': {e}")),
    }
}

/// Split a comma-separated requisite field into trimmed codes
#[must_use]
pub fn split_codes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: &str, credits: &str, semester: &str) -> CatalogRow {
        CatalogRow {
            code: code.to_string(),
            name: format!("Course {code}"),
            prerequisites: "CSE014 , MAT123".to_string(),
            credit_hours: credits.to_string(),
            offered: "Fall".to_string(),
            semester: semester.to_string(),
            category: "Core".to_string(),
            ..CatalogRow::default()
        }
    }

    #[test]
    fn test_split_codes() {
        assert_eq!(split_codes("CSE014, MAT123"), vec!["CSE014", "MAT123"]);
        assert_eq!(split_codes(" CSE014 ,, "), vec!["CSE014"]);
        assert!(split_codes("").is_empty());
    }

    #[test]
    fn test_parse_row_defaults() {
        let course = parse_row(&row("CSE015", "", "")).unwrap();

        assert!(course.credit_hours.abs() < f64::EPSILON);
        assert_eq!(course.target_semester, 1);
        assert_eq!(course.prerequisites, vec!["CSE014", "MAT123"]);
        assert!(course.corequisites.is_empty());
        assert_eq!(course.offered, OfferedTerm::Fall);
    }

    #[test]
    fn test_parse_row_fractional_credits() {
        let course = parse_row(&row("PHY213L", "1.5", "2")).unwrap();
        assert!((course.credit_hours - 1.5).abs() < f64::EPSILON);
        assert_eq!(course.target_semester, 2);
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let mut bad_category = row("CSE099", "3", "1");
        bad_category.category = "Elective".to_string();

        let rows = vec![
            row("CSE015", "3", "2"),
            row("CSE016", "three", "2"),
            row("CSE017", "3", "2.5"),
            row("CSE018", "-3", "2"),
            bad_category,
        ];
        let facts = load_facts(&rows);

        assert_eq!(facts.courses.len(), 1);
        assert_eq!(facts.courses[0].code, "CSE015");
        assert_eq!(facts.skipped.len(), 4);
        assert!(facts.skipped[0].starts_with("Skipped course CSE016: Invalid data ("));
        assert!(facts.skipped[0].ends_with(")."));
        assert!(facts.skipped[1].starts_with("Skipped course CSE017"));
        assert!(facts.courses.iter().all(|course| course.code != "CSE016"));
    }

    #[test]
    fn test_duplicate_codes_keep_catalog_order() {
        let mut elective = row("CSE351", "3", "4");
        elective.category = "E1".to_string();
        let facts = load_facts(&[row("CSE351", "3", "4"), row("CSE015", "3", "2"), elective]);

        let categories: Vec<Category> = facts
            .courses
            .iter()
            .filter(|course| course.code == "CSE351")
            .map(|course| course.category)
            .collect();
        assert_eq!(categories, vec![Category::Core, Category::E1]);
    }
}
