//! Catalog stores: the record stores administrators edit and the engine reads

use crate::core::error::StoreError;
use crate::core::models::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Column names of the catalog CSV, in file order
pub const COLUMNS: [&str; 9] = [
    "CourseCode",
    "CourseName",
    "Description",
    "Prerequisites",
    "CoRequisites",
    "CreditHours",
    "SemesterOffered",
    "Semester",
    "Category",
];

/// Columns that must be present for the catalog to be usable
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "CourseCode",
    "CourseName",
    "Category",
    "Prerequisites",
    "CoRequisites",
    "CreditHours",
    "SemesterOffered",
    "Semester",
];

/// One raw catalog entry. Numeric fields stay textual until the facts loader parses them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    /// Course code
    #[serde(rename = "CourseCode")]
    pub code: String,
    /// Course name
    #[serde(rename = "CourseName")]
    pub name: String,
    /// Free-text description
    #[serde(rename = "Description", default)]
    pub description: String,
    /// Comma-separated prerequisite codes
    #[serde(rename = "Prerequisites", default)]
    pub prerequisites: String,
    /// Comma-separated co-requisite codes
    #[serde(rename = "CoRequisites", default)]
    pub corequisites: String,
    /// Credit hours (real number)
    #[serde(rename = "CreditHours", default)]
    pub credit_hours: String,
    /// "Fall", "Spring", or "Both"
    #[serde(rename = "SemesterOffered", default)]
    pub offered: String,
    /// Target semester of the study plan (integer)
    #[serde(rename = "Semester", default)]
    pub semester: String,
    /// Category name (e.g., "Core", "E2", "University Elective")
    #[serde(rename = "Category", default)]
    pub category: String,
}

/// Storage abstraction for the course catalog.
///
/// Reads never cache: each call observes the store's current contents.
pub trait CatalogStore: Send + Sync {
    /// Every row, in storage order
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    fn list_all_courses(&self) -> Result<Vec<CatalogRow>, StoreError>;

    /// Add a course
    ///
    /// # Errors
    /// Rejects rows without a code or name, with an unknown category, or whose code
    /// already exists in the same category
    fn insert(&self, row: CatalogRow) -> Result<(), StoreError>;

    /// Replace every row with `code` by `row`
    ///
    /// # Errors
    /// Returns `NotFound` when no row has `code`
    fn update(&self, code: &str, row: CatalogRow) -> Result<(), StoreError>;

    /// Remove every row with `code`
    ///
    /// # Errors
    /// Returns `NotFound` when no row has `code`
    fn delete(&self, code: &str) -> Result<(), StoreError>;

    /// First row with `code`
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    fn fetch(&self, code: &str) -> Result<Option<CatalogRow>, StoreError> {
        Ok(self
            .list_all_courses()?
            .into_iter()
            .find(|row| row.code == code))
    }

    /// Rows grouped by category name
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    fn courses_by_category(&self) -> Result<BTreeMap<String, Vec<CatalogRow>>, StoreError> {
        let mut grouped: BTreeMap<String, Vec<CatalogRow>> = BTreeMap::new();
        for row in self.list_all_courses()? {
            grouped.entry(row.category.clone()).or_default().push(row);
        }
        Ok(grouped)
    }
}

/// Check a row before it is written; normalizes the category spelling
fn validate_row(row: &mut CatalogRow) -> Result<(), StoreError> {
    row.code = row.code.trim().to_string();
    row.name = row.name.trim().to_string();
    if row.code.is_empty() || row.name.is_empty() {
        return Err(StoreError::InvalidRow(
            "course code and course name are required".to_string(),
        ));
    }
    let category: Category = row
        .category
        .parse()
        .map_err(|_| StoreError::InvalidRow(format!("undefined category '{}'", row.category)))?;
    row.category = category.as_str().to_string();
    Ok(())
}

fn insert_row(rows: &mut Vec<CatalogRow>, mut row: CatalogRow) -> Result<(), StoreError> {
    validate_row(&mut row)?;
    if rows
        .iter()
        .any(|existing| existing.code == row.code && existing.category == row.category)
    {
        return Err(StoreError::Conflict(row.code));
    }
    rows.push(row);
    Ok(())
}

fn update_rows(rows: &mut [CatalogRow], code: &str, mut row: CatalogRow) -> Result<(), StoreError> {
    if row.code.trim().is_empty() {
        row.code = code.to_string();
    }
    validate_row(&mut row)?;

    let mut updated = false;
    for existing in rows.iter_mut().filter(|existing| existing.code == code) {
        existing.clone_from(&row);
        updated = true;
    }
    if updated {
        Ok(())
    } else {
        Err(StoreError::NotFound(code.to_string()))
    }
}

fn delete_rows(rows: &mut Vec<CatalogRow>, code: &str) -> Result<(), StoreError> {
    let before = rows.len();
    rows.retain(|row| row.code != code);
    if rows.len() == before {
        return Err(StoreError::NotFound(code.to_string()));
    }
    Ok(())
}

/// Parse catalog rows from CSV data with a header row
///
/// # Errors
/// Returns an error if the data is not CSV or lacks a required column
pub fn parse_rows<R: Read>(reader: R) -> Result<Vec<CatalogRow>, StoreError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(StoreError::MissingColumns(missing));
    }

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<CatalogRow>() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Catalog kept in a single CSV file with a `Category` column
#[derive(Debug, Clone)]
pub struct CsvCatalogStore {
    path: PathBuf,
}

impl CsvCatalogStore {
    /// Create a store backed by the CSV file at `path` (created on first insert)
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing CSV file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_rows(&self) -> Result<Vec<CatalogRow>, StoreError> {
        let file = File::open(&self.path)?;
        parse_rows(file)
    }

    fn write_rows(&self, rows: &[CatalogRow]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(COLUMNS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn modify<F>(&self, allow_missing_file: bool, change: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Vec<CatalogRow>) -> Result<(), StoreError>,
    {
        let mut rows = if allow_missing_file && !self.path.exists() {
            Vec::new()
        } else {
            self.read_rows()?
        };
        change(&mut rows)?;
        self.write_rows(&rows)
    }
}

impl CatalogStore for CsvCatalogStore {
    fn list_all_courses(&self) -> Result<Vec<CatalogRow>, StoreError> {
        self.read_rows()
    }

    fn insert(&self, row: CatalogRow) -> Result<(), StoreError> {
        self.modify(true, |rows| insert_row(rows, row))
    }

    fn update(&self, code: &str, row: CatalogRow) -> Result<(), StoreError> {
        self.modify(false, |rows| update_rows(rows, code, row))
    }

    fn delete(&self, code: &str) -> Result<(), StoreError> {
        self.modify(false, |rows| delete_rows(rows, code))
    }
}

/// Catalog held in memory; used for embedding and tests
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    rows: Mutex<Vec<CatalogRow>>,
}

impl MemoryCatalogStore {
    /// Create a store holding `rows` as-is (rows are not validated)
    #[must_use]
    pub const fn new(rows: Vec<CatalogRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    fn with_rows<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Vec<CatalogRow>) -> Result<T, StoreError>,
    {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::Unavailable("catalog lock poisoned".to_string()))?;
        f(&mut rows)
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn list_all_courses(&self) -> Result<Vec<CatalogRow>, StoreError> {
        self.with_rows(|rows| Ok(rows.clone()))
    }

    fn insert(&self, row: CatalogRow) -> Result<(), StoreError> {
        self.with_rows(|rows| insert_row(rows, row))
    }

    fn update(&self, code: &str, row: CatalogRow) -> Result<(), StoreError> {
        self.with_rows(|rows| update_rows(rows, code, row))
    }

    fn delete(&self, code: &str) -> Result<(), StoreError> {
        self.with_rows(|rows| delete_rows(rows, code))
    }
}
