//! Error types for the recommendation core and catalog stores

/// Failures of a catalog store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("catalog unavailable: {0}")]
    Io(#[from] std::io::Error),
    /// The backing file is not valid CSV
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    /// Required columns are absent from the header row
    #[error("catalog is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    /// A course with this code already exists in the same category
    #[error("course {0} already exists")]
    Conflict(String),
    /// No course with this code
    #[error("course {0} does not exist")]
    NotFound(String),
    /// The row was rejected before being stored
    #[error("invalid course: {0}")]
    InvalidRow(String),
    /// The store is in a state that cannot serve requests
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Failures of a recommendation request
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    /// Caller supplied input that violates the entry-point contract
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The catalog store could not be read
    #[error(transparent)]
    Catalog(#[from] StoreError),
}
