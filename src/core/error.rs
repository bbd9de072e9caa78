use thiserror::Error;

/// Errors that can occur at the draft and submission boundary.
///
/// The totals computation itself is total and never fails; malformed numeric
/// input is normalized to 0 instead of rejected.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FakturoError {
    /// One or more draft validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A draft operation referenced a row that does not exist.
    #[error("draft error: {0}")]
    Draft(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "customer.name").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
