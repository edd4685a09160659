/// Core error types for Roster
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
#[derive(Error, Debug)]
pub enum RosterError {
    /// A raw record did not have the nested shape the pipeline requires
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// A structural problem in one raw record.
///
/// `index` is the position of the offending record in the raw payload and
/// `field` is the dotted path that failed (`user.lastname`, `id`, ...).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("record {index}: {field} {reason}")]
pub struct ShapeError {
    pub index: usize,
    pub field: &'static str,
    pub reason: String,
}

impl ShapeError {
    /// Field was absent or null
    pub fn missing(index: usize, field: &'static str) -> Self {
        Self {
            index,
            field,
            reason: "is missing".to_string(),
        }
    }

    /// Field was present but unusable
    pub fn invalid(index: usize, field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            index,
            field,
            reason: reason.into(),
        }
    }
}
