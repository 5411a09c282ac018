//! Organizer error types
//!
//! Defines the errors surfaced by the page collections. None of them are
//! fatal: every failing operation leaves the collection untouched.

use thiserror::Error;

/// A form submission that cannot be turned into a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty or whitespace only
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A field was present but could not be parsed
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Purchased percentage outside 0..=100
    #[error("Purchased percentage must be between 0 and 100, got {0}")]
    PercentOutOfRange(i64),
}

/// Errors that can occur while mutating a page collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrganizerError {
    /// Submitted values failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A destructive action was requested without confirmation
    #[error("Delete was not confirmed")]
    DestructiveActionUnconfirmed,

    /// Every id up to `u32::MAX` is taken
    #[error("No ids left to assign")]
    IdSpaceExhausted,

    /// Target grocery category does not exist
    #[error("Unknown grocery category: {0}")]
    UnknownCategory(String),
}

/// Result type alias for collection operations
pub type OrganizerResult<T> = Result<T, OrganizerError>;
