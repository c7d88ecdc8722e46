//! Error types for datetime field definitions, submissions and storage.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::FieldId;

/// Stable error codes, grouped by the stage that reports them.
///
/// `Dxxx` codes are raised while an administrator saves a field definition,
/// `Sxxx` codes while a user submits a value, `Rxxx` codes by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// D001: Start year after end year
    InvalidYearRange,
    /// D002: Missing, non-numeric or non-positive minimum-date quantity
    InvalidMinimumDate,
    /// D003: Unusable custom error message
    InvalidErrorMessage,
    /// S001: Submitted date does not satisfy the minimum-date rule
    MinimumDateNotMet,
    /// S002: Submitted date components do not form a date
    InvalidSubmittedDate,
    /// R001: Record store failure
    StorageFailure,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "D001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidYearRange => "D001",
            ErrorCode::InvalidMinimumDate => "D002",
            ErrorCode::InvalidErrorMessage => "D003",
            ErrorCode::MinimumDateNotMet => "S001",
            ErrorCode::InvalidSubmittedDate => "S002",
            ErrorCode::StorageFailure => "R001",
        }
    }
}

/// Validation error raised while saving a field definition.
///
/// Each variant is keyed to the administrator form control it belongs to,
/// see [`DefinitionError::field`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("The start year can't occur after the end year")]
    StartYearAfterEndYear { start_year: i32, end_year: i32 },

    #[error("Please enter the minimum date period.")]
    MinimumDateRequired { input: String },

    #[error("minimum date period is {len} characters long, maximum is {max}")]
    QuantityTooLong { len: usize, max: usize },

    #[error("minimum date error message is {len} characters long, maximum is {max}")]
    ErrorMessageTooLong { len: usize, max: usize },

    #[error("minimum date error message can't contain ';'")]
    ErrorMessageContainsSeparator,
}

impl DefinitionError {
    /// Returns the form key this error is reported against.
    pub fn field(&self) -> &'static str {
        match self {
            DefinitionError::StartYearAfterEndYear { .. } => "param1",
            DefinitionError::MinimumDateRequired { .. } | DefinitionError::QuantityTooLong { .. } => {
                "minimumdategroup"
            }
            DefinitionError::ErrorMessageTooLong { .. }
            | DefinitionError::ErrorMessageContainsSeparator => "minimumdateerror",
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DefinitionError::StartYearAfterEndYear { .. } => ErrorCode::InvalidYearRange,
            DefinitionError::MinimumDateRequired { .. } | DefinitionError::QuantityTooLong { .. } => {
                ErrorCode::InvalidMinimumDate
            }
            DefinitionError::ErrorMessageTooLong { .. }
            | DefinitionError::ErrorMessageContainsSeparator => ErrorCode::InvalidErrorMessage,
        }
    }
}

/// Validation error raised while a user submits a value for a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The rule's custom message (or the default) is the display text.
    #[error("{message}")]
    MinimumDate { field: String, message: String },

    #[error("invalid date: {reason}")]
    InvalidDate { field: String, reason: String },
}

impl SubmissionError {
    /// Returns the input name this error is reported against.
    pub fn field(&self) -> &str {
        match self {
            SubmissionError::MinimumDate { field, .. } | SubmissionError::InvalidDate { field, .. } => {
                field
            }
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubmissionError::MinimumDate { .. } => ErrorCode::MinimumDateNotMet,
            SubmissionError::InvalidDate { .. } => ErrorCode::InvalidSubmittedDate,
        }
    }
}

/// Verdict of a failed minimum-date evaluation.
///
/// `threshold` is `None` when adding the rule's period to the submitted date
/// leaves the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("minimum date not reached: threshold {threshold:?} is after {now}")]
pub struct RuleViolation {
    pub threshold: Option<DateTime<Utc>>,
    pub now: DateTime<Utc>,
}

/// Error reported by a [`FieldStore`](crate::store::FieldStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no field definition stored for {id}")]
    NotFound { id: FieldId },

    #[error("field store failure: {0}")]
    Backend(String),
}

impl StoreError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::StorageFailure
    }
}

/// Error returned when saving a field definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("field definition has {} validation error(s)", .0.len())]
    Invalid(Vec<DefinitionError>),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<Vec<DefinitionError>> for SaveError {
    fn from(errors: Vec<DefinitionError>) -> Self {
        SaveError::Invalid(errors)
    }
}
