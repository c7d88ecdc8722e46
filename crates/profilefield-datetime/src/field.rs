//! The value side of a datetime field.
//!
//! A [`DatetimeField`] wraps a stored definition and handles what users
//! submit for it: building the widget bounds, normalizing the submitted date
//! into the field's year range, and enforcing the minimum-date rule.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, trace};

use crate::calendar::{CalendarDate, CalendarSystem};
use crate::config::DatetimeConfig;
use crate::error::{StoreError, SubmissionError};
use crate::limits::DEFAULT_MINIMUM_DATE_ERROR;
use crate::model::{FieldDefinition, FieldId, MinimumDateRule};
use crate::store::FieldStore;
use crate::util::{make_timestamp, parse_date_parts, DateParts};
use crate::validate::evaluate_minimum_date;

/// Prefix of the form input name of a profile field.
pub const INPUT_NAME_PREFIX: &str = "profile_field_";

/// Text displayed for a field without a value.
pub const NOT_SET: &str = "Not set";

const DATE_FORMAT: &str = "%-d %B %Y";
const DATETIME_FORMAT: &str = "%A, %-d %B %Y, %-I:%M %p";

/// A value as submitted by the host form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission<'a> {
    /// Unix seconds; `0` means no value.
    Timestamp(i64),
    /// `YYYY-MM-DD` or `YYYY-MM-DD-HH-MM-SS`; empty means no value.
    Text(&'a str),
    /// Broken-down components.
    Parts(DateParts),
}

/// Attributes of the date (or date-time) selector shown to users.
///
/// Years are in the active calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WidgetAttributes {
    pub start_year: i32,
    pub stop_year: i32,
    pub optional: bool,
    pub include_time: bool,
}

/// A datetime profile field bound to its definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatetimeField {
    input_name: String,
    required: bool,
    definition: FieldDefinition,
    default_error_message: String,
}

impl DatetimeField {
    /// Creates a field for the given short name.
    pub fn new(shortname: &str, definition: FieldDefinition) -> Self {
        Self {
            input_name: format!("{INPUT_NAME_PREFIX}{shortname}"),
            required: false,
            definition,
            default_error_message: DEFAULT_MINIMUM_DATE_ERROR.to_string(),
        }
    }

    /// Loads the definition stored under `id`.
    pub fn load<S: FieldStore + ?Sized>(
        store: &S,
        id: &FieldId,
        shortname: &str,
    ) -> Result<Self, StoreError> {
        let record = store.load_required(id)?;
        Ok(Self::new(shortname, FieldDefinition::from_record(&record)))
    }

    /// Sets whether a value is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Applies site settings.
    pub fn with_config(mut self, config: &DatetimeConfig) -> Self {
        self.default_error_message = config.default_error_message.clone();
        self
    }

    /// Returns the form input name (`profile_field_{shortname}`).
    pub fn input_name(&self) -> &str {
        &self.input_name
    }

    /// Returns the field definition.
    pub fn definition(&self) -> &FieldDefinition {
        &self.definition
    }

    /// Returns whether a value is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Builds the selector attributes, converting the bounds to the active
    /// calendar.
    pub fn widget(&self, calendar: &impl CalendarSystem) -> WidgetAttributes {
        let start = calendar.convert_from_reference(CalendarDate::start_of_year(self.definition.start_year));
        let stop = calendar.convert_from_reference(CalendarDate::start_of_year(self.definition.end_year));
        WidgetAttributes {
            start_year: start.year,
            stop_year: stop.year,
            optional: !self.required,
            include_time: self.definition.include_time,
        }
    }

    /// Pulls a year into the field's range (`min(max(year, start), end)`).
    pub fn clamp_year(&self, year: i32) -> i32 {
        year.max(self.definition.start_year).min(self.definition.end_year)
    }

    fn invalid_date(&self, reason: impl ToString) -> SubmissionError {
        SubmissionError::InvalidDate {
            field: self.input_name.clone(),
            reason: reason.to_string(),
        }
    }

    /// Builds the stored instant from components, clamping the year.
    ///
    /// The time of day is kept only when the field includes time.
    pub fn normalize_parts(&self, parts: &DateParts) -> Result<DateTime<Utc>, SubmissionError> {
        let year = self.clamp_year(parts.year);
        if year != parts.year {
            trace!(field = %self.input_name, submitted = parts.year, clamped = year, "clamped year");
        }
        make_timestamp(&parts.with_year(year), self.definition.include_time)
            .map_err(|e| self.invalid_date(e))
    }

    /// Breaks a submission into components. `Ok(None)` means no value.
    fn submitted_parts(&self, submission: Submission<'_>) -> Result<Option<DateParts>, SubmissionError> {
        match submission {
            Submission::Timestamp(0) => Ok(None),
            Submission::Timestamp(seconds) => DateParts::from_timestamp(seconds)
                .map(Some)
                .ok_or_else(|| self.invalid_date(format!("timestamp out of range: {}", seconds))),
            Submission::Text(text) if text.trim().is_empty() => Ok(None),
            Submission::Text(text) => parse_date_parts(text.trim())
                .map(Some)
                .map_err(|e| self.invalid_date(e)),
            Submission::Parts(parts) => Ok(Some(parts)),
        }
    }

    /// Normalizes a submission into the value to store.
    ///
    /// The year is clamped into the field's range rather than rejected.
    pub fn normalize(&self, submission: Submission<'_>) -> Result<Option<DateTime<Utc>>, SubmissionError> {
        self.submitted_parts(submission)?
            .map(|parts| self.normalize_parts(&parts))
            .transpose()
    }

    /// Enforces the minimum-date rule on a value. No value and no rule
    /// always pass.
    pub fn validate(&self, value: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Result<(), SubmissionError> {
        let (Some(rule), Some(value)) = (self.definition.rule.as_ref(), value) else {
            return Ok(());
        };

        evaluate_minimum_date(rule, value, now).map_err(|violation| {
            debug!(field = %self.input_name, threshold = ?violation.threshold, "minimum date not met");
            self.minimum_date_error(rule)
        })
    }

    fn minimum_date_error(&self, rule: &MinimumDateRule) -> SubmissionError {
        SubmissionError::MinimumDate {
            field: self.input_name.clone(),
            message: rule.message_or(&self.default_error_message).to_string(),
        }
    }

    /// Validates a submission and returns the value to store.
    ///
    /// The rule is checked against the date as submitted, before the year is
    /// clamped. A submitted year too large to represent fails the rule; one
    /// too small passes it.
    pub fn validate_submission(
        &self,
        submission: Submission<'_>,
        now: DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>, SubmissionError> {
        let Some(parts) = self.submitted_parts(submission)? else {
            return Ok(None);
        };

        let normalized = self.normalize_parts(&parts)?;
        let Some(rule) = self.definition.rule.as_ref() else {
            return Ok(Some(normalized));
        };

        // Only the year differs from the parts that just normalized.
        match make_timestamp(&parts, self.definition.include_time) {
            Ok(submitted) => self.validate(Some(submitted), now)?,
            Err(_) if parts.year > self.clamp_year(parts.year) => {
                debug!(field = %self.input_name, year = parts.year, "minimum date not met");
                return Err(self.minimum_date_error(rule));
            }
            Err(_) => {}
        }
        Ok(Some(normalized))
    }

    /// Returns true when the field has no value.
    pub fn is_empty(&self, value: Option<DateTime<Utc>>) -> bool {
        value.is_none()
    }

    /// Formats a value for display.
    pub fn display(&self, value: Option<DateTime<Utc>>) -> String {
        match value {
            None => NOT_SET.to_string(),
            Some(value) if self.definition.include_time => value.format(DATETIME_FORMAT).to_string(),
            Some(value) => value.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Converts a stored Unix timestamp into a value; `0` means no value.
pub fn from_stored_timestamp(seconds: i64) -> Option<DateTime<Utc>> {
    if seconds == 0 {
        None
    } else {
        DateTime::from_timestamp(seconds, 0)
    }
}

/// Converts a value into the Unix timestamp the host stores.
pub fn to_stored_timestamp(value: Option<DateTime<Utc>>) -> i64 {
    value.map_or(0, |v| v.timestamp())
}
