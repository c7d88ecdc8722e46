//! Field definitions and their stored representation.

use serde::{Deserialize, Serialize};

use crate::codec::{decode_rule, encode_rule};
use crate::model::MinimumDateRule;

/// The flat row persisted by the record store.
///
/// Years are in the reference (Gregorian) calendar. `encoded_rule` is the
/// opaque `key=value;...` parameter string, empty when no rule is set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldRecord {
    pub start_year_ref: i32,
    pub end_year_ref: i32,
    pub include_time: bool,
    pub encoded_rule: String,
}

/// Typed view of a stored datetime field definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// First accepted year (reference calendar).
    pub start_year: i32,
    /// Last accepted year (reference calendar).
    pub end_year: i32,
    /// Whether the widget captures a time of day.
    pub include_time: bool,
    pub rule: Option<MinimumDateRule>,
}

impl FieldDefinition {
    /// Creates a date-only definition without a rule.
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
            include_time: false,
            rule: None,
        }
    }

    /// Sets whether the time of day is captured.
    pub fn with_time(mut self, include_time: bool) -> Self {
        self.include_time = include_time;
        self
    }

    /// Attaches a minimum-date rule.
    pub fn with_rule(mut self, rule: MinimumDateRule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Builds a definition from a stored row. A malformed rule string
    /// yields a definition without a rule.
    pub fn from_record(record: &FieldRecord) -> Self {
        Self {
            start_year: record.start_year_ref,
            end_year: record.end_year_ref,
            include_time: record.include_time,
            rule: decode_rule(&record.encoded_rule),
        }
    }

    /// Returns the row to persist for this definition.
    pub fn to_record(&self) -> FieldRecord {
        FieldRecord {
            start_year_ref: self.start_year,
            end_year_ref: self.end_year,
            include_time: self.include_time,
            encoded_rule: encode_rule(self.rule.as_ref()),
        }
    }
}

impl From<&FieldRecord> for FieldDefinition {
    fn from(record: &FieldRecord) -> Self {
        Self::from_record(record)
    }
}
