//! The minimum-date rule attached to a datetime field.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::limits::DEFAULT_MINIMUM_DATE_ERROR;

/// Unit of a minimum-date period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateUnit {
    Minutes,
    Hours,
    Days,
    Months,
    #[default]
    Years,
}

impl DateUnit {
    /// All units, in the order they are offered to administrators.
    pub const ALL: [DateUnit; 5] = [
        DateUnit::Minutes,
        DateUnit::Hours,
        DateUnit::Days,
        DateUnit::Months,
        DateUnit::Years,
    ];

    /// Returns the name used in the encoded rule string.
    pub fn name(self) -> &'static str {
        match self {
            DateUnit::Minutes => "minutes",
            DateUnit::Hours => "hours",
            DateUnit::Days => "days",
            DateUnit::Months => "months",
            DateUnit::Years => "years",
        }
    }

    /// Parses a unit from its encoded name.
    pub fn from_name(name: &str) -> Option<DateUnit> {
        match name {
            "minutes" => Some(DateUnit::Minutes),
            "hours" => Some(DateUnit::Hours),
            "days" => Some(DateUnit::Days),
            "months" => Some(DateUnit::Months),
            "years" => Some(DateUnit::Years),
            _ => None,
        }
    }
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Requires a submitted date to lie at least `quantity` units before "now".
///
/// `quantity` is never zero in a rule produced by the codec or accepted by
/// the definition component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinimumDateRule {
    pub quantity: u32,
    pub unit: DateUnit,
    /// Custom failure message; may be empty.
    pub error_message: String,
}

impl MinimumDateRule {
    /// Creates a rule with an empty (default) error message.
    pub fn new(quantity: u32, unit: DateUnit) -> Self {
        Self {
            quantity,
            unit,
            error_message: String::new(),
        }
    }

    /// Sets the custom error message.
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Returns the message to show when the rule fails.
    pub fn message(&self) -> &str {
        self.message_or(DEFAULT_MINIMUM_DATE_ERROR)
    }

    /// Returns the custom message, or `default` when none is set.
    pub fn message_or<'a>(&'a self, default: &'a str) -> &'a str {
        if self.error_message.is_empty() {
            default
        } else {
            &self.error_message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_names() {
        for unit in DateUnit::ALL {
            assert_eq!(DateUnit::from_name(unit.name()), Some(unit));
        }
        assert_eq!(DateUnit::from_name("Years"), None);
        assert_eq!(DateUnit::from_name("weeks"), None);
        assert_eq!(DateUnit::default(), DateUnit::Years);
    }

    #[test]
    fn test_message_fallback() {
        let rule = MinimumDateRule::new(18, DateUnit::Years);
        assert_eq!(rule.message(), "Invalid minimum date");

        let rule = rule.with_error_message("Must be an adult");
        assert_eq!(rule.message(), "Must be an adult");
        assert_eq!(rule.message_or("ignored"), "Must be an adult");
    }
}
