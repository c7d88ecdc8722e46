//! Site-level settings for datetime fields.

use serde::{Deserialize, Serialize};

use crate::limits::{DEFAULT_MINIMUM_DATE_ERROR, MAX_ERROR_MESSAGE_LEN, MAX_QUANTITY_LEN};
use crate::model::DateUnit;

/// Settings shared by the definition and field-value components.
///
/// Deserializes from partial input; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatetimeConfig {
    /// Message shown when a rule fails and has no custom message.
    pub default_error_message: String,
    /// Unit preselected for a new rule.
    pub default_unit: DateUnit,
    /// Maximum length (in characters) of a custom error message.
    pub max_error_message_len: usize,
    /// Maximum length (in characters) of the quantity input.
    pub max_quantity_len: usize,
}

impl Default for DatetimeConfig {
    fn default() -> Self {
        Self {
            default_error_message: DEFAULT_MINIMUM_DATE_ERROR.to_string(),
            default_unit: DateUnit::Years,
            max_error_message_len: MAX_ERROR_MESSAGE_LEN,
            max_quantity_len: MAX_QUANTITY_LEN,
        }
    }
}

impl DatetimeConfig {
    /// Creates the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fallback error message.
    pub fn with_default_error_message(mut self, message: impl Into<String>) -> Self {
        self.default_error_message = message.into();
        self
    }

    /// Sets the unit preselected for new rules.
    pub fn with_default_unit(mut self, unit: DateUnit) -> Self {
        self.default_unit = unit;
        self
    }

    /// Sets the maximum error message length.
    pub fn with_max_error_message_len(mut self, len: usize) -> Self {
        self.max_error_message_len = len;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DatetimeConfig::new();
        assert_eq!(config.default_error_message, "Invalid minimum date");
        assert_eq!(config.default_unit, DateUnit::Years);
        assert_eq!(config.max_error_message_len, 40);
        assert_eq!(config.max_quantity_len, 5);
    }

    #[test]
    fn test_partial_deserialize() {
        let config: DatetimeConfig =
            serde_json::from_str(r#"{"default_unit":"days","max_error_message_len":80}"#).unwrap();
        assert_eq!(config.default_unit, DateUnit::Days);
        assert_eq!(config.max_error_message_len, 80);
        assert_eq!(config.default_error_message, "Invalid minimum date");
        assert_eq!(config.max_quantity_len, 5);
    }
}
