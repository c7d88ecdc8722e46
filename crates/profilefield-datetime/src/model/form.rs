//! Administrator-facing form values.
//!
//! [`DefinitionForm`] is both the shape handed to the host form builder to
//! populate the definition controls and the shape it hands back on submit.

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;
use crate::model::DateUnit;

/// Values of the definition form for a datetime field.
///
/// Years are in the active calendar system. The anchors are the dates that
/// were displayed for each bound; they let an unchanged selection convert
/// back to exactly the stored reference year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionForm {
    pub start_year: i32,
    pub end_year: i32,
    #[serde(default)]
    pub start_anchor: Option<CalendarDate>,
    #[serde(default)]
    pub end_anchor: Option<CalendarDate>,
    #[serde(default)]
    pub include_time: bool,
    #[serde(default)]
    pub minimum_date: MinimumDateForm,
}

impl DefinitionForm {
    /// Creates form values for the given year range, without anchors or rule.
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
            start_anchor: None,
            end_anchor: None,
            include_time: false,
            minimum_date: MinimumDateForm::default(),
        }
    }
}

/// The minimum-date control group.
///
/// `quantity` is the raw text of the quantity input; it is only checked when
/// the rule is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MinimumDateForm {
    pub enabled: bool,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: DateUnit,
    #[serde(default)]
    pub error_message: String,
}

impl MinimumDateForm {
    /// Creates an enabled rule group.
    pub fn enabled(quantity: impl Into<String>, unit: DateUnit, error_message: impl Into<String>) -> Self {
        Self {
            enabled: true,
            quantity: quantity.into(),
            unit,
            error_message: error_message.into(),
        }
    }
}
