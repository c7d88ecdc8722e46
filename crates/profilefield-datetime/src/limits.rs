//! Default limits and constants for datetime profile fields.

/// Maximum length (in characters) of a custom minimum-date error message.
pub const MAX_ERROR_MESSAGE_LEN: usize = 40;

/// Maximum length (in characters) of the minimum-date quantity input.
pub const MAX_QUANTITY_LEN: usize = 5;

/// Message shown when a minimum-date rule fails and no custom message is set.
pub const DEFAULT_MINIMUM_DATE_ERROR: &str = "Invalid minimum date";

/// First year offered by the reference calendar's year list.
pub const REFERENCE_MIN_YEAR: i32 = 1900;

/// Last year offered by the reference calendar's year list.
pub const REFERENCE_MAX_YEAR: i32 = 2050;
