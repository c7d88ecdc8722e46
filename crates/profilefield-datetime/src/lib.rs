//! Datetime custom profile field.
//!
//! An administrator defines a date (or date-time) field with a bounded year
//! range and an optional minimum-date rule ("must be at least 18 years
//! old"). Users fill the field in at signup or on profile edit.
//!
//! # Overview
//!
//! - **Definition side** ([`define`]): validates administrator input,
//!   converts the year bounds to the reference (Gregorian) calendar and
//!   encodes the rule into the stored parameter string.
//! - **Value side** ([`field`]): normalizes submitted dates into the year
//!   range and enforces the rule relative to a caller-supplied "now".
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use profilefield_datetime::{
//!     define, DatetimeConfig, DatetimeField, DateUnit, DefinitionForm, FieldDefinition,
//!     GregorianCalendar, MinimumDateForm, Submission,
//! };
//!
//! // Administrator saves the definition
//! let mut form = DefinitionForm::new(1900, 2020);
//! form.minimum_date = MinimumDateForm::enabled("18", DateUnit::Years, "Must be an adult");
//! let record = define::prepare_record(&form, &GregorianCalendar, &DatetimeConfig::default()).unwrap();
//! assert_eq!(record.encoded_rule, "minimumdate=18 years;minimumdateerror=Must be an adult");
//!
//! // A user submits a birthday
//! let field = DatetimeField::new("birthday", FieldDefinition::from_record(&record));
//! let now = Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap();
//! let err = field.validate_submission(Submission::Text("2015-06-01"), now).unwrap_err();
//! assert_eq!(err.to_string(), "Must be an adult");
//! assert!(field.validate_submission(Submission::Text("1990-06-01"), now).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (rules, definitions, stored records, forms)
//! - [`codec`]: The `key=value;...` parameter string and the rule encoding
//! - [`validate`]: Definition validation and rule evaluation
//! - [`calendar`]: Calendar-system conversion interface
//! - [`store`]: Record storage interface
//! - [`config`]: Site settings
//! - [`error`]: Error types
//! - [`limits`]: Default limits and messages
//!
//! # Stored format
//!
//! The rule is stored as `minimumdate={quantity} {unit};minimumdateerror={message}`.
//! Decoding is lenient: a malformed rule string means "no rule", never an
//! error, so bad legacy data can't block unrelated operations.

pub mod calendar;
pub mod codec;
pub mod config;
pub mod define;
pub mod error;
pub mod field;
pub mod limits;
pub mod model;
pub mod store;
pub mod util;
pub mod validate;

// Re-export commonly used types at crate root
pub use calendar::{CalendarDate, CalendarSystem, GregorianCalendar};
pub use codec::{decode_rule, encode_rule};
pub use config::DatetimeConfig;
pub use error::{DefinitionError, ErrorCode, RuleViolation, SaveError, StoreError, SubmissionError};
pub use field::{DatetimeField, Submission, WidgetAttributes};
pub use model::{
    DateUnit, DefinitionForm, FieldDefinition, FieldId, FieldRecord, MinimumDateForm, MinimumDateRule,
};
pub use store::{FieldStore, MemoryFieldStore};
pub use util::DateParts;
pub use validate::{check_minimum_date, evaluate_minimum_date, validate_definition};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
