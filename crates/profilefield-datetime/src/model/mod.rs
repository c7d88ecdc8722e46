//! Data model types for datetime profile fields:
//! - Identifiers
//! - Minimum-date rules
//! - Field definitions and stored records
//! - Administrator form values

pub mod definition;
pub mod form;
pub mod id;
pub mod rule;

pub use definition::{FieldDefinition, FieldRecord};
pub use form::{DefinitionForm, MinimumDateForm};
pub use id::FieldId;
pub use rule::{DateUnit, MinimumDateRule};
