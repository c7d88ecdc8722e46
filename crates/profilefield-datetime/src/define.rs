//! The definition side of a datetime field.
//!
//! Turns administrator form values into a stored [`FieldRecord`] and back:
//! - years are converted between the active calendar and the reference
//!   calendar
//! - the minimum-date group is validated and encoded into the rule string

use chrono::{DateTime, Datelike, Utc};
use tracing::{debug, warn};

use crate::calendar::{CalendarDate, CalendarSystem};
use crate::codec::{decode_rule, encode_rule, parse_params, MINIMUM_DATE_ERROR_KEY};
use crate::config::DatetimeConfig;
use crate::error::{DefinitionError, SaveError, StoreError};
use crate::model::{DefinitionForm, FieldId, FieldRecord, MinimumDateForm};
use crate::store::FieldStore;
use crate::validate::validate_definition;

/// Form values for a field that doesn't exist yet.
///
/// Both bounds default to the current year in the active calendar; the rule
/// is disabled with the configured default unit preselected.
pub fn new_field_form(
    calendar: &impl CalendarSystem,
    today: DateTime<Utc>,
    config: &DatetimeConfig,
) -> DefinitionForm {
    let current = calendar.convert_from_reference(CalendarDate::new(
        today.year(),
        today.month(),
        today.day(),
    ));

    let mut form = DefinitionForm::new(current.year, current.year);
    form.minimum_date.unit = config.default_unit;
    form
}

/// Converts a selected year to the reference calendar.
///
/// An unchanged selection converts its displayed anchor date; a changed one
/// converts the first day of the newly selected year.
fn reference_year(calendar: &impl CalendarSystem, year: i32, anchor: Option<CalendarDate>) -> i32 {
    let date = match anchor {
        Some(anchor) if anchor.year == year => anchor,
        _ => CalendarDate::start_of_year(year),
    };
    calendar.convert_to_reference(date).year
}

/// Validates administrator input and builds the record to store.
///
/// A disabled rule is stored as an empty rule string.
pub fn prepare_record(
    form: &DefinitionForm,
    calendar: &impl CalendarSystem,
    config: &DatetimeConfig,
) -> Result<FieldRecord, Vec<DefinitionError>> {
    let rule = validate_definition(form, config)?;

    Ok(FieldRecord {
        start_year_ref: reference_year(calendar, form.start_year, form.start_anchor),
        end_year_ref: reference_year(calendar, form.end_year, form.end_anchor),
        include_time: form.include_time,
        encoded_rule: encode_rule(rule.as_ref()),
    })
}

/// Rebuilds administrator form values from a stored record.
pub fn form_values(
    record: &FieldRecord,
    calendar: &impl CalendarSystem,
    config: &DatetimeConfig,
) -> DefinitionForm {
    let start = calendar.convert_from_reference(CalendarDate::start_of_year(record.start_year_ref));
    let end = calendar.convert_from_reference(CalendarDate::start_of_year(record.end_year_ref));

    let minimum_date = match decode_rule(&record.encoded_rule) {
        Some(rule) => MinimumDateForm {
            enabled: true,
            quantity: rule.quantity.to_string(),
            unit: rule.unit,
            error_message: rule.error_message,
        },
        None => {
            // Keep a stored message visible even if the period is unusable.
            let params = parse_params(&record.encoded_rule);
            MinimumDateForm {
                enabled: false,
                quantity: String::new(),
                unit: config.default_unit,
                error_message: params
                    .get(MINIMUM_DATE_ERROR_KEY)
                    .map(|m| m.to_string())
                    .unwrap_or_default(),
            }
        }
    };

    DefinitionForm {
        start_year: start.year,
        end_year: end.year,
        start_anchor: Some(start),
        end_anchor: Some(end),
        include_time: record.include_time,
        minimum_date,
    }
}

/// Validates and stores a field definition, returning the stored record.
pub fn save_definition<S: FieldStore + ?Sized>(
    store: &mut S,
    id: FieldId,
    form: &DefinitionForm,
    calendar: &impl CalendarSystem,
    config: &DatetimeConfig,
) -> Result<FieldRecord, SaveError> {
    let record = prepare_record(form, calendar, config).inspect_err(|errors| {
        warn!(%id, errors = errors.len(), "rejected datetime field definition");
    })?;

    store.save(id, record.clone())?;
    debug!(
        %id,
        start_year = record.start_year_ref,
        end_year = record.end_year_ref,
        rule = %record.encoded_rule,
        "saved datetime field definition"
    );
    Ok(record)
}

/// Loads the administrator form values of a stored field.
pub fn load_definition_form<S: FieldStore + ?Sized>(
    store: &S,
    id: &FieldId,
    calendar: &impl CalendarSystem,
    config: &DatetimeConfig,
) -> Result<DefinitionForm, StoreError> {
    let record = store.load_required(id)?;
    Ok(form_values(&record, calendar, config))
}
