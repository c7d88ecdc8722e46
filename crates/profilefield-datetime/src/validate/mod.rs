//! Validation for datetime fields.
//!
//! Two stages validate independently:
//! - Definition time: the administrator's year range and rule settings
//!   ([`validate_definition`]).
//! - Submission time: the minimum-date rule against a submitted value
//!   ([`evaluate_minimum_date`]).
//!
//! Nothing here reads the clock; "now" is always passed in.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::codec::params::PAIR_SEPARATOR;
use crate::config::DatetimeConfig;
use crate::error::{DefinitionError, RuleViolation};
use crate::model::{DefinitionForm, MinimumDateForm, MinimumDateRule};
use crate::util::add_period;

/// Evaluates a minimum-date rule.
///
/// The rule holds when `submitted + quantity × unit <= now`; the boundary is
/// inclusive. A threshold past the representable range never holds.
pub fn evaluate_minimum_date(
    rule: &MinimumDateRule,
    submitted: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), RuleViolation> {
    let threshold = add_period(submitted, rule.quantity, rule.unit);
    let satisfied = threshold.is_some_and(|t| t <= now);

    debug!(
        quantity = rule.quantity,
        unit = rule.unit.name(),
        %submitted,
        ?threshold,
        %now,
        satisfied,
        "evaluated minimum date"
    );

    if satisfied {
        Ok(())
    } else {
        Err(RuleViolation { threshold, now })
    }
}

/// Evaluates an optional rule; no rule always holds.
pub fn check_minimum_date(
    rule: Option<&MinimumDateRule>,
    submitted: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), RuleViolation> {
    match rule {
        Some(rule) => evaluate_minimum_date(rule, submitted, now),
        None => Ok(()),
    }
}

/// Checks that the start year doesn't come after the end year.
pub fn validate_year_range(start_year: i32, end_year: i32) -> Result<(), DefinitionError> {
    if start_year > end_year {
        return Err(DefinitionError::StartYearAfterEndYear {
            start_year,
            end_year,
        });
    }
    Ok(())
}

/// Validates the minimum-date group and builds the rule it describes.
///
/// A disabled group yields `Ok(None)` whatever its other controls contain.
/// The error message is trimmed.
pub fn validate_minimum_date_form(
    form: &MinimumDateForm,
    config: &DatetimeConfig,
) -> Result<Option<MinimumDateRule>, Vec<DefinitionError>> {
    if !form.enabled {
        return Ok(None);
    }

    let mut errors = Vec::new();

    let input = form.quantity.trim();
    let quantity_len = input.chars().count();
    let quantity = if quantity_len > config.max_quantity_len {
        errors.push(DefinitionError::QuantityTooLong {
            len: quantity_len,
            max: config.max_quantity_len,
        });
        None
    } else {
        match input.parse::<u32>() {
            Ok(q) if q > 0 => Some(q),
            _ => {
                errors.push(DefinitionError::MinimumDateRequired {
                    input: input.to_string(),
                });
                None
            }
        }
    };

    let message = form.error_message.trim();
    let message_len = message.chars().count();
    if message_len > config.max_error_message_len {
        errors.push(DefinitionError::ErrorMessageTooLong {
            len: message_len,
            max: config.max_error_message_len,
        });
    }
    if message.contains(PAIR_SEPARATOR) {
        errors.push(DefinitionError::ErrorMessageContainsSeparator);
    }

    match quantity {
        Some(quantity) if errors.is_empty() => Ok(Some(
            MinimumDateRule::new(quantity, form.unit).with_error_message(message),
        )),
        _ => Err(errors),
    }
}

/// Validates administrator input for a field definition.
///
/// Collects every error rather than stopping at the first, so the form can
/// report all of them at once. On success returns the rule to store.
pub fn validate_definition(
    form: &DefinitionForm,
    config: &DatetimeConfig,
) -> Result<Option<MinimumDateRule>, Vec<DefinitionError>> {
    let mut errors = Vec::new();

    if let Err(e) = validate_year_range(form.start_year, form.end_year) {
        errors.push(e);
    }

    match validate_minimum_date_form(&form.minimum_date, config) {
        Ok(rule) if errors.is_empty() => Ok(rule),
        Ok(_) => Err(errors),
        Err(rule_errors) => {
            errors.extend(rule_errors);
            Err(errors)
        }
    }
}
