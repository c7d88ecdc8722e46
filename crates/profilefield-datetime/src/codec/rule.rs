//! Encoding and decoding of the minimum-date rule.
//!
//! Wire format (key names are fixed for compatibility with stored data):
//!
//! ```text
//! minimumdate={quantity} {unit};minimumdateerror={message}
//! ```

use tracing::debug;

use crate::codec::params::{parse_params, ParamWriter, PAIR_SEPARATOR};
use crate::model::{DateUnit, MinimumDateRule};

/// Parameter key holding `"{quantity} {unit}"`.
pub const MINIMUM_DATE_KEY: &str = "minimumdate";

/// Parameter key holding the custom error message.
pub const MINIMUM_DATE_ERROR_KEY: &str = "minimumdateerror";

/// Encodes a rule into its stored string form.
///
/// `None` encodes as the empty string. The error message is trimmed, and
/// any `;` in it is dropped since it would end the parameter early. Saved
/// definitions never contain one: the definition form rejects it.
pub fn encode_rule(rule: Option<&MinimumDateRule>) -> String {
    let Some(rule) = rule else {
        return String::new();
    };

    let mut message = rule.error_message.trim();
    let stripped;
    if message.contains(PAIR_SEPARATOR) {
        debug!(message, "dropping separator from minimum date error");
        stripped = message.replace(PAIR_SEPARATOR, "");
        message = stripped.trim();
    }

    let mut writer = ParamWriter::new();
    writer.write_param(MINIMUM_DATE_KEY, &format!("{} {}", rule.quantity, rule.unit.name()));
    writer.write_param(MINIMUM_DATE_ERROR_KEY, message);
    writer.into_string()
}

/// Decodes a stored rule string.
///
/// Decoding never fails: a missing, empty or malformed `minimumdate`
/// parameter means the field has no rule. A missing error message decodes
/// as empty, which falls back to the default message on evaluation.
pub fn decode_rule(encoded: &str) -> Option<MinimumDateRule> {
    let params = parse_params(encoded);

    let period = params.get(MINIMUM_DATE_KEY).copied().unwrap_or_default();
    if period.is_empty() {
        return None;
    }

    let Some((quantity, unit)) = period.split_once(' ') else {
        debug!(period, "ignoring minimum date without a unit");
        return None;
    };

    let quantity = match quantity.parse::<u32>() {
        Ok(q) if q > 0 => q,
        _ => {
            debug!(period, "ignoring minimum date with an invalid quantity");
            return None;
        }
    };

    let Some(unit) = DateUnit::from_name(unit) else {
        debug!(period, "ignoring minimum date with an unknown unit");
        return None;
    };

    let error_message = params
        .get(MINIMUM_DATE_ERROR_KEY)
        .map(|m| m.to_string())
        .unwrap_or_default();

    Some(MinimumDateRule {
        quantity,
        unit,
        error_message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        let rule = MinimumDateRule::new(18, DateUnit::Years).with_error_message("Must be an adult");
        assert_eq!(
            encode_rule(Some(&rule)),
            "minimumdate=18 years;minimumdateerror=Must be an adult"
        );
    }

    #[test]
    fn test_encode_none() {
        assert_eq!(encode_rule(None), "");
    }

    #[test]
    fn test_encode_trims_message() {
        let rule = MinimumDateRule::new(30, DateUnit::Minutes).with_error_message("  Too soon \n");
        assert_eq!(encode_rule(Some(&rule)), "minimumdate=30 minutes;minimumdateerror=Too soon");

        let rule = MinimumDateRule::new(2, DateUnit::Days);
        assert_eq!(encode_rule(Some(&rule)), "minimumdate=2 days;minimumdateerror=");
    }

    #[test]
    fn test_encode_drops_separator() {
        let rule = MinimumDateRule::new(18, DateUnit::Years).with_error_message("Too young; sorry;");
        let encoded = encode_rule(Some(&rule));
        assert_eq!(encoded, "minimumdate=18 years;minimumdateerror=Too young sorry");

        let decoded = decode_rule(&encoded).unwrap();
        assert_eq!(decoded.error_message, "Too young sorry");
        assert_eq!(encode_rule(Some(&decoded)), encoded);
    }

    #[test]
    fn test_decode() {
        let rule = decode_rule("minimumdate=18 years;minimumdateerror=Must be an adult").unwrap();
        assert_eq!(rule.quantity, 18);
        assert_eq!(rule.unit, DateUnit::Years);
        assert_eq!(rule.error_message, "Must be an adult");
    }

    #[test]
    fn test_decode_roundtrip_all_units() {
        for unit in DateUnit::ALL {
            let rule = MinimumDateRule::new(7, unit).with_error_message("x=y");
            let encoded = encode_rule(Some(&rule));
            assert_eq!(decode_rule(&encoded), Some(rule));
            assert_eq!(encode_rule(decode_rule(&encoded).as_ref()), encoded);
        }
    }

    #[test]
    fn test_decode_missing_message_uses_default() {
        let rule = decode_rule("minimumdate=6 months").unwrap();
        assert_eq!(rule.error_message, "");
        assert_eq!(rule.message(), "Invalid minimum date");
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        let rule = decode_rule("foo=bar;minimumdate=1 hours;other=1").unwrap();
        assert_eq!(rule, MinimumDateRule::new(1, DateUnit::Hours));
    }

    #[test]
    fn test_decode_no_rule() {
        assert_eq!(decode_rule(""), None);
        assert_eq!(decode_rule("minimumdate="), None);
        assert_eq!(decode_rule("minimumdateerror=Must be an adult"), None);
        assert_eq!(decode_rule("unrelated=1"), None);
    }

    #[test]
    fn test_decode_malformed() {
        assert_eq!(decode_rule("minimumdate=eighteen years"), None);
        assert_eq!(decode_rule("minimumdate=18"), None);
        assert_eq!(decode_rule("minimumdate=18 weeks"), None);
        assert_eq!(decode_rule("minimumdate=0 years"), None);
        assert_eq!(decode_rule("minimumdate=-3 years"), None);
        assert_eq!(decode_rule("minimumdate=18  years"), None);
    }
}
