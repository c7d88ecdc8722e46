//! Text encoding/decoding of the parameters stored with a field definition.

pub mod params;
pub mod rule;

pub use params::{parse_params, ParamReader, ParamWriter};
pub use rule::{decode_rule, encode_rule, MINIMUM_DATE_ERROR_KEY, MINIMUM_DATE_KEY};
