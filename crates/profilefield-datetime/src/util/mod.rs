//! Utility modules for datetime fields.

pub mod datetime;

pub use datetime::{add_period, make_timestamp, parse_date_parts, sub_period, DateParseError, DateParts};
