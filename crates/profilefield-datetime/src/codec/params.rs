//! The `key=value;key=value` parameter format stored with profile fields.
//!
//! Pairs are separated by `;` and split on their first `=`. Values may
//! therefore contain `=` but never `;`. The format has no escaping.

use rustc_hash::FxHashMap;

/// Separator between parameter pairs.
pub const PAIR_SEPARATOR: char = ';';

/// Separator between a key and its value.
pub const KEY_VALUE_SEPARATOR: char = '=';

// =============================================================================
// DECODING
// =============================================================================

/// Iterates over the `(key, value)` pairs of a parameter string.
///
/// Segments without `=` (including empty segments) are skipped.
#[derive(Debug, Clone)]
pub struct ParamReader<'a> {
    segments: std::str::Split<'a, char>,
}

impl<'a> ParamReader<'a> {
    /// Creates a reader over an encoded parameter string.
    pub fn new(data: &'a str) -> Self {
        Self {
            segments: data.split(PAIR_SEPARATOR),
        }
    }

    /// Collects all pairs into a map. When a key repeats, the last value wins.
    pub fn into_map(self) -> FxHashMap<&'a str, &'a str> {
        let mut params = FxHashMap::default();
        for (key, value) in self {
            params.insert(key, value);
        }
        params
    }
}

impl<'a> Iterator for ParamReader<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        for segment in self.segments.by_ref() {
            if let Some(pair) = segment.split_once(KEY_VALUE_SEPARATOR) {
                return Some(pair);
            }
        }
        None
    }
}

/// Parses a parameter string into a map.
pub fn parse_params(data: &str) -> FxHashMap<&str, &str> {
    ParamReader::new(data).into_map()
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for building parameter strings.
#[derive(Debug, Clone, Default)]
pub struct ParamWriter {
    buf: String,
}

impl ParamWriter {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Appends a `key=value` pair.
    ///
    /// A value containing `;` won't read back as written; keys must contain
    /// neither separator.
    pub fn write_param(&mut self, key: &str, value: &str) {
        debug_assert!(!key.contains(PAIR_SEPARATOR) && !key.contains(KEY_VALUE_SEPARATOR));
        if !self.buf.is_empty() {
            self.buf.push(PAIR_SEPARATOR);
        }
        self.buf.push_str(key);
        self.buf.push(KEY_VALUE_SEPARATOR);
        self.buf.push_str(value);
    }

    /// Returns the encoded string.
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Returns a reference to the encoded string.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Returns true if no pair has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_pairs() {
        let pairs: Vec<_> = ParamReader::new("a=1;b=two words;c=").collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "two words"), ("c", "")]);
    }

    #[test]
    fn test_reader_skips_segments_without_separator() {
        let pairs: Vec<_> = ParamReader::new(";junk;a=1;;").collect();
        assert_eq!(pairs, vec![("a", "1")]);
        assert_eq!(ParamReader::new("").count(), 0);
    }

    #[test]
    fn test_value_may_contain_equals() {
        let params = parse_params("msg=a=b");
        assert_eq!(params.get("msg"), Some(&"a=b"));
    }

    #[test]
    fn test_last_value_wins() {
        let params = parse_params("a=1;a=2");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("a"), Some(&"2"));
    }

    #[test]
    fn test_writer() {
        let mut writer = ParamWriter::new();
        assert!(writer.is_empty());
        writer.write_param("a", "1");
        writer.write_param("b", "");
        assert_eq!(writer.as_str(), "a=1;b=");
        assert_eq!(writer.into_string(), "a=1;b=");
    }
}
