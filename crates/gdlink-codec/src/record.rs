//! The delimited key/value mini-grammar.
//!
//! Almost every response from the service is a flat run of alternating
//! keys and values joined by one separator:
//!
//! ```text
//! 1:RobTop:2:16:13:149      →  { "1": "RobTop", "2": "16", "13": "149" }
//! ```
//!
//! The separator changes with nesting level (`:` for records, `~` inside
//! comments, `~|~` for songs, `,` for level objects, `_` for color
//! channels), so it is a parameter.
//!
//! # Truncation
//!
//! If the token count is odd, the last token has no partner and is
//! dropped. That is not an error: the parser only ever pairs complete
//! slots, and callers rely on that (an empty string is one lonely empty
//! token and parses to an empty record).

use std::fmt;

use indexmap::IndexMap;

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A parsed key/value record, keys in the order they first appeared.
///
/// Repeated keys keep their first position and their last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record(IndexMap<String, String>);

impl Record {
    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Parses the value for `key` with [`str::parse`].
    ///
    /// `None` when the key is missing or the value doesn't parse. An empty
    /// value counts as "doesn't parse" for numeric types.
    pub fn parse_field<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.get(key)?.parse().ok()
    }

    /// Number of key/value pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record has no pairs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Unwraps the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<String, String> {
        self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Splits `data` on `separator` and pairs the tokens as key, value, key,
/// value, …
///
/// ```rust
/// use gdlink_codec::parse;
///
/// let record = parse("a:1:b:2", ":");
/// assert_eq!(record.get("a"), Some("1"));
/// assert_eq!(record.get("b"), Some("2"));
///
/// // Odd token count: the trailing key is dropped.
/// assert_eq!(parse("a:1:b", ":").len(), 1);
/// ```
pub fn parse(data: &str, separator: &str) -> Record {
    let mut tokens = data.split(separator);
    let mut record = IndexMap::new();
    while let Some(key) = tokens.next() {
        let Some(value) = tokens.next() else {
            tracing::trace!(key, "dropping unpaired trailing token");
            break;
        };
        record.insert(key.to_owned(), value.to_owned());
    }
    Record(record)
}

// ---------------------------------------------------------------------------
// NumericRecord
// ---------------------------------------------------------------------------

/// A value in an object record: numeric where it can be, text otherwise.
///
/// Object properties are mostly numbers (ids, coordinates, rotations),
/// but a few carry strings (Base64 text, `.`-joined group lists), so the
/// parser keeps whatever doesn't coerce.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
}

impl PropertyValue {
    fn coerce(raw: &str) -> Self {
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Number(n),
            _ => Self::Text(raw.to_owned()),
        }
    }

    /// The numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// The text value, if this didn't coerce to a number.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A `,`-delimited object record keyed by property id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericRecord(IndexMap<u32, PropertyValue>);

impl NumericRecord {
    /// Returns the value for property `key`.
    pub fn get(&self, key: u32) -> Option<&PropertyValue> {
        self.0.get(&key)
    }

    /// Shorthand for `get(key)?.as_f64()`.
    pub fn number(&self, key: u32) -> Option<f64> {
        self.get(key)?.as_f64()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &PropertyValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }
}

/// Like [`parse`] on `,`, with numeric keys and number-or-text values.
///
/// Keys that aren't unsigned integers can't address a property and are
/// skipped along with their value.
///
/// ```rust
/// use gdlink_codec::{parse_numeric, PropertyValue};
///
/// let obj = parse_numeric("1,5,2,x");
/// assert_eq!(obj.get(1), Some(&PropertyValue::Number(5.0)));
/// assert_eq!(obj.get(2), Some(&PropertyValue::Text("x".into())));
/// ```
pub fn parse_numeric(data: &str) -> NumericRecord {
    let mut out = IndexMap::new();
    for (key, value) in parse(data, ",").iter() {
        match key.parse::<u32>() {
            Ok(id) => {
                out.insert(id, PropertyValue::coerce(value));
            }
            Err(_) => tracing::trace!(key, "skipping non-numeric property key"),
        }
    }
    NumericRecord(out)
}

// =========================================================================
// Tests
// =========================================================================
