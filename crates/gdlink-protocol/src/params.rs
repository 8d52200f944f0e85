//! The form body every request is built from.
//!
//! A request is an ordered map of field name → value, serialized as
//! `application/x-www-form-urlencoded`. Three protocol-version fields are
//! always present; everything else is merged in by the caller.
//!
//! The service doesn't care about field order, but we keep insertion
//! order anyway so that the same calls always produce the same bytes
//! (which makes request matching in tests trivial).

use std::fmt;

use indexmap::IndexMap;

use crate::{ProtocolError, SecretClass};

/// Protocol-version fields seeded into every request, in wire order.
pub const DEFAULT_FIELDS: [(&str, i64); 3] =
    [("gameVersion", 21), ("binaryVersion", 35), ("gdw", 0)];

/// The reserved field that carries the shared secret.
pub const SECRET_FIELD: &str = "secret";

// ---------------------------------------------------------------------------
// ParamValue
// ---------------------------------------------------------------------------

/// A single form value: text or an integer.
///
/// Both end up as text on the wire; the distinction only exists so
/// callers can pass ids and counters without formatting them first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

impl From<u8> for ParamValue {
    fn from(n: u8) -> Self {
        Self::Int(n.into())
    }
}

impl From<u64> for ParamValue {
    fn from(n: u64) -> Self {
        // Ids above i64::MAX don't exist on the service, but stay lossless.
        i64::try_from(n).map_or_else(|_| Self::Text(n.to_string()), Self::Int)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Int(i64::from(b))
    }
}

// ---------------------------------------------------------------------------
// RequestParams
// ---------------------------------------------------------------------------

/// An ordered, mutable set of request fields.
///
/// ```rust
/// use gdlink_protocol::{RequestParams, SecretClass};
///
/// let mut params = RequestParams::new();
/// params.set("targetAccountID", 71u64).authorize(SecretClass::Db);
///
/// assert_eq!(
///     params.serialize().unwrap(),
///     "gameVersion=21&binaryVersion=35&gdw=0&targetAccountID=71&secret=Wmfd2893gb7",
/// );
/// ```
///
/// Serializing doesn't consume or freeze the builder. Mutating it
/// afterwards and serializing again is fine; an earlier serialized
/// string simply won't reflect the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    fields: IndexMap<String, ParamValue>,
}

impl RequestParams {
    /// A builder holding only the default protocol fields.
    pub fn new() -> Self {
        Self::with_fields(std::iter::empty::<(String, ParamValue)>())
    }

    /// A builder seeded with `fields`, followed by any default protocol
    /// field that `fields` didn't already set.
    pub fn with_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        let mut params = Self {
            fields: IndexMap::new(),
        };
        params.insert(fields);
        for (key, value) in DEFAULT_FIELDS {
            params
                .fields
                .entry(key.to_owned())
                .or_insert(ParamValue::Int(value));
        }
        params
    }

    /// Merges `fields` in, overwriting existing keys in place.
    ///
    /// Returns the merged map so callers can inspect the result.
    pub fn insert<I, K, V>(&mut self, fields: I) -> &IndexMap<String, ParamValue>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        for (key, value) in fields {
            self.fields.insert(key.into(), value.into());
        }
        &self.fields
    }

    /// Sets a single field, overwriting any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Puts the shared secret for `class` under [`SECRET_FIELD`].
    pub fn authorize(&mut self, class: SecretClass) -> &mut Self {
        self.set(SECRET_FIELD, class.value())
    }

    /// Returns the value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.fields.get(key)
    }

    /// The fields in insertion order.
    pub fn fields(&self) -> &IndexMap<String, ParamValue> {
        &self.fields
    }

    /// Produces the URL-encoded form body.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Encode`] if the form serializer rejects
    /// the input. With string keys and values that doesn't happen in
    /// practice, but the serializer's signature says it can.
    pub fn serialize(&self) -> Result<String, ProtocolError> {
        let pairs: Vec<(&str, String)> = self
            .fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.to_string()))
            .collect();
        Ok(serde_urlencoded::to_string(pairs)?)
    }
}

impl Default for RequestParams {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_serializes_default_fields() {
        assert_eq!(
            RequestParams::new().serialize().unwrap(),
            "gameVersion=21&binaryVersion=35&gdw=0"
        );
    }

    #[test]
    fn test_insert_overwrites_existing_key() {
        let mut params = RequestParams::new();
        params.insert([("x", 1)]);
        let merged = params.insert([("x", 2)]);
        assert_eq!(merged.get("x"), Some(&ParamValue::Int(2)));
        assert_eq!(params.serialize().unwrap(), "gameVersion=21&binaryVersion=35&gdw=0&x=2");
    }

    #[test]
    fn test_with_fields_keeps_explicit_version() {
        let params = RequestParams::with_fields([("gameVersion", 22)]);
        assert_eq!(params.get("gameVersion"), Some(&ParamValue::Int(22)));
        assert_eq!(params.get("binaryVersion"), Some(&ParamValue::Int(35)));
        assert_eq!(params.fields().len(), 3);
    }

    #[test]
    fn test_insert_can_overwrite_defaults() {
        let mut params = RequestParams::new();
        params.insert([("gdw", 1)]);
        assert_eq!(params.get("gdw"), Some(&ParamValue::Int(1)));
    }

    #[test]
    fn test_authorize_sets_secret_field() {
        let mut params = RequestParams::new();
        params.authorize(SecretClass::Account);
        assert_eq!(
            params.get(SECRET_FIELD),
            Some(&ParamValue::Text("Wmfv3899gc9".into()))
        );

        // Re-authorizing replaces, never duplicates.
        params.authorize(SecretClass::Db);
        assert_eq!(params.fields().len(), 4);
        assert_eq!(
            params.get(SECRET_FIELD),
            Some(&ParamValue::Text("Wmfd2893gb7".into()))
        );
    }

    #[test]
    fn test_serialize_url_encodes_values() {
        let mut params = RequestParams::new();
        params.set("comment", "bmljZQ==").set("str", "a b&c");
        let body = params.serialize().unwrap();
        assert!(body.ends_with("&comment=bmljZQ%3D%3D&str=a+b%26c"), "{body}");
    }

    #[test]
    fn test_serialize_reflects_later_mutation() {
        let mut params = RequestParams::new();
        let before = params.serialize().unwrap();
        params.set("page", 2);
        let after = params.serialize().unwrap();
        assert_ne!(before, after);
        assert!(after.ends_with("&page=2"));
    }

    #[test]
    fn test_param_value_conversions() {
        assert_eq!(ParamValue::from(true), ParamValue::Int(1));
        assert_eq!(ParamValue::from(16u64), ParamValue::Int(16));
        assert_eq!(
            ParamValue::from(u64::MAX),
            ParamValue::Text(u64::MAX.to_string())
        );
        assert_eq!(ParamValue::from("S1").to_string(), "S1");
    }
}
