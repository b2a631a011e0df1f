use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use percent_encoding::percent_decode;

use crate::constants::*;

/// Percent encode input with the OAuth 1.0 rules.
///
/// Everything outside `A-Za-z0-9-._~` is encoded as `%XX` with upper case hex.
/// A space becomes `%20`, never `+`.
pub fn percent_encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Percent encode raw bytes, which need not be valid UTF-8.
pub(crate) fn encode_bytes(input: &[u8]) -> String {
    percent_encoding::percent_encode(input, &OAUTH_ENCODE_SET).to_string()
}

/// Decode one form-urlencoded component into its raw bytes.
fn decode_component(input: &[u8]) -> Vec<u8> {
    let replaced: Vec<u8> = input
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&replaced).collect()
}

/// Value of a single request parameter.
///
/// Values hold raw bytes: a query string may carry percent encoded bytes
/// that are not UTF-8, and those must be signed exactly as sent.
#[derive(Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A parameter that appears once.
    Single(Vec<u8>),
    /// A repeated parameter, emitted once per element.
    Multi(Vec<Vec<u8>>),
}

impl ParamValue {
    /// A single value made of raw bytes.
    pub fn from_bytes(value: impl Into<Vec<u8>>) -> Self {
        ParamValue::Single(value.into())
    }

    /// Append another occurrence, turning a single value into a list.
    fn push(&mut self, value: Vec<u8>) {
        match self {
            ParamValue::Single(v) => {
                let first = std::mem::take(v);
                *self = ParamValue::Multi(vec![first, value]);
            }
            ParamValue::Multi(vs) => vs.push(value),
        }
    }

    /// Returns the raw bytes if it is a single value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ParamValue::Single(v) => Some(v),
            ParamValue::Multi(_) => None,
        }
    }

    /// Returns the value if it is a single value and valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|v| std::str::from_utf8(v).ok())
    }
}

impl Debug for ParamValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Single(v) => Debug::fmt(&String::from_utf8_lossy(v), f),
            ParamValue::Multi(vs) => f
                .debug_list()
                .entries(vs.iter().map(|v| String::from_utf8_lossy(v)))
                .finish(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Single(v.as_bytes().to_vec())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Single(v.into_bytes())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(v: Vec<String>) -> Self {
        ParamValue::Multi(v.into_iter().map(String::into_bytes).collect())
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(v: Vec<&str>) -> Self {
        ParamValue::Multi(v.into_iter().map(|v| v.as_bytes().to_vec()).collect())
    }
}

/// Parameters that take part in an OAuth signature.
///
/// Keys are kept sorted by their raw bytes, which is exactly the order the
/// normalized parameter string needs. Insertion order never matters.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Parameters(BTreeMap<Vec<u8>, ParamValue>);

impl Parameters {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (without the leading `?`).
    ///
    /// Values are form-urlencoded decoded, so `+` reads as a space. Decoded
    /// bytes are kept as they are, even when they are not UTF-8. A key that
    /// shows up more than once becomes a [`ParamValue::Multi`].
    pub fn from_query(query: &str) -> Self {
        let mut params = Parameters::new();
        for pair in query.as_bytes().split(|&b| b == b'&') {
            if pair.is_empty() {
                continue;
            }
            let (k, v) = match pair.iter().position(|&b| b == b'=') {
                Some(idx) => (&pair[..idx], &pair[idx + 1..]),
                None => (pair, &[][..]),
            };

            let v = decode_component(v);
            match params.0.entry(decode_component(k)) {
                btree_map::Entry::Vacant(e) => {
                    e.insert(ParamValue::Single(v));
                }
                btree_map::Entry::Occupied(mut e) => e.get_mut().push(v),
            }
        }
        params
    }

    /// Insert a parameter, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into().into_bytes(), value.into());
    }

    /// Get a parameter by its raw key.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key.as_bytes())
    }

    /// Check whether a parameter is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key.as_bytes())
    }

    /// Merge `other` into `self`. Values from `other` take precedence.
    pub fn merge(&mut self, other: Parameters) {
        self.0.extend(other.0);
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build the normalized parameter string.
    ///
    /// ```shell
    /// {b: "2", a: ["y", "x"]} => "a=x&a=y&b=2"
    /// ```
    ///
    /// Keys are visited in sorted order, list values are sorted before they
    /// are emitted, and every key and value is percent encoded. `oauth_secret`
    /// is always skipped.
    pub fn normalize(&self) -> String {
        let mut s = String::with_capacity(16 * self.0.len());

        let mut push = |k: &[u8], v: &[u8]| {
            if !s.is_empty() {
                s.push('&');
            }
            s.push_str(&encode_bytes(k));
            s.push('=');
            s.push_str(&encode_bytes(v));
        };

        for (k, v) in self
            .0
            .iter()
            .filter(|(k, _)| k.as_slice() != OAUTH_SECRET.as_bytes())
        {
            match v {
                ParamValue::Single(v) => push(k, v),
                ParamValue::Multi(vs) => {
                    let mut vs: Vec<&[u8]> = vs.iter().map(Vec::as_slice).collect();
                    vs.sort_unstable();
                    for v in vs {
                        push(k, v);
                    }
                }
            }
        }

        s
    }
}

impl Debug for Parameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(k, v)| (String::from_utf8_lossy(k), v)))
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Parameters::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}
