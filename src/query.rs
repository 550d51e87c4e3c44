//! Query strings with PHP-style bracketed keys.
//!
//! A query is an ordered mapping from names to [`QueryValue`]s. Bracket
//! suffixes in names express nesting:
//!
//! ```text
//! a=1            {a: "1"}
//! a[]=1&a[]=2    {a: ["1", "2"]}
//! a[b][c]=1      {a: {b: {c: "1"}}}
//! a[b][]=1       {a: {b: ["1"]}}
//! ```
//!
//! Top-level names keep the order of their first occurrence, so a query
//! produced by [`parse_with`] is built back by [`build_with`] in the same
//! order.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::options::{LegalChars, Options};
use crate::percent_encoding::{decode_query_component, encode};

/// A value in a query mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum QueryValue {
    /// A single string, from `name=value`.
    Scalar(String),
    /// A sequence, from `name[]=value` or repeated names in cumulative mode.
    Sequence(Vec<QueryValue>),
    /// A nested mapping, from `name[key]=value`.
    Nested(Query),
}

impl QueryValue {
    /// Returns the string if the value is a scalar.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the items if the value is a sequence.
    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[QueryValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the mapping if the value is nested.
    #[inline]
    #[must_use]
    pub fn as_nested(&self) -> Option<&Query> {
        match self {
            Self::Nested(query) => Some(query),
            _ => None,
        }
    }

    /// Returns an empty container suitable for the given bracket subkey.
    fn container_for(subkey: &str) -> Self {
        if subkey.is_empty() {
            Self::Sequence(Vec::new())
        } else {
            Self::Nested(Query::new())
        }
    }

    /// Merges a repeated plain value into `self`, in cumulative mode.
    fn accumulate(&mut self, value: String) {
        match self {
            Self::Scalar(prev) => {
                let prev = std::mem::take(prev);
                *self = Self::Sequence(vec![Self::Scalar(prev), Self::Scalar(value)]);
            }
            Self::Sequence(items) => items.push(Self::Scalar(value)),
            Self::Nested(_) => *self = Self::Scalar(value),
        }
    }
}

impl From<&str> for QueryValue {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Scalar(s.to_owned())
    }
}

impl From<String> for QueryValue {
    #[inline]
    fn from(s: String) -> Self {
        Self::Scalar(s)
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<Query> for QueryValue {
    #[inline]
    fn from(query: Query) -> Self {
        Self::Nested(query)
    }
}

/// An ordered query mapping.
///
/// Equality does not depend on the order of keys.
///
/// # Examples
///
/// ```
/// use net_url::{Query, QueryValue};
///
/// let mut query = Query::new();
/// query.insert("q", "rust url");
/// query.insert("tags", vec!["a", "b"]);
///
/// assert_eq!(query.get("q").and_then(QueryValue::as_str), Some("rust url"));
/// assert_eq!(query.keys().collect::<Vec<_>>(), ["q", "tags"]);
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Query(IndexMap<String, QueryValue>);

impl Query {
    /// Creates an empty query.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Returns the value of the key.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    /// Returns the mutable value of the key.
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut QueryValue> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the key is present.
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Inserts a value, and returns the previous value of the key.
    ///
    /// A key already present keeps its position.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<QueryValue>
    where
        K: Into<String>,
        V: Into<QueryValue>,
    {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a key, preserving the order of the remaining keys.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        self.0.shift_remove(key)
    }

    /// Returns an iterator of the pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, QueryValue> {
        self.0.iter()
    }

    /// Returns an iterator of the keys in insertion order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of top-level keys.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the query has no keys.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Query {
    type Item = (&'a String, &'a QueryValue);
    type IntoIter = indexmap::map::Iter<'a, String, QueryValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Query {
    type Item = (String, QueryValue);
    type IntoIter = indexmap::map::IntoIter<String, QueryValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Query {
    /// Builds the query string with the global options.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = Config::global();
        f.write_str(&build_with(self, None, None, &config.options))
    }
}

impl FromStr for Query {
    type Err = Infallible;

    /// Parses the query string with the global options.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config = Config::global();
        Ok(parse_with(s, None, &config.options))
    }
}

/// Values which can replace the query of a URL.
///
/// Strings are parsed as query strings, and mappings are used as is.
pub trait IntoQuery {
    /// Converts the value into a query mapping.
    fn into_query(self, options: &Options) -> Query;
}

impl IntoQuery for &str {
    #[inline]
    fn into_query(self, options: &Options) -> Query {
        parse_with(self, None, options)
    }
}

impl IntoQuery for &String {
    #[inline]
    fn into_query(self, options: &Options) -> Query {
        parse_with(self, None, options)
    }
}

impl IntoQuery for String {
    #[inline]
    fn into_query(self, options: &Options) -> Query {
        parse_with(&self, None, options)
    }
}

impl IntoQuery for Query {
    #[inline]
    fn into_query(self, _options: &Options) -> Query {
        self
    }
}

/// Splits a decoded query name into the base name and its bracket subkeys.
///
/// `a[b][]` is split into `("a", ["b", ""])`. A name without any complete
/// bracket pair is returned as is. Text following the last complete bracket
/// pair is ignored.
fn split_bracket_key(key: &str) -> (&str, Vec<&str>) {
    let open = match key.find('[') {
        Some(pos) => pos,
        None => return (key, Vec::new()),
    };
    let mut subkeys = Vec::new();
    let mut rest = &key[open..];
    while let Some(inner) = rest.strip_prefix('[') {
        match inner.find(']') {
            Some(close) => {
                subkeys.push(&inner[..close]);
                rest = &inner[(close + 1)..];
            }
            None => break,
        }
    }
    if subkeys.is_empty() {
        return (key, Vec::new());
    }
    if !rest.is_empty() {
        tracing::trace!(key, ignored = rest, "trailing text after bracket key ignored");
    }
    (&key[..open], subkeys)
}

/// Stores a value at the path of bracket subkeys below `slot`.
///
/// A slot of the wrong shape for the next subkey is replaced.
fn insert_nested(slot: &mut QueryValue, subkeys: &[&str], value: String) {
    let (first, rest) = match subkeys.split_first() {
        Some(v) => v,
        None => {
            *slot = QueryValue::Scalar(value);
            return;
        }
    };
    if first.is_empty() {
        if !matches!(slot, QueryValue::Sequence(_)) {
            *slot = QueryValue::Sequence(Vec::new());
        }
        if let QueryValue::Sequence(items) = slot {
            match rest.first() {
                None => items.push(QueryValue::Scalar(value)),
                Some(next) => {
                    let mut child = QueryValue::container_for(next);
                    insert_nested(&mut child, rest, value);
                    items.push(child);
                }
            }
        }
    } else {
        if !matches!(slot, QueryValue::Nested(_)) {
            *slot = QueryValue::Nested(Query::new());
        }
        if let QueryValue::Nested(map) = slot {
            match rest.first() {
                None => {
                    map.0.insert((*first).to_owned(), QueryValue::Scalar(value));
                }
                Some(next) => {
                    let child = map
                        .0
                        .entry((*first).to_owned())
                        .or_insert_with(|| QueryValue::container_for(next));
                    insert_nested(child, rest, value);
                }
            }
        }
    }
}

/// Parses a query string into a mapping.
///
/// `separator` defaults to [`Options::separator`]. A pair without `=` gets an
/// empty value, and empty pairs are skipped.
///
/// Whitespace in a top-level name becomes `_`, and so does `[` when the name
/// has no complete bracket pair (`a[b=1` gives `{a_b: "1"}`).
///
/// # Examples
///
/// ```
/// use net_url::query::parse_with;
/// use net_url::{Options, Query, QueryValue};
///
/// let options = Options::default();
/// let query = parse_with("a[b][]=1&a[b][]=2&flag", None, &options);
///
/// let b = query
///     .get("a")
///     .and_then(QueryValue::as_nested)
///     .and_then(|a| a.get("b"))
///     .and_then(QueryValue::as_sequence)
///     .expect("`a[b]` is a sequence");
/// assert_eq!(b, [QueryValue::from("1"), QueryValue::from("2")]);
/// assert_eq!(query.get("flag"), Some(&QueryValue::from("")));
/// ```
#[must_use]
pub fn parse_with(s: &str, separator: Option<&str>, options: &Options) -> Query {
    let separator = separator.unwrap_or_else(|| options.separator());
    let plus_is_space = options.query_plus_is_space();
    let cumulative = options.cumulative_parameters();

    let mut query = Query::new();
    let pairs: Vec<&str> = if separator.is_empty() {
        tracing::debug!("empty query separator; the query is parsed as a single pair");
        vec![s]
    } else {
        s.split(separator).collect()
    };
    for pair in pairs.into_iter().filter(|pair| !pair.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_query_component(raw_key, plus_is_space);
        let value = decode_query_component(raw_value, plus_is_space).into_owned();

        let (name, subkeys) = split_bracket_key(&key);
        if name.is_empty() {
            tracing::trace!(pair, "query pair without a name skipped");
            continue;
        }
        // An unmatched `[` in a plain name would read as a bracket key once
        // the name is built back, so it is replaced like whitespace.
        let plain = subkeys.is_empty();
        let name: String = name
            .chars()
            .map(|c| match c {
                '[' if plain => '_',
                c if c.is_ascii_whitespace() || c == '\x0B' => '_',
                c => c,
            })
            .collect();

        if subkeys.is_empty() {
            match query.0.get_mut(&name) {
                Some(existing) if cumulative => existing.accumulate(value),
                _ => {
                    query.0.insert(name, QueryValue::Scalar(value));
                }
            }
        } else {
            let slot = query
                .0
                .entry(name)
                .or_insert_with(|| QueryValue::container_for(subkeys[0]));
            insert_nested(slot, &subkeys, value);
        }
    }
    query
}

/// Appends the encoded `name=value` pairs for the value to `out`.
fn collect_pairs(name: &str, value: &QueryValue, legal: &LegalChars, out: &mut Vec<String>) {
    match value {
        QueryValue::Scalar(v) if v.is_empty() => out.push(encode(name, legal).into_owned()),
        QueryValue::Scalar(v) => out.push(format!("{}={}", encode(name, legal), encode(v, legal))),
        QueryValue::Sequence(items) => {
            let child = format!("{name}[]");
            for item in items {
                collect_pairs(&child, item, legal, out);
            }
        }
        QueryValue::Nested(map) => {
            for (key, item) in map {
                collect_pairs(&format!("{name}[{key}]"), item, legal, out);
            }
        }
    }
}

/// Builds a query string from a mapping.
///
/// `separator` defaults to [`Options::separator`]. When `parent_key` is
/// given, every top-level key is written as `parent_key[key]`.
///
/// A scalar with an empty value is written as the bare name. An empty
/// sequence or an empty nested mapping produces no pair at all, so its key
/// is absent when the result is parsed again.
///
/// # Examples
///
/// ```
/// use net_url::query::build_with;
/// use net_url::{Options, Query};
///
/// let inner: Query = [("b", vec!["1", "2"])].into_iter().collect();
/// let query: Query = [("a", inner)].into_iter().collect();
///
/// assert_eq!(
///     build_with(&query, None, None, &Options::default()),
///     "a%5Bb%5D%5B%5D=1&a%5Bb%5D%5B%5D=2"
/// );
/// ```
#[must_use]
pub fn build_with(
    query: &Query,
    separator: Option<&str>,
    parent_key: Option<&str>,
    options: &Options,
) -> String {
    let separator = separator.unwrap_or_else(|| options.separator());
    let legal = options.query_encode_set(separator);

    let mut pairs = Vec::with_capacity(query.len());
    for (key, value) in query {
        match parent_key {
            Some(parent) => collect_pairs(&format!("{parent}[{key}]"), value, &legal, &mut pairs),
            None => collect_pairs(key, value, &legal, &mut pairs),
        }
    }
    pairs.join(separator)
}
