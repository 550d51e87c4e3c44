//! URL parsing, building, normalization, and resolution.
//!
//! This crate handles URLs as structured data: a [`Url`] holds the scheme,
//! the decomposed authority, the decoded path, the query as an ordered
//! mapping, and the fragment.
//!
//! Note that this crate has no knowledge about protocols beyond the default
//! ports of well-known schemes ([`Services`]). It never performs network
//! access or name resolution.
//!
//! # Query strings
//!
//! Query strings use PHP-style bracketed keys for nested data, as many web
//! frameworks do.
//!
//! ```
//! use net_url::{build_query, parse_query, QueryValue};
//!
//! let query = parse_query("user[name]=alice&tags[]=a&tags[]=b", None);
//! let tags = query.get("tags").and_then(QueryValue::as_sequence).unwrap();
//! assert_eq!(tags.len(), 2);
//!
//! assert_eq!(
//!     build_query(&query, None, None),
//!     "user%5Bname%5D=alice&tags%5B%5D=a&tags%5B%5D=b"
//! );
//! ```
//!
//! # Resolution
//!
//! ```
//! use net_url::parse;
//!
//! let base = parse("http://a/b/c/d;p?q");
//! assert_eq!(base.resolve_str("g").build(), "http://a/b/c/g");
//! assert_eq!(base.resolve_str("../g").build(), "http://a/b/g");
//! ```
//!
//! # Configuration
//!
//! Encoding and query options ([`Options`]) and scheme default ports
//! ([`Services`]) form a [`Config`]. Every operation has a `*_with` variant
//! taking the configuration explicitly; the other variants read the
//! process-wide configuration (see [`Config::global`]) at the moment they are
//! called.
//!
//! # Errors
//!
//! Parsing is permissive and never fails. Missing or malformed components
//! are left empty, malformed percent escapes are kept literally, and an
//! invalid port is dropped. [`Error`] is only returned for invalid
//! configuration input.
//!
//! # Features
//!
//! * `serde`: `Serialize` and `Deserialize` implementations for URLs,
//!   queries, and configuration.
//! * `memchr`: faster byte searches while parsing.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod authority;
pub mod config;
pub mod error;
pub mod host;
pub mod options;
pub(crate) mod parser;
pub mod path;
pub mod percent_encoding;
pub mod query;
pub mod services;
pub mod url;

pub use crate::config::Config;
pub use crate::error::{Error, ErrorKind};
pub use crate::options::{LegalChars, Options};
pub use crate::path::remove_dot_segments;
pub use crate::query::{IntoQuery, Query, QueryValue};
pub use crate::services::Services;
pub use crate::url::Url;

/// Builds a query string with the global options.
///
/// `separator` defaults to the configured separator. When `parent_key` is
/// given, every top-level key is written as `parent_key[key]`.
///
/// See [`query::build_with`].
#[must_use]
pub fn build_query(query: &Query, separator: Option<&str>, parent_key: Option<&str>) -> String {
    query::build_with(query, separator, parent_key, &Config::global().options)
}

/// Parses a query string with the global options.
///
/// `separator` defaults to the configured separator.
///
/// See [`query::parse_with`].
#[must_use]
pub fn parse_query(s: &str, separator: Option<&str>) -> Query {
    query::parse_with(s, separator, &Config::global().options)
}

/// Parses a URL with the global configuration.
///
/// See [`Url::parse_with`].
#[must_use]
pub fn parse(s: &str) -> Url {
    Url::parse(s)
}
