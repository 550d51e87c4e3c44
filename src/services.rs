//! Default ports of well-known schemes.
//!
//! See <https://www.iana.org/assignments/uri-schemes/uri-schemes.xhtml>.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::parser::char::is_scheme;

/// Known schemes and their default ports.
const KNOWN_SERVICES: &[(&str, u16)] = &[
    ("acap", 674),
    ("afs", 1483),
    ("cap", 1026),
    ("dict", 2628),
    ("ftp", 21),
    ("gopher", 70),
    ("http", 80),
    ("https", 443),
    ("iax", 4569),
    ("icap", 1344),
    ("imap", 143),
    ("ipp", 631),
    ("jms", 5673),
    ("ldap", 389),
    ("mtqp", 1038),
    ("mupdate", 3905),
    ("news", 2009),
    ("nfs", 2049),
    ("nntp", 119),
    ("prospero", 191),
    ("rsync", 873),
    ("rtsp", 554),
    ("sip", 5060),
    ("snmp", 161),
    ("telnet", 23),
    ("tftp", 69),
    ("vemmi", 575),
    ("videotex", 516),
    ("ws", 80),
    ("wss", 443),
];

/// Mapping from scheme names to default port numbers.
///
/// Scheme names are stored lowercased, and lookups are case-insensitive.
///
/// # Examples
///
/// ```
/// use net_url::Services;
///
/// let mut services = Services::default();
/// assert_eq!(services.default_port("HTTP"), Some(80));
/// assert_eq!(services.default_port("gemini"), None);
///
/// services.insert("gemini", 1965)?;
/// assert_eq!(services.default_port("gemini"), Some(1965));
/// # Ok::<_, net_url::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Services(BTreeMap<String, u16>);

impl Default for Services {
    fn default() -> Self {
        Self(
            KNOWN_SERVICES
                .iter()
                .map(|&(scheme, port)| (scheme.to_owned(), port))
                .collect(),
        )
    }
}

impl Services {
    /// Creates an empty mapping.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the default port of the scheme.
    #[must_use]
    pub fn default_port(&self, scheme: &str) -> Option<u16> {
        if scheme.bytes().any(|b| b.is_ascii_uppercase()) {
            self.0.get(&scheme.to_ascii_lowercase()).copied()
        } else {
            self.0.get(scheme).copied()
        }
    }

    /// Registers a default port, and returns the previous one if any.
    ///
    /// # Failures
    ///
    /// Fails if `scheme` is not a valid scheme name.
    pub fn insert(&mut self, scheme: &str, port: u16) -> Result<Option<u16>, Error> {
        if !is_scheme(scheme) {
            return Err(Error::invalid_scheme(scheme));
        }
        Ok(self.0.insert(scheme.to_ascii_lowercase(), port))
    }

    /// Unregisters a scheme, and returns its default port if it was known.
    pub fn remove(&mut self, scheme: &str) -> Option<u16> {
        self.0.remove(&scheme.to_ascii_lowercase())
    }

    /// Returns an iterator of `(scheme, port)` pairs ordered by scheme name.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> + '_ {
        self.0.iter().map(|(scheme, port)| (scheme.as_str(), *port))
    }

    /// Returns the number of known schemes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no scheme is known.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
