//! Options for encoding and decoding URL components.

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default query pair separator.
pub const DEFAULT_SEPARATOR: &str = "&";

/// Characters left unescaped in paths by default.
const DEFAULT_LEGAL_IN_PATH: &str = ":-_.!~*'()@&=$,;";

/// Characters left unescaped in query keys and values by default.
const DEFAULT_LEGAL_IN_QUERY: &str = ":-_.,!~*';()@$/?";

/// Characters always left unescaped in query keys and values.
const ALWAYS_LEGAL_IN_QUERY: &str = "-_.";

/// A set of characters exempt from percent-encoding.
///
/// ASCII alphanumerics are always exempt and need not be listed.
#[derive(Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LegalChars(BTreeSet<char>);

impl LegalChars {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the character is in the set.
    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Adds a character, and returns whether it was newly inserted.
    #[inline]
    pub fn insert(&mut self, c: char) -> bool {
        self.0.insert(c)
    }

    /// Removes a character, and returns whether it was present.
    #[inline]
    pub fn remove(&mut self, c: char) -> bool {
        self.0.remove(&c)
    }

    /// Returns an iterator of the characters in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// Returns the number of characters.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the union of `self` and the given characters.
    #[must_use]
    pub(crate) fn union_with(&self, extra: &str) -> Self {
        let mut set = self.clone();
        set.extend(extra.chars());
        set
    }
}

impl fmt::Debug for LegalChars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.iter().collect();
        f.debug_tuple("LegalChars").field(&s).finish()
    }
}

impl From<&str> for LegalChars {
    #[inline]
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl FromIterator<char> for LegalChars {
    #[inline]
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<char> for LegalChars {
    #[inline]
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// Options controlling query-string and path encoding.
///
/// # Examples
///
/// ```
/// use net_url::Options;
///
/// let options = Options::default()
///     .with_separator(";")?
///     .with_cumulative_parameters(true);
/// assert_eq!(options.separator(), ";");
/// assert!(options.cumulative_parameters());
/// assert!(options.query_plus_is_space());
/// # Ok::<_, net_url::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Query pair delimiter.
    separator: String,
    /// Whether repeated plain query keys accumulate into a sequence.
    cumulative_parameters: bool,
    /// Characters left unescaped in paths.
    legal_in_path: LegalChars,
    /// Characters left unescaped in query keys and values, in addition to `-_.`.
    legal_in_query: LegalChars,
    /// Whether a literal `+` in a query decodes to a space.
    query_plus_is_space: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_owned(),
            cumulative_parameters: false,
            legal_in_path: LegalChars::from(DEFAULT_LEGAL_IN_PATH),
            legal_in_query: LegalChars::from(DEFAULT_LEGAL_IN_QUERY),
            query_plus_is_space: true,
        }
    }
}

impl Options {
    /// Returns the query pair separator.
    #[inline]
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Sets the query pair separator.
    ///
    /// # Failures
    ///
    /// Fails if the separator is empty.
    pub fn set_separator(&mut self, separator: &str) -> Result<(), Error> {
        if separator.is_empty() {
            return Err(Error::empty_separator());
        }
        self.separator = separator.to_owned();
        Ok(())
    }

    /// Returns the options with the given query pair separator.
    ///
    /// # Failures
    ///
    /// Fails if the separator is empty.
    pub fn with_separator(mut self, separator: &str) -> Result<Self, Error> {
        self.set_separator(separator)?;
        Ok(self)
    }

    /// Returns whether repeated plain query keys accumulate into a sequence.
    #[inline]
    #[must_use]
    pub fn cumulative_parameters(&self) -> bool {
        self.cumulative_parameters
    }

    /// Sets whether repeated plain query keys accumulate into a sequence.
    #[inline]
    pub fn set_cumulative_parameters(&mut self, cumulative: bool) {
        self.cumulative_parameters = cumulative;
    }

    /// Returns the options with the given cumulative parameters mode.
    #[inline]
    #[must_use]
    pub fn with_cumulative_parameters(mut self, cumulative: bool) -> Self {
        self.cumulative_parameters = cumulative;
        self
    }

    /// Returns the characters left unescaped in paths.
    #[inline]
    #[must_use]
    pub fn legal_in_path(&self) -> &LegalChars {
        &self.legal_in_path
    }

    /// Returns a mutable reference to the characters left unescaped in paths.
    #[inline]
    pub fn legal_in_path_mut(&mut self) -> &mut LegalChars {
        &mut self.legal_in_path
    }

    /// Returns the extra characters left unescaped in query keys and values.
    #[inline]
    #[must_use]
    pub fn legal_in_query(&self) -> &LegalChars {
        &self.legal_in_query
    }

    /// Returns a mutable reference to the extra characters left unescaped in
    /// query keys and values.
    #[inline]
    pub fn legal_in_query_mut(&mut self) -> &mut LegalChars {
        &mut self.legal_in_query
    }

    /// Returns whether a literal `+` in a query decodes to a space.
    #[inline]
    #[must_use]
    pub fn query_plus_is_space(&self) -> bool {
        self.query_plus_is_space
    }

    /// Sets whether a literal `+` in a query decodes to a space.
    #[inline]
    pub fn set_query_plus_is_space(&mut self, plus_is_space: bool) {
        self.query_plus_is_space = plus_is_space;
    }

    /// Returns the options with the given `+` decoding mode.
    #[inline]
    #[must_use]
    pub fn with_query_plus_is_space(mut self, plus_is_space: bool) -> Self {
        self.query_plus_is_space = plus_is_space;
        self
    }

    /// Returns the full set of characters left unescaped in query keys and
    /// values joined with `separator`.
    ///
    /// Characters which would change the structure of the query when left
    /// literal are always escaped.
    #[must_use]
    pub(crate) fn query_encode_set(&self, separator: &str) -> LegalChars {
        let mut set = self.legal_in_query.union_with(ALWAYS_LEGAL_IN_QUERY);
        for c in separator.chars().chain(['=', '%', '#']) {
            set.remove(c);
        }
        if self.query_plus_is_space {
            set.remove('+');
        }
        set
    }

    /// Returns the full set of characters left unescaped in paths, including `/`.
    #[must_use]
    pub(crate) fn path_encode_set(&self) -> LegalChars {
        let mut set = self.legal_in_path.union_with("/");
        for c in ['%', '?', '#'] {
            set.remove(c);
        }
        set
    }

    /// Returns the full set of characters left unescaped in fragments.
    #[must_use]
    pub(crate) fn fragment_encode_set(&self) -> LegalChars {
        let mut set = self
            .legal_in_query
            .union_with(ALWAYS_LEGAL_IN_QUERY)
            .union_with("/?");
        for c in ['%', '#'] {
            set.remove(c);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ErrorKind;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert_eq!(options.separator(), "&");
        assert!(!options.cumulative_parameters());
        assert!(options.query_plus_is_space());
        assert!(options.legal_in_path().contains(';'));
        assert!(!options.legal_in_path().contains('/'));
        assert!(options.legal_in_query().contains('/'));
        assert!(!options.legal_in_query().contains('&'));
        assert!(!options.legal_in_query().contains('+'));
    }

    #[test]
    fn empty_separator_is_rejected() {
        let err = Options::default()
            .with_separator("")
            .expect_err("empty separator must be rejected");
        assert_eq!(err.kind(), ErrorKind::EmptySeparator);
    }

    #[test]
    fn query_set_always_has_unreserved_marks() {
        let mut options = Options::default();
        *options.legal_in_query_mut() = LegalChars::new();
        let set = options.query_encode_set("&");
        assert!(set.contains('-') && set.contains('_') && set.contains('.'));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn query_set_excludes_structural_chars() {
        let mut options = Options::default();
        options.legal_in_query_mut().extend(['+', '=', '&']);
        let set = options.query_encode_set(";");
        assert!(!set.contains(';'));
        assert!(!set.contains('='));
        assert!(!set.contains('+'));
        assert!(set.contains('&'));

        options.set_query_plus_is_space(false);
        assert!(options.query_encode_set(";").contains('+'));
    }

    #[test]
    fn legal_chars_debug() {
        let set = LegalChars::from("b-a");
        assert_eq!(format!("{set:?}"), "LegalChars(\"-ab\")");
    }
}
