//! Configuration error.

use core::fmt;

/// Error on building a configuration value.
///
/// URL parsing, building, resolution, and normalization never fail; this
/// error is only reported for invalid configuration input such as an empty
/// query separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// Inner error representation.
    repr: ErrorRepr,
}

impl Error {
    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match &self.repr {
            ErrorRepr::EmptySeparator => ErrorKind::EmptySeparator,
            ErrorRepr::InvalidScheme(_) => ErrorKind::InvalidScheme,
        }
    }

    /// Creates an error for an empty query separator.
    #[inline]
    #[must_use]
    pub(crate) fn empty_separator() -> Self {
        Self {
            repr: ErrorRepr::EmptySeparator,
        }
    }

    /// Creates an error for a string which is not a valid scheme name.
    #[inline]
    #[must_use]
    pub(crate) fn invalid_scheme(scheme: &str) -> Self {
        Self {
            repr: ErrorRepr::InvalidScheme(scheme.to_owned()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            ErrorRepr::EmptySeparator => f.write_str("query separator must not be empty"),
            ErrorRepr::InvalidScheme(scheme) => {
                write!(f, "invalid scheme name: {scheme:?}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The query separator was empty.
    EmptySeparator,
    /// The string does not match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    InvalidScheme,
}

/// Internal representation of `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ErrorRepr {
    /// Empty query separator.
    EmptySeparator,
    /// Invalid scheme name.
    InvalidScheme(String),
}
