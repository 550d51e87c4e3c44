//! Helpers for characters.

/// Checks if the given byte can start a `scheme`.
#[inline]
#[must_use]
pub(crate) fn is_ascii_scheme_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Checks if the given byte can continue a `scheme`.
#[inline]
#[must_use]
pub(crate) fn is_ascii_scheme_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Checks if the whole string matches `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
#[must_use]
pub(crate) fn is_scheme(s: &str) -> bool {
    match s.as_bytes().split_first() {
        Some((first, rest)) => {
            is_ascii_scheme_start(*first) && rest.iter().copied().all(is_ascii_scheme_continue)
        }
        None => false,
    }
}

/// Checks if the given byte is a character allowed in a reg-name which is
/// also a DNS-style hostname (letters, digits, hyphens, and dots).
#[inline]
#[must_use]
pub(crate) fn is_ascii_hostname(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.')
}
