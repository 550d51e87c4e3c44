//! Functions for common string operations.
//!
//! Needles are always ASCII bytes, so every split position lies on a `char`
//! boundary.

/// Returns the position of the first occurrence of the byte.
#[inline]
#[must_use]
pub(crate) fn find(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().position(|&b| b == needle)
    }
}

/// Returns the position of the last occurrence of the byte.
#[inline]
#[must_use]
pub(crate) fn rfind(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memrchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().rposition(|&b| b == needle)
    }
}

/// Returns the position of the first occurrence of any of the three bytes.
#[inline]
#[must_use]
pub(crate) fn find3(haystack: &[u8], needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr3(needle1, needle2, needle3, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack
            .iter()
            .position(|&b| b == needle1 || b == needle2 || b == needle3)
    }
}

/// Splits the string at the first occurrence of the byte, dropping the byte.
#[inline]
#[must_use]
pub(crate) fn find_split_hole(s: &str, needle: u8) -> Option<(&str, &str)> {
    find(s.as_bytes(), needle).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string at the last occurrence of the byte, dropping the byte.
#[inline]
#[must_use]
pub(crate) fn rfind_split_hole(s: &str, needle: u8) -> Option<(&str, &str)> {
    rfind(s.as_bytes(), needle).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string at the first occurrence of any of the three bytes.
///
/// The byte found is kept at the head of the second string.
#[inline]
#[must_use]
pub(crate) fn find_split3(s: &str, needle1: u8, needle2: u8, needle3: u8) -> Option<(&str, &str)> {
    find3(s.as_bytes(), needle1, needle2, needle3).map(|pos| s.split_at(pos))
}
