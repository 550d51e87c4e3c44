//! Percent encoding and decoding.
//!
//! Encoding keeps ASCII alphanumerics and the characters of a caller-supplied
//! [`LegalChars`] set, and escapes everything else per UTF-8 octet with
//! uppercase hex digits. A space is always escaped.
//!
//! Decoding never fails: `%` not followed by two hex digits is kept as is.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use crate::options::LegalChars;

/// A proxy to percent-encode a string.
///
/// # Examples
///
/// ```
/// use net_url::percent_encoding::PercentEncoded;
/// use net_url::LegalChars;
///
/// let legal = LegalChars::from("/");
/// let encoded = PercentEncoded::new("alpha/\u{03B1} beta?", &legal);
/// assert_eq!(encoded.to_string(), "alpha/%CE%B1%20beta%3F");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PercentEncoded<'a, T> {
    /// Raw string before being encoded.
    raw: T,
    /// Characters to be left unescaped.
    legal: &'a LegalChars,
}

impl<'a, T: fmt::Display> PercentEncoded<'a, T> {
    /// Creates a proxy which encodes `raw` leaving `legal` characters as is.
    #[inline]
    #[must_use]
    pub fn new(raw: T, legal: &'a LegalChars) -> Self {
        Self { raw, legal }
    }
}

impl<T: fmt::Display> fmt::Display for PercentEncoded<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        /// Filter that encodes a character before written if necessary.
        struct Filter<'a, 'b> {
            /// Characters to be left unescaped.
            legal: &'a LegalChars,
            /// Writer.
            writer: &'a mut fmt::Formatter<'b>,
        }
        impl fmt::Write for Filter<'_, '_> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                s.chars().try_for_each(|c| self.write_char(c))
            }
            fn write_char(&mut self, c: char) -> fmt::Result {
                if is_kept(c, self.legal) {
                    self.writer.write_char(c)
                } else {
                    write_pct_encoded_char(&mut self.writer, c)
                }
            }
        }
        let mut filter = Filter {
            legal: self.legal,
            writer: f,
        };
        write!(filter, "{}", self.raw)
    }
}

/// Returns `true` if the character is written without escaping.
#[inline]
fn is_kept(c: char, legal: &LegalChars) -> bool {
    c.is_ascii_alphanumeric() || (c != ' ' && legal.contains(c))
}

/// Percent-encodes the given character and writes it.
#[inline]
fn write_pct_encoded_char<W: fmt::Write>(writer: &mut W, c: char) -> fmt::Result {
    let mut buf = [0_u8; 4];
    let buf = c.encode_utf8(&mut buf);
    buf.bytes().try_for_each(|b| write!(writer, "%{:02X}", b))
}

/// Percent-encodes the string, leaving alphanumerics and `legal` characters as is.
///
/// # Examples
///
/// ```
/// use net_url::percent_encoding::encode;
/// use net_url::LegalChars;
///
/// assert_eq!(encode("a b&c", &LegalChars::new()), "a%20b%26c");
/// assert_eq!(encode("a b&c", &LegalChars::from("&")), "a%20b&c");
/// ```
#[must_use]
pub fn encode<'a>(s: &'a str, legal: &LegalChars) -> Cow<'a, str> {
    if s.chars().all(|c| is_kept(c, legal)) {
        return Cow::Borrowed(s);
    }
    let mut buf = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        if is_kept(c, legal) {
            buf.push(c);
        } else {
            // Writing into a `String` never fails.
            let _ = write_pct_encoded_char(&mut buf, c);
        }
    }
    Cow::Owned(buf)
}

/// Returns the value of an ASCII hex digit.
#[inline]
fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decodes `%XX` escapes into raw bytes.
///
/// Malformed escapes are passed through literally.
///
/// # Examples
///
/// ```
/// use net_url::percent_encoding::decode_bytes;
///
/// assert_eq!(decode_bytes("%41%zz%4"), b"A%zz%4".as_slice());
/// assert_eq!(decode_bytes("%FF"), [0xFF].as_slice());
/// ```
#[must_use]
pub fn decode_bytes(s: &str) -> Cow<'_, [u8]> {
    let bytes = s.as_bytes();
    if !bytes.contains(&b'%') {
        return Cow::Borrowed(bytes);
    }
    let mut buf = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = bytes.get(i + 1).copied().and_then(hex_value);
            let lo = bytes.get(i + 2).copied().and_then(hex_value);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                buf.push((hi << 4) | lo);
                i += 3;
                continue;
            }
            tracing::trace!(position = i, "malformed percent escape kept literally");
        }
        buf.push(bytes[i]);
        i += 1;
    }
    Cow::Owned(buf)
}

/// Decodes `%XX` escapes into a string.
///
/// Malformed escapes are passed through literally. Decoded octets which do not
/// form valid UTF-8 are replaced with U+FFFD.
///
/// # Examples
///
/// ```
/// use net_url::percent_encoding::decode;
///
/// assert_eq!(decode("%CE%B1%20beta"), "\u{03B1} beta");
/// assert_eq!(decode("100%"), "100%");
/// assert_eq!(decode("a+b"), "a+b");
/// ```
#[must_use]
pub fn decode(s: &str) -> Cow<'_, str> {
    match decode_bytes(s) {
        Cow::Borrowed(_) => Cow::Borrowed(s),
        Cow::Owned(bytes) => match String::from_utf8(bytes) {
            Ok(decoded) => Cow::Owned(decoded),
            Err(e) => {
                tracing::trace!("percent-decoded octets are not valid UTF-8");
                Cow::Owned(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        },
    }
}

/// Decodes a query key or value.
///
/// When `plus_is_space` is true, a literal `+` becomes a space. An escaped
/// `%2B` always decodes to `+`.
///
/// # Examples
///
/// ```
/// use net_url::percent_encoding::decode_query_component;
///
/// assert_eq!(decode_query_component("a+b%2B", true), "a b+");
/// assert_eq!(decode_query_component("a+b%2B", false), "a+b+");
/// ```
#[must_use]
pub fn decode_query_component(s: &str, plus_is_space: bool) -> Cow<'_, str> {
    if plus_is_space && s.contains('+') {
        let replaced = s.replace('+', " ");
        return Cow::Owned(decode(&replaced).into_owned());
    }
    decode(s)
}
