//! Authority parser.
//!
//! ```text
//! authority = [ userinfo "@" ] host [ ":" port ]
//! userinfo  = user [ ":" password ]
//! ```
//!
//! Parsing never fails:
//!
//! * The rightmost `@` separates the userinfo from the host, so an unescaped
//!   `@` in a password is tolerated.
//! * The userinfo is split at its first `:`.
//! * The port is the text after the last `:` outside an IPv6 literal
//!   (`[...]`). A port which is not a decimal number fitting in 16 bits is
//!   dropped, and the host keeps the text before the colon.

use std::fmt::Write as _;

use crate::parser::str::{find_split3, find_split_hole, rfind_split_hole};

/// Components of an authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorityComponents<'a> {
    /// User part of the userinfo.
    pub user: Option<&'a str>,
    /// Password part of the userinfo.
    pub password: Option<&'a str>,
    /// Host, including brackets for IPv6 literals.
    pub host: &'a str,
    /// Port.
    pub port: Option<u16>,
}

impl<'a> AuthorityComponents<'a> {
    /// Parses the leading authority of the input.
    ///
    /// The authority ends at the first `/`, `?`, or `#`. Returns the
    /// components and the text following the authority.
    ///
    /// # Examples
    ///
    /// ```
    /// use net_url::authority::AuthorityComponents;
    ///
    /// let (authority, rest) = AuthorityComponents::parse("user:pass@host:8080/path?q");
    /// assert_eq!(authority.user, Some("user"));
    /// assert_eq!(authority.password, Some("pass"));
    /// assert_eq!(authority.host, "host");
    /// assert_eq!(authority.port, Some(8080));
    /// assert_eq!(rest, "/path?q");
    /// ```
    #[must_use]
    pub fn parse(input: &'a str) -> (Self, &'a str) {
        let (authority, rest) = find_split3(input, b'/', b'?', b'#').unwrap_or((input, ""));

        let (userinfo, host_port) = match rfind_split_hole(authority, b'@') {
            Some((userinfo, host_port)) => (Some(userinfo), host_port),
            None => (None, authority),
        };
        let (user, password) = match userinfo {
            Some(userinfo) => match find_split_hole(userinfo, b':') {
                Some((user, password)) => (Some(user), Some(password)),
                None => (Some(userinfo), None),
            },
            None => (None, None),
        };
        let (host, port) = split_host_port(host_port);

        (
            Self {
                user,
                password,
                host,
                port,
            },
            rest,
        )
    }
}

/// Splits `host [ ":" port ]`.
fn split_host_port(host_port: &str) -> (&str, Option<u16>) {
    let (host, port) = if host_port.starts_with('[') {
        match host_port.find(']') {
            Some(close) => {
                let (host, after) = host_port.split_at(close + 1);
                match after.strip_prefix(':') {
                    Some(port) => (host, Some(port)),
                    None => {
                        if !after.is_empty() {
                            tracing::trace!(ignored = after, "text after IPv6 literal ignored");
                        }
                        (host, None)
                    }
                }
            }
            None => (host_port, None),
        }
    } else {
        match rfind_split_hole(host_port, b':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };
    (host, port.and_then(parse_port))
}

/// Parses a decimal port number.
fn parse_port(s: &str) -> Option<u16> {
    if s.is_empty() {
        return None;
    }
    let port = if s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse::<u16>().ok()
    } else {
        None
    };
    if port.is_none() {
        tracing::debug!(port = s, "invalid port dropped");
    }
    port
}

/// Composes an authority string from its components.
///
/// The userinfo is written when a user or a password is present, and the
/// port is written when present.
#[must_use]
pub(crate) fn compose(
    user: Option<&str>,
    password: Option<&str>,
    host: &str,
    port: Option<u16>,
) -> String {
    let mut buf = String::new();
    if user.is_some() || password.is_some() {
        buf.push_str(user.unwrap_or(""));
        if let Some(password) = password {
            buf.push(':');
            buf.push_str(password);
        }
        buf.push('@');
    }
    buf.push_str(host);
    if let Some(port) = port {
        // Writing into a `String` never fails.
        let _ = write!(buf, ":{port}");
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> (AuthorityComponents<'_>, &str) {
        AuthorityComponents::parse(s)
    }

    #[test]
    fn host_only() {
        let (a, rest) = parse("example.com");
        assert_eq!(a.user, None);
        assert_eq!(a.password, None);
        assert_eq!(a.host, "example.com");
        assert_eq!(a.port, None);
        assert_eq!(rest, "");
    }

    #[test]
    fn rightmost_at_separates_userinfo() {
        let (a, _) = parse("us@er:p@ss@host");
        assert_eq!(a.user, Some("us@er"));
        assert_eq!(a.password, Some("p@ss"));
        assert_eq!(a.host, "host");
    }

    #[test]
    fn password_keeps_later_colons() {
        let (a, _) = parse("user:pa:ss@host:21");
        assert_eq!(a.user, Some("user"));
        assert_eq!(a.password, Some("pa:ss"));
        assert_eq!(a.port, Some(21));
    }

    #[test]
    fn ipv6_literal() {
        let (a, rest) = parse("[::1]:8080?x");
        assert_eq!(a.host, "[::1]");
        assert_eq!(a.port, Some(8080));
        assert_eq!(rest, "?x");

        let (a, _) = parse("[2001:db8::1]");
        assert_eq!(a.host, "[2001:db8::1]");
        assert_eq!(a.port, None);
    }

    #[test]
    fn invalid_port_is_dropped() {
        assert_eq!(parse("host:http").0, parse("host").0);
        assert_eq!(parse("host:").0.port, None);
        assert_eq!(parse("host:70000").0.port, None);
        assert_eq!(parse("host:+80").0.port, None);
    }

    #[test]
    fn compose_components() {
        assert_eq!(compose(None, None, "h", None), "h");
        assert_eq!(compose(Some("u"), None, "h", Some(1)), "u@h:1");
        assert_eq!(compose(Some("u"), Some("p"), "[::1]", None), "u:p@[::1]");
        assert_eq!(compose(Some(""), None, "h", None), "@h");
    }
}
