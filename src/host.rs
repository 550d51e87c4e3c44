//! Host classification.

use crate::parser::char::is_ascii_hostname;

/// Kind of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// Dotted-decimal IPv4 address, such as `192.0.2.1`.
    Ipv4,
    /// Bracketed IPv6 address literal, such as `[2001:db8::1]`.
    Ipv6,
    /// DNS-style registered name, such as `example.com`.
    RegName,
}

impl HostKind {
    /// Classifies the host.
    ///
    /// Returns `None` for an empty host or a host which is none of the
    /// known kinds.
    ///
    /// # Examples
    ///
    /// ```
    /// use net_url::host::HostKind;
    ///
    /// assert_eq!(HostKind::of("192.0.2.1"), Some(HostKind::Ipv4));
    /// assert_eq!(HostKind::of("[::1]"), Some(HostKind::Ipv6));
    /// assert_eq!(HostKind::of("example.com"), Some(HostKind::RegName));
    /// assert_eq!(HostKind::of("exa mple"), None);
    /// ```
    #[must_use]
    pub fn of(host: &str) -> Option<Self> {
        if is_ipv4(host) {
            Some(Self::Ipv4)
        } else if host
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .map_or(false, is_ipv6)
        {
            Some(Self::Ipv6)
        } else if is_hostname(host) {
            Some(Self::RegName)
        } else {
            None
        }
    }
}

/// Checks if the string is a dotted-decimal IPv4 address.
fn is_ipv4(s: &str) -> bool {
    let mut count = 0;
    for octet in s.split('.') {
        count += 1;
        let valid = !octet.is_empty()
            && octet.len() <= 3
            && octet.bytes().all(|b| b.is_ascii_digit())
            && octet.parse::<u8>().is_ok();
        if !valid || count > 4 {
            return false;
        }
    }
    count == 4
}

/// Checks if the string (without brackets) is an IPv6 address.
fn is_ipv6(s: &str) -> bool {
    let (head, tail, compressed) = match s.find("::") {
        Some(pos) => (&s[..pos], &s[(pos + 2)..], true),
        None => (s, "", false),
    };
    if tail.contains("::") {
        return false;
    }

    /// Counts 16-bit pieces, or returns `None` if malformed.
    fn count_pieces(part: &str, allow_ipv4_tail: bool) -> Option<usize> {
        if part.is_empty() {
            return Some(0);
        }
        let groups: Vec<&str> = part.split(':').collect();
        let mut pieces = 0;
        for (i, group) in groups.iter().enumerate() {
            let is_last = i + 1 == groups.len();
            if is_last && allow_ipv4_tail && group.contains('.') {
                if !is_ipv4(group) {
                    return None;
                }
                pieces += 2;
            } else if (1..=4).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_hexdigit()) {
                pieces += 1;
            } else {
                return None;
            }
        }
        Some(pieces)
    }

    let head_pieces = match count_pieces(head, !compressed) {
        Some(n) => n,
        None => return false,
    };
    let tail_pieces = match count_pieces(tail, true) {
        Some(n) => n,
        None => return false,
    };
    let total = head_pieces + tail_pieces;
    if compressed {
        total < 8
    } else {
        total == 8
    }
}

/// Checks if the string is a DNS-style hostname.
fn is_hostname(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(is_ascii_hostname)
        && !s.starts_with('.')
        && !s.ends_with('.')
        && !s.contains("..")
}
