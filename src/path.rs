//! Path normalization.
//!
//! See [RFC 3986 section 5.2.3] for `merge`, and [RFC 3986 section 5.2.4]
//! for `remove_dot_segments`.
//!
//! [RFC 3986 section 5.2.3]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.3
//! [RFC 3986 section 5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4

use std::borrow::Cow;

use crate::parser::str::{find, rfind};

/// Collapses every run of consecutive slashes into a single slash.
fn collapse_slashes(path: &str) -> Cow<'_, str> {
    if !path.contains("//") {
        return Cow::Borrowed(path);
    }
    let mut buf = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        let is_slash = c == '/';
        if !(is_slash && prev_slash) {
            buf.push(c);
        }
        prev_slash = is_slash;
    }
    Cow::Owned(buf)
}

/// Removes the last segment and its preceding slash (if any) from the output.
fn pop_last_segment(output: &mut String) {
    match rfind(output.as_bytes(), b'/') {
        Some(slash_pos) => output.truncate(slash_pos),
        None => output.clear(),
    }
}

/// Removes `.` and `..` segments, and collapses repeated slashes.
///
/// # Examples
///
/// ```
/// use net_url::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/a/b/../c"), "/a/c");
/// assert_eq!(remove_dot_segments("/a/./b/"), "/a/b/");
/// assert_eq!(remove_dot_segments("/../a"), "/a");
/// assert_eq!(remove_dot_segments("/a//b///c"), "/a/b/c");
/// assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
/// ```
#[must_use]
pub fn remove_dot_segments(path: &str) -> String {
    let collapsed = collapse_slashes(path);
    let mut input: &str = &collapsed;
    let mut output = String::with_capacity(input.len());

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            // 2.A.
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            // 2.A.
            input = rest;
        } else if input.starts_with("/./") {
            // 2.B.
            input = &input[2..];
        } else if input == "/." {
            // 2.B.
            input = "/";
        } else if input.starts_with("/../") {
            // 2.C.
            input = &input[3..];
            pop_last_segment(&mut output);
        } else if input == "/.." {
            // 2.C.
            input = "/";
            pop_last_segment(&mut output);
        } else if input == "." || input == ".." {
            // 2.D.
            input = "";
        } else {
            // 2.E.
            let seg_end = match find(&input.as_bytes()[1..], b'/') {
                Some(pos) => pos + 1,
                None => input.len(),
            };
            output.push_str(&input[..seg_end]);
            input = &input[seg_end..];
        }
    }

    output
}

/// Merges a relative-path reference with the path of the base.
///
/// `base_has_authority` tells whether the base URL has an authority, in
/// which case an empty base path is treated as `/`.
#[must_use]
pub(crate) fn merge(base_path: &str, base_has_authority: bool, reference_path: &str) -> String {
    if base_has_authority && base_path.is_empty() {
        return format!("/{reference_path}");
    }
    match rfind(base_path.as_bytes(), b'/') {
        Some(last_slash_pos) => format!("{}{}", &base_path[..=last_slash_pos], reference_path),
        None => reference_path.to_owned(),
    }
}
