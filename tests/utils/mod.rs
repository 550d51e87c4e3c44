//! Utilities for tests.
#![allow(unused_macros)]

/// Asserts that the `Display` output of the value equals the expected string.
macro_rules! assert_eq_display {
    ($left:expr, $right:expr $(,)?) => {{
        assert_eq!(format!("{}", $left), format!("{}", $right));
    }};
    ($left:expr, $right:expr, $($args:tt)*) => {{
        assert_eq!(format!("{}", $left), format!("{}", $right), $($args)*);
    }};
}
