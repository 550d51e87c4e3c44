//! Low-level parsing helpers shared by the URL components.

pub(crate) mod char;
pub(crate) mod str;
