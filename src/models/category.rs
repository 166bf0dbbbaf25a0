//! Category label attached to every clock record.
//!
//! A `Category` is never empty: it is built either from a user request with
//! the `"default"` fallback, or inherited from the session being closed.
//! Labels are stored exactly as typed; only the empty string is "no label".

use std::fmt;

pub const DEFAULT_CATEGORY: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category(String);

impl Category {
    /// Use the requested label, or `"default"` when nothing was requested.
    pub fn or_default(requested: &str) -> Self {
        match requested {
            "" => Self(DEFAULT_CATEGORY.to_string()),
            label => Self(label.to_string()),
        }
    }

    /// Use the requested label, or the category of the open session.
    pub fn or_inherit(requested: &str, open: &Category) -> Self {
        match requested {
            "" => open.clone(),
            label => Self(label.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
