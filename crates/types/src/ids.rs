//! Newtype wrapper for link targets.
//!
//! Link targets are embedded exactly as supplied. No URI validation happens
//! here; a malformed target still produces a link annotation.

use std::fmt;
use std::sync::Arc;

/// The target of a clickable link annotation (`mailto:`, `https://`, ...).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct LinkUri(Arc<str>);

impl LinkUri {
    /// Builds a `mailto:` link for an email address.
    pub fn mailto(address: &str) -> Self {
        Self(format!("mailto:{}", address).into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LinkUri {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for LinkUri {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for LinkUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
