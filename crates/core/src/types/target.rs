use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a unit of buildable, testable work.
///
/// The resolution core only ever compares labels for equality and renders
/// them for display; it never looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildTarget(String);

impl BuildTarget {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BuildTarget {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for BuildTarget {
    fn from(label: String) -> Self {
        Self(label)
    }
}
