use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::test_size::TestSize;
use crate::impl_case_insensitive_deserialize;

/// What kind of declaration a symbol snapshot points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// A test-bearing declaration: a suite of runnable tests.
    Suite,
    /// Any other declaration living alongside suites (helpers, fixtures).
    Support,
}

// Implement case-insensitive deserialization
impl_case_insensitive_deserialize!(
    SymbolKind,
    Suite => "suite",
    Support => "support"
);

/// Immutable snapshot of a source declaration taken at scan time.
///
/// No identity persists across scans; two snapshots compare equal when all
/// attributes match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Declared name; absent for anonymous or synthetic declarations.
    pub name: Option<String>,
    pub kind: SymbolKind,
    #[serde(default)]
    pub is_abstract: bool,
    /// Directory the declaration lives in.
    pub directory: PathBuf,
    #[serde(default)]
    pub size: TestSize,
}

impl Symbol {
    /// A named, concrete test suite in `directory`.
    pub fn suite(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: Some(name.into()),
            kind: SymbolKind::Suite,
            is_abstract: false,
            directory: directory.into(),
            size: TestSize::Unspecified,
        }
    }

    /// A non-suite declaration in `directory`.
    pub fn support(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: Some(name.into()),
            kind: SymbolKind::Support,
            is_abstract: false,
            directory: directory.into(),
            size: TestSize::Unspecified,
        }
    }

    pub fn with_size(mut self, size: TestSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn unnamed(mut self) -> Self {
        self.name = None;
        self
    }

    /// The test-suite predicate shared by both entry paths: a suite that can
    /// actually be instantiated and run.
    pub fn is_concrete_suite(&self) -> bool {
        matches!(self.kind, SymbolKind::Suite) && !self.is_abstract
    }
}
