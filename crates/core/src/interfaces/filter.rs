//! Test-filter expression builder interface

use crate::types::Symbol;

/// Builds a textual test-filter expression from suites and optional
/// per-suite case selections.
pub trait FilterBuilder: Send + Sync {
    /// An entry pairs a suite with the cases selected inside it; an empty
    /// case list selects the whole suite. `None` means no usable expression
    /// exists for this selection.
    fn build(&self, entries: &[(Symbol, Vec<String>)]) -> Option<String>;
}
