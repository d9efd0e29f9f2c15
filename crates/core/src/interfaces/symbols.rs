//! Symbol repository and selection expansion interfaces

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::types::Symbol;

/// Snapshot reads over declared symbols, one directory level at a time.
///
/// Implementations must present a consistent snapshot for the duration of a
/// scan; the scanner never coordinates with concurrent mutation.
pub trait SymbolRepository: Send + Sync {
    /// Symbols declared directly in `dir`, without recursion.
    fn direct_symbols_of(&self, dir: &Path) -> Vec<Symbol>;

    /// Immediate child directories of `dir`.
    fn child_directories(&self, dir: &Path) -> Vec<PathBuf>;
}

/// Expands a selection with the nested suites implied by each member.
pub trait SymbolExpander: Send + Sync {
    /// Must return a superset of the input.
    fn expand(&self, symbols: &HashSet<Symbol>) -> HashSet<Symbol>;
}
