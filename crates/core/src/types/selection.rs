use std::path::PathBuf;

use super::symbol::Symbol;

/// A user selection, dispatched through one resolution pipeline.
#[derive(Debug, Clone)]
pub enum Selection {
    /// Explicitly selected symbols.
    Symbols(Vec<Symbol>),
    /// A whole directory subtree.
    Directory(PathBuf),
}

impl From<Vec<Symbol>> for Selection {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self::Symbols(symbols)
    }
}

impl From<PathBuf> for Selection {
    fn from(dir: PathBuf) -> Self {
        Self::Directory(dir)
    }
}
