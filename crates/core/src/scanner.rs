//! Bounded, cancellable scan for test suites beneath a directory

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cancel::CancelToken;
use crate::error::{Error, Result};
use crate::interfaces::{SymbolRepository, WorkspaceBoundary};
use crate::types::Symbol;

/// Deepest directory level visited below the starting directory.
pub const MAX_SCAN_DEPTH: usize = 8;

/// Collects every concrete test suite reachable under `start`.
///
/// Iterative depth-first walk over the repository's directory tree. A
/// directory deeper than [`MAX_SCAN_DEPTH`] or outside the monitored tree is
/// not descended past; suites found above it are kept. The token is checked
/// once per visited directory, and a fired token aborts the walk with
/// [`Error::Cancelled`].
///
/// An empty result is a valid outcome, not an error.
pub fn collect_test_suites(
    repository: &dyn SymbolRepository,
    boundary: &dyn WorkspaceBoundary,
    start: &Path,
    cancel: &CancelToken,
) -> Result<HashSet<Symbol>> {
    let mut suites = HashSet::new();
    let mut pending: Vec<(PathBuf, usize)> = vec![(start.to_path_buf(), 0)];

    while let Some((dir, depth)) = pending.pop() {
        if cancel.is_cancelled() {
            debug!("scan cancelled at {}", dir.display());
            return Err(Error::Cancelled);
        }
        if depth > MAX_SCAN_DEPTH || !boundary.is_in_monitored_tree(&dir) {
            continue;
        }
        suites.extend(
            repository
                .direct_symbols_of(&dir)
                .into_iter()
                .filter(|symbol| symbol.is_concrete_suite()),
        );
        for child in repository.child_directories(&dir) {
            pending.push((child, depth + 1));
        }
    }

    debug!(
        "found {} test suites beneath {}",
        suites.len(),
        start.display()
    );
    Ok(suites)
}
