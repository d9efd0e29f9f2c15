//! Entry paths: symbol-set and directory resolution
//!
//! Both paths funnel into the same consensus and context assembly; the
//! directory path additionally runs the bounded scan, asynchronously and
//! cancellable.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::builder::{MIN_SELECTION_SIZE, context_from_directory, context_from_symbols};
use crate::cancel::CancelToken;
use crate::consensus::{Consensus, unique_target};
use crate::error::{Error, Result};
use crate::interfaces::{
    FilterBuilder, PackageBoundary, PackagePrefixSource, SymbolExpander, SymbolRepository,
    WorkspaceBoundary, WorkspaceIndex,
};
use crate::scanner::collect_test_suites;
use crate::types::{ResolutionOutcome, Selection, Symbol};

/// How the directory scan is scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Scan on the blocking worker pool.
    #[default]
    Background,
    /// Scan inline on the calling task; keeps results synchronous and
    /// deterministic for tests and diagnostics.
    Inline,
}

/// Resolves a selection of test suites, or a directory subtree, to the one
/// build target that runs all tests the selection implies.
///
/// Every collaborator is injected; the resolver holds no ambient state and
/// each resolution call is an independent, fresh scan. Concurrent calls need
/// no coordination.
pub struct ScopeResolver {
    boundary: Option<Arc<dyn WorkspaceBoundary>>,
    packages: Arc<dyn PackageBoundary>,
    repository: Arc<dyn SymbolRepository>,
    index: Arc<dyn WorkspaceIndex>,
    filters: Arc<dyn FilterBuilder>,
    expander: Arc<dyn SymbolExpander>,
    prefixes: Arc<dyn PackagePrefixSource>,
    mode: ScanMode,
}

impl ScopeResolver {
    pub fn new(
        packages: Arc<dyn PackageBoundary>,
        repository: Arc<dyn SymbolRepository>,
        index: Arc<dyn WorkspaceIndex>,
        filters: Arc<dyn FilterBuilder>,
        expander: Arc<dyn SymbolExpander>,
        prefixes: Arc<dyn PackagePrefixSource>,
    ) -> Self {
        Self {
            boundary: None,
            packages,
            repository,
            index,
            filters,
            expander,
            prefixes,
            mode: ScanMode::Background,
        }
    }

    /// Workspace-boundary information. Without it the directory path is
    /// skipped entirely and reports `NoMatch`.
    pub fn with_boundary(mut self, boundary: Arc<dyn WorkspaceBoundary>) -> Self {
        self.boundary = Some(boundary);
        self
    }

    pub fn with_scan_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    /// Dispatches either selection kind through the shared pipeline.
    pub async fn resolve(
        &self,
        selection: &Selection,
        cancel: &CancelToken,
    ) -> Result<ResolutionOutcome> {
        match selection {
            Selection::Symbols(symbols) => Ok(self.resolve_symbols(symbols)),
            Selection::Directory(dir) => self.resolve_directory(dir, cancel).await,
        }
    }

    /// Resolves an explicitly selected symbol set. Fully synchronous.
    ///
    /// The selection is first narrowed to concrete suites; fewer than
    /// [`MIN_SELECTION_SIZE`] of them means this resolver declines.
    /// Consensus runs over the pre-expansion set; expansion only feeds the
    /// filter and description.
    pub fn resolve_symbols(&self, selection: &[Symbol]) -> ResolutionOutcome {
        let suites: HashSet<Symbol> = selection
            .iter()
            .filter(|symbol| symbol.is_concrete_suite())
            .cloned()
            .collect();
        if suites.len() < MIN_SELECTION_SIZE {
            debug!("selection of {} suites is below the minimum", suites.len());
            return ResolutionOutcome::NoMatch;
        }

        match unique_target(suites.iter(), &*self.index) {
            Consensus::Divergent => ResolutionOutcome::Conflict,
            Consensus::Unresolved => ResolutionOutcome::NoMatch,
            Consensus::Unique(target) => {
                let expanded = self.expander.expand(&suites);
                match context_from_symbols(target, &expanded, &*self.filters) {
                    Some(context) => ResolutionOutcome::Resolved(context),
                    None => ResolutionOutcome::NoMatch,
                }
            }
        }
    }

    /// Resolves everything beneath a directory.
    ///
    /// Declines (`NoMatch`) when boundary information is missing, the
    /// directory is outside the monitored tree, or the directory is itself a
    /// package root (that case belongs to the package-level resolver). A
    /// fired token yields [`Error::Cancelled`] and consensus never runs.
    pub async fn resolve_directory(
        &self,
        dir: &Path,
        cancel: &CancelToken,
    ) -> Result<ResolutionOutcome> {
        let Some(boundary) = &self.boundary else {
            debug!("no workspace boundary information; skipping scan");
            return Ok(ResolutionOutcome::NoMatch);
        };
        if !boundary.is_in_monitored_tree(dir) {
            return Ok(ResolutionOutcome::NoMatch);
        }
        if self.packages.is_package_root(dir) {
            // handled by the package-level resolver
            return Ok(ResolutionOutcome::NoMatch);
        }

        let suites = match self.mode {
            ScanMode::Inline => {
                collect_test_suites(&*self.repository, &**boundary, dir, cancel)?
            }
            ScanMode::Background => {
                let repository = Arc::clone(&self.repository);
                let boundary = Arc::clone(boundary);
                let cancel = cancel.clone();
                let start = dir.to_path_buf();
                tokio::task::spawn_blocking(move || {
                    collect_test_suites(&*repository, &*boundary, &start, &cancel)
                })
                .await
                .map_err(|e| Error::TaskError(e.to_string()))??
            }
        };
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        if suites.is_empty() {
            return Ok(ResolutionOutcome::NoMatch);
        }

        match unique_target(suites.iter(), &*self.index) {
            Consensus::Divergent => Ok(ResolutionOutcome::Conflict),
            Consensus::Unresolved => Ok(ResolutionOutcome::NoMatch),
            Consensus::Unique(target) => {
                Ok(match context_from_directory(target, dir, &*self.prefixes) {
                    Some(context) => ResolutionOutcome::Resolved(context),
                    None => ResolutionOutcome::NoMatch,
                })
            }
        }
    }
}
