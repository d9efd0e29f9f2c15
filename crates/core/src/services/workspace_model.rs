//! Declarative in-memory workspace
//!
//! A single value that implements every collaborator interface, used as the
//! deterministic test double and by diagnostic tooling. Loadable from JSON.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::interfaces::{
    PackageBoundary, PackagePrefixSource, SymbolExpander, SymbolRepository, WorkspaceBoundary,
    WorkspaceIndex,
};
use crate::types::{BuildTarget, Symbol, TestSize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceModel {
    /// Roots of the monitored tree.
    #[serde(default)]
    pub monitored: Vec<PathBuf>,
    /// Subtrees carved out of the monitored tree.
    #[serde(default)]
    pub excluded: Vec<PathBuf>,
    /// Every directory the model knows about; children are derived from
    /// these paths.
    #[serde(default)]
    pub directories: Vec<PathBuf>,
    /// Directories that are roots of separately built packages.
    #[serde(default)]
    pub package_roots: Vec<PathBuf>,
    /// Declared symbols.
    #[serde(default)]
    pub symbols: Vec<Symbol>,
    /// Build-target label per symbol name.
    #[serde(default)]
    pub targets: HashMap<String, String>,
    /// Package prefix per directory.
    #[serde(default)]
    pub prefixes: HashMap<PathBuf, String>,
    /// Nested suites implied by a named top-level suite.
    #[serde(default)]
    pub nested: HashMap<String, Vec<Symbol>>,
}

impl WorkspaceModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn with_monitored(mut self, dir: impl Into<PathBuf>) -> Self {
        self.monitored.push(dir.into());
        self
    }

    pub fn with_excluded(mut self, dir: impl Into<PathBuf>) -> Self {
        self.excluded.push(dir.into());
        self
    }

    pub fn with_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directories.push(dir.into());
        self
    }

    pub fn with_package_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.package_roots.push(dir.into());
        self
    }

    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbols.push(symbol);
        self
    }

    pub fn with_target(mut self, symbol_name: impl Into<String>, label: impl Into<String>) -> Self {
        self.targets.insert(symbol_name.into(), label.into());
        self
    }

    pub fn with_prefix(mut self, dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        self.prefixes.insert(dir.into(), prefix.into());
        self
    }

    pub fn with_nested(mut self, suite_name: impl Into<String>, nested: Vec<Symbol>) -> Self {
        self.nested.insert(suite_name.into(), nested);
        self
    }
}

impl WorkspaceBoundary for WorkspaceModel {
    fn is_in_monitored_tree(&self, path: &Path) -> bool {
        self.monitored.iter().any(|root| path.starts_with(root))
            && !self.excluded.iter().any(|root| path.starts_with(root))
    }
}

impl PackageBoundary for WorkspaceModel {
    fn is_package_root(&self, dir: &Path) -> bool {
        self.package_roots.iter().any(|root| root == dir)
    }
}

impl PackagePrefixSource for WorkspaceModel {
    fn package_prefix_of(&self, dir: &Path) -> Option<String> {
        self.prefixes.get(dir).cloned()
    }
}

impl SymbolRepository for WorkspaceModel {
    fn direct_symbols_of(&self, dir: &Path) -> Vec<Symbol> {
        self.symbols
            .iter()
            .filter(|symbol| symbol.directory == dir)
            .cloned()
            .collect()
    }

    fn child_directories(&self, dir: &Path) -> Vec<PathBuf> {
        self.directories
            .iter()
            .filter(|candidate| candidate.parent() == Some(dir))
            .cloned()
            .collect()
    }
}

impl WorkspaceIndex for WorkspaceModel {
    fn resolve_target(&self, symbol: &Symbol, _size: TestSize) -> Option<BuildTarget> {
        let name = symbol.name.as_deref()?;
        self.targets.get(name).map(|label| BuildTarget::new(label.as_str()))
    }
}

impl SymbolExpander for WorkspaceModel {
    fn expand(&self, symbols: &HashSet<Symbol>) -> HashSet<Symbol> {
        let mut expanded = symbols.clone();
        for symbol in symbols {
            let Some(name) = symbol.name.as_deref() else {
                continue;
            };
            if let Some(nested) = self.nested.get(name) {
                expanded.extend(nested.iter().cloned());
            }
        }
        expanded
    }
}
