//! Manifest-backed target lookup

use std::path::{Path, PathBuf};

use cargo_toml::Manifest;
use tracing::{debug, warn};

use crate::interfaces::WorkspaceIndex;
use crate::types::{BuildTarget, Symbol, TestSize};

/// Resolves a symbol to the cargo package that owns its directory.
///
/// Walks up from the symbol's directory to the nearest `Cargo.toml` inside
/// the workspace root and uses the package name as the target label. Cargo
/// packages are not sharded by test size, so the hint is accepted and
/// ignored. Unreadable or virtual manifests are resolution gaps, not
/// failures.
#[derive(Debug, Clone)]
pub struct CargoTargetIndex {
    root: PathBuf,
}

impl CargoTargetIndex {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn manifest_for(&self, dir: &Path) -> Option<PathBuf> {
        let mut current = Some(dir);
        while let Some(dir) = current {
            if !dir.starts_with(&self.root) {
                return None;
            }
            let manifest = dir.join("Cargo.toml");
            if manifest.is_file() {
                return Some(manifest);
            }
            current = dir.parent();
        }
        None
    }
}

impl WorkspaceIndex for CargoTargetIndex {
    fn resolve_target(&self, symbol: &Symbol, _size: TestSize) -> Option<BuildTarget> {
        let manifest_path = self.manifest_for(&symbol.directory)?;
        let manifest = match Manifest::from_path(&manifest_path) {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!("unreadable manifest {}: {e}", manifest_path.display());
                return None;
            }
        };
        let package = manifest.package?;
        debug!("resolved {:?} to package '{}'", symbol.name, package.name);
        Some(BuildTarget::new(package.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_symbols_resolve_to_the_owning_package() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("crates/alpha/src/api")).unwrap();
        fs::write(
            root.join("crates/alpha/Cargo.toml"),
            "[package]\nname = \"alpha\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();

        let index = CargoTargetIndex::new(root);
        let symbol = Symbol::suite("ApiTest", root.join("crates/alpha/src/api"));
        let target = index.resolve_target(&symbol, TestSize::Unspecified);
        assert_eq!(target, Some(BuildTarget::new("alpha")));
    }

    #[test]
    fn test_unowned_directories_are_gaps() {
        let temp = TempDir::new().unwrap();
        let index = CargoTargetIndex::new(temp.path());
        let symbol = Symbol::suite("OrphanTest", temp.path().join("notes"));
        assert_eq!(index.resolve_target(&symbol, TestSize::Unspecified), None);
    }

    #[test]
    fn test_virtual_workspace_manifests_are_gaps() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::write(root.join("Cargo.toml"), "[workspace]\nmembers = []\n").unwrap();

        let index = CargoTargetIndex::new(root);
        let symbol = Symbol::suite("DocTest", root.join("docs"));
        assert_eq!(index.resolve_target(&symbol, TestSize::Unspecified), None);
    }
}
