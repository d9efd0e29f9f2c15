//! Cargo-convention oracles over a real workspace tree

use std::path::{Component, Path, PathBuf};

use crate::interfaces::{PackageBoundary, PackagePrefixSource, WorkspaceBoundary};

/// Boundary, package and prefix oracles driven by cargo manifest
/// conventions.
///
/// The monitored tree is the workspace root's subtree minus build output and
/// hidden directories. A directory carrying its own `Cargo.toml` is a
/// package root, owned by the package-level resolver. Prefixes are module
/// paths: the `::`-joined components between a package's `src` directory and
/// the queried directory.
#[derive(Debug, Clone)]
pub struct CargoWorkspace {
    root: PathBuf,
}

impl CargoWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_ignored_component(name: &str) -> bool {
        name == "target" || name.starts_with('.')
    }

    /// Nearest ancestor of `path` (inclusive) carrying a Cargo.toml, within
    /// the workspace root.
    fn owning_package(&self, path: &Path) -> Option<PathBuf> {
        let mut current = Some(path);
        while let Some(dir) = current {
            if !dir.starts_with(&self.root) {
                return None;
            }
            if dir.join("Cargo.toml").is_file() {
                return Some(dir.to_path_buf());
            }
            current = dir.parent();
        }
        None
    }
}

impl WorkspaceBoundary for CargoWorkspace {
    fn is_in_monitored_tree(&self, path: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(&self.root) else {
            return false;
        };
        relative.components().all(|component| match component {
            Component::Normal(name) => name
                .to_str()
                .map(|name| !Self::is_ignored_component(name))
                .unwrap_or(false),
            _ => false,
        })
    }
}

impl PackageBoundary for CargoWorkspace {
    fn is_package_root(&self, dir: &Path) -> bool {
        dir.join("Cargo.toml").is_file()
    }
}

impl PackagePrefixSource for CargoWorkspace {
    fn package_prefix_of(&self, dir: &Path) -> Option<String> {
        let package = self.owning_package(dir)?;
        let src = package.join("src");
        let relative = dir.strip_prefix(&src).ok()?;
        let modules: Option<Vec<&str>> = relative
            .components()
            .map(|component| match component {
                Component::Normal(name) => name.to_str(),
                _ => None,
            })
            .collect();
        Some(modules?.join("::"))
    }
}
