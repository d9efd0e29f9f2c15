//! Workspace and package boundary oracles
//!
//! These answer where the resolver is allowed to look: which directories
//! belong to the monitored test content, and which directories are roots of
//! separately built packages that another resolver owns.

use std::path::Path;

/// Answers whether a path lies inside the tree this resolver indexes.
pub trait WorkspaceBoundary: Send + Sync {
    fn is_in_monitored_tree(&self, path: &Path) -> bool;
}

/// Answers whether a directory is itself the root of a separately built
/// package.
///
/// Such directories are excluded from the directory entry path to avoid
/// double-handling with the package-level resolver.
pub trait PackageBoundary: Send + Sync {
    fn is_package_root(&self, dir: &Path) -> bool;
}

/// Derives the package or module prefix covering a directory.
pub trait PackagePrefixSource: Send + Sync {
    /// `None` when no prefix can be derived; an empty string means "the
    /// whole target", i.e. no narrowing filter.
    fn package_prefix_of(&self, dir: &Path) -> Option<String>;
}
