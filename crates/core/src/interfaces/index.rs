//! Workspace index interface

use crate::types::{BuildTarget, Symbol, TestSize};

/// Maps a symbol to the build target that runs it, if the index knows one.
pub trait WorkspaceIndex: Send + Sync {
    /// `size` biases the lookup when targets are sharded by test size;
    /// implementations without that notion ignore it. `None` means the
    /// symbol contributes no information ("resolution gap"), not failure.
    fn resolve_target(&self, symbol: &Symbol, size: TestSize) -> Option<BuildTarget>;
}
