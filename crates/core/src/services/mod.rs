//! Default collaborator implementations
//!
//! Concrete services behind the interface traits: cargo-convention oracles,
//! tree-sitter suite discovery, manifest-backed target lookup, a libtest
//! filter builder, and an in-memory workspace model for tests and
//! diagnostics.

pub mod cargo_target_index;
pub mod cargo_workspace;
pub mod expand;
pub mod filter;
pub mod treesitter_suite_repository;
pub mod workspace_model;

pub use cargo_target_index::CargoTargetIndex;
pub use cargo_workspace::CargoWorkspace;
pub use expand::IdentityExpander;
pub use filter::LibtestFilterBuilder;
pub use treesitter_suite_repository::TreeSitterSuiteRepository;
pub use workspace_model::WorkspaceModel;
