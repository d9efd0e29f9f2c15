//! Collaborator interfaces for the resolution pipeline
//!
//! Every external dependency of the resolver is a trait injected at
//! construction time, so hosts and tests can swap implementations freely
//! instead of reaching for ambient singletons.

pub mod boundary;
pub mod filter;
pub mod index;
pub mod symbols;

pub use boundary::{PackageBoundary, PackagePrefixSource, WorkspaceBoundary};
pub use filter::FilterBuilder;
pub use index::WorkspaceIndex;
pub use symbols::{SymbolExpander, SymbolRepository};
