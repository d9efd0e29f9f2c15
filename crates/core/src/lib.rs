//! test-scope - resolves which build target runs all tests implied by a selection
//!
//! This crate provides functionality to:
//! - Scan a directory subtree (bounded, cancellable) for concrete test suites
//! - Check that a set of suites agrees on a single build target
//! - Assemble the run context (target, test filter, description) for invoking it
pub mod builder;
pub mod cancel;
pub mod consensus;
pub mod error;
pub mod interfaces;
pub mod resolver;
pub mod scanner;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use cancel::CancelToken;
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use builder::MIN_SELECTION_SIZE;
pub use consensus::{Consensus, unique_target};
pub use resolver::{ScanMode, ScopeResolver};
pub use scanner::{MAX_SCAN_DEPTH, collect_test_suites};
