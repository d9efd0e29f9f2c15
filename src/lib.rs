//! Integration-test host package; the real code lives under crates/.

pub use test_scope_core;
