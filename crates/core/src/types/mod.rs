pub mod context;
pub mod selection;
pub mod symbol;
pub mod target;
pub mod test_size;

// Re-export commonly used types
pub use context::{NavigationSubject, ResolutionOutcome, RunContext};
pub use selection::Selection;
pub use symbol::{Symbol, SymbolKind};
pub use target::BuildTarget;
pub use test_size::TestSize;
