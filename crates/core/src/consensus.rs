//! Target consensus over partially-resolvable symbol sets

use tracing::debug;

use crate::interfaces::WorkspaceIndex;
use crate::types::{BuildTarget, Symbol};

/// Result of checking whether a symbol set agrees on one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Consensus {
    /// Every resolvable symbol mapped to this target.
    Unique(BuildTarget),
    /// No symbol resolved to any target.
    Unresolved,
    /// At least two symbols resolved to distinct targets.
    Divergent,
}

/// The target a single symbol implies, if any.
///
/// Re-checks the concrete-suite predicate before consulting the index, and
/// forwards the symbol's size hint. `None` is a resolution gap, not an
/// error.
pub fn target_for_symbol(symbol: &Symbol, index: &dyn WorkspaceIndex) -> Option<BuildTarget> {
    if !symbol.is_concrete_suite() {
        return None;
    }
    index.resolve_target(symbol, symbol.size)
}

/// Confirms that all resolvable symbols in the set imply the same target.
///
/// Unresolvable symbols contribute no information rather than counting as
/// conflicts; a single resolvable symbol can therefore carry the consensus
/// on its own. Iteration stops at the first divergence.
pub fn unique_target<'a, I>(symbols: I, index: &dyn WorkspaceIndex) -> Consensus
where
    I: IntoIterator<Item = &'a Symbol>,
{
    let mut candidate: Option<BuildTarget> = None;
    for symbol in symbols {
        let Some(target) = target_for_symbol(symbol, index) else {
            continue;
        };
        match &candidate {
            Some(existing) if *existing != target => {
                debug!("selection spans targets {existing} and {target}");
                return Consensus::Divergent;
            }
            Some(_) => {}
            None => candidate = Some(target),
        }
    }
    match candidate {
        Some(target) => Consensus::Unique(target),
        None => Consensus::Unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::WorkspaceModel;
    use crate::types::TestSize;
    use std::sync::Mutex;

    #[test]
    fn test_agreeing_symbols_yield_unique_target() {
        let model = WorkspaceModel::new()
            .with_target("AlphaTest", "//pkg:tests")
            .with_target("BravoTest", "//pkg:tests");
        let symbols = vec![
            Symbol::suite("AlphaTest", "/ws/src"),
            Symbol::suite("BravoTest", "/ws/src"),
        ];
        let consensus = unique_target(symbols.iter(), &model);
        assert_eq!(consensus, Consensus::Unique(BuildTarget::new("//pkg:tests")));
    }

    #[test]
    fn test_distinct_targets_diverge_despite_gaps() {
        let model = WorkspaceModel::new()
            .with_target("AlphaTest", "//pkg:a")
            .with_target("BravoTest", "//pkg:b");
        let symbols = vec![
            Symbol::suite("AlphaTest", "/ws/src"),
            Symbol::suite("UnknownTest", "/ws/src"),
            Symbol::suite("BravoTest", "/ws/src"),
        ];
        assert_eq!(unique_target(symbols.iter(), &model), Consensus::Divergent);
    }

    #[test]
    fn test_all_gaps_yield_unresolved() {
        let model = WorkspaceModel::new();
        let symbols = vec![
            Symbol::suite("AlphaTest", "/ws/src"),
            Symbol::suite("BravoTest", "/ws/src"),
        ];
        assert_eq!(unique_target(symbols.iter(), &model), Consensus::Unresolved);
    }

    #[test]
    fn test_single_resolvable_symbol_carries_consensus() {
        // Lenient-null policy, pinned deliberately: gaps never conflict.
        let model = WorkspaceModel::new().with_target("AlphaTest", "//pkg:a");
        let symbols = vec![
            Symbol::suite("AlphaTest", "/ws/src"),
            Symbol::suite("UnknownTest", "/ws/src"),
            Symbol::suite("AlsoUnknownTest", "/ws/src"),
        ];
        assert_eq!(
            unique_target(symbols.iter(), &model),
            Consensus::Unique(BuildTarget::new("//pkg:a"))
        );
    }

    #[test]
    fn test_abstract_suites_resolve_to_nothing() {
        let model = WorkspaceModel::new().with_target("BaseTest", "//pkg:a");
        let symbol = Symbol::suite("BaseTest", "/ws/src").with_abstract(true);
        assert_eq!(target_for_symbol(&symbol, &model), None);
    }

    struct RecordingIndex {
        hints: Mutex<Vec<TestSize>>,
    }

    impl WorkspaceIndex for RecordingIndex {
        fn resolve_target(&self, _symbol: &Symbol, size: TestSize) -> Option<BuildTarget> {
            self.hints.lock().unwrap().push(size);
            Some(BuildTarget::new("//pkg:sized"))
        }
    }

    #[test]
    fn test_size_hint_is_forwarded_to_the_index() {
        let index = RecordingIndex {
            hints: Mutex::new(Vec::new()),
        };
        let symbol = Symbol::suite("AlphaTest", "/ws/src").with_size(TestSize::Large);
        target_for_symbol(&symbol, &index);
        assert_eq!(*index.hints.lock().unwrap(), vec![TestSize::Large]);
    }
}
