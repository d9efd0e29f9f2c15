//! Run-context assembly for resolved targets

use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;

use crate::interfaces::{FilterBuilder, PackagePrefixSource};
use crate::types::{BuildTarget, NavigationSubject, RunContext, Symbol};

/// Smallest symbol selection the symbol-set path accepts; a single symbol
/// belongs to the simpler single-suite resolver.
pub const MIN_SELECTION_SIZE: usize = 2;

/// Assembles the context for a symbol-set selection that reached consensus.
///
/// `suites` is the already-expanded set. The filter maps every suite to an
/// empty case selection (this path never narrows to individual cases). The
/// description names the lexicographically smallest suite, with absent names
/// sorting last; a set with no usable name, or no usable filter, yields
/// `None`.
pub fn context_from_symbols(
    target: BuildTarget,
    suites: &HashSet<Symbol>,
    filters: &dyn FilterBuilder,
) -> Option<RunContext> {
    let entries: Vec<(Symbol, Vec<String>)> = suites
        .iter()
        .cloned()
        .map(|suite| (suite, Vec::new()))
        .collect();
    let filter = filters.build(&entries)?;
    if filter.is_empty() {
        return None;
    }

    let sample = suites.iter().min_by(|a, b| compare_names(a, b))?;
    let mut description = sample.name.clone()?;
    if suites.len() > 1 {
        description.push_str(&format!(" and {} others", suites.len() - 1));
    }

    Some(RunContext {
        target,
        test_filter: Some(filter),
        description,
        subject: NavigationSubject::Symbol(sample.clone()),
    })
}

/// Assembles the context for a directory selection that reached consensus.
///
/// The filter is the directory's package prefix; an empty prefix means "no
/// narrowing filter". A directory with no derivable prefix yields `None`.
pub fn context_from_directory(
    target: BuildTarget,
    dir: &Path,
    prefixes: &dyn PackagePrefixSource,
) -> Option<RunContext> {
    let prefix = prefixes.package_prefix_of(dir)?;
    let name = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());
    let description = format!("all in directory '{name}'");
    let test_filter = if prefix.is_empty() { None } else { Some(prefix) };

    Some(RunContext {
        target,
        test_filter,
        description,
        subject: NavigationSubject::Directory(dir.to_path_buf()),
    })
}

fn compare_names(a: &Symbol, b: &Symbol) -> Ordering {
    match (&a.name, &b.name) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
