//! Libtest-flavored filter expression builder

use crate::interfaces::FilterBuilder;
use crate::types::Symbol;

/// Joins suite names (and `suite::case` selections) into a libtest-style
/// filter expression.
///
/// Unnamed suites cannot be expressed and are skipped; an expression with no
/// usable parts is reported as absent rather than empty.
#[derive(Debug, Clone, Default)]
pub struct LibtestFilterBuilder;

impl LibtestFilterBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl FilterBuilder for LibtestFilterBuilder {
    fn build(&self, entries: &[(Symbol, Vec<String>)]) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        for (suite, cases) in entries {
            let Some(name) = suite.name.as_deref() else {
                continue;
            };
            if cases.is_empty() {
                parts.push(name.to_string());
            } else {
                parts.extend(cases.iter().map(|case| format!("{name}::{case}")));
            }
        }
        if parts.is_empty() {
            return None;
        }
        parts.sort();
        parts.dedup();
        Some(parts.join(" "))
    }
}
