use serde::Serialize;
use std::path::PathBuf;

use super::symbol::Symbol;
use super::target::BuildTarget;

/// Anchor for downstream navigation; opaque to the resolution pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationSubject {
    Symbol(Symbol),
    Directory(PathBuf),
}

/// Everything a caller needs to invoke the resolved target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunContext {
    pub target: BuildTarget,
    /// Narrows the target's default test set; `None` means run everything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_filter: Option<String>,
    pub description: String,
    pub subject: NavigationSubject,
}

/// Outcome of a single resolution attempt.
///
/// `NoMatch` and `Conflict` are expected, non-fatal outcomes: this resolver
/// declines and the caller is free to try another one. Cancellation is an
/// error ([`crate::Error::Cancelled`]), never one of these variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionOutcome {
    Resolved(RunContext),
    NoMatch,
    Conflict,
}

impl ResolutionOutcome {
    pub fn resolved(self) -> Option<RunContext> {
        match self {
            Self::Resolved(context) => Some(context),
            _ => None,
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict)
    }
}
