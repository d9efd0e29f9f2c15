use serde::Serialize;

use crate::impl_case_insensitive_deserialize;

/// Size class attached to a test suite, used to bias target lookup.
///
/// Purely a hint: it never gates correctness, and indexes that do not shard
/// targets by size are free to ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestSize {
    Small,
    Medium,
    Large,
    Enormous,
    #[default]
    Unspecified,
}

// Implement case-insensitive deserialization
impl_case_insensitive_deserialize!(
    TestSize,
    Small => "small",
    Medium => "medium",
    Large => "large",
    Enormous => "enormous",
    Unspecified => "unspecified"
);
