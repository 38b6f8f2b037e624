pub mod key_set;

pub use key_set::KeySet;

use serde::Serialize;
use std::path::PathBuf;

/// Keys that differ between a reference and a target key set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyDiff {
    /// In the reference, absent from the target (ascending)
    pub missing: Vec<String>,
    /// In the target, absent from the reference (ascending)
    pub extra: Vec<String>,
}

impl KeyDiff {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Compute `reference - target` and `target - reference`.
pub fn compare_key_sets(reference: &KeySet, target: &KeySet) -> KeyDiff {
    KeyDiff {
        missing: reference.difference(target),
        extra: target.difference(reference),
    }
}

/// One side of a comparison as shown in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSummary {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub key_count: usize,
}

/// Result of comparing a target locale against a reference locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyReport {
    pub reference: LocaleSummary,
    pub target: LocaleSummary,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
    pub all_match: bool,
}

impl KeyReport {
    /// Build a report from two already-extracted key sets.
    pub fn new(
        reference_label: impl Into<String>,
        reference: &KeySet,
        target_label: impl Into<String>,
        target: &KeySet,
    ) -> Self {
        let diff = compare_key_sets(reference, target);
        let all_match = diff.is_empty();

        Self {
            reference: LocaleSummary {
                label: reference_label.into(),
                path: None,
                key_count: reference.len(),
            },
            target: LocaleSummary {
                label: target_label.into(),
                path: None,
                key_count: target.len(),
            },
            missing: diff.missing,
            extra: diff.extra,
            all_match,
        }
    }

    /// Attach the file locations the key sets were loaded from
    pub fn with_paths(mut self, reference: PathBuf, target: PathBuf) -> Self {
        self.reference.path = Some(reference);
        self.target.path = Some(target);
        self
    }
}
