pub mod compare;
pub mod config;
pub mod error;
pub mod output;
pub mod parse;

use std::path::PathBuf;

// Re-export commonly used types
pub use compare::{compare_key_sets, KeyDiff, KeyReport, KeySet, LocaleSummary};
pub use config::{DocumentFormat, KeyMode, OutputFormat};
pub use error::{CheckError, Result};
pub use output::{JsonFormatter, TextFormatter};
pub use parse::{load_dictionary, JsonParser, LocaleDictionary, Node, YamlParser};

/// Query parameters for a comparison
#[derive(Debug, Clone)]
pub struct CompareQuery {
    pub reference: PathBuf,
    pub target: PathBuf,
    pub key_mode: KeyMode,
    pub reference_label: Option<String>,
    pub target_label: Option<String>,
}

impl CompareQuery {
    pub fn new(reference: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            reference: reference.into(),
            target: target.into(),
            key_mode: KeyMode::TopLevel,
            reference_label: None,
            target_label: None,
        }
    }

    pub fn with_key_mode(mut self, key_mode: KeyMode) -> Self {
        self.key_mode = key_mode;
        self
    }

    pub fn with_labels(mut self, reference: impl Into<String>, target: impl Into<String>) -> Self {
        self.reference_label = Some(reference.into());
        self.target_label = Some(target.into());
        self
    }

    fn labels(&self) -> (String, String) {
        let reference = self
            .reference_label
            .clone()
            .unwrap_or_else(|| config::locale_label(&self.reference));
        let target = self
            .target_label
            .clone()
            .unwrap_or_else(|| config::locale_label(&self.target));
        (reference, target)
    }
}

impl Default for CompareQuery {
    /// The bundled reference/target pair under `src/i18n/locales`
    fn default() -> Self {
        Self::new(config::default_reference_path(), config::default_target_path())
    }
}

/// Load both locale files and compare their key sets.
///
/// Steps:
/// 1. Load the reference file, then the target file. The first failure is
///    returned as is; nothing is compared.
/// 2. Extract a key set from each according to `query.key_mode`.
/// 3. Build a `KeyReport` with the sorted missing and extra keys.
///
/// Reads the two files and nothing else.
#[must_use = "this function returns a Result that should be handled"]
pub fn run_compare(query: CompareQuery) -> Result<KeyReport> {
    let reference = load_dictionary(&query.reference)?;
    let target = load_dictionary(&query.target)?;

    let (reference_label, target_label) = query.labels();
    let report = compare_dictionaries(
        &reference,
        reference_label,
        &target,
        target_label,
        query.key_mode,
    )
    .with_paths(query.reference, query.target);

    tracing::info!(
        missing = report.missing.len(),
        extra = report.extra.len(),
        all_match = report.all_match,
        "comparison finished"
    );

    Ok(report)
}

/// Compare two already-loaded dictionaries.
pub fn compare_dictionaries(
    reference: &LocaleDictionary,
    reference_label: impl Into<String>,
    target: &LocaleDictionary,
    target_label: impl Into<String>,
    key_mode: KeyMode,
) -> KeyReport {
    let reference_keys = reference.key_set(key_mode);
    let target_keys = target.key_set(key_mode);

    tracing::debug!(
        reference = reference_keys.len(),
        target = target_keys.len(),
        ?key_mode,
        "extracted key sets"
    );

    KeyReport::new(reference_label, &reference_keys, target_label, &target_keys)
}
