use std::path::{Path, PathBuf};

/// Reference locale checked when no path is given
pub const DEFAULT_REFERENCE: &str = "src/i18n/locales/en.json";

/// Target locale checked when no path is given
pub const DEFAULT_TARGET: &str = "src/i18n/locales/hi.json";

pub fn default_reference_path() -> PathBuf {
    PathBuf::from(DEFAULT_REFERENCE)
}

pub fn default_target_path() -> PathBuf {
    PathBuf::from(DEFAULT_TARGET)
}

/// Display label for a locale file: the file stem, uppercased.
///
/// `src/i18n/locales/en.json` becomes `EN`, `pt-BR.yml` becomes `PT-BR`.
pub fn locale_label(path: &Path) -> String {
    match path.file_stem() {
        Some(stem) if !stem.is_empty() => stem.to_string_lossy().to_uppercase(),
        _ => path.display().to_string(),
    }
}
