use std::fmt;
use std::path::Path;

/// Structured text format of a locale file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    /// JSON with `//` and `/* */` comments
    Jsonc,
    Yaml,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "JSON"),
            DocumentFormat::Jsonc => write!(f, "JSONC"),
            DocumentFormat::Yaml => write!(f, "YAML"),
        }
    }
}

/// Pick the document format from the file extension.
///
/// `.yml` and `.yaml` are YAML, `.jsonc` is JSON with comments. Everything
/// else, including files without an extension, is read as strict JSON.
pub fn detect_format(path: &Path) -> DocumentFormat {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yml" | "yaml" => DocumentFormat::Yaml,
        "jsonc" => DocumentFormat::Jsonc,
        _ => DocumentFormat::Json,
    }
}

/// Which keys of a dictionary take part in the comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMode {
    /// Only the keys at the top level of the document
    #[default]
    TopLevel,
    /// Every leaf, addressed by its dot-notation path
    Nested,
}

/// Report rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_yaml() {
        assert_eq!(detect_format(Path::new("config/locales/en.yml")), DocumentFormat::Yaml);
        assert_eq!(detect_format(Path::new("locales/hi.YAML")), DocumentFormat::Yaml);
    }

    #[test]
    fn test_detect_json_and_fallback() {
        assert_eq!(detect_format(Path::new("src/i18n/locales/en.json")), DocumentFormat::Json);
        assert_eq!(detect_format(Path::new("locales/en")), DocumentFormat::Json);
        assert_eq!(detect_format(Path::new("locales/en.txt")), DocumentFormat::Json);
    }

    #[test]
    fn test_detect_jsonc() {
        assert_eq!(detect_format(Path::new("locales/en.jsonc")), DocumentFormat::Jsonc);
        assert_eq!(detect_format(Path::new("locales/en.JSONC")), DocumentFormat::Jsonc);
    }

    #[test]
    fn test_format_display() {
        assert_eq!(DocumentFormat::Json.to_string(), "JSON");
        assert_eq!(DocumentFormat::Jsonc.to_string(), "JSONC");
        assert_eq!(DocumentFormat::Yaml.to_string(), "YAML");
    }
}
