use crate::config::{detect_format, DocumentFormat};
use crate::error::{CheckError, Result};
use std::collections::BTreeMap;
use std::path::Path;

use super::dictionary::{read_document, LocaleDictionary, Node};

/// Parser for JSON locale files
pub struct JsonParser;

impl JsonParser {
    /// Parse a JSON file. Comments are only accepted in `.jsonc` files.
    pub fn parse_file(path: &Path) -> Result<LocaleDictionary> {
        let format = match detect_format(path) {
            DocumentFormat::Jsonc => DocumentFormat::Jsonc,
            _ => DocumentFormat::Json,
        };
        let content = read_document(path, format)?;

        match format {
            DocumentFormat::Jsonc => Self::parse_jsonc_str(&content, path),
            _ => Self::parse_str(&content, path),
        }
    }

    /// Parse strict JSON text whose top level must be an object.
    ///
    /// `path` is only used to label errors.
    pub fn parse_str(content: &str, path: &Path) -> Result<LocaleDictionary> {
        Self::parse_entries(content, path, DocumentFormat::Json)
    }

    /// Parse JSON text after stripping `//` and `/* */` comments.
    pub fn parse_jsonc_str(content: &str, path: &Path) -> Result<LocaleDictionary> {
        let cleaned_content = Self::strip_json_comments(content);
        Self::parse_entries(&cleaned_content, path, DocumentFormat::Jsonc)
    }

    fn parse_entries(content: &str, path: &Path, format: DocumentFormat) -> Result<LocaleDictionary> {
        let entries: BTreeMap<String, Node> = serde_json::from_str(content)
            .map_err(|e| CheckError::parse(path, format, Self::describe(&e)))?;

        Ok(LocaleDictionary::new(entries))
    }

    fn describe(err: &serde_json::Error) -> String {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => format!("Top level is not a key-value mapping: {}", err),
            Category::Eof => format!("Unexpected end of file: {}", err),
            Category::Syntax | Category::Io => format!("Invalid JSON syntax: {}", err),
        }
    }

    /// Strip single-line (//) and multi-line (/* */) comments from JSON.
    /// Newlines inside comments are kept so serde_json line numbers still match
    /// the file.
    fn strip_json_comments(content: &str) -> String {
        let mut result = String::with_capacity(content.len());
        let mut chars = content.chars().peekable();
        let mut in_string = false;
        let mut escape_next = false;

        while let Some(ch) = chars.next() {
            if escape_next {
                result.push(ch);
                escape_next = false;
                continue;
            }

            match ch {
                '\\' if in_string => {
                    result.push(ch);
                    escape_next = true;
                }
                '"' => {
                    in_string = !in_string;
                    result.push(ch);
                }
                '/' if !in_string && chars.peek() == Some(&'/') => {
                    chars.next();
                    for c in chars.by_ref() {
                        if c == '\n' {
                            result.push('\n');
                            break;
                        }
                    }
                }
                '/' if !in_string && chars.peek() == Some(&'*') => {
                    chars.next();
                    let mut prev = ' ';
                    for c in chars.by_ref() {
                        if prev == '*' && c == '/' {
                            break;
                        }
                        if c == '\n' {
                            result.push('\n');
                        }
                        prev = c;
                    }
                }
                _ => result.push(ch),
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeyMode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(content: &str) -> Result<LocaleDictionary> {
        JsonParser::parse_str(content, Path::new("en.json"))
    }

    #[test]
    fn test_parse_simple_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"key": "value"}}"#).unwrap();

        let dict = JsonParser::parse_file(file.path()).unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.key_set(KeyMode::TopLevel).to_sorted_vec(), vec!["key"]);
    }

    #[test]
    fn test_parse_nested_json_keeps_top_level() {
        let dict = parse(r#"{"parent": {"child": "value"}, "other": 1}"#).unwrap();
        assert_eq!(
            dict.key_set(KeyMode::TopLevel).to_sorted_vec(),
            vec!["other", "parent"]
        );
        assert_eq!(
            dict.key_set(KeyMode::Nested).to_sorted_vec(),
            vec!["other", "parent.child"]
        );
    }

    #[test]
    fn test_parse_empty_object() {
        let dict = parse("{}").unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn test_duplicate_keys_collapse() {
        let dict = parse(r#"{"a": "1", "a": "2"}"#).unwrap();
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_comments_rejected_in_json() {
        let err = parse("{\"a\": 1 // note\n}").unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("Invalid JSON syntax"));

        let err = parse(r#"{"a": 1 /* note */}"#).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_comments_rejected_in_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, "{{\n  // title\n  \"a\": 1\n}}").unwrap();

        let err = JsonParser::parse_file(file.path()).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("JSON file"));
    }

    #[test]
    fn test_jsonc_file_accepts_comments() {
        let mut file = tempfile::Builder::new().suffix(".jsonc").tempfile().unwrap();
        writeln!(file, "{{\n  // title\n  \"a\": 1\n}}").unwrap();

        let dict = JsonParser::parse_file(file.path()).unwrap();
        assert_eq!(dict.key_set(KeyMode::TopLevel).to_sorted_vec(), vec!["a"]);
    }

    #[test]
    fn test_parse_jsonc_comments() {
        let dict = JsonParser::parse_jsonc_str(
            r#"{
  // page title
  "title": "Home", /* inline */ "url": "http://example.com//path"
}"#,
            Path::new("en.jsonc"),
        )
        .unwrap();
        assert_eq!(
            dict.key_set(KeyMode::TopLevel).to_sorted_vec(),
            vec!["title", "url"]
        );
    }

    #[test]
    fn test_strip_comments_preserves_strings() {
        let stripped = JsonParser::strip_json_comments(r#"{"a": "x // y /* z */ \" w"}"#);
        assert_eq!(stripped, r#"{"a": "x // y /* z */ \" w"}"#);
    }

    #[test]
    fn test_top_level_array_is_parse_error() {
        let err = parse(r#"["a", "b"]"#).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("not a key-value mapping"));
    }

    #[test]
    fn test_top_level_scalar_is_parse_error() {
        let err = parse(r#""hello""#).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_malformed_json() {
        let err = parse("{ key: 'invalid json' }").unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("Invalid JSON syntax"));
        assert!(err.to_string().contains("en.json"));
    }

    #[test]
    fn test_truncated_json() {
        let err = parse(r#"{"a": "#).unwrap_err();
        assert!(err.to_string().contains("Unexpected end of file"));
    }
}
