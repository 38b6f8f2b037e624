use std::collections::BTreeMap;
use std::path::Path;
use yaml_rust::yaml::Hash;
use yaml_rust::{Yaml, YamlLoader};

use crate::config::DocumentFormat;
use crate::error::{CheckError, Result};

use super::dictionary::{read_document, LocaleDictionary, Node};

/// Parser for YAML locale files
pub struct YamlParser;

impl YamlParser {
    pub fn parse_file(path: &Path) -> Result<LocaleDictionary> {
        let content = read_document(path, DocumentFormat::Yaml)?;
        Self::parse_str(&content, path)
    }

    /// Parse YAML text whose first document must be a mapping.
    ///
    /// An empty or comment-only file is an empty dictionary; an explicit `~`
    /// or `null` document is not. Documents after the first are ignored.
    pub fn parse_str(content: &str, path: &Path) -> Result<LocaleDictionary> {
        let docs = YamlLoader::load_from_str(content)
            .map_err(|e| CheckError::parse(path, DocumentFormat::Yaml, e.to_string()))?;

        if docs.len() > 1 {
            tracing::warn!(
                file = %path.display(),
                documents = docs.len(),
                "only the first YAML document is compared"
            );
        }

        match docs.into_iter().next() {
            None => Ok(LocaleDictionary::default()),
            Some(Yaml::Hash(hash)) => {
                let entries = Self::convert_hash(&hash, path)?;
                Ok(LocaleDictionary::new(entries))
            }
            Some(other) => Err(CheckError::parse(
                path,
                DocumentFormat::Yaml,
                format!(
                    "Top level is not a key-value mapping: found {}",
                    Self::kind(&other)
                ),
            )),
        }
    }

    fn convert_hash(hash: &Hash, path: &Path) -> Result<BTreeMap<String, Node>> {
        let mut entries = BTreeMap::new();

        for (key, value) in hash {
            let key = Self::key_text(key).ok_or_else(|| {
                CheckError::parse(
                    path,
                    DocumentFormat::Yaml,
                    format!("Unsupported key: {} cannot be used as a key", Self::kind(key)),
                )
            })?;

            let node = match value {
                Yaml::Hash(children) => Node::Branch(Self::convert_hash(children, path)?),
                _ => Node::Leaf,
            };
            entries.insert(key, node);
        }

        Ok(entries)
    }

    /// Text form of a scalar key; `None` for keys that have no text form.
    fn key_text(key: &Yaml) -> Option<String> {
        match key {
            Yaml::String(s) => Some(s.clone()),
            Yaml::Integer(i) => Some(i.to_string()),
            Yaml::Real(r) => Some(r.clone()),
            Yaml::Boolean(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn kind(yaml: &Yaml) -> &'static str {
        match yaml {
            Yaml::Real(_) | Yaml::Integer(_) => "a number",
            Yaml::String(_) => "a string",
            Yaml::Boolean(_) => "a boolean",
            Yaml::Array(_) => "a sequence",
            Yaml::Hash(_) => "a mapping",
            Yaml::Alias(_) => "an alias",
            Yaml::Null => "null",
            Yaml::BadValue => "an invalid value",
        }
    }
}
