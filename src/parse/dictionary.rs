// src/parse/dictionary.rs

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::compare::KeySet;
use crate::config::{detect_format, DocumentFormat, KeyMode};
use crate::error::{CheckError, Result};

use super::json_parser::JsonParser;
use super::yaml_parser::YamlParser;

/// Shape of a value in a locale dictionary.
///
/// Translated text is never inspected, so a value only records whether it
/// holds more keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Any non-mapping value: string, number, bool, null or array
    Leaf,
    /// A nested mapping
    Branch(BTreeMap<String, Node>),
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = Node;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a locale value")
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<Node, E> {
                Ok(Node::Leaf)
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<Node, E> {
                Ok(Node::Leaf)
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<Node, E> {
                Ok(Node::Leaf)
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<Node, E> {
                Ok(Node::Leaf)
            }

            fn visit_str<E: de::Error>(self, _: &str) -> std::result::Result<Node, E> {
                Ok(Node::Leaf)
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Node, E> {
                Ok(Node::Leaf)
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<Node, E> {
                Ok(Node::Leaf)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Node, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Node::Leaf)
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Node, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut children = BTreeMap::new();
                while let Some((key, value)) = map.next_entry::<String, Node>()? {
                    children.insert(key, value);
                }
                Ok(Node::Branch(children))
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

/// A loaded locale file: its top-level keys and the shape of their values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleDictionary {
    entries: BTreeMap<String, Node>,
}

impl LocaleDictionary {
    pub fn new(entries: BTreeMap<String, Node>) -> Self {
        Self { entries }
    }

    /// Number of top-level keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Extract the keys taking part in a comparison.
    ///
    /// `TopLevel` yields the document's own keys. `Nested` walks into
    /// mappings and yields one dot-notation path per leaf, so an empty nested
    /// mapping contributes nothing.
    pub fn key_set(&self, mode: KeyMode) -> KeySet {
        match mode {
            KeyMode::TopLevel => self.entries.keys().cloned().collect(),
            KeyMode::Nested => {
                let mut keys = Vec::new();
                Self::flatten(&self.entries, String::new(), &mut keys);
                keys.into_iter().collect()
            }
        }
    }

    fn flatten(entries: &BTreeMap<String, Node>, prefix: String, keys: &mut Vec<String>) {
        for (key, node) in entries {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };

            match node {
                Node::Leaf => keys.push(path),
                Node::Branch(children) => Self::flatten(children, path, keys),
            }
        }
    }
}

impl FromIterator<String> for LocaleDictionary {
    /// Build a dictionary of leaf values from bare keys
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|k| (k, Node::Leaf)).collect())
    }
}

/// Read a whole locale file as UTF-8 text.
///
/// The file handle is dropped before returning.
pub(crate) fn read_document(path: &Path, format: DocumentFormat) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| CheckError::from_read(path, e))?;
    String::from_utf8(bytes)
        .map_err(|e| CheckError::parse(path, format, format!("File is not valid UTF-8: {}", e)))
}

/// Read a locale file and parse it according to its extension.
pub fn load_dictionary(path: &Path) -> Result<LocaleDictionary> {
    let format = detect_format(path);
    tracing::debug!(file = %path.display(), %format, "loading locale file");

    let dictionary = match format {
        DocumentFormat::Json | DocumentFormat::Jsonc => JsonParser::parse_file(path)?,
        DocumentFormat::Yaml => YamlParser::parse_file(path)?,
    };

    tracing::debug!(file = %path.display(), keys = dictionary.len(), "loaded locale file");
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn nested_dictionary() -> LocaleDictionary {
        let mut auth = BTreeMap::new();
        auth.insert("login".to_string(), Node::Leaf);
        auth.insert("logout".to_string(), Node::Leaf);

        let mut entries = BTreeMap::new();
        entries.insert("title".to_string(), Node::Leaf);
        entries.insert("auth".to_string(), Node::Branch(auth));
        entries.insert("empty".to_string(), Node::Branch(BTreeMap::new()));
        LocaleDictionary::new(entries)
    }

    #[test]
    fn test_top_level_keys_only() {
        let keys = nested_dictionary().key_set(KeyMode::TopLevel);
        assert_eq!(keys.to_sorted_vec(), vec!["auth", "empty", "title"]);
    }

    #[test]
    fn test_nested_keys_flattened() {
        let keys = nested_dictionary().key_set(KeyMode::Nested);
        assert_eq!(
            keys.to_sorted_vec(),
            vec!["auth.login", "auth.logout", "title"]
        );
    }

    #[test]
    fn test_node_deserialize_shapes() {
        let node: Node = serde_json::from_str(r#"{"a": "x", "b": [1, 2], "c": {"d": null}}"#).unwrap();
        let Node::Branch(children) = node else {
            panic!("expected a mapping");
        };
        assert_eq!(children["a"], Node::Leaf);
        assert_eq!(children["b"], Node::Leaf);
        assert!(matches!(children["c"], Node::Branch(_)));
    }

    #[test]
    fn test_from_iter() {
        let dict: LocaleDictionary = ["a".to_string(), "b".to_string()].into_iter().collect();
        assert_eq!(dict.len(), 2);
        assert!(!dict.is_empty());
    }

    #[test]
    fn test_load_json_file() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"greeting": "Hello", "farewell": "Bye"}}"#).unwrap();

        let dict = load_dictionary(file.path()).unwrap();
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = Builder::new().suffix(".yml").tempfile().unwrap();
        write!(file, "greeting: Hello\nfarewell: Bye\n").unwrap();

        let dict = load_dictionary(file.path()).unwrap();
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dictionary(&dir.path().join("hi.json")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x7b, 0xff, 0xfe, 0x7d]).unwrap();

        let err = load_dictionary(file.path()).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("UTF-8"));
    }
}
