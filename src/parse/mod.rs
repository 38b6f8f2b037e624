pub mod dictionary;
pub mod json_parser;
pub mod yaml_parser;

pub use dictionary::{load_dictionary, LocaleDictionary, Node};
pub use json_parser::JsonParser;
pub use yaml_parser::YamlParser;
