//! Support for ARB (Application Resource Bundle) files.
//!
//! An ARB file is a flat JSON object. Message keys map to strings; `@key`
//! entries hold metadata for the message `key`; anything else (`@@locale`,
//! custom attributes) is carried through verbatim. Key order is preserved
//! when reading and writing.
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

use crate::error::Error;

/// Indentation used when writing ARB files.
pub const INDENT: &[u8] = b"    ";

/// Prefix that marks a metadata entry.
pub const METADATA_PREFIX: char = '@';

/// Returns the metadata key for `key` (`"greeting"` -> `"@greeting"`).
pub fn metadata_key(key: &str) -> String {
    format!("{}{}", METADATA_PREFIX, key)
}

/// An in-memory ARB document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Format {
    pub entries: Map<String, Value>,
}

impl Format {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the string value of message `key`, if it is a string.
    pub fn message(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Returns the `@key` metadata object for message `key`.
    pub fn metadata(&self, key: &str) -> Option<&Value> {
        self.entries.get(&metadata_key(key))
    }

    /// Sets message `key`. An existing key keeps its position.
    pub fn set_message(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.to_string(), Value::String(value.to_string()));
    }

    /// Sets the `@key` metadata for message `key`, replacing any previous object.
    pub fn set_metadata(&mut self, key: &str, metadata: Value) {
        self.entries.insert(metadata_key(key), metadata);
    }

    /// Renders the document exactly as it is written to disk.
    pub fn to_pretty_string(&self) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.to_writer(&mut buf)?;
        String::from_utf8(buf).map_err(|e| Error::DataMismatch(e.to_string()))
    }

    /// Parses a document from any reader. The top-level value must be an object.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let entries: Map<String, Value> = serde_json::from_reader(reader)?;
        Ok(Format { entries })
    }

    /// Parses a document held in memory.
    pub fn parse(content: &str) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(content))
    }

    /// Reads the ARB file at `path`.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Writes pretty-printed JSON with four-space indentation and unescaped
    /// non-ASCII text.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.entries.serialize(&mut serializer)?;
        Ok(())
    }

    /// Writes the ARB file at `path`, replacing previous content.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use serde_json::json;

    #[test]
    fn test_parse_preserves_order() {
        let content = r#"{"zeta": "Z", "@@locale": "en", "alpha": "A"}"#;
        let document = Format::parse(content).unwrap();
        let keys: Vec<&String> = document.entries.keys().collect();
        assert_eq!(keys, vec!["zeta", "@@locale", "alpha"]);
        assert_eq!(document.message("alpha"), Some("A"));
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(matches!(
            Format::parse("[1, 2]"),
            Err(Error::Parse(_))
        ));
        assert!(Format::parse("{ not json").is_err());
    }

    #[test]
    fn test_write_uses_four_space_indent() {
        let mut document = Format::new();
        document.set_message("greeting", "Hello {name}");
        document.set_metadata("greeting", json!({"placeholders": {"name": {}}}));

        let expected = indoc! {r#"
            {
                "greeting": "Hello {name}",
                "@greeting": {
                    "placeholders": {
                        "name": {}
                    }
                }
            }"#};
        assert_eq!(document.to_pretty_string().unwrap(), expected);
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let mut document = Format::new();
        document.set_message("dish", "Café crème brûlée 你好");
        let rendered = document.to_pretty_string().unwrap();
        assert!(rendered.contains("Café crème brûlée 你好"));
        assert!(!rendered.contains("\\u"));
    }

    #[test]
    fn test_set_message_keeps_position() {
        let mut document = Format::parse(r#"{"a": "1", "b": "2"}"#).unwrap();
        document.set_message("a", "updated");
        document.set_message("c", "3");
        let keys: Vec<&String> = document.entries.keys().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(document.message("a"), Some("updated"));
    }

    #[test]
    fn test_metadata_key() {
        assert_eq!(metadata_key("greeting"), "@greeting");
    }
}
