//! In-memory `.strings` table.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use super::error::{LoadError, ParseError};
use super::parser::parse_strings;

/// A parsed `.strings` table mapping keys to localized values.
///
/// Duplicate keys follow last-write-wins semantics: entries apply in source
/// order and a later entry overwrites an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StringsTable {
    entries: BTreeMap<String, String>,
}

impl StringsTable {
    /// Parse a table from `.strings` content.
    pub fn parse(content: &str) -> Result<StringsTable, ParseError> {
        let mut entries = BTreeMap::new();
        for (key, value) in parse_strings(content)? {
            entries.insert(key, value);
        }
        Ok(StringsTable { entries })
    }

    /// Load a table from a `.strings` file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<StringsTable, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        StringsTable::parse(&content).map_err(|e| {
            let (line, column) = e.position();
            let message = match e {
                ParseError::Syntax { message, .. } => message,
                ParseError::UnexpectedEof { .. } => "unexpected end of file".to_string(),
            };
            LoadError::Parse {
                path: path.to_path_buf(),
                line,
                column,
                message,
            }
        })
    }

    /// Look up the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// All keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_keys_last_write_wins() {
        let table = StringsTable::parse(
            r#"
            "Hello" = "first";
            "Hello" = "second";
            "#,
        )
        .expect("should parse");
        assert_eq!(table.get("Hello"), Some("second"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn missing_key_is_none() {
        let table = StringsTable::parse(r#""Hello" = "Bonjour";"#).expect("should parse");
        assert_eq!(table.get("Bye"), None);
    }

    #[test]
    fn keys_are_sorted() {
        let table = StringsTable::parse(
            r#"
            "b" = "2";
            "a" = "1";
            "c" = "3";
            "#,
        )
        .expect("should parse");
        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}
