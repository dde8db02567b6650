use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::{LookupError, PhoneticLookup};
use crate::config::ConfigError;

#[derive(Deserialize)]
struct ReadingTable {
    #[serde(default)]
    readings: BTreeMap<String, Vec<String>>,
}

/// In-memory reading table, typically user overrides loaded from TOML.
///
/// ```toml
/// [readings]
/// "和" = ["he", "huo"]
/// "重" = ["chong"]
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableLookup {
    readings: HashMap<char, Vec<String>>,
}

impl TableLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document holding a `[readings]` table.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let table: ReadingTable =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_map(&table.readings)
    }

    /// Build from string keys, checking every key is a single character and
    /// every reading list is non-empty with non-empty readings.
    pub fn from_map(map: &BTreeMap<String, Vec<String>>) -> Result<Self, ConfigError> {
        let mut lookup = Self::new();
        for (key, readings) in map {
            let field = format!("readings.{key}");
            let mut chars = key.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field,
                        reason: "key must be exactly one character".to_string(),
                    })
                }
            };
            if readings.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "reading list is empty".to_string(),
                });
            }
            if readings.iter().any(|r| r.is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "reading must not be empty".to_string(),
                });
            }
            lookup.insert(symbol, readings.iter().cloned());
        }
        Ok(lookup)
    }

    /// Replace the readings for `symbol`. Duplicates are dropped, first wins.
    pub fn insert<I, S>(&mut self, symbol: char, readings: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for r in readings {
            let r = r.into();
            if !list.contains(&r) {
                list.push(r);
            }
        }
        self.readings.insert(symbol, list);
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl FromIterator<(char, Vec<String>)> for TableLookup {
    fn from_iter<T: IntoIterator<Item = (char, Vec<String>)>>(iter: T) -> Self {
        let mut lookup = Self::new();
        for (symbol, readings) in iter {
            lookup.insert(symbol, readings);
        }
        lookup
    }
}

impl PhoneticLookup for TableLookup {
    fn readings_for(&self, symbol: char) -> Result<Vec<String>, LookupError> {
        let Some(readings) = self.readings.get(&symbol) else {
            return Ok(Vec::new());
        };
        // `insert` accepts anything, so an empty reading can still slip in.
        if let Some(bad) = readings.iter().find(|r| r.is_empty()) {
            return Err(LookupError::Malformed {
                symbol,
                reading: bad.clone(),
            });
        }
        Ok(readings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[readings]
"和" = ["he", "huo"]
"平" = ["ping"]
"#;
        let table = TableLookup::from_toml(toml).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.readings_for('和').unwrap(), vec!["he", "huo"]);
        assert_eq!(table.readings_for('平').unwrap(), vec!["ping"]);
        assert!(table.readings_for('中').unwrap().is_empty());
    }

    #[test]
    fn missing_table_is_empty() {
        let table = TableLookup::from_toml("").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn error_multi_char_key() {
        let toml = r#"
[readings]
"中国" = ["zhongguo"]
"#;
        let err = TableLookup::from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn error_empty_list() {
        let toml = r#"
[readings]
"中" = []
"#;
        let err = TableLookup::from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn error_empty_reading() {
        let toml = r#"
[readings]
"中" = ["zhong", ""]
"#;
        let err = TableLookup::from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn error_invalid_toml() {
        let err = TableLookup::from_toml("[readings\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn insert_dedups() {
        let mut table = TableLookup::new();
        table.insert('重', ["zhong", "chong", "zhong"]);
        assert_eq!(table.readings_for('重').unwrap(), vec!["zhong", "chong"]);
    }

    #[test]
    fn empty_reading_is_malformed() {
        let mut table = TableLookup::new();
        table.insert('坏', [""]);
        let err = table.readings_for('坏').unwrap_err();
        assert!(matches!(err, LookupError::Malformed { symbol: '坏', .. }));
    }
}
