//! Ordered column/value rows

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result, Value};

/// An ordered mapping from column name to scalar value.
///
/// Insertion order is the order columns and values are emitted in.
/// Duplicate column names are kept as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    entries: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column, consuming and returning the row
    ///
    /// # Examples
    /// ```
    /// use yqlkit_core::Row;
    ///
    /// let row = Row::new().with("id", 1).with("name", "x");
    /// assert_eq!(row.columns().collect::<Vec<_>>(), vec!["id", "name"]);
    /// ```
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(column, value);
        self
    }

    /// Append a column
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.entries.push((column.into(), value.into()));
    }

    /// First value stored under `column`
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a row from a JSON object, keeping the object's key order.
    ///
    /// Nested arrays and objects are rejected.
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Object(map) => map
                .into_iter()
                .map(|(column, value)| -> Result<(String, Value)> {
                    Ok((column, Value::try_from(value)?))
                })
                .collect::<Result<Vec<_>>>()
                .map(|entries| Self { entries }),
            other => Err(Error::invalid_argument(format!(
                "Expected a JSON object for a row, got {}",
                other
            ))),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (column, value) in &self.entries {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = Row;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of column names to scalar values")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Row, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut row = Row::new();
                while let Some((column, value)) = access.next_entry::<String, Value>()? {
                    row.push(column, value);
                }
                Ok(row)
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_keeps_insertion_order() {
        let row = Row::new().with("z", 1).with("a", 2).with("m", 3);
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(
            row.values().cloned().collect::<Vec<_>>(),
            vec![Value::I64(1), Value::I64(2), Value::I64(3)]
        );
    }

    #[test]
    fn test_row_from_pairs() {
        let row = Row::from([("id", Value::from(1)), ("note", Value::Null)]);
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("note"), Some(&Value::Null));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn test_duplicate_columns_are_kept() {
        let row = Row::new().with("id", 1).with("id", 2);
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("id"), Some(&Value::I64(1)));
    }

    #[test]
    fn test_from_json_preserves_key_order() {
        let row = Row::from_json(serde_json::json!({
            "date": 1700000000000i64,
            "year": 2023,
            "count": 42,
            "label": "evening",
        }))
        .unwrap();
        assert_eq!(
            row.columns().collect::<Vec<_>>(),
            vec!["date", "year", "count", "label"]
        );
        assert_eq!(row.get("label"), Some(&Value::from("evening")));
    }

    #[test]
    fn test_from_json_rejects_non_objects_and_nesting() {
        assert!(matches!(
            Row::from_json(serde_json::json!([1, 2])),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            Row::from_json(serde_json::json!({"tags": ["a"]})),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_serialize_as_ordered_map() {
        let row = Row::new().with("b", 1).with("a", "x");
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"b":1,"a":"x"}"#);
    }

    #[test]
    fn test_deserialize_keeps_order() {
        let row: Row = serde_json::from_str(r#"{"b":1,"a":null}"#).unwrap();
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(row.get("a"), Some(&Value::Null));
    }
}
