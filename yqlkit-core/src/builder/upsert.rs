//! Single-row UPSERT builder implementations

use super::common::{require_table, QueryBuilder, TERMINATOR};
use crate::{Result, Row, Value};

/// UPSERT builder before the target table is named.
/// Holds the rendered `(columns) VALUES (values)` part.
#[derive(Debug, Clone)]
pub struct UpsertBuilderInitial {
    clause: String,
}

/// UPSERT builder after `into()`: only build remains
#[derive(Debug, Clone)]
pub struct UpsertBuilderComplete {
    query: String,
}

impl UpsertBuilderInitial {
    /// Render the column and value lists of `row`.
    ///
    /// The row is expected to carry the table's primary key; that is not
    /// checked here.
    pub fn new(row: impl Into<Row>) -> Self {
        let row = row.into();
        let columns: Vec<&str> = row.columns().collect();
        let values: Vec<String> = row.values().map(Value::to_literal).collect();

        Self {
            clause: format!("({}) VALUES ({})", columns.join(", "), values.join(", ")),
        }
    }

    /// Name the target table, transitioning to [`UpsertBuilderComplete`]
    ///
    /// # Examples
    /// ```
    /// use yqlkit_core::{upsert, QueryBuilder, Row, Value};
    ///
    /// let row = Row::new().with("id", 1).with("name", "x").with("note", Value::Null);
    /// let sql = upsert(row).into("t")?.build();
    /// assert_eq!(sql, "UPSERT INTO t (id, name, note) VALUES (1, 'x', null);");
    /// # Ok::<(), yqlkit_core::Error>(())
    /// ```
    pub fn into(self, table: &str) -> Result<UpsertBuilderComplete> {
        let table = require_table(table)?;
        Ok(UpsertBuilderComplete {
            query: format!("UPSERT INTO {} {}", table, self.clause),
        })
    }
}

impl QueryBuilder for UpsertBuilderComplete {
    fn build(&self) -> String {
        let mut sql = self.query.clone();
        sql.push(TERMINATOR);
        tracing::trace!(sql = %sql, "built upsert statement");
        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{upsert, Error};

    #[test]
    fn test_upsert_builder() {
        let row = Row::new().with("id", 1).with("name", "x").with("note", Value::Null);
        let sql = upsert(row).into("t").unwrap().build();
        assert_eq!(sql, "UPSERT INTO t (id, name, note) VALUES (1, 'x', null);");
    }

    #[test]
    fn test_upsert_keeps_row_order() {
        let sql = upsert([("z", 1), ("a", 2)]).into("t").unwrap().build();
        assert_eq!(sql, "UPSERT INTO t (z, a) VALUES (1, 2);");
    }

    #[test]
    fn test_upsert_renders_bools_and_floats() {
        let row = Row::new()
            .with("id", 7u64)
            .with("active", true)
            .with("ratio", 0.5);
        let sql = upsert(row).into("flags").unwrap().build();
        assert_eq!(
            sql,
            "UPSERT INTO flags (id, active, ratio) VALUES (7, true, 0.5);"
        );
    }

    #[test]
    fn test_upsert_does_not_escape_quotes() {
        let sql = upsert([("name", "O'Brien")]).into("t").unwrap().build();
        assert_eq!(sql, "UPSERT INTO t (name) VALUES ('O'Brien');");
    }

    #[test]
    fn test_upsert_from_json_row() {
        let row = Row::from_json(serde_json::json!({
            "date": 1714557600000i64,
            "year": 2024,
            "month": 5,
            "count": 312,
        }))
        .unwrap();
        let sql = upsert(row).into("attendance").unwrap().build();
        assert_eq!(
            sql,
            "UPSERT INTO attendance (date, year, month, count) VALUES (1714557600000, 2024, 5, 312);"
        );
    }

    #[test]
    fn test_upsert_requires_table() {
        let result = upsert([("id", 1)]).into("");
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_empty_row_is_not_validated() {
        let sql = upsert(Row::new()).into("t").unwrap().build();
        assert_eq!(sql, "UPSERT INTO t () VALUES ();");
    }

    #[test]
    fn test_build_is_idempotent() {
        let query = upsert([("id", 1)]).into("t").unwrap();
        assert_eq!(query.build(), query.build());
    }
}
