//! Common types and traits shared across all query builders

use std::fmt;

use crate::{Error, Predicate, Result};

/// Statement separator appended by every `build()`
pub const TERMINATOR: char = ';';

/// Core trait for every builder state that can produce a statement
pub trait QueryBuilder {
    /// Render the finished statement.
    ///
    /// Borrowing `self` keeps the session untouched, so calling this
    /// repeatedly yields the same string.
    fn build(&self) -> String;
}

/// How WHERE predicates are connected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhereConnector {
    And,
    Or,
}

impl fmt::Display for WhereConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WhereConnector::And => write!(f, "AND"),
            WhereConnector::Or => write!(f, "OR"),
        }
    }
}

/// A rendered WHERE predicate and the connector gluing it to whatever came before
#[derive(Debug, Clone, PartialEq)]
pub struct WhereCondition {
    pub predicate: String,
    pub connector: WhereConnector,
}

/// Accumulated WHERE predicates of one select session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    conditions: Vec<WhereCondition>,
}

impl WhereClause {
    /// Append one predicate group; every predicate is glued with `connector`.
    /// An empty group leaves the clause unchanged.
    pub fn push(&mut self, predicates: Vec<Predicate>, connector: WhereConnector) {
        self.conditions
            .extend(predicates.iter().map(|predicate| WhereCondition {
                predicate: predicate.to_sql(),
                connector,
            }));
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> &[WhereCondition] {
        &self.conditions
    }

    /// `WHERE (p1) AND (p2) OR (p3)`, or `None` when nothing was added
    pub fn to_sql(&self) -> Option<String> {
        if self.conditions.is_empty() {
            return None;
        }

        let mut sql = String::from("WHERE ");
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                sql.push(' ');
                sql.push_str(&condition.connector.to_string());
                sql.push(' ');
            }
            sql.push('(');
            sql.push_str(&condition.predicate);
            sql.push(')');
        }
        Some(sql)
    }
}

/// Validate a table name handed to `from`/`into`
pub(crate) fn require_table(table: &str) -> Result<String> {
    if table.is_empty() {
        return Err(Error::invalid_argument("Table name required"));
    }
    Ok(table.to_string())
}

/// Trait to convert various types into column lists
pub trait IntoColumns {
    fn into_columns(self) -> Vec<String>;
}

/// All columns
impl IntoColumns for () {
    fn into_columns(self) -> Vec<String> {
        Vec::new()
    }
}

impl IntoColumns for &str {
    fn into_columns(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoColumns for String {
    fn into_columns(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoColumns for Vec<String> {
    fn into_columns(self) -> Vec<String> {
        self
    }
}

impl IntoColumns for Vec<&str> {
    fn into_columns(self) -> Vec<String> {
        self.into_iter().map(|s| s.to_string()).collect()
    }
}

impl IntoColumns for &[&str] {
    fn into_columns(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoColumns for [&str; N] {
    fn into_columns(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

// For tuples
impl IntoColumns for (&str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string()]
    }
}

impl IntoColumns for (&str, &str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string(), self.2.to_string()]
    }
}

impl IntoColumns for (&str, &str, &str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![
            self.0.to_string(),
            self.1.to_string(),
            self.2.to_string(),
            self.3.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_clause_renders_nothing() {
        let mut clause = WhereClause::default();
        clause.push(Vec::new(), WhereConnector::And);
        assert!(clause.is_empty());
        assert_eq!(clause.to_sql(), None);
    }

    #[test]
    fn test_first_group_and_chaining() {
        let mut clause = WhereClause::default();
        clause.push(
            vec![Predicate::raw("a=1"), Predicate::raw("b=2")],
            WhereConnector::And,
        );
        assert_eq!(clause.to_sql().unwrap(), "WHERE (a=1) AND (b=2)");

        clause.push(
            vec![Predicate::raw("c=3"), Predicate::raw("d=4")],
            WhereConnector::Or,
        );
        assert_eq!(
            clause.to_sql().unwrap(),
            "WHERE (a=1) AND (b=2) OR (c=3) OR (d=4)"
        );
        assert_eq!(clause.conditions().len(), 4);
    }

    #[test]
    fn test_first_connector_is_ignored() {
        let mut clause = WhereClause::default();
        clause.push(vec![Predicate::raw("x")], WhereConnector::Or);
        assert_eq!(clause.to_sql().unwrap(), "WHERE (x)");
    }

    #[test]
    fn test_require_table() {
        assert_eq!(require_table("visits").unwrap(), "visits");
        assert!(matches!(
            require_table(""),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_into_columns_implementations() {
        assert!(().into_columns().is_empty());
        assert_eq!("name".into_columns(), vec!["name"]);
        assert_eq!(("name", "age").into_columns(), vec!["name", "age"]);
        assert_eq!(vec!["name", "age"].into_columns(), vec!["name", "age"]);
        assert_eq!(["a", "b", "c"].into_columns(), vec!["a", "b", "c"]);
    }
}
