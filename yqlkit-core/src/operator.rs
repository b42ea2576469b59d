//! Comparison operators for structured predicates

use std::fmt::{self, Display};

/// Comparison operator used by [`Predicate::compare`](crate::Predicate::compare)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator(&'static str);

impl Operator {
    pub const GT: Self = Operator(">");
    pub const LT: Self = Operator("<");
    pub const EQ: Self = Operator("=");
    pub const NEQ: Self = Operator("!=");
    pub const GTE: Self = Operator(">=");
    pub const LTE: Self = Operator("<=");
    pub const LIKE: Self = Operator("LIKE");
    pub const ILIKE: Self = Operator("ILIKE");
    pub const IN: Self = Operator("IN");
    pub const NOT_IN: Self = Operator("NOT IN");
    pub const IS_NULL: Self = Operator("IS NULL");
    pub const IS_NOT_NULL: Self = Operator("IS NOT NULL");

    /// Create a custom operator for dialect-specific comparisons
    ///
    /// # Examples
    /// ```
    /// use yqlkit_core::Operator;
    ///
    /// let regexp = Operator::custom("REGEXP");
    /// assert_eq!(regexp.as_str(), "REGEXP");
    /// ```
    pub const fn custom(op: &'static str) -> Self {
        Operator(op)
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &str {
        self.0
    }

    /// Operators that take no right-hand value
    pub fn is_unary(&self) -> bool {
        *self == Operator::IS_NULL || *self == Operator::IS_NOT_NULL
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait for types that can be converted to operators
pub trait IntoOperator {
    fn into_operator(self) -> Operator;
}

impl IntoOperator for Operator {
    fn into_operator(self) -> Operator {
        self
    }
}

/// Known spellings map to the constants, anything else is kept as a custom operator
impl IntoOperator for &'static str {
    fn into_operator(self) -> Operator {
        match self {
            ">" => Operator::GT,
            "<" => Operator::LT,
            "=" | "==" => Operator::EQ,
            "!=" | "<>" => Operator::NEQ,
            ">=" => Operator::GTE,
            "<=" => Operator::LTE,
            "LIKE" | "like" => Operator::LIKE,
            "ILIKE" | "ilike" => Operator::ILIKE,
            "IN" | "in" => Operator::IN,
            "NOT IN" | "not in" => Operator::NOT_IN,
            "IS NULL" | "is null" => Operator::IS_NULL,
            "IS NOT NULL" | "is not null" => Operator::IS_NOT_NULL,
            other => Operator::custom(other),
        }
    }
}

/// Convenience module for operator constants
pub mod op {
    use super::Operator;

    pub const GT: Operator = Operator::GT;
    pub const LT: Operator = Operator::LT;
    pub const EQ: Operator = Operator::EQ;
    pub const NEQ: Operator = Operator::NEQ;
    pub const GTE: Operator = Operator::GTE;
    pub const LTE: Operator = Operator::LTE;
    pub const LIKE: Operator = Operator::LIKE;
    pub const ILIKE: Operator = Operator::ILIKE;
    pub const IN: Operator = Operator::IN;
    pub const NOT_IN: Operator = Operator::NOT_IN;
    pub const IS_NULL: Operator = Operator::IS_NULL;
    pub const IS_NOT_NULL: Operator = Operator::IS_NOT_NULL;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_constants() {
        assert_eq!(Operator::GT.as_str(), ">");
        assert_eq!(Operator::NEQ.as_str(), "!=");
        assert_eq!(Operator::LIKE.as_str(), "LIKE");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Operator::GTE), ">=");
        assert_eq!(format!("{}", Operator::NOT_IN), "NOT IN");
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!(">".into_operator(), Operator::GT);
        assert_eq!("like".into_operator(), Operator::LIKE);
        assert_eq!("==".into_operator(), Operator::EQ);
        assert_eq!("<>".into_operator(), Operator::NEQ);
    }

    #[test]
    fn test_unknown_string_becomes_custom() {
        let op = "REGEXP".into_operator();
        assert_eq!(op, Operator::custom("REGEXP"));
    }

    #[test]
    fn test_unary_operators() {
        assert!(Operator::IS_NULL.is_unary());
        assert!("is not null".into_operator().is_unary());
        assert!(!Operator::EQ.is_unary());
    }
}
