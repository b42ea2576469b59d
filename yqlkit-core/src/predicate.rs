//! WHERE predicates: raw fragments and structured comparisons

use crate::{IntoOperator, Operator, Value};

/// A single predicate fragment of a WHERE clause.
///
/// Each predicate is rendered on its own and parenthesized by the select
/// builder, so raw fragments may contain their own `AND`/`OR`.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Fragment passed through verbatim
    Raw(String),
    /// `column OP literal`
    Compare {
        column: String,
        operator: Operator,
        value: Value,
    },
    /// `column IN (v1, v2, ...)` or `NOT IN`
    List {
        column: String,
        operator: Operator,
        values: Vec<Value>,
    },
}

impl Predicate {
    pub fn raw(fragment: impl Into<String>) -> Self {
        Predicate::Raw(fragment.into())
    }

    /// Compare a column against a value
    ///
    /// # Examples
    /// ```
    /// use yqlkit_core::{op, Predicate};
    ///
    /// let p = Predicate::compare("count", op::GT, 10);
    /// assert_eq!(p.to_sql(), "count > 10");
    /// ```
    pub fn compare<O, V>(column: impl Into<String>, operator: O, value: V) -> Self
    where
        O: IntoOperator,
        V: Into<Value>,
    {
        Predicate::Compare {
            column: column.into(),
            operator: operator.into_operator(),
            value: value.into(),
        }
    }

    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Operator::EQ, value)
    }

    pub fn is_null(column: impl Into<String>) -> Self {
        Self::compare(column, Operator::IS_NULL, Value::Null)
    }

    pub fn is_not_null(column: impl Into<String>) -> Self {
        Self::compare(column, Operator::IS_NOT_NULL, Value::Null)
    }

    pub fn in_list<I, V>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Predicate::List {
            column: column.into(),
            operator: Operator::IN,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn not_in_list<I, V>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Predicate::List {
            column: column.into(),
            operator: Operator::NOT_IN,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Render the fragment without the surrounding parentheses
    pub fn to_sql(&self) -> String {
        match self {
            Predicate::Raw(fragment) => fragment.clone(),
            Predicate::Compare {
                column,
                operator,
                value,
            } => {
                if operator.is_unary() {
                    format!("{} {}", column, operator)
                } else if *operator == Operator::IN || *operator == Operator::NOT_IN {
                    format!("{} {} ({})", column, operator, value.to_literal())
                } else {
                    format!("{} {} {}", column, operator, value.to_literal())
                }
            }
            Predicate::List {
                column,
                operator,
                values,
            } => {
                let literals: Vec<String> = values.iter().map(Value::to_literal).collect();
                format!("{} {} ({})", column, operator, literals.join(", "))
            }
        }
    }
}

impl From<&str> for Predicate {
    fn from(fragment: &str) -> Self {
        Predicate::Raw(fragment.to_string())
    }
}

impl From<String> for Predicate {
    fn from(fragment: String) -> Self {
        Predicate::Raw(fragment)
    }
}

impl From<&String> for Predicate {
    fn from(fragment: &String) -> Self {
        Predicate::Raw(fragment.clone())
    }
}

// Shorthand equality: ("id", 1)
impl<T> From<(&str, T)> for Predicate
where
    T: Into<Value>,
{
    fn from((column, value): (&str, T)) -> Self {
        Predicate::eq(column, value)
    }
}

// Explicit operator: ("count", op::GT, 10) or ("count", ">", 10)
impl<O, T> From<(&str, O, T)> for Predicate
where
    O: IntoOperator,
    T: Into<Value>,
{
    fn from((column, operator, value): (&str, O, T)) -> Self {
        Predicate::compare(column, operator, value)
    }
}

/// Trait for anything `where_`/`or_where` accept as a predicate group
pub trait IntoPredicates {
    fn into_predicates(self) -> Vec<Predicate>;
}

impl IntoPredicates for Predicate {
    fn into_predicates(self) -> Vec<Predicate> {
        vec![self]
    }
}

impl IntoPredicates for &str {
    fn into_predicates(self) -> Vec<Predicate> {
        vec![self.into()]
    }
}

impl IntoPredicates for String {
    fn into_predicates(self) -> Vec<Predicate> {
        vec![self.into()]
    }
}

impl<T> IntoPredicates for (&str, T)
where
    T: Into<Value>,
{
    fn into_predicates(self) -> Vec<Predicate> {
        vec![self.into()]
    }
}

impl<O, T> IntoPredicates for (&str, O, T)
where
    O: IntoOperator,
    T: Into<Value>,
{
    fn into_predicates(self) -> Vec<Predicate> {
        vec![self.into()]
    }
}

impl<P> IntoPredicates for Vec<P>
where
    P: Into<Predicate>,
{
    fn into_predicates(self) -> Vec<Predicate> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<P, const N: usize> IntoPredicates for [P; N]
where
    P: Into<Predicate>,
{
    fn into_predicates(self) -> Vec<Predicate> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<P> IntoPredicates for &[P]
where
    P: Clone + Into<Predicate>,
{
    fn into_predicates(self) -> Vec<Predicate> {
        self.iter().cloned().map(Into::into).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op;

    #[test]
    fn test_raw_fragment_passes_through() {
        assert_eq!(Predicate::raw("a = 1 OR b = 2").to_sql(), "a = 1 OR b = 2");
    }

    #[test]
    fn test_compare_renders_literals() {
        assert_eq!(Predicate::eq("name", "x").to_sql(), "name = 'x'");
        assert_eq!(Predicate::compare("n", "<=", 3).to_sql(), "n <= 3");
        assert_eq!(Predicate::compare("flag", op::NEQ, true).to_sql(), "flag != true");
    }

    #[test]
    fn test_null_checks_have_no_value() {
        assert_eq!(Predicate::is_null("note").to_sql(), "note IS NULL");
        assert_eq!(Predicate::is_not_null("note").to_sql(), "note IS NOT NULL");
    }

    #[test]
    fn test_list_predicates() {
        assert_eq!(Predicate::in_list("id", [1, 2, 3]).to_sql(), "id IN (1, 2, 3)");
        assert_eq!(
            Predicate::not_in_list("tag", ["a", "b"]).to_sql(),
            "tag NOT IN ('a', 'b')"
        );
    }

    #[test]
    fn test_tuple_conversions() {
        let p: Predicate = ("year", 2024).into();
        assert_eq!(p.to_sql(), "year = 2024");

        let p: Predicate = ("hour", op::GTE, 18).into();
        assert_eq!(p.to_sql(), "hour >= 18");
    }

    #[test]
    fn test_into_predicates_shapes() {
        assert_eq!("a=1".into_predicates().len(), 1);
        assert_eq!(vec!["a=1", "b=2"].into_predicates().len(), 2);
        assert_eq!(["a=1", "b=2", "c=3"].into_predicates().len(), 3);
        assert!(Vec::<&str>::new().into_predicates().is_empty());

        let fragments = vec!["x=1".to_string()];
        assert_eq!(fragments.as_slice().into_predicates(), vec![Predicate::raw("x=1")]);
    }
}
