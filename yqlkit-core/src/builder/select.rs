//! SELECT query builder implementation
//!
//! The chain is a set of typestates. Each state only exposes the calls that
//! are legal from it:
//!
//! ```text
//! select ─▶ Initial ─from─▶ Complete ─order_by─▶ Ordered ─limit─▶ Limited ─offset─▶ Offset
//!                            │  ▲ where_/or_where     │                 ▲
//!                            │  └─────────────────────┘                 │
//!                            └──────────────────limit────────────────────┘
//! ```

use super::common::{
    require_table, IntoColumns, QueryBuilder, WhereClause, WhereConnector, TERMINATOR,
};
use crate::{IntoPredicates, Result, Value};

/// Documented ceiling for `LIMIT`. Not enforced by the builder.
pub const MAX_ROWS: u64 = 1000;

/// Clause fragments owned by one select session
#[derive(Debug, Clone, Default)]
struct SelectState {
    query: String,
    where_clause: WhereClause,
    order_by: Option<String>,
    limit: Option<String>,
    offset: Option<String>,
}

impl SelectState {
    fn to_sql(&self) -> String {
        let mut sql = self.query.clone();

        if let Some(where_sql) = self.where_clause.to_sql() {
            sql.push(' ');
            sql.push_str(&where_sql);
        }

        for clause in [&self.order_by, &self.limit, &self.offset]
            .into_iter()
            .flatten()
        {
            sql.push(' ');
            sql.push_str(clause);
        }

        sql.push(TERMINATOR);
        tracing::trace!(sql = %sql, "built select statement");
        sql
    }
}

/// SELECT builder before a table is named. Only `from` is reachable.
#[derive(Debug, Clone)]
pub struct SelectBuilderInitial {
    state: SelectState,
}

/// SELECT builder after `from`: filters, ordering, limit or build
#[derive(Debug, Clone)]
pub struct SelectBuilderComplete {
    state: SelectState,
}

/// SELECT builder after `order_by`: only `limit` or build
#[derive(Debug, Clone)]
pub struct SelectBuilderOrdered {
    state: SelectState,
}

/// SELECT builder after `limit`: only `offset` or build
#[derive(Debug, Clone)]
pub struct SelectBuilderLimited {
    state: SelectState,
}

/// SELECT builder after `offset`: only build
#[derive(Debug, Clone)]
pub struct SelectBuilderOffset {
    state: SelectState,
}

impl SelectBuilderInitial {
    /// Start a SELECT of the given columns. No columns means `*`.
    pub fn new<T>(fields: T) -> Self
    where
        T: IntoColumns,
    {
        let columns = fields.into_columns();
        let fields = if columns.is_empty() {
            "*".to_string()
        } else {
            columns.join(", ")
        };

        Self {
            state: SelectState {
                query: format!("SELECT {}", fields),
                ..SelectState::default()
            },
        }
    }

    /// Name the source table, transitioning to [`SelectBuilderComplete`]
    ///
    /// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument)
    /// when `table` is empty.
    ///
    /// # Examples
    /// ```
    /// use yqlkit_core::{select, QueryBuilder};
    ///
    /// let sql = select(["id", "count"]).from("attendance")?.build();
    /// assert_eq!(sql, "SELECT id, count FROM attendance;");
    ///
    /// assert!(select(()).from("").is_err());
    /// # Ok::<(), yqlkit_core::Error>(())
    /// ```
    pub fn from(mut self, table: &str) -> Result<SelectBuilderComplete> {
        let table = require_table(table)?;
        self.state.query.push_str(" FROM ");
        self.state.query.push_str(&table);
        Ok(SelectBuilderComplete { state: self.state })
    }
}

impl SelectBuilderComplete {
    /// Add a predicate group joined with `AND`. Empty groups are ignored.
    ///
    /// # Examples
    /// ```
    /// use yqlkit_core::{select, op, QueryBuilder};
    ///
    /// let sql = select(())
    ///     .from("attendance")?
    ///     .where_(["year = 2024", "month = 5"])
    ///     .or_where(("hour", op::GTE, 18))
    ///     .build();
    /// assert_eq!(
    ///     sql,
    ///     "SELECT * FROM attendance WHERE (year = 2024) AND (month = 5) OR (hour >= 18);"
    /// );
    /// # Ok::<(), yqlkit_core::Error>(())
    /// ```
    pub fn where_<P>(mut self, predicates: P) -> Self
    where
        P: IntoPredicates,
    {
        self.state
            .where_clause
            .push(predicates.into_predicates(), WhereConnector::And);
        self
    }

    /// Add a predicate group joined with `OR`. Empty groups are ignored.
    pub fn or_where<P>(mut self, predicates: P) -> Self
    where
        P: IntoPredicates,
    {
        self.state
            .where_clause
            .push(predicates.into_predicates(), WhereConnector::Or);
        self
    }

    /// Add an AND predicate group (same as where_)
    pub fn and_where<P>(self, predicates: P) -> Self
    where
        P: IntoPredicates,
    {
        self.where_(predicates)
    }

    /// Sort by a column, transitioning to [`SelectBuilderOrdered`]
    pub fn order_by(mut self, column: &str) -> SelectBuilderOrdered {
        self.state.order_by = Some(format!("ORDER BY {}", column));
        SelectBuilderOrdered { state: self.state }
    }

    /// Set the LIMIT clause. See [`MAX_ROWS`] for the documented ceiling.
    pub fn limit(self, value: impl Into<Value>) -> SelectBuilderLimited {
        limit(self.state, value)
    }
}

impl SelectBuilderOrdered {
    /// Set the LIMIT clause. See [`MAX_ROWS`] for the documented ceiling.
    pub fn limit(self, value: impl Into<Value>) -> SelectBuilderLimited {
        limit(self.state, value)
    }
}

impl SelectBuilderLimited {
    /// Set the OFFSET clause.
    ///
    /// Falsy values (`0`, `""`, null) leave the clause out entirely.
    pub fn offset(mut self, value: impl Into<Value>) -> SelectBuilderOffset {
        let value = value.into();
        if value.is_truthy() {
            self.state.offset = Some(format!("OFFSET {}", value.to_bare()));
        }
        SelectBuilderOffset { state: self.state }
    }
}

fn limit(mut state: SelectState, value: impl Into<Value>) -> SelectBuilderLimited {
    state.limit = Some(format!("LIMIT {}", value.into().to_bare()));
    SelectBuilderLimited { state }
}

impl QueryBuilder for SelectBuilderComplete {
    fn build(&self) -> String {
        self.state.to_sql()
    }
}

impl QueryBuilder for SelectBuilderOrdered {
    fn build(&self) -> String {
        self.state.to_sql()
    }
}

impl QueryBuilder for SelectBuilderLimited {
    fn build(&self) -> String {
        self.state.to_sql()
    }
}

impl QueryBuilder for SelectBuilderOffset {
    fn build(&self) -> String {
        self.state.to_sql()
    }
}
