//! yqlkit Core - typestate builders for YQL statements
//!
//! Three independent flows each produce a finished statement string:
//!
//! - [`select`] → `from` → `where_`/`or_where` → `order_by` → `limit` → `offset` → `build`
//! - [`upsert`] → `into` → `build`
//! - [`bulk_upsert`] → `into` → `build`
//!
//! Every step returns a distinct type exposing only the calls legal from
//! there, so `select(..).limit(10)` does not compile. Nothing here talks to a
//! database; hand the built string to an [`Executor`].
//!
//! ```
//! use yqlkit_core::{select, upsert, QueryBuilder, Row};
//!
//! let query = select(["date", "count"])
//!     .from("attendance")?
//!     .where_(["year = 2024"])
//!     .order_by("date")
//!     .limit(100)
//!     .build();
//! assert_eq!(
//!     query,
//!     "SELECT date, count FROM attendance WHERE (year = 2024) ORDER BY date LIMIT 100;"
//! );
//!
//! let save = upsert(Row::new().with("date", 1u64).with("count", 42))
//!     .into("attendance")?
//!     .build();
//! assert_eq!(save, "UPSERT INTO attendance (date, count) VALUES (1, 42);");
//! # Ok::<(), yqlkit_core::Error>(())
//! ```
//!
//! Out-of-order calls are rejected at compile time:
//!
//! ```compile_fail
//! use yqlkit_core::select;
//!
//! let _ = select(()).limit(10);
//! ```
//!
//! ```compile_fail
//! use yqlkit_core::select;
//!
//! let _ = select(()).from("t").unwrap().order_by("id").where_("a = 1");
//! ```

pub mod builder;
pub mod error;
pub mod executor;
pub mod operator;
pub mod predicate;
pub mod row;
pub mod value;

// Re-export main types
pub use builder::{
    BulkUpsertBuilderComplete, BulkUpsertBuilderInitial, IntoColumns, QueryBuilder,
    SelectBuilderComplete, SelectBuilderInitial, SelectBuilderLimited, SelectBuilderOffset,
    SelectBuilderOrdered, StructDescriptor, UpsertBuilderComplete, UpsertBuilderInitial,
    WhereConnector, MAX_ROWS,
};
pub use error::{Error, Result};
pub use executor::{
    ExecutableStatement, Executor, Outcome, Param, Params, FAILURE_CODE, SUCCESS_CODE,
};
pub use operator::{op, IntoOperator, Operator};
pub use predicate::{IntoPredicates, Predicate};
pub use row::Row;
pub use value::Value;

/// Create a new SELECT query builder for the given columns.
///
/// An empty list (or `()`) selects `*`.
pub fn select<T>(fields: T) -> SelectBuilderInitial
where
    T: IntoColumns,
{
    SelectBuilderInitial::new(fields)
}

/// Create a new `SELECT *` query builder
pub fn select_all() -> SelectBuilderInitial {
    SelectBuilderInitial::new(())
}

/// Create a new single-row UPSERT builder
pub fn upsert(row: impl Into<Row>) -> UpsertBuilderInitial {
    UpsertBuilderInitial::new(row)
}

/// Create a new bulk UPSERT builder for rows shaped like `descriptor`
///
/// # Examples
/// ```
/// use yqlkit_core::{bulk_upsert, QueryBuilder, StructDescriptor};
///
/// let descriptor = StructDescriptor::new("$rows")
///     .field("date", "Uint64")
///     .field("count", "Uint32");
/// let sql = bulk_upsert(descriptor).into("attendance")?.build();
/// assert!(sql.starts_with("DECLARE $rows AS List<Struct<"));
/// assert!(sql.ends_with("FROM AS_TABLE($rows);"));
/// # Ok::<(), yqlkit_core::Error>(())
/// ```
pub fn bulk_upsert(descriptor: impl Into<StructDescriptor>) -> BulkUpsertBuilderInitial {
    BulkUpsertBuilderInitial::new(descriptor)
}

/// Reserved for a future DELETE flow. Currently does nothing.
pub fn remove() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flows_are_independent() {
        let read = select(["count"]).from("attendance").unwrap().where_("year = 2024");
        let write = upsert([("count", 1)]).into("attendance").unwrap();
        let bulk = bulk_upsert(("$rows", [("count", "Uint32")]))
            .into("attendance")
            .unwrap();

        assert_eq!(
            read.build(),
            "SELECT count FROM attendance WHERE (year = 2024);"
        );
        assert_eq!(write.build(), "UPSERT INTO attendance (count) VALUES (1);");
        assert!(bulk.build().contains("count: Uint32"));
    }

    #[test]
    fn test_remove_is_a_noop() {
        remove();
        assert_eq!(select(()).from("t").unwrap().build(), "SELECT * FROM t;");
    }

    #[test]
    fn test_select_prefix_and_suffix() {
        let fields = ["a", "b", "c"];
        let sql = select(fields).from("events").unwrap().build();
        assert!(sql.starts_with("SELECT a, b, c"));
        assert!(sql.ends_with("FROM events;"));
    }

    #[test]
    fn test_table_name_errors_across_flows() {
        assert!(matches!(select(()).from(""), Err(Error::InvalidArgument { .. })));
        assert!(matches!(upsert([("id", 1)]).into(""), Err(Error::InvalidArgument { .. })));
        assert!(matches!(
            bulk_upsert(StructDescriptor::new("$rows")).into(""),
            Err(Error::InvalidArgument { .. })
        ));
    }
}
