//! Bulk UPSERT builder: a typed-list DECLARE plus an UPSERT ... SELECT FROM AS_TABLE
//!
//! The rows themselves never appear in the statement. They are bound to the
//! declared parameter when the statement is executed.

use super::common::{require_table, QueryBuilder};
use crate::{Params, Result, Row};

/// Shape of the row list bound to a declared parameter
#[derive(Debug, Clone, PartialEq)]
pub struct StructDescriptor {
    param: String,
    fields: Vec<(String, String)>,
}

impl StructDescriptor {
    /// Start a descriptor for the given parameter, e.g. `$rows`
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            fields: Vec::new(),
        }
    }

    /// Append a column and its type name, e.g. `("count", "Uint64")`
    pub fn field(mut self, column: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.fields.push((column.into(), type_name.into()));
        self
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    fn declare(&self) -> String {
        let members: Vec<String> = self
            .fields
            .iter()
            .map(|(column, type_name)| format!("{}: {}", column, type_name))
            .collect();
        format!(
            "DECLARE {} AS List<Struct<\n{}>>;\n",
            self.param,
            members.join(",\n")
        )
    }

    fn upsert_into(&self, table: &str) -> String {
        let columns: Vec<&str> = self.fields.iter().map(|(column, _)| column.as_str()).collect();
        format!(
            "UPSERT INTO {}\nSELECT\n{}\nFROM AS_TABLE({});",
            table,
            columns.join(",\n"),
            self.param
        )
    }
}

impl<P, C, T, const N: usize> From<(P, [(C, T); N])> for StructDescriptor
where
    P: Into<String>,
    C: Into<String>,
    T: Into<String>,
{
    fn from((param, fields): (P, [(C, T); N])) -> Self {
        fields
            .into_iter()
            .fold(StructDescriptor::new(param), |descriptor, (column, type_name)| {
                descriptor.field(column, type_name)
            })
    }
}

impl<P, C, T> From<(P, Vec<(C, T)>)> for StructDescriptor
where
    P: Into<String>,
    C: Into<String>,
    T: Into<String>,
{
    fn from((param, fields): (P, Vec<(C, T)>)) -> Self {
        fields
            .into_iter()
            .fold(StructDescriptor::new(param), |descriptor, (column, type_name)| {
                descriptor.field(column, type_name)
            })
    }
}

/// Bulk UPSERT builder before the target table is named
#[derive(Debug, Clone)]
pub struct BulkUpsertBuilderInitial {
    descriptor: StructDescriptor,
}

/// Bulk UPSERT builder after `into()`
#[derive(Debug, Clone)]
pub struct BulkUpsertBuilderComplete {
    descriptor: StructDescriptor,
    table_name: String,
}

impl BulkUpsertBuilderInitial {
    pub fn new(descriptor: impl Into<StructDescriptor>) -> Self {
        Self {
            descriptor: descriptor.into(),
        }
    }

    /// Name the target table, transitioning to [`BulkUpsertBuilderComplete`]
    pub fn into(self, table: &str) -> Result<BulkUpsertBuilderComplete> {
        let table_name = require_table(table)?;
        Ok(BulkUpsertBuilderComplete {
            descriptor: self.descriptor,
            table_name,
        })
    }
}

impl BulkUpsertBuilderComplete {
    pub fn descriptor(&self) -> &StructDescriptor {
        &self.descriptor
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Bind `rows` to the declared parameter.
    ///
    /// Rows are bound as given; their columns are not checked against the
    /// descriptor.
    pub fn bind<I>(&self, rows: I) -> Params
    where
        I: IntoIterator,
        I::Item: Into<Row>,
    {
        Params::new().bind_rows(self.descriptor.param(), rows)
    }
}

impl QueryBuilder for BulkUpsertBuilderComplete {
    /// Render the DECLARE statement and the UPSERT ... AS_TABLE statement,
    /// separated by a blank line.
    ///
    /// # Examples
    /// ```
    /// use yqlkit_core::{bulk_upsert, QueryBuilder};
    ///
    /// let sql = bulk_upsert(("$rows", [("id", "Uint64"), ("name", "Utf8")]))
    ///     .into("t")?
    ///     .build();
    /// assert_eq!(
    ///     sql,
    ///     "DECLARE $rows AS List<Struct<\nid: Uint64,\nname: Utf8>>;\n\n\
    ///      UPSERT INTO t\nSELECT\nid,\nname\nFROM AS_TABLE($rows);"
    /// );
    /// # Ok::<(), yqlkit_core::Error>(())
    /// ```
    fn build(&self) -> String {
        let sql = format!(
            "{}\n{}",
            self.descriptor.declare(),
            self.descriptor.upsert_into(&self.table_name)
        );
        tracing::trace!(sql = %sql, "built bulk upsert statement");
        sql
    }
}
