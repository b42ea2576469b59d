//! Query builder module

pub mod bulk_upsert;
pub mod common;
pub mod select;
pub mod upsert;

// Re-export types from submodules
pub use bulk_upsert::{BulkUpsertBuilderComplete, BulkUpsertBuilderInitial, StructDescriptor};
pub use common::{IntoColumns, QueryBuilder, WhereClause, WhereCondition, WhereConnector};
pub use select::{
    SelectBuilderComplete, SelectBuilderInitial, SelectBuilderLimited, SelectBuilderOffset,
    SelectBuilderOrdered, MAX_ROWS,
};
pub use upsert::{UpsertBuilderComplete, UpsertBuilderInitial};
