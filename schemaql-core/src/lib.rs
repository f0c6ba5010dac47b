//! SchemaQL Core - schema-checked SQL SELECT building
//!
//! Tables and columns are declared once with [`schema!`]; the resulting marker
//! types let the compiler reject queries that reference unknown columns,
//! compare values of the wrong type or null-check non-nullable columns.
//! The [`dynamic`] module offers the same builder checked at runtime instead.

pub mod builder;
pub mod config;
pub mod dynamic;
pub mod error;
pub mod ident;
pub mod operator;
pub mod schema;
pub mod value;

// Re-export main types
pub use builder::{
    Columns, IntoColumns, JoinClause, JoinClauseBuilder, JoinCondition, JoinType, QualifiedColumn,
    QueryBuilder, Relation, SelectBuilder, SelectQuery, WhereClause,
};
pub use config::RenderOptions;
pub use error::{Error, Result};
pub use operator::{op, Operator};
pub use schema::{All, AssignableTo, Column, ColumnInfo, Distinct, Nullable, Selection, SqlType, Table};
pub use value::{Value, ValueKind};

/// Create a new SELECT query builder for the given table
pub fn table<T: Table>(_table: T) -> SelectBuilder<T> {
    SelectBuilder::new()
}
