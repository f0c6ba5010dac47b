//! Runtime-checked query building.
//!
//! For schemas that are only known at runtime (loaded from JSON, generated by a
//! migration tool, ...). Every call validates table and column names, value
//! types and nullability against the [`Schema`] and returns [`Result`](crate::Result).

pub mod builder;
pub mod schema;

pub use builder::{DynamicJoinBuilder, DynamicSelectBuilder};
pub use schema::{ColumnDef, Schema, TableDef};
