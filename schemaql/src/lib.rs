//! SchemaQL - a schema-checked SQL SELECT builder for Rust
//!
//! Declare your tables once, then build queries whose columns, literal types
//! and null checks are verified by the compiler.
//!
//! ```
//! use schemaql::prelude::*;
//!
//! schema! {
//!     users {
//!         id -> i64,
//!         userName -> String,
//!         isActive -> bool,
//!     }
//!     posts {
//!         id -> i64,
//!         userId -> i64,
//!         likes -> Option<i64>,
//!     }
//! }
//!
//! let sql = from(users::table)
//!     .select((users::id, users::userName))
//!     .join(posts::table, |join| join.on_column(posts::userId, op::EQ, users::id))
//!     .where_(users::isActive, op::EQ, true)
//!     .build();
//!
//! assert_eq!(
//!     sql,
//!     "SELECT `id`, `userName` FROM `users` \
//!      INNER JOIN `posts` ON `posts`.`userId` = `users`.`id` \
//!      WHERE 1 = 1 AND `isActive` = true"
//! );
//! ```
//!
//! When the schema is only known at runtime, use [`dynamic::Schema`] instead;
//! the same mistakes are reported as [`Error`]s.

pub use schemaql_core::{
    All, AssignableTo, Column, ColumnInfo, Columns, Distinct, Error, IntoColumns, JoinClause,
    JoinClauseBuilder, JoinCondition, JoinType, Nullable, Operator, QualifiedColumn, QueryBuilder,
    Relation, RenderOptions, Result, SelectBuilder, SelectQuery, Selection, SqlType, Table, Value,
    ValueKind, WhereClause, dynamic, op, schema,
};

/// Create a new SELECT query builder for the given table
pub fn from<T: Table>(table: T) -> SelectBuilder<T> {
    schemaql_core::table(table)
}

/// Everything needed to declare a schema and build queries against it
pub mod prelude {
    pub use crate::from;
    pub use schemaql_core::{All, QueryBuilder, RenderOptions, op, schema};
}
