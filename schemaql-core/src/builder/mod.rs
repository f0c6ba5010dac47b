//! Query builder module

pub mod common;
pub mod join;
pub mod select;

// Re-export types from submodules
pub use common::{
    Columns, IntoColumns, JoinClause, JoinCondition, JoinType, QualifiedColumn, QueryBuilder,
    Relation, SelectQuery, WhereClause,
};
pub use join::JoinClauseBuilder;
pub use select::SelectBuilder;
