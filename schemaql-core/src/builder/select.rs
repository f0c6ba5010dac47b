//! Schema-checked SELECT query builder

use std::marker::PhantomData;

use super::common::{JoinType, QueryBuilder, Relation, SelectQuery, WhereClause};
use super::join::JoinClauseBuilder;
use crate::schema::{AssignableTo, Column, Distinct, Nullable, Selection, Table};
use crate::{Operator, Value};

/// SELECT query builder bound to table `T`.
///
/// Every method consumes the builder, records one clause and hands it back, so
/// calls chain in any order. Arguments are checked against the schema by the
/// trait bounds; an invalid column, a literal of the wrong type or a null check
/// on a non-nullable column does not compile:
///
/// ```compile_fail
/// use schemaql_core::{schema, table};
///
/// schema! {
///     users {
///         id -> i64,
///     }
/// }
///
/// // `id` is not nullable
/// let _ = table(users::table).where_null(users::id);
/// ```
///
/// ```compile_fail
/// use schemaql_core::{schema, table, op};
///
/// schema! {
///     users {
///         id -> i64,
///         userName -> String,
///     }
/// }
///
/// // a text literal for an integer column
/// let _ = table(users::table).where_(users::id, op::EQ, "1");
/// ```
#[derive(Debug, Clone)]
pub struct SelectBuilder<T: Table> {
    query: SelectQuery,
    _table: PhantomData<T>,
}

impl<T: Table> Default for SelectBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Table> SelectBuilder<T> {
    /// Create a new `SELECT * FROM T` builder
    pub fn new() -> Self {
        Self {
            query: SelectQuery::new(T::NAME),
            _table: PhantomData,
        }
    }

    /// Replace the column selection with `All` or one or more columns of `T`
    ///
    /// # Examples
    /// ```
    /// use schemaql_core::{schema, table, All, QueryBuilder, RenderOptions};
    ///
    /// schema! {
    ///     users {
    ///         id -> i64,
    ///         userName -> String,
    ///     }
    /// }
    ///
    /// let query = table(users::table).select((users::id, users::userName));
    /// assert_eq!(
    ///     query.build_with(&RenderOptions::plain()),
    ///     "SELECT id, userName FROM users"
    /// );
    /// assert_eq!(query.select(All).build(), "SELECT * FROM `users`");
    /// ```
    pub fn select<S>(mut self, columns: S) -> Self
    where
        S: Selection<T>,
    {
        self.query.columns = columns.into_columns();
        self
    }

    /// Add an AND WHERE `column <op> value` condition
    pub fn where_<C, V>(self, column: C, operator: Operator, value: V) -> Self
    where
        C: Column<Table = T>,
        V: Into<C::Value>,
    {
        self.push_basic(column, operator, value, Relation::And)
    }

    /// Add an OR WHERE `column <op> value` condition
    pub fn or_where<C, V>(self, column: C, operator: Operator, value: V) -> Self
    where
        C: Column<Table = T>,
        V: Into<C::Value>,
    {
        self.push_basic(column, operator, value, Relation::Or)
    }

    /// Add an AND WHERE condition (same as where_)
    pub fn and_where<C, V>(self, column: C, operator: Operator, value: V) -> Self
    where
        C: Column<Table = T>,
        V: Into<C::Value>,
    {
        self.where_(column, operator, value)
    }

    /// Add an AND WHERE `column IS NULL` condition; nullable columns only
    pub fn where_null<C>(self, column: C) -> Self
    where
        C: Column<Table = T>,
        C::Value: Nullable,
    {
        self.push_null(column, Relation::And)
    }

    /// Add an OR WHERE `column IS NULL` condition; nullable columns only
    pub fn or_where_null<C>(self, column: C) -> Self
    where
        C: Column<Table = T>,
        C::Value: Nullable,
    {
        self.push_null(column, Relation::Or)
    }

    /// Add an AND WHERE `column IS NOT NULL` condition; nullable columns only
    pub fn where_not_null<C>(self, column: C) -> Self
    where
        C: Column<Table = T>,
        C::Value: Nullable,
    {
        self.push_not_null(column, Relation::And)
    }

    /// Add an OR WHERE `column IS NOT NULL` condition; nullable columns only
    pub fn or_where_not_null<C>(self, column: C) -> Self
    where
        C: Column<Table = T>,
        C::Value: Nullable,
    {
        self.push_not_null(column, Relation::Or)
    }

    /// Add an AND WHERE `column <op> other` condition.
    ///
    /// `other` must be a different column of `T` whose value type is
    /// [`AssignableTo`] the value type of `column`: the same type, or its
    /// non-null form when `column` is nullable.
    ///
    /// ```
    /// use schemaql_core::{schema, table, op, QueryBuilder, RenderOptions};
    ///
    /// schema! {
    ///     posts {
    ///         id -> i64,
    ///         likes -> Option<i64>,
    ///     }
    /// }
    ///
    /// let sql = table(posts::table)
    ///     .where_column(posts::likes, op::GT, posts::id)
    ///     .build_with(&RenderOptions::plain());
    /// assert_eq!(sql, "SELECT * FROM posts WHERE 1 = 1 AND likes > id");
    /// ```
    ///
    /// A nullable `other` against a non-null `column` does not compile, and
    /// neither does comparing a column with itself:
    ///
    /// ```compile_fail
    /// use schemaql_core::{schema, table, op};
    ///
    /// schema! {
    ///     posts {
    ///         id -> i64,
    ///         likes -> Option<i64>,
    ///     }
    /// }
    ///
    /// let _ = table(posts::table).where_column(posts::id, op::GT, posts::likes);
    /// ```
    ///
    /// ```compile_fail
    /// use schemaql_core::{schema, table, op};
    ///
    /// schema! {
    ///     posts {
    ///         likes -> Option<i64>,
    ///         comments -> Option<i64>,
    ///     }
    /// }
    ///
    /// let _ = table(posts::table).where_column(posts::likes, op::GT, posts::likes);
    /// ```
    pub fn where_column<L, R>(self, column: L, operator: Operator, other: R) -> Self
    where
        L: Column<Table = T>,
        R: Column<Table = T> + Distinct<L>,
        R::Value: AssignableTo<L::Value>,
    {
        self.push_column(column, operator, other, Relation::And)
    }

    /// Add an OR WHERE `column <op> other` condition
    pub fn or_where_column<L, R>(self, column: L, operator: Operator, other: R) -> Self
    where
        L: Column<Table = T>,
        R: Column<Table = T> + Distinct<L>,
        R::Value: AssignableTo<L::Value>,
    {
        self.push_column(column, operator, other, Relation::Or)
    }

    /// Add an INNER JOIN on `other`, configured by `configure`.
    ///
    /// `configure` runs immediately on a fresh [`JoinClauseBuilder`] and returns
    /// it; its conditions become the ON clause.
    ///
    /// ```
    /// use schemaql_core::{schema, table, op, QueryBuilder, RenderOptions};
    ///
    /// schema! {
    ///     users {
    ///         id -> i64,
    ///     }
    ///     posts {
    ///         id -> i64,
    ///         userId -> i64,
    ///     }
    /// }
    ///
    /// let sql = table(users::table)
    ///     .join(posts::table, |join| join.on_column(posts::userId, op::EQ, users::id))
    ///     .build_with(&RenderOptions::plain());
    /// assert_eq!(sql, "SELECT * FROM users INNER JOIN posts ON posts.userId = users.id");
    /// ```
    ///
    /// Joining a table with itself does not compile:
    ///
    /// ```compile_fail
    /// use schemaql_core::{schema, table};
    ///
    /// schema! {
    ///     users {
    ///         id -> i64,
    ///     }
    /// }
    ///
    /// let _ = table(users::table).join(users::table, |join| join);
    /// ```
    pub fn join<O, F>(self, other: O, configure: F) -> Self
    where
        O: Table + Distinct<T>,
        F: FnOnce(JoinClauseBuilder<O, T>) -> JoinClauseBuilder<O, T>,
    {
        self.push_join(JoinType::Inner, other, configure)
    }

    /// Add a LEFT JOIN on `other`
    pub fn left_join<O, F>(self, other: O, configure: F) -> Self
    where
        O: Table + Distinct<T>,
        F: FnOnce(JoinClauseBuilder<O, T>) -> JoinClauseBuilder<O, T>,
    {
        self.push_join(JoinType::Left, other, configure)
    }

    /// Add a RIGHT JOIN on `other`
    pub fn right_join<O, F>(self, other: O, configure: F) -> Self
    where
        O: Table + Distinct<T>,
        F: FnOnce(JoinClauseBuilder<O, T>) -> JoinClauseBuilder<O, T>,
    {
        self.push_join(JoinType::Right, other, configure)
    }

    /// Add a FULL OUTER JOIN on `other`
    pub fn full_join<O, F>(self, other: O, configure: F) -> Self
    where
        O: Table + Distinct<T>,
        F: FnOnce(JoinClauseBuilder<O, T>) -> JoinClauseBuilder<O, T>,
    {
        self.push_join(JoinType::Full, other, configure)
    }

    fn push_basic<C, V>(mut self, _column: C, operator: Operator, value: V, relation: Relation) -> Self
    where
        C: Column<Table = T>,
        V: Into<C::Value>,
    {
        let typed: C::Value = value.into();
        let value: Value = typed.into();
        self.query.where_clauses.push(WhereClause::Basic {
            column: C::NAME.to_string(),
            operator,
            value,
            relation,
        });
        self
    }

    fn push_null<C: Column<Table = T>>(mut self, _column: C, relation: Relation) -> Self {
        self.query.where_clauses.push(WhereClause::Null {
            column: C::NAME.to_string(),
            relation,
        });
        self
    }

    fn push_not_null<C: Column<Table = T>>(mut self, _column: C, relation: Relation) -> Self {
        self.query.where_clauses.push(WhereClause::NotNull {
            column: C::NAME.to_string(),
            relation,
        });
        self
    }

    fn push_column<L, R>(mut self, _column: L, operator: Operator, _other: R, relation: Relation) -> Self
    where
        L: Column<Table = T>,
        R: Column<Table = T>,
    {
        self.query.where_clauses.push(WhereClause::Column {
            left: L::NAME.to_string(),
            operator,
            right: R::NAME.to_string(),
            relation,
        });
        self
    }

    fn push_join<O, F>(mut self, join_type: JoinType, _other: O, configure: F) -> Self
    where
        O: Table,
        F: FnOnce(JoinClauseBuilder<O, T>) -> JoinClauseBuilder<O, T>,
    {
        let clause = configure(JoinClauseBuilder::new()).into_clause(join_type);
        tracing::trace!(
            table = T::NAME,
            joined = O::NAME,
            conditions = clause.conditions.len(),
            "merged join clause"
        );
        self.query.join_clauses.push(clause);
        self
    }
}

impl<T: Table> QueryBuilder for SelectBuilder<T> {
    fn query(&self) -> &SelectQuery {
        &self.query
    }
}
