//! JOIN ON clause builder

use std::marker::PhantomData;

use super::common::{JoinClause, JoinCondition, JoinType, QualifiedColumn, Relation};
use crate::schema::{AssignableTo, Column, Table};
use crate::{Operator, Value};

/// Collects the ON conditions of one join between the joined table `J` and the
/// originating table `O`.
///
/// Only handed out by `SelectBuilder::join` and friends; it has no render step
/// of its own.
#[derive(Debug, Clone)]
pub struct JoinClauseBuilder<J: Table, O: Table> {
    conditions: Vec<JoinCondition>,
    _tables: PhantomData<(J, O)>,
}

impl<J: Table, O: Table> JoinClauseBuilder<J, O> {
    pub(crate) fn new() -> Self {
        Self {
            conditions: Vec::new(),
            _tables: PhantomData,
        }
    }

    /// AND `J.column <op> value`
    pub fn on<C, V>(self, column: C, operator: Operator, value: V) -> Self
    where
        C: Column<Table = J>,
        V: Into<C::Value>,
    {
        self.push_value(column, operator, value, Relation::And)
    }

    /// OR `J.column <op> value`
    pub fn or_on<C, V>(self, column: C, operator: Operator, value: V) -> Self
    where
        C: Column<Table = J>,
        V: Into<C::Value>,
    {
        self.push_value(column, operator, value, Relation::Or)
    }

    /// AND `J.column <op> O.other`; `other` must hold the same value type as
    /// `column`, or its non-null form when `column` is nullable.
    ///
    /// ```compile_fail
    /// use schemaql_core::{schema, table, op};
    ///
    /// schema! {
    ///     users {
    ///         id -> i64,
    ///         invitedBy -> Option<i64>,
    ///     }
    ///     posts {
    ///         userId -> i64,
    ///     }
    /// }
    ///
    /// // a nullable column of `users` against a non-null column of `posts`
    /// let _ = table(users::table)
    ///     .join(posts::table, |join| join.on_column(posts::userId, op::EQ, users::invitedBy));
    /// ```
    pub fn on_column<C, D>(self, column: C, operator: Operator, other: D) -> Self
    where
        C: Column<Table = J>,
        D: Column<Table = O>,
        D::Value: AssignableTo<C::Value>,
    {
        self.push_column(column, operator, other, Relation::And)
    }

    /// OR `J.column <op> O.other`
    pub fn or_on_column<C, D>(self, column: C, operator: Operator, other: D) -> Self
    where
        C: Column<Table = J>,
        D: Column<Table = O>,
        D::Value: AssignableTo<C::Value>,
    {
        self.push_column(column, operator, other, Relation::Or)
    }

    /// Conditions collected so far
    pub fn conditions(&self) -> &[JoinCondition] {
        &self.conditions
    }

    pub(crate) fn into_clause(self, join_type: JoinType) -> JoinClause {
        JoinClause {
            join_type,
            table: J::NAME.to_string(),
            conditions: self.conditions,
        }
    }

    fn push_value<C, V>(mut self, _column: C, operator: Operator, value: V, relation: Relation) -> Self
    where
        C: Column<Table = J>,
        V: Into<C::Value>,
    {
        let typed: C::Value = value.into();
        let value: Value = typed.into();
        self.conditions.push(JoinCondition::Value {
            column: qualified::<C>(),
            operator,
            value,
            relation,
        });
        self
    }

    fn push_column<C, D>(mut self, _column: C, operator: Operator, _other: D, relation: Relation) -> Self
    where
        C: Column<Table = J>,
        D: Column<Table = O>,
    {
        self.conditions.push(JoinCondition::Column {
            left: qualified::<C>(),
            operator,
            right: qualified::<D>(),
            relation,
        });
        self
    }
}

fn qualified<C: Column>() -> QualifiedColumn {
    QualifiedColumn::new(<C::Table as Table>::NAME, C::NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::op;
    use crate::RenderOptions;

    crate::schema! {
        users {
            id -> i64,
            userName -> String,
        }
        posts {
            id -> i64,
            userId -> i64,
            title -> String,
        }
    }

    #[test]
    fn test_conditions_accumulate_in_order() {
        let join = JoinClauseBuilder::<posts::table, users::table>::new()
            .on_column(posts::userId, op::EQ, users::id)
            .or_on(posts::title, op::EQ, "intro");
        let conditions = join.conditions();
        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions[0].relation(), Relation::And);
        assert_eq!(conditions[1].relation(), Relation::Or);
        assert_eq!(
            conditions[0].to_sql_with(&RenderOptions::plain()),
            "posts.userId = users.id"
        );
    }

    #[test]
    fn test_into_clause_names_joined_table() {
        let clause = JoinClauseBuilder::<posts::table, users::table>::new()
            .on(posts::id, op::GT, 3)
            .or_on_column(posts::title, op::EQ, users::userName)
            .into_clause(JoinType::Left);
        assert_eq!(clause.table, "posts");
        assert_eq!(clause.join_type, JoinType::Left);
        assert_eq!(
            clause.conditions[1],
            JoinCondition::Column {
                left: QualifiedColumn::new("posts", "title"),
                operator: op::EQ,
                right: QualifiedColumn::new("users", "userName"),
                relation: Relation::Or,
            }
        );
    }
}
