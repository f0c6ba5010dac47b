//! Runtime-checked SELECT and JOIN builders
//!
//! Same clauses and rendering as [`SelectBuilder`](crate::SelectBuilder), but
//! tables and columns are plain strings validated against a [`Schema`] at the
//! start of every call. A rejected call returns the error instead of the builder.

use super::schema::{ColumnDef, Schema, TableDef};
use crate::builder::common::{
    Columns, IntoColumns, JoinClause, JoinCondition, JoinType, QualifiedColumn, QueryBuilder,
    Relation, SelectQuery, WhereClause,
};
use crate::{Error, Operator, Result, Value, ValueKind};

/// SELECT builder validated against a runtime [`Schema`]
#[derive(Debug, Clone)]
pub struct DynamicSelectBuilder<'s> {
    schema: &'s Schema,
    table: &'s TableDef,
    query: SelectQuery,
}

impl<'s> DynamicSelectBuilder<'s> {
    /// Create a new `SELECT * FROM table` builder; fails for unknown tables
    pub fn new(schema: &'s Schema, table: &str) -> Result<Self> {
        let definition = schema.get(table).map_err(rejected)?;
        Ok(Self {
            schema,
            table: definition,
            query: SelectQuery::new(table),
        })
    }

    /// Replace the column selection. `"*"` selects every column; anything else
    /// must name one or more columns of the table.
    pub fn select<C>(mut self, columns: C) -> Result<Self>
    where
        C: IntoColumns,
    {
        let names = columns.into_columns();
        if names.is_empty() {
            return Err(rejected(Error::invalid_query(
                "select requires at least one column",
            )));
        }

        if names.len() == 1 && names[0] == "*" {
            self.query.columns = Columns::All;
            return Ok(self);
        }

        for name in &names {
            self.column(name)?;
        }
        self.query.columns = Columns::List(names);
        Ok(self)
    }

    /// Add an AND WHERE `column <op> value` condition
    pub fn where_(self, column: &str, operator: Operator, value: impl Into<Value>) -> Result<Self> {
        self.push_basic(column, operator, value.into(), Relation::And)
    }

    /// Add an OR WHERE `column <op> value` condition
    pub fn or_where(self, column: &str, operator: Operator, value: impl Into<Value>) -> Result<Self> {
        self.push_basic(column, operator, value.into(), Relation::Or)
    }

    /// Add an AND WHERE condition (same as where_)
    pub fn and_where(self, column: &str, operator: Operator, value: impl Into<Value>) -> Result<Self> {
        self.where_(column, operator, value)
    }

    /// Add an AND WHERE `column IS NULL` condition; nullable columns only
    pub fn where_null(self, column: &str) -> Result<Self> {
        self.push_null(column, false, Relation::And)
    }

    /// Add an OR WHERE `column IS NULL` condition; nullable columns only
    pub fn or_where_null(self, column: &str) -> Result<Self> {
        self.push_null(column, false, Relation::Or)
    }

    /// Add an AND WHERE `column IS NOT NULL` condition; nullable columns only
    pub fn where_not_null(self, column: &str) -> Result<Self> {
        self.push_null(column, true, Relation::And)
    }

    /// Add an OR WHERE `column IS NOT NULL` condition; nullable columns only
    pub fn or_where_not_null(self, column: &str) -> Result<Self> {
        self.push_null(column, true, Relation::Or)
    }

    /// Add an AND WHERE `column <op> other`; a different column of the same kind,
    /// nullable only when `column` is
    pub fn where_column(self, column: &str, operator: Operator, other: &str) -> Result<Self> {
        self.push_column(column, operator, other, Relation::And)
    }

    /// Add an OR WHERE `column <op> other`
    pub fn or_where_column(self, column: &str, operator: Operator, other: &str) -> Result<Self> {
        self.push_column(column, operator, other, Relation::Or)
    }

    /// Add an INNER JOIN on `table`, configured by `configure`
    pub fn join<F>(self, table: &str, configure: F) -> Result<Self>
    where
        F: FnOnce(DynamicJoinBuilder<'s>) -> Result<DynamicJoinBuilder<'s>>,
    {
        self.push_join(JoinType::Inner, table, configure)
    }

    /// Add a LEFT JOIN on `table`
    pub fn left_join<F>(self, table: &str, configure: F) -> Result<Self>
    where
        F: FnOnce(DynamicJoinBuilder<'s>) -> Result<DynamicJoinBuilder<'s>>,
    {
        self.push_join(JoinType::Left, table, configure)
    }

    /// Add a RIGHT JOIN on `table`
    pub fn right_join<F>(self, table: &str, configure: F) -> Result<Self>
    where
        F: FnOnce(DynamicJoinBuilder<'s>) -> Result<DynamicJoinBuilder<'s>>,
    {
        self.push_join(JoinType::Right, table, configure)
    }

    /// Add a FULL OUTER JOIN on `table`
    pub fn full_join<F>(self, table: &str, configure: F) -> Result<Self>
    where
        F: FnOnce(DynamicJoinBuilder<'s>) -> Result<DynamicJoinBuilder<'s>>,
    {
        self.push_join(JoinType::Full, table, configure)
    }

    fn column(&self, name: &str) -> Result<&'s ColumnDef> {
        lookup(self.table, &self.query.table, name)
    }

    fn push_basic(mut self, column: &str, operator: Operator, value: Value, relation: Relation) -> Result<Self> {
        let definition = self.column(column)?;
        check_value(&self.query.table, column, definition, &value)?;

        self.query.where_clauses.push(WhereClause::Basic {
            column: column.to_string(),
            operator,
            value,
            relation,
        });
        Ok(self)
    }

    fn push_null(mut self, column: &str, negated: bool, relation: Relation) -> Result<Self> {
        let definition = self.column(column)?;
        if !definition.nullable {
            return Err(rejected(Error::not_nullable(&self.query.table, column)));
        }

        let column = column.to_string();
        self.query.where_clauses.push(if negated {
            WhereClause::NotNull { column, relation }
        } else {
            WhereClause::Null { column, relation }
        });
        Ok(self)
    }

    fn push_column(mut self, column: &str, operator: Operator, other: &str, relation: Relation) -> Result<Self> {
        let left = self.column(column)?;
        let right = self.column(other)?;
        if column == other {
            return Err(rejected(Error::self_comparison(&self.query.table, column)));
        }
        check_comparable(
            &QualifiedColumn::new(&self.query.table, column),
            left,
            &QualifiedColumn::new(&self.query.table, other),
            right,
        )?;

        self.query.where_clauses.push(WhereClause::Column {
            left: column.to_string(),
            operator,
            right: other.to_string(),
            relation,
        });
        Ok(self)
    }

    fn push_join<F>(mut self, join_type: JoinType, table: &str, configure: F) -> Result<Self>
    where
        F: FnOnce(DynamicJoinBuilder<'s>) -> Result<DynamicJoinBuilder<'s>>,
    {
        if table == self.query.table {
            return Err(rejected(Error::self_join(table)));
        }
        let definition = self.schema.get(table).map_err(rejected)?;

        let join = DynamicJoinBuilder {
            table: table.to_string(),
            definition,
            origin: self.query.table.clone(),
            origin_definition: self.table,
            conditions: Vec::new(),
        };
        let clause = configure(join)?.into_clause(join_type);
        tracing::trace!(
            table = %self.query.table,
            joined = %clause.table,
            conditions = clause.conditions.len(),
            "merged join clause"
        );
        self.query.join_clauses.push(clause);
        Ok(self)
    }
}

impl QueryBuilder for DynamicSelectBuilder<'_> {
    fn query(&self) -> &SelectQuery {
        &self.query
    }
}

/// ON clause builder for one runtime-checked join
#[derive(Debug, Clone)]
pub struct DynamicJoinBuilder<'s> {
    table: String,
    definition: &'s TableDef,
    origin: String,
    origin_definition: &'s TableDef,
    conditions: Vec<JoinCondition>,
}

impl<'s> DynamicJoinBuilder<'s> {
    /// AND `joined.column <op> value`; `column` names a column of the joined table
    pub fn on(self, column: &str, operator: Operator, value: impl Into<Value>) -> Result<Self> {
        self.push_value(column, operator, value.into(), Relation::And)
    }

    /// OR `joined.column <op> value`
    pub fn or_on(self, column: &str, operator: Operator, value: impl Into<Value>) -> Result<Self> {
        self.push_value(column, operator, value.into(), Relation::Or)
    }

    /// AND `joined.column <op> origin.column`, both given as `table.column`.
    /// The origin column may only be nullable when the joined one is.
    pub fn on_column(self, column: &str, operator: Operator, other: &str) -> Result<Self> {
        self.push_column(column, operator, other, Relation::And)
    }

    /// OR `joined.column <op> origin.column`
    pub fn or_on_column(self, column: &str, operator: Operator, other: &str) -> Result<Self> {
        self.push_column(column, operator, other, Relation::Or)
    }

    /// Conditions collected so far
    pub fn conditions(&self) -> &[JoinCondition] {
        &self.conditions
    }

    fn into_clause(self, join_type: JoinType) -> JoinClause {
        JoinClause {
            join_type,
            table: self.table,
            conditions: self.conditions,
        }
    }

    fn push_value(mut self, column: &str, operator: Operator, value: Value, relation: Relation) -> Result<Self> {
        let definition = lookup(self.definition, &self.table, column)?;
        check_value(&self.table, column, definition, &value)?;

        self.conditions.push(JoinCondition::Value {
            column: QualifiedColumn::new(&self.table, column),
            operator,
            value,
            relation,
        });
        Ok(self)
    }

    fn push_column(mut self, column: &str, operator: Operator, other: &str, relation: Relation) -> Result<Self> {
        let left = QualifiedColumn::parse(column).map_err(rejected)?;
        let right = QualifiedColumn::parse(other).map_err(rejected)?;
        expect_table(&left, &self.table)?;
        expect_table(&right, &self.origin)?;

        let left_definition = lookup(self.definition, &self.table, &left.column)?;
        let right_definition = lookup(self.origin_definition, &self.origin, &right.column)?;
        check_comparable(&left, left_definition, &right, right_definition)?;

        self.conditions.push(JoinCondition::Column {
            left,
            operator,
            right,
            relation,
        });
        Ok(self)
    }
}

fn rejected(err: Error) -> Error {
    tracing::debug!(error = %err, "rejected query builder call");
    err
}

fn lookup<'s>(definition: &'s TableDef, table: &str, column: &str) -> Result<&'s ColumnDef> {
    definition
        .get(column)
        .ok_or_else(|| rejected(Error::column_not_found(table, column)))
}

fn check_value(table: &str, column: &str, definition: &ColumnDef, value: &Value) -> Result<()> {
    if !value.is_finite() {
        return Err(rejected(Error::invalid_query(format!(
            "non-finite value for column '{table}.{column}'"
        ))));
    }

    match value.kind() {
        None if definition.nullable => Ok(()),
        Some(kind) if kind == definition.kind => Ok(()),
        // i32 widens into a float column without loss
        Some(ValueKind::Integer)
            if definition.kind == ValueKind::Float && matches!(value, Value::I32(_)) =>
        {
            Ok(())
        }
        found => Err(rejected(Error::type_mismatch(
            table,
            column,
            definition.kind,
            found,
        ))),
    }
}

/// `right` may be compared with `left` when it has the same kind and is no
/// more nullable than `left`.
fn check_comparable(
    left: &QualifiedColumn,
    left_definition: &ColumnDef,
    right: &QualifiedColumn,
    right_definition: &ColumnDef,
) -> Result<()> {
    if left_definition.kind == right_definition.kind
        && (left_definition.nullable || !right_definition.nullable)
    {
        Ok(())
    } else {
        Err(rejected(Error::incompatible_columns(
            left.to_string(),
            left_definition.to_string(),
            right.to_string(),
            right_definition.to_string(),
        )))
    }
}

fn expect_table(column: &QualifiedColumn, table: &str) -> Result<()> {
    if column.table == table {
        Ok(())
    } else {
        Err(rejected(Error::invalid_query(format!(
            "'{column}' must reference table '{table}'"
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderOptions;
    use crate::operator::op;

    fn schema() -> Schema {
        Schema::new()
            .table(
                "users",
                TableDef::new()
                    .column("id", ValueKind::Integer)
                    .column("userName", ValueKind::Text)
                    .column("password", ValueKind::Text)
                    .column("isActive", ValueKind::Boolean),
            )
            .table(
                "posts",
                TableDef::new()
                    .column("id", ValueKind::Integer)
                    .column("userId", ValueKind::Integer)
                    .column("content", ValueKind::Text)
                    .nullable_column("likes", ValueKind::Integer)
                    .nullable_column("comments", ValueKind::Integer),
            )
    }

    #[test]
    fn test_select_all_columns() {
        let schema = schema();
        let sql = schema
            .query("users")
            .unwrap()
            .select("*")
            .unwrap()
            .build_with(&RenderOptions::plain());
        assert_eq!(sql, "SELECT * FROM users");
    }

    #[test]
    fn test_select_with_basic_where_clauses() {
        let schema = schema();
        let query = schema
            .query("users")
            .and_then(|q| q.select(["id", "userName"]))
            .and_then(|q| q.where_("id", op::EQ, 1))
            .and_then(|q| q.or_where("userName", op::EQ, "admin"))
            .unwrap();
        assert_eq!(
            query.build_with(&RenderOptions::plain()),
            "SELECT id, userName FROM users WHERE 1 = 1 AND id = 1 OR userName = admin"
        );
        assert_eq!(
            query.build(),
            "SELECT `id`, `userName` FROM `users` WHERE 1 = 1 AND `id` = 1 OR `userName` = 'admin'"
        );
    }

    #[test]
    fn test_null_where_clauses() {
        let schema = schema();
        let query = schema
            .query("posts")
            .and_then(|q| q.where_null("comments"))
            .and_then(|q| q.or_where_null("likes"))
            .and_then(|q| q.where_not_null("likes"))
            .and_then(|q| q.or_where_not_null("comments"))
            .unwrap();
        assert_eq!(
            query.build_with(&RenderOptions::plain()),
            "SELECT * FROM posts WHERE 1 = 1 AND comments IS NULL OR likes IS NULL AND likes IS NOT NULL OR comments IS NOT NULL"
        );
    }

    #[test]
    fn test_unknown_table_and_column() {
        let schema = schema();
        assert!(matches!(schema.query("nope"), Err(Error::TableNotFound { .. })));

        let err = schema
            .query("users")
            .and_then(|q| q.select(["id", "email"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Column 'email' not found in table 'users'");

        let err = schema
            .query("users")
            .and_then(|q| q.where_("likes", op::EQ, 1))
            .unwrap_err();
        assert!(matches!(err, Error::ColumnNotFound { .. }));
    }

    #[test]
    fn test_empty_selection_rejected() {
        let schema = schema();
        let err = schema
            .query("users")
            .and_then(|q| q.select(Vec::<String>::new()))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidQuery { .. }));
    }

    #[test]
    fn test_value_type_mismatch_rejected() {
        let schema = schema();
        let err = schema
            .query("users")
            .and_then(|q| q.where_("id", op::EQ, "1"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Column 'users.id' expects integer but got text");

        let err = schema
            .query("users")
            .and_then(|q| q.where_("id", op::EQ, 1.5))
            .unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_null_literal_only_for_nullable_columns() {
        let schema = schema();
        assert!(schema
            .query("posts")
            .and_then(|q| q.where_("likes", op::EQ, Value::Null))
            .is_ok());

        let err = schema
            .query("posts")
            .and_then(|q| q.where_("userId", op::EQ, None::<i64>))
            .unwrap_err();
        assert_eq!(err.to_string(), "Column 'posts.userId' expects integer but got null");
    }

    #[test]
    fn test_where_null_on_non_nullable_column_rejected() {
        let schema = schema();
        let err = schema
            .query("posts")
            .and_then(|q| q.where_null("content"))
            .unwrap_err();
        assert!(matches!(err, Error::NotNullable { .. }));

        let err = schema
            .query("posts")
            .and_then(|q| q.or_where_not_null("id"))
            .unwrap_err();
        assert!(matches!(err, Error::NotNullable { .. }));
    }

    #[test]
    fn test_where_column() {
        let schema = schema();
        let query = schema
            .query("posts")
            .and_then(|q| q.where_column("likes", op::GT, "comments"))
            .and_then(|q| q.or_where_column("id", op::EQ, "userId"))
            .unwrap();
        assert_eq!(
            query.build(),
            "SELECT * FROM `posts` WHERE 1 = 1 AND `likes` > `comments` OR `id` = `userId`"
        );
    }

    #[test]
    fn test_where_column_rules() {
        let schema = schema();
        let err = schema
            .query("posts")
            .and_then(|q| q.where_column("likes", op::GT, "likes"))
            .unwrap_err();
        assert!(matches!(err, Error::SelfComparison { .. }));

        let err = schema
            .query("posts")
            .and_then(|q| q.where_column("likes", op::GT, "content"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot compare 'posts.likes' (nullable integer) with 'posts.content' (text)"
        );

        let err = schema
            .query("posts")
            .and_then(|q| q.where_column("id", op::GT, "likes"))
            .unwrap_err();
        assert!(matches!(err, Error::IncompatibleColumns { .. }));
    }

    #[test]
    fn test_join() {
        let schema = schema();
        let query = schema
            .query("users")
            .and_then(|q| q.select(["id", "userName"]))
            .and_then(|q| {
                q.join("posts", |join| {
                    join.on_column("posts.userId", op::EQ, "users.id")?
                        .or_on("content", op::EQ, "pinned")
                })
            })
            .and_then(|q| q.where_("isActive", op::EQ, true))
            .unwrap();
        assert_eq!(
            query.build(),
            "SELECT `id`, `userName` FROM `users` \
             INNER JOIN `posts` ON `posts`.`userId` = `users`.`id` OR `posts`.`content` = 'pinned' \
             WHERE 1 = 1 AND `isActive` = true"
        );
    }

    #[test]
    fn test_join_kinds() {
        let schema = schema();
        let query = schema
            .query("posts")
            .and_then(|q| q.left_join("users", |join| join.on_column("users.id", op::EQ, "posts.userId")))
            .unwrap();
        assert_eq!(
            query.build_with(&RenderOptions::plain()),
            "SELECT * FROM posts LEFT JOIN users ON users.id = posts.userId"
        );

        let query = schema
            .query("posts")
            .and_then(|q| q.right_join("users", Ok))
            .and_then(|q| q.full_join("users", |join| join.on("isActive", op::EQ, false)))
            .unwrap();
        assert_eq!(
            query.build_with(&RenderOptions::plain()),
            "SELECT * FROM posts RIGHT JOIN users FULL OUTER JOIN users ON users.isActive = false"
        );
    }

    #[test]
    fn test_join_rules() {
        let schema = schema();
        let err = schema
            .query("users")
            .and_then(|q| q.join("users", Ok))
            .unwrap_err();
        assert!(matches!(err, Error::SelfJoin { .. }));

        let err = schema
            .query("users")
            .and_then(|q| q.join("tags", Ok))
            .unwrap_err();
        assert!(matches!(err, Error::TableNotFound { .. }));

        let err = schema
            .query("users")
            .and_then(|q| q.join("posts", |join| join.on_column("users.id", op::EQ, "posts.userId")))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid query: 'users.id' must reference table 'posts'");

        let err = schema
            .query("users")
            .and_then(|q| q.join("posts", |join| join.on_column("posts.content", op::EQ, "users.id")))
            .unwrap_err();
        assert!(matches!(err, Error::IncompatibleColumns { .. }));

        let err = schema
            .query("users")
            .and_then(|q| q.join("posts", |join| join.on_column("userId", op::EQ, "users.id")))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidQuery { .. }));

        let err = schema
            .query("users")
            .and_then(|q| q.join("posts", |join| join.on("likes", op::GT, "many")))
            .unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_failed_join_returns_the_condition_error() {
        let schema = schema();
        let err = schema
            .query("users")
            .and_then(|q| q.join("posts", |join| join.on("nope", op::EQ, 1)))
            .unwrap_err();
        assert_eq!(err.to_string(), "Column 'nope' not found in table 'posts'");
    }

    #[test]
    fn test_nullable_column_compared_with_non_null_column() {
        let schema = schema();
        let query = schema
            .query("posts")
            .and_then(|q| q.where_column("likes", op::GT, "id"))
            .and_then(|q| q.or_where_column("comments", op::LT, "userId"))
            .unwrap();
        assert_eq!(
            query.build_with(&RenderOptions::plain()),
            "SELECT * FROM posts WHERE 1 = 1 AND likes > id OR comments < userId"
        );

        let err = schema
            .query("posts")
            .and_then(|q| q.where_column("userId", op::EQ, "comments"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot compare 'posts.userId' (integer) with 'posts.comments' (nullable integer)"
        );
    }

    #[test]
    fn test_join_nullable_column_against_non_null_column() {
        let schema = schema();
        let query = schema
            .query("users")
            .and_then(|q| q.left_join("posts", |join| join.on_column("posts.likes", op::GT, "users.id")))
            .unwrap();
        assert_eq!(
            query.build_with(&RenderOptions::plain()),
            "SELECT * FROM users LEFT JOIN posts ON posts.likes > users.id"
        );

        let err = schema
            .query("posts")
            .and_then(|q| q.join("users", |join| join.on_column("users.id", op::EQ, "posts.likes")))
            .unwrap_err();
        assert!(matches!(err, Error::IncompatibleColumns { .. }));
    }

    #[test]
    fn test_identifiers_are_sanitized_in_every_position() {
        let schema = Schema::new()
            .table(
                "us`ers;",
                TableDef::new()
                    .column("i d", ValueKind::Integer)
                    .column("ow`ner", ValueKind::Integer)
                    .column("user.name", ValueKind::Text)
                    .nullable_column("dele ted;", ValueKind::Integer),
            )
            .table(
                "po sts",
                TableDef::new()
                    .column("author;id", ValueKind::Integer)
                    .column("ti.tle", ValueKind::Text),
            );

        let query = schema
            .query("us`ers;")
            .and_then(|q| q.select(["i d", "user.name"]))
            .and_then(|q| q.where_("user.name", op::EQ, "x"))
            .and_then(|q| q.where_null("dele ted;"))
            .and_then(|q| q.where_column("i d", op::GT, "ow`ner"))
            .and_then(|q| {
                q.join("po sts", |join| {
                    join.on_column("po sts.author;id", op::EQ, "us`ers;.i d")?
                        .on("ti.tle", op::EQ, "t")
                })
            })
            .unwrap();

        assert_eq!(
            query.build(),
            "SELECT `id`, `username` FROM `users` \
             INNER JOIN `posts` ON `posts`.`authorid` = `users`.`id` AND `posts`.`title` = 't' \
             WHERE 1 = 1 AND `username` = 'x' AND `deleted` IS NULL AND `id` > `owner`"
        );
        assert_eq!(
            query.build_with(&RenderOptions::plain()),
            "SELECT id, username FROM users \
             INNER JOIN posts ON posts.authorid = users.id AND posts.title = t \
             WHERE 1 = 1 AND username = x AND deleted IS NULL AND id > owner"
        );
    }

    #[test]
    fn test_i32_literal_fits_float_column() {
        let schema = Schema::new().table(
            "prices",
            TableDef::new()
                .column("amount", ValueKind::Float)
                .column("quantity", ValueKind::Integer),
        );
        let query = schema
            .query("prices")
            .and_then(|q| q.where_("amount", op::GT, 3))
            .and_then(|q| q.or_where("amount", op::LT, 9.5))
            .unwrap();
        assert_eq!(
            query.build(),
            "SELECT * FROM `prices` WHERE 1 = 1 AND `amount` > 3 OR `amount` < 9.5"
        );

        let err = schema
            .query("prices")
            .and_then(|q| q.where_("amount", op::GT, 3i64))
            .unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));

        let err = schema
            .query("prices")
            .and_then(|q| q.where_("quantity", op::GT, 2.5))
            .unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_non_finite_float_rejected() {
        let schema = Schema::new().table(
            "prices",
            TableDef::new().column("amount", ValueKind::Float),
        );
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = schema
                .query("prices")
                .and_then(|q| q.where_("amount", op::LT, value))
                .unwrap_err();
            assert!(matches!(err, Error::InvalidQuery { .. }));
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        let schema = schema();
        let query = schema
            .query("posts")
            .and_then(|q| q.where_("likes", op::GT, 3))
            .unwrap();
        assert_eq!(query.build(), query.build());
        assert_eq!(
            query.build(),
            "SELECT * FROM `posts` WHERE 1 = 1 AND `likes` > 3"
        );
    }
}
