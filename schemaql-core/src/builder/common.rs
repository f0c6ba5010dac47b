//! Common types and traits shared across the typed and runtime-checked builders

use std::fmt::{self, Display};

use crate::config::RenderOptions;
use crate::{ident, Error, Operator, Result, Value};

/// Core trait for all query builders
pub trait QueryBuilder {
    /// The accumulated query state
    fn query(&self) -> &SelectQuery;

    /// Generate the SQL string with explicit render options
    fn build_with(&self, options: &RenderOptions) -> String {
        self.query().to_sql_with(options)
    }

    /// Generate the SQL string with the default render options.
    ///
    /// Rendering never mutates the builder, so this can be called any number of times.
    fn build(&self) -> String {
        self.build_with(&RenderOptions::default())
    }
}

/// How a clause is connected to the predicate accumulated before it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Relation {
    #[default]
    And,
    Or,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::And => "AND",
            Relation::Or => "OR",
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A WHERE condition
#[derive(Debug, Clone, PartialEq)]
pub enum WhereClause {
    /// `column <op> literal`
    Basic {
        column: String,
        operator: Operator,
        value: Value,
        relation: Relation,
    },
    /// `column IS NULL`
    Null { column: String, relation: Relation },
    /// `column IS NOT NULL`
    NotNull { column: String, relation: Relation },
    /// `left <op> right`, both columns of the queried table
    Column {
        left: String,
        operator: Operator,
        right: String,
        relation: Relation,
    },
}

impl WhereClause {
    pub fn relation(&self) -> Relation {
        match self {
            WhereClause::Basic { relation, .. }
            | WhereClause::Null { relation, .. }
            | WhereClause::NotNull { relation, .. }
            | WhereClause::Column { relation, .. } => *relation,
        }
    }

    /// Render the predicate without its relation keyword
    pub fn to_sql_with(&self, options: &RenderOptions) -> String {
        match self {
            WhereClause::Basic {
                column,
                operator,
                value,
                ..
            } => format!(
                "{} {} {}",
                ident::render(column, options),
                operator,
                value.to_literal(options.quote_strings)
            ),
            WhereClause::Null { column, .. } => {
                format!("{} IS NULL", ident::render(column, options))
            }
            WhereClause::NotNull { column, .. } => {
                format!("{} IS NOT NULL", ident::render(column, options))
            }
            WhereClause::Column {
                left,
                operator,
                right,
                ..
            } => format!(
                "{} {} {}",
                ident::render(left, options),
                operator,
                ident::render(right, options)
            ),
        }
    }
}

/// JOIN types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

impl Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER"),
            JoinType::Left => write!(f, "LEFT"),
            JoinType::Right => write!(f, "RIGHT"),
            JoinType::Full => write!(f, "FULL OUTER"),
        }
    }
}

/// A `table.column` reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedColumn {
    pub table: String,
    pub column: String,
}

impl QualifiedColumn {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Parse `table.column`. The split happens at the first dot.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.split_once('.') {
            Some((table, column)) if !table.is_empty() && !column.is_empty() => {
                Ok(Self::new(table, column))
            }
            _ => Err(Error::invalid_query(format!(
                "expected a qualified 'table.column' reference, got '{raw}'"
            ))),
        }
    }

    pub fn to_sql_with(&self, options: &RenderOptions) -> String {
        ident::render_qualified(&self.table, &self.column, options)
    }
}

impl Display for QualifiedColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

/// A condition in a JOIN ON clause
#[derive(Debug, Clone, PartialEq)]
pub enum JoinCondition {
    /// Joined-table column compared with a literal
    Value {
        column: QualifiedColumn,
        operator: Operator,
        value: Value,
        relation: Relation,
    },
    /// Joined-table column compared with a column of the originating table
    Column {
        left: QualifiedColumn,
        operator: Operator,
        right: QualifiedColumn,
        relation: Relation,
    },
}

impl JoinCondition {
    pub fn relation(&self) -> Relation {
        match self {
            JoinCondition::Value { relation, .. } | JoinCondition::Column { relation, .. } => {
                *relation
            }
        }
    }

    pub fn to_sql_with(&self, options: &RenderOptions) -> String {
        match self {
            JoinCondition::Value {
                column,
                operator,
                value,
                ..
            } => format!(
                "{} {} {}",
                column.to_sql_with(options),
                operator,
                value.to_literal(options.quote_strings)
            ),
            JoinCondition::Column {
                left,
                operator,
                right,
                ..
            } => format!(
                "{} {} {}",
                left.to_sql_with(options),
                operator,
                right.to_sql_with(options)
            ),
        }
    }
}

/// A complete JOIN clause with table and conditions
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub join_type: JoinType,
    pub table: String,
    pub conditions: Vec<JoinCondition>,
}

/// The column selection of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Columns {
    /// `*`
    All,
    /// Explicit, ordered; duplicates are kept
    List(Vec<String>),
}

impl Columns {
    pub fn single(name: &str) -> Self {
        Columns::List(vec![name.to_string()])
    }
}

/// Trait to convert various types into column names
pub trait IntoColumns {
    fn into_columns(self) -> Vec<String>;
}

impl IntoColumns for &str {
    fn into_columns(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoColumns for String {
    fn into_columns(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoColumns for Vec<String> {
    fn into_columns(self) -> Vec<String> {
        self
    }
}

impl IntoColumns for Vec<&str> {
    fn into_columns(self) -> Vec<String> {
        self.into_iter().map(|s| s.to_string()).collect()
    }
}

impl IntoColumns for &[&str] {
    fn into_columns(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoColumns for [&str; N] {
    fn into_columns(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

/// Accumulated state of one SELECT statement
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    pub table: String,
    pub columns: Columns,
    pub where_clauses: Vec<WhereClause>,
    pub join_clauses: Vec<JoinClause>,
}

impl SelectQuery {
    /// An empty `SELECT * FROM table`
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Columns::All,
            where_clauses: Vec::new(),
            join_clauses: Vec::new(),
        }
    }

    /// Render the statement.
    ///
    /// WHERE clauses are emitted after a leading `1 = 1` so every clause can
    /// carry its own relation keyword. They are joined strictly in insertion
    /// order; no parentheses are added.
    pub fn to_sql_with(&self, options: &RenderOptions) -> String {
        let mut sql = String::new();

        // SELECT clause
        sql.push_str("SELECT ");
        match &self.columns {
            Columns::All => sql.push('*'),
            Columns::List(names) => sql.push_str(&ident::render_list(names, options).join(", ")),
        }

        // FROM clause
        sql.push_str(" FROM ");
        sql.push_str(&ident::render(&self.table, options));

        // JOIN clauses
        for join in &self.join_clauses {
            sql.push(' ');
            sql.push_str(&join.join_type.to_string());
            sql.push_str(" JOIN ");
            sql.push_str(&ident::render(&join.table, options));

            for (i, condition) in join.conditions.iter().enumerate() {
                if i == 0 {
                    sql.push_str(" ON ");
                } else {
                    sql.push(' ');
                    sql.push_str(condition.relation().as_str());
                    sql.push(' ');
                }
                sql.push_str(&condition.to_sql_with(options));
            }
        }

        // WHERE clause
        if !self.where_clauses.is_empty() {
            sql.push_str(" WHERE 1 = 1");

            for clause in &self.where_clauses {
                sql.push(' ');
                sql.push_str(clause.relation().as_str());
                sql.push(' ');
                sql.push_str(&clause.to_sql_with(options));
            }
        }

        tracing::debug!(table = %self.table, sql = %sql, "compiled select statement");

        sql
    }
}
