//! Runtime schema description

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::builder::DynamicSelectBuilder;
use crate::schema::Table;
use crate::value::ValueKind;
use crate::{Error, Result};

/// Declared type of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    #[serde(rename = "type")]
    pub kind: ValueKind,
    #[serde(default)]
    pub nullable: bool,
}

impl ColumnDef {
    pub fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    pub fn nullable(kind: ValueKind) -> Self {
        Self {
            kind,
            nullable: true,
        }
    }
}

impl Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "nullable {}", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

/// Columns of one table, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableDef {
    columns: BTreeMap<String, ColumnDef>,
}

impl TableDef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a non-nullable column
    pub fn column(mut self, name: impl Into<String>, kind: ValueKind) -> Self {
        self.columns.insert(name.into(), ColumnDef::new(kind));
        self
    }

    /// Add (or replace) a nullable column
    pub fn nullable_column(mut self, name: impl Into<String>, kind: ValueKind) -> Self {
        self.columns.insert(name.into(), ColumnDef::nullable(kind));
        self
    }

    /// Describe a table declared with [`schema!`](crate::schema!)
    pub fn from_table<T: Table>() -> Self {
        let columns = T::COLUMNS
            .iter()
            .map(|info| {
                (
                    info.name.to_string(),
                    ColumnDef {
                        kind: info.kind,
                        nullable: info.nullable,
                    },
                )
            })
            .collect();
        Self { columns }
    }

    pub fn get(&self, column: &str) -> Option<&ColumnDef> {
        self.columns.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnDef)> {
        self.columns.iter().map(|(name, def)| (name.as_str(), def))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Tables of a database, keyed by name.
///
/// Loaded from JSON or assembled in code; builders borrow it for their whole life.
///
/// ```
/// use schemaql_core::dynamic::Schema;
/// use schemaql_core::{op, QueryBuilder};
///
/// let schema = Schema::from_json(r#"{
///     "users": {
///         "id": {"type": "integer"},
///         "userName": {"type": "text"}
///     }
/// }"#)?;
///
/// let sql = schema
///     .query("users")?
///     .select(["id", "userName"])?
///     .where_("userName", op::EQ, "admin")?
///     .build();
/// assert_eq!(sql, "SELECT `id`, `userName` FROM `users` WHERE 1 = 1 AND `userName` = 'admin'");
/// # Ok::<(), schemaql_core::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    tables: BTreeMap<String, TableDef>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a table
    pub fn table(mut self, name: impl Into<String>, table: TableDef) -> Self {
        self.tables.insert(name.into(), table);
        self
    }

    /// Add a table declared with [`schema!`](crate::schema!)
    pub fn with_table<T: Table>(self) -> Self {
        self.table(T::NAME, TableDef::from_table::<T>())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up a table definition
    pub fn get(&self, table: &str) -> Result<&TableDef> {
        self.tables
            .get(table)
            .ok_or_else(|| Error::table_not_found(table))
    }

    /// Look up a column definition
    pub fn column(&self, table: &str, column: &str) -> Result<&ColumnDef> {
        self.get(table)?
            .get(column)
            .ok_or_else(|| Error::column_not_found(table, column))
    }

    pub fn tables(&self) -> impl Iterator<Item = (&str, &TableDef)> {
        self.tables.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Start a `SELECT * FROM table` checked against this schema
    pub fn query(&self, table: &str) -> Result<DynamicSelectBuilder<'_>> {
        DynamicSelectBuilder::new(self, table)
    }
}
