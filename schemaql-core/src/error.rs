//! Error types for schemaql
//!
//! The typed builder rejects misuse at compile time and never produces these.
//! They are returned by the runtime-validated [`dynamic`](crate::dynamic) builder
//! and by schema/config loading.

use thiserror::Error;

use crate::value::ValueKind;

/// The main error type for schemaql operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid query configuration
    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Column not found error
    #[error("Column '{column}' not found in table '{table}'")]
    ColumnNotFound { table: String, column: String },

    /// Table not found error
    #[error("Table '{table}' not found")]
    TableNotFound { table: String },

    /// A literal whose kind does not match the column's declared type
    #[error("Column '{table}.{column}' expects {expected} but got {found}")]
    TypeMismatch {
        table: String,
        column: String,
        expected: String,
        found: String,
    },

    /// Null check requested on a column that can never be null
    #[error("Column '{table}.{column}' is not nullable")]
    NotNullable { table: String, column: String },

    /// Two columns of different types compared with each other
    #[error("Cannot compare '{left}' ({left_type}) with '{right}' ({right_type})")]
    IncompatibleColumns {
        left: String,
        left_type: String,
        right: String,
        right_type: String,
    },

    /// `where_column` with the same column on both sides
    #[error("Column '{table}.{column}' cannot be compared with itself")]
    SelfComparison { table: String, column: String },

    /// `join` targeting the builder's own table
    #[error("Table '{table}' cannot be joined with itself")]
    SelfJoin { table: String },

    /// Operator outside of `=`, `<`, `>`
    #[error("Unknown operator '{operator}'")]
    UnknownOperator { operator: String },
}

/// Convenience Result type for schemaql operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new invalid query error
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }

    /// Create a new column not found error
    pub fn column_not_found(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Create a new table not found error
    pub fn table_not_found(table: impl Into<String>) -> Self {
        Self::TableNotFound {
            table: table.into(),
        }
    }

    /// Create a new type mismatch error. `found` is `None` for a null literal.
    pub fn type_mismatch(
        table: impl Into<String>,
        column: impl Into<String>,
        expected: ValueKind,
        found: Option<ValueKind>,
    ) -> Self {
        Self::TypeMismatch {
            table: table.into(),
            column: column.into(),
            expected: expected.to_string(),
            found: found.map_or_else(|| "null".to_string(), |kind| kind.to_string()),
        }
    }

    /// Create a new not-nullable error
    pub fn not_nullable(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::NotNullable {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Create a new incompatible columns error
    pub fn incompatible_columns(
        left: impl Into<String>,
        left_type: impl Into<String>,
        right: impl Into<String>,
        right_type: impl Into<String>,
    ) -> Self {
        Self::IncompatibleColumns {
            left: left.into(),
            left_type: left_type.into(),
            right: right.into(),
            right_type: right_type.into(),
        }
    }

    /// Create a new self comparison error
    pub fn self_comparison(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::SelfComparison {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Create a new self join error
    pub fn self_join(table: impl Into<String>) -> Self {
        Self::SelfJoin {
            table: table.into(),
        }
    }

    /// Create a new unknown operator error
    pub fn unknown_operator(operator: impl Into<String>) -> Self {
        Self::UnknownOperator {
            operator: operator.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_query_error() {
        let err = Error::invalid_query("select requires at least one column");
        assert!(matches!(err, Error::InvalidQuery { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid query: select requires at least one column"
        );
    }

    #[test]
    fn test_column_not_found_error() {
        let err = Error::column_not_found("users", "invalid_column");
        assert!(matches!(err, Error::ColumnNotFound { .. }));
        assert_eq!(err.to_string(), "Column 'invalid_column' not found in table 'users'");
    }

    #[test]
    fn test_table_not_found_error() {
        let err = Error::table_not_found("non_existent_table");
        assert!(matches!(err, Error::TableNotFound { .. }));
        assert_eq!(err.to_string(), "Table 'non_existent_table' not found");
    }

    #[test]
    fn test_type_mismatch_error() {
        let err = Error::type_mismatch("users", "id", ValueKind::Integer, Some(ValueKind::Text));
        assert_eq!(err.to_string(), "Column 'users.id' expects integer but got text");

        let err = Error::type_mismatch("users", "id", ValueKind::Integer, None);
        assert_eq!(err.to_string(), "Column 'users.id' expects integer but got null");
    }

    #[test]
    fn test_rule_violation_messages() {
        assert_eq!(
            Error::not_nullable("users", "id").to_string(),
            "Column 'users.id' is not nullable"
        );
        assert_eq!(
            Error::self_comparison("posts", "likes").to_string(),
            "Column 'posts.likes' cannot be compared with itself"
        );
        assert_eq!(
            Error::self_join("users").to_string(),
            "Table 'users' cannot be joined with itself"
        );
        assert_eq!(
            Error::unknown_operator("LIKE").to_string(),
            "Unknown operator 'LIKE'"
        );
    }
}
