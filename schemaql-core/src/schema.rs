//! Compile-time schema description.
//!
//! A schema is declared once with [`schema!`](crate::schema!). Every table
//! becomes a module containing a zero-sized `table` marker and one zero-sized
//! marker per column, so builder calls can be constrained with ordinary trait
//! bounds:
//!
//! - a column belongs to table `T` when it implements `Column<Table = T>`;
//! - a literal fits a column when it converts into `Column::Value`;
//! - a column is nullable when its value type is `Option<_>` ([`Nullable`]);
//! - a column can be compared with another when its value type is
//!   [`AssignableTo`] the other's;
//! - two columns (or two tables) are different when [`Distinct`] holds.
//!
//! ```
//! use schemaql_core::{schema, table, op, QueryBuilder, RenderOptions};
//!
//! schema! {
//!     users {
//!         id -> i64,
//!         userName -> String,
//!     }
//!     posts {
//!         id -> i64,
//!         userId -> i64,
//!         likes -> Option<i64>,
//!     }
//! }
//!
//! let sql = table(users::table)
//!     .select((users::id, users::userName))
//!     .where_(users::id, op::EQ, 1)
//!     .build_with(&RenderOptions::plain());
//! assert_eq!(sql, "SELECT id, userName FROM users WHERE 1 = 1 AND id = 1");
//! ```
//!
//! A column named `table` would collide with the table marker and is not supported.

use std::fmt::Debug;

use crate::builder::common::Columns;
use crate::value::{Value, ValueKind};

/// A Rust type that can be stored in a column
pub trait SqlType: Into<Value> + 'static {
    const KIND: ValueKind;
    const NULLABLE: bool = false;
}

impl SqlType for bool {
    const KIND: ValueKind = ValueKind::Boolean;
}

impl SqlType for i32 {
    const KIND: ValueKind = ValueKind::Integer;
}

impl SqlType for i64 {
    const KIND: ValueKind = ValueKind::Integer;
}

impl SqlType for f32 {
    const KIND: ValueKind = ValueKind::Float;
}

impl SqlType for f64 {
    const KIND: ValueKind = ValueKind::Float;
}

impl SqlType for String {
    const KIND: ValueKind = ValueKind::Text;
}

impl SqlType for serde_json::Value {
    const KIND: ValueKind = ValueKind::Json;
}

#[cfg(feature = "uuid-support")]
impl SqlType for uuid::Uuid {
    const KIND: ValueKind = ValueKind::Uuid;
}

#[cfg(feature = "datetime-support")]
impl SqlType for chrono::NaiveDateTime {
    const KIND: ValueKind = ValueKind::Timestamp;
}

#[cfg(feature = "datetime-support")]
impl SqlType for chrono::DateTime<chrono::Utc> {
    const KIND: ValueKind = ValueKind::Timestamp;
}

#[cfg(feature = "decimal-support")]
impl SqlType for rust_decimal::Decimal {
    const KIND: ValueKind = ValueKind::Decimal;
}

impl<T: SqlType> SqlType for Option<T> {
    const KIND: ValueKind = T::KIND;
    const NULLABLE: bool = true;
}

/// Implemented only by `Option<T>`: the value type of a nullable column
pub trait Nullable {}

impl<T> Nullable for Option<T> {}

/// A value of type `Self` may be compared with a column holding `Target`:
/// the same type, or the non-null form of a nullable `Target`.
pub trait AssignableTo<Target> {}

impl<T: SqlType> AssignableTo<T> for T {}

impl<T: SqlType> AssignableTo<Option<T>> for T {}

/// Static metadata for one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: &'static str,
    pub kind: ValueKind,
    pub nullable: bool,
}

/// A table marker generated by [`schema!`](crate::schema!)
pub trait Table: Copy + Debug + 'static {
    const NAME: &'static str;
    const COLUMNS: &'static [ColumnInfo];
}

/// A column marker generated by [`schema!`](crate::schema!)
pub trait Column: Copy + Debug + 'static {
    type Table: Table;
    type Value: SqlType;
    const NAME: &'static str;
}

/// `Self` and `Other` are different columns of one table, or different tables
/// of one schema. Generated for every ordered pair by [`schema!`](crate::schema!).
pub trait Distinct<Other> {}

/// Something that can be passed to `select` for table `T`
pub trait Selection<T: Table> {
    fn into_columns(self) -> Columns;
}

/// The `*` wildcard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct All;

impl<T: Table> Selection<T> for All {
    fn into_columns(self) -> Columns {
        Columns::All
    }
}

macro_rules! impl_selection_for_tuples {
    ($(($($name:ident),+)),+ $(,)?) => {
        $(
            impl<Tb: Table, $($name: Column<Table = Tb>),+> Selection<Tb> for ($($name,)+) {
                fn into_columns(self) -> Columns {
                    Columns::List(vec![$($name::NAME.to_string()),+])
                }
            }
        )+
    };
}

impl_selection_for_tuples!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
    (A, B, C, D, E, F, G, H, I),
    (A, B, C, D, E, F, G, H, I, J),
    (A, B, C, D, E, F, G, H, I, J, K),
    (A, B, C, D, E, F, G, H, I, J, K, L),
);

/// Declare the tables of a schema.
///
/// ```
/// schemaql_core::schema! {
///     /// Registered accounts
///     users {
///         id -> i64,
///         userName -> String,
///         isActive -> bool,
///     }
///     posts {
///         id -> i64,
///         userId -> i64,
///         likes -> Option<i64>,
///     }
/// }
///
/// use schemaql_core::{Column, Table};
/// assert_eq!(<users::table as Table>::NAME, "users");
/// assert_eq!(<posts::likes as Column>::NAME, "likes");
/// assert!(<posts::table as Table>::COLUMNS[2].nullable);
/// ```
///
/// Tables declared in the same invocation can be joined with each other.
#[macro_export]
macro_rules! schema {
    ($($(#[$meta:meta])* $table:ident { $($column:ident -> $ty:ty),* $(,)? })*) => {
        $(
            $crate::__schema_table! { $(#[$meta])* $table { $($column -> $ty),* } }
        )*
        $crate::__schema_distinct! { @tables [] $($table)* }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __schema_table {
    ($(#[$meta:meta])* $table:ident { $($column:ident -> $ty:ty),* }) => {
        $(#[$meta])*
        #[allow(non_camel_case_types, non_snake_case, dead_code)]
        pub mod $table {
            #[allow(unused_imports)]
            use super::*;

            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct table;

            impl $crate::Table for table {
                const NAME: &'static str = stringify!($table);
                const COLUMNS: &'static [$crate::ColumnInfo] = &[
                    $(
                        $crate::ColumnInfo {
                            name: stringify!($column),
                            kind: <$ty as $crate::SqlType>::KIND,
                            nullable: <$ty as $crate::SqlType>::NULLABLE,
                        },
                    )*
                ];
            }

            $(
                #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
                pub struct $column;

                impl $crate::Column for $column {
                    type Table = table;
                    type Value = $ty;
                    const NAME: &'static str = stringify!($column);
                }

                impl $crate::Selection<table> for $column {
                    fn into_columns(self) -> $crate::Columns {
                        $crate::Columns::single(stringify!($column))
                    }
                }
            )*

            $crate::__schema_distinct! { @columns [] $($column)* }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __schema_distinct {
    (@tables [$($done:ident)*]) => {};
    (@tables [$($done:ident)*] $head:ident $($rest:ident)*) => {
        $( impl $crate::Distinct<$done::table> for $head::table {} )*
        $( impl $crate::Distinct<$rest::table> for $head::table {} )*
        $crate::__schema_distinct! { @tables [$($done)* $head] $($rest)* }
    };
    (@columns [$($done:ident)*]) => {};
    (@columns [$($done:ident)*] $head:ident $($rest:ident)*) => {
        $( impl $crate::Distinct<$done> for $head {} )*
        $( impl $crate::Distinct<$rest> for $head {} )*
        $crate::__schema_distinct! { @columns [$($done)* $head] $($rest)* }
    };
}
