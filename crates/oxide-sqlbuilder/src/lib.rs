//! # oxide-sqlbuilder
//!
//! A parameterized SQL statement builder over typed table metadata.
//!
//! This crate provides:
//! - Table and column descriptions with a closed set of column types
//! - INSERT, UPDATE, SELECT, DELETE, CREATE TABLE and DROP TABLE builders
//! - Condition trees for WHERE, HAVING and JOIN clauses
//! - A [`Dialect`] trait for placeholders, quoting and DDL fragments
//!
//! Every build returns the SQL text together with its bind arguments, in
//! placeholder order. Values are checked against the column type before
//! anything is emitted.
//!
//! ## Building statements
//!
//! ```rust
//! use chrono::{FixedOffset, TimeZone};
//! use oxide_sqlbuilder::prelude::*;
//!
//! let person = Table::new(
//!     "PERSON",
//!     TableOption::new(),
//!     vec![
//!         Column::integer("id", ColumnOption::new().primary_key()),
//!         Column::text("name", ColumnOption::new().unique().default_value("no_name")),
//!         Column::date("birth", ColumnOption::new()),
//!     ],
//! );
//! let dialect = GenericDialect::new();
//!
//! let birth = FixedOffset::east_opt(0)
//!     .and_then(|tz| tz.with_ymd_and_hms(1992, 7, 25, 0, 0, 0).single())
//!     .ok_or("bad date")?;
//! let (sql, params) = Insert::new()
//!     .into_table(&person)
//!     .set(person.c("name")?, "Kurisu Makise")
//!     .set(person.c("birth")?, birth)
//!     .build_with(&dialect)?;
//! assert_eq!(sql, r#"INSERT INTO "PERSON" ( "name", "birth" ) VALUES ( ?, ? )"#);
//! assert_eq!(params[0], SqlValue::Text(String::from("Kurisu Makise")));
//!
//! let (sql, _) = Select::new()
//!     .from(&person)
//!     .where_clause(person.c("name")?.eq("Kurisu Makise"))
//!     .build_with(&dialect)?;
//! assert_eq!(sql, r#"SELECT * FROM "PERSON" WHERE "PERSON"."name"=?"#);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## SQL Injection Prevention
//!
//! Values are bound by default and never spliced into the SQL text:
//!
//! ```rust
//! use oxide_sqlbuilder::prelude::*;
//!
//! let users = Table::new(
//!     "users",
//!     TableOption::new(),
//!     vec![Column::text("name", ColumnOption::new())],
//! );
//! let user_input = "'; DROP TABLE users; --";
//! let (sql, params) = Select::new()
//!     .from(&users)
//!     .where_clause(users.c("name")?.eq(user_input))
//!     .build_with(&GenericDialect::new())?;
//!
//! assert_eq!(sql, r#"SELECT * FROM "users" WHERE "users"."name"=?"#);
//! assert_eq!(params, vec![SqlValue::Text(String::from(user_input))]);
//! # Ok::<(), oxide_sqlbuilder::BuildError>(())
//! ```

pub mod builder;
pub mod condition;
pub mod dialect;
pub mod error;
pub mod literal;
pub mod schema;
pub mod value;

pub use builder::{CreateTable, Delete, DropTable, Insert, Select, Statement, Update};
pub use condition::{CompareOp, Condition};
pub use dialect::{Dialect, GenericDialect, set_dialect};
pub use error::{BuildError, DialectError, ErrorKind, Result};
pub use literal::Literal;
pub use schema::{Column, ColumnOption, ColumnType, Table, TableOption};
pub use value::{SqlValue, ToSqlValue, ValueKind};

/// Common imports for building statements.
pub mod prelude {
    pub use crate::builder::{CreateTable, Delete, DropTable, Insert, Select, Statement, Update};
    pub use crate::condition::{and, not, or, Condition};
    pub use crate::dialect::{Dialect, GenericDialect};
    pub use crate::literal::Literal;
    pub use crate::schema::{Column, ColumnOption, Table, TableOption};
    pub use crate::value::SqlValue;
}
