//! Statement builders and the accumulator they serialize into.
//!
//! Every statement is configured through chained setters and serialized
//! through [`Statement::build_with`] (explicit dialect) or
//! [`Statement::build`] (process-wide dialect).
//!
//! # Example
//!
//! ```rust
//! use oxide_sqlbuilder::builder::{Insert, Statement};
//! use oxide_sqlbuilder::dialect::GenericDialect;
//! use oxide_sqlbuilder::schema::{Column, ColumnOption, Table, TableOption};
//!
//! let person = Table::new(
//!     "PERSON",
//!     TableOption::new(),
//!     vec![
//!         Column::integer("id", ColumnOption::new().primary_key()),
//!         Column::text("name", ColumnOption::new()),
//!     ],
//! );
//!
//! let (sql, params) = Insert::new()
//!     .into_table(&person)
//!     .set(person.c("name")?, "Kurisu Makise")
//!     .build_with(&GenericDialect::new())?;
//!
//! assert_eq!(sql, r#"INSERT INTO "PERSON" ( "name" ) VALUES ( ? )"#);
//! assert_eq!(params.len(), 1);
//! # Ok::<(), oxide_sqlbuilder::BuildError>(())
//! ```

mod create_table;
mod delete;
mod drop_table;
mod insert;
mod order;
mod select;
mod sql_builder;
mod update;

pub use create_table::CreateTable;
pub use delete::Delete;
pub use drop_table::DropTable;
pub use insert::Insert;
pub use order::{OrderBy, OrderDirection};
pub use select::Select;
pub use sql_builder::{SqlBuilder, SqlFragment};
pub use update::Update;

use crate::dialect::{self, Dialect};
use crate::error::Result;
use crate::value::SqlValue;

/// A complete SQL statement.
pub trait Statement {
    /// Statement keyword, used in log events.
    const KIND: &'static str;

    /// Writes the statement's clauses, in order, into `builder`.
    ///
    /// # Errors
    ///
    /// Returns the first configuration, validation or dialect error met;
    /// nothing after it is emitted.
    fn write_statement(&self, builder: &mut SqlBuilder<'_>) -> Result<()>;

    /// Builds the statement with an explicit dialect.
    ///
    /// # Errors
    ///
    /// See [`Statement::write_statement`].
    fn build_with(&self, dialect: &dyn Dialect) -> Result<(String, Vec<SqlValue>)> {
        let mut builder = SqlBuilder::new(dialect);
        match self.write_statement(&mut builder) {
            Ok(()) => {
                let (sql, args) = builder.finish();
                tracing::debug!(
                    statement = Self::KIND,
                    dialect = dialect.name(),
                    args = args.len(),
                    %sql,
                    "built statement"
                );
                Ok((sql, args))
            }
            Err(err) => {
                tracing::debug!(
                    statement = Self::KIND,
                    dialect = dialect.name(),
                    error = %err,
                    "statement build failed"
                );
                Err(err)
            }
        }
    }

    /// Builds the statement with the process-wide dialect.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NoDialect`](crate::BuildError::NoDialect) if no
    /// dialect was installed with [`set_dialect`](crate::dialect::set_dialect),
    /// otherwise the same errors as [`Statement::build_with`].
    fn build(&self) -> Result<(String, Vec<SqlValue>)> {
        self.build_with(dialect::current_dialect()?)
    }
}
