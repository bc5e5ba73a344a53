//! SQL Dialect support.
//!
//! Different databases have slightly different SQL syntax. Statements never
//! hard-code placeholders, quoting or type names; they ask the [`Dialect`]
//! they are built with.
//!
//! A dialect is normally passed to
//! [`Statement::build_with`](crate::builder::Statement::build_with). An
//! application that uses a single database may instead install one
//! process-wide dialect at startup with [`set_dialect`] and call
//! [`Statement::build`](crate::builder::Statement::build).

mod generic;

use std::sync::OnceLock;

pub use generic::{GenericDialect, Placeholder};

use crate::error::{BuildError, DialectError, Result};
use crate::schema::{Column, ColumnOption, TableOption};
use crate::value::SqlValue;

/// Trait for SQL dialect-specific behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the text appended after every complete statement.
    fn query_suffix(&self) -> &'static str {
        ""
    }

    /// Returns the placeholder for the `position`-th bound argument (1-indexed).
    fn bind_variable(&self, position: usize) -> String;

    /// Quotes an identifier.
    fn quote_identifier(&self, name: &str) -> String {
        let escaped = name.replace('"', "\"\"");
        format!("\"{escaped}\"")
    }

    /// Renders a value inline (used for DDL defaults).
    fn quote_field(&self, value: &SqlValue) -> String {
        value.to_sql_inline()
    }

    /// Returns the native type of `column`.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnknownColumnType`] if neither the column's
    /// type override nor its type tag maps to a native type.
    fn column_type_to_string(&self, column: &Column) -> std::result::Result<String, DialectError>;

    /// Renders the column constraint fragment (may be empty).
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnsupportedOption`] for options the dialect
    /// cannot express.
    fn column_option_to_string(
        &self,
        option: &ColumnOption,
    ) -> std::result::Result<String, DialectError>;

    /// Renders the table constraint fragment (may be empty).
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnsupportedOption`] for options the dialect
    /// cannot express.
    fn table_option_to_string(
        &self,
        option: &TableOption,
    ) -> std::result::Result<String, DialectError>;
}

static CURRENT: OnceLock<Box<dyn Dialect + Send + Sync>> = OnceLock::new();

/// Installs the process-wide dialect used by `Statement::build`.
///
/// # Errors
///
/// Returns [`BuildError::DialectAlreadySet`] if a dialect was already
/// installed; the first one stays active.
pub fn set_dialect<D>(dialect: D) -> Result<()>
where
    D: Dialect + Send + Sync + 'static,
{
    let name = dialect.name();
    CURRENT
        .set(Box::new(dialect))
        .map_err(|_| BuildError::DialectAlreadySet)?;
    tracing::info!(dialect = name, "installed process-wide dialect");
    Ok(())
}

/// Returns the process-wide dialect.
///
/// # Errors
///
/// Returns [`BuildError::NoDialect`] if [`set_dialect`] was never called.
pub fn current_dialect() -> Result<&'static (dyn Dialect + Send + Sync)> {
    CURRENT
        .get()
        .map(|dialect| &**dialect)
        .ok_or(BuildError::NoDialect)
}
