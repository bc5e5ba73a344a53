//! Table and column metadata.
//!
//! A [`Table`] is built once and then borrowed by any number of statements.
//! Column order is the declaration order; an INSERT without an explicit
//! column list uses it.

mod column;

pub use column::{Column, ColumnOption, ColumnType};

use crate::error::{BuildError, Result};

/// Table-level options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOption {
    /// Composite UNIQUE constraints, one column-name group each.
    pub unique: Vec<Vec<String>>,
}

impl TableOption {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a composite UNIQUE constraint over `columns`.
    #[must_use]
    pub fn unique(mut self, columns: &[&str]) -> Self {
        self.unique
            .push(columns.iter().map(|c| String::from(*c)).collect());
        self
    }
}

/// Table metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    option: TableOption,
    columns: Vec<Column>,
}

impl Table {
    /// Creates a table and attaches `columns` to it.
    #[must_use]
    pub fn new(name: impl Into<String>, option: TableOption, columns: Vec<Column>) -> Self {
        let name = name.into();
        let mut columns = columns;
        for column in &mut columns {
            column.attach(&name);
        }
        Self {
            name,
            option,
            columns,
        }
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the table options.
    #[must_use]
    pub const fn option(&self) -> &TableOption {
        &self.option
    }

    /// Returns all columns in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Looks up a column by name, failing if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownColumn`] if the table has no such column.
    pub fn c(&self, name: &str) -> Result<&Column> {
        self.column(name).ok_or_else(|| BuildError::UnknownColumn {
            table: self.name.clone(),
            column: String::from(name),
        })
    }
}
