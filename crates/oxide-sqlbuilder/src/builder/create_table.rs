//! CREATE TABLE statement builder.
//!
//! Native types and constraint fragments come from the dialect; this
//! builder only lays them out.

use super::{SqlBuilder, Statement};
use crate::error::{BuildError, Result};
use crate::schema::{Column, Table};

/// A CREATE TABLE statement builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateTable<'a> {
    table: Option<&'a Table>,
    if_not_exists: bool,
}

impl<'a> CreateTable<'a> {
    /// Creates a new CREATE TABLE builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Specifies the table to create.
    #[must_use]
    pub const fn table(mut self, table: &'a Table) -> Self {
        self.table = Some(table);
        self
    }

    /// Adds IF NOT EXISTS.
    #[must_use]
    pub const fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }
}

fn write_column_definition(column: &Column, builder: &mut SqlBuilder<'_>) -> Result<()> {
    if let Some(ref default) = column.option().default {
        column.check_value(default)?;
    }
    let dialect = builder.dialect();
    let sql_type = dialect.column_type_to_string(column)?;
    let options = dialect.column_option_to_string(column.option())?;

    builder.push_identifier(column.name());
    builder.push_str(" ");
    builder.push_str(&sql_type);
    if !options.is_empty() {
        builder.push_str(" ");
        builder.push_str(&options);
    }
    Ok(())
}

impl Statement for CreateTable<'_> {
    const KIND: &'static str = "CREATE TABLE";

    fn write_statement(&self, builder: &mut SqlBuilder<'_>) -> Result<()> {
        let table = self.table.ok_or(BuildError::MissingTable { slot: "table" })?;
        if table.columns().is_empty() {
            return Err(BuildError::NoColumns(String::from(table.name())));
        }
        for name in table.option().unique.iter().flatten() {
            table.c(name)?;
        }

        builder.push_str("CREATE TABLE ");
        if self.if_not_exists {
            builder.push_str("IF NOT EXISTS ");
        }
        builder.push_identifier(table.name());
        builder.push_str(" ( ");
        for (i, column) in table.columns().iter().enumerate() {
            if i > 0 {
                builder.push_str(", ");
            }
            write_column_definition(column, builder)?;
        }

        let constraints = builder.dialect().table_option_to_string(table.option())?;
        if !constraints.is_empty() {
            builder.push_str(", ");
            builder.push_str(&constraints);
        }
        builder.push_str(" )");
        Ok(())
    }
}
