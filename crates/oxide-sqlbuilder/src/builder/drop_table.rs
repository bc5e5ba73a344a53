//! DROP TABLE statement builder.

use super::{SqlBuilder, Statement};
use crate::error::Result;
use crate::schema::Table;

/// A DROP TABLE statement builder.
#[derive(Debug, Clone, Copy)]
pub struct DropTable<'a> {
    table: &'a Table,
    if_exists: bool,
}

impl<'a> DropTable<'a> {
    /// Creates a DROP TABLE for `table`.
    #[must_use]
    pub const fn new(table: &'a Table) -> Self {
        Self {
            table,
            if_exists: false,
        }
    }

    /// Adds IF EXISTS.
    #[must_use]
    pub const fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }
}

impl Statement for DropTable<'_> {
    const KIND: &'static str = "DROP TABLE";

    fn write_statement(&self, builder: &mut SqlBuilder<'_>) -> Result<()> {
        builder.push_str("DROP TABLE ");
        if self.if_exists {
            builder.push_str("IF EXISTS ");
        }
        builder.push_identifier(self.table.name());
        Ok(())
    }
}
