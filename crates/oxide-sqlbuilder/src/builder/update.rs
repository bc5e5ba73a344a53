//! UPDATE statement builder.

use super::order::{self, OrderBy};
use super::{SqlBuilder, SqlFragment, Statement};
use crate::condition::Condition;
use crate::error::{BuildError, Result};
use crate::literal::Literal;
use crate::schema::{Column, Table};

/// An assignment in the SET clause.
#[derive(Debug, Clone)]
struct Assignment<'a> {
    column: &'a Column,
    value: Literal,
}

impl SqlFragment for Assignment<'_> {
    fn write_sql(&self, builder: &mut SqlBuilder<'_>) -> Result<()> {
        self.column.check(&self.value)?;
        builder.push_identifier(self.column.name());
        builder.push_str("=");
        self.value.write_sql(builder)
    }
}

/// An UPDATE statement builder.
///
/// Clauses are emitted in a fixed order whatever order the setters were
/// called in: SET, WHERE, ORDER BY, LIMIT, OFFSET.
#[derive(Debug, Clone, Default)]
pub struct Update<'a> {
    table: Option<&'a Table>,
    assignments: Vec<Assignment<'a>>,
    where_clause: Option<Condition<'a>>,
    order_by: Vec<OrderBy<'a>>,
    limit: u64,
    offset: u64,
}

impl<'a> Update<'a> {
    /// Creates a new UPDATE builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Specifies the table to update.
    #[must_use]
    pub const fn table(mut self, table: &'a Table) -> Self {
        self.table = Some(table);
        self
    }

    /// Adds a SET assignment.
    #[must_use]
    pub fn set(mut self, column: &'a Column, value: impl Into<Literal>) -> Self {
        self.assignments.push(Assignment {
            column,
            value: value.into(),
        });
        self
    }

    /// Sets the WHERE clause, replacing any previous one.
    #[must_use]
    pub fn where_clause(mut self, condition: Condition<'a>) -> Self {
        self.where_clause = Some(condition);
        self
    }

    /// Appends ORDER BY terms, all in the same direction.
    #[must_use]
    pub fn order_by(mut self, desc: bool, columns: &[&'a Column]) -> Self {
        self.order_by.extend(OrderBy::terms(desc, columns));
        self
    }

    /// Sets LIMIT. Zero leaves the clause out.
    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Sets OFFSET. Zero leaves the clause out.
    #[must_use]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }
}

impl Statement for Update<'_> {
    const KIND: &'static str = "UPDATE";

    fn write_statement(&self, builder: &mut SqlBuilder<'_>) -> Result<()> {
        let table = self.table.ok_or(BuildError::MissingTable { slot: "table" })?;
        if self.assignments.is_empty() {
            return Err(BuildError::EmptySet);
        }

        builder.push_str("UPDATE ");
        builder.push_identifier(table.name());
        builder.push_str(" SET ");
        builder.push_items(&self.assignments, ", ")?;

        if let Some(ref condition) = self.where_clause {
            builder.push_str(" WHERE ");
            condition.write_sql(builder)?;
        }
        order::write_order_by(&self.order_by, builder)?;
        order::write_limit_offset(self.limit, self.offset, builder);
        Ok(())
    }
}
