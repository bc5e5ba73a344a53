//! SELECT statement builder.

use super::order::{self, OrderBy};
use super::{SqlBuilder, SqlFragment, Statement};
use crate::condition::Condition;
use crate::error::{BuildError, Result};
use crate::schema::{Column, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JoinType {
    Inner,
    Left,
}

impl JoinType {
    const fn as_sql(self) -> &'static str {
        match self {
            Self::Inner => " INNER JOIN ",
            Self::Left => " LEFT JOIN ",
        }
    }
}

#[derive(Debug, Clone)]
struct Join<'a> {
    join_type: JoinType,
    table: &'a Table,
    on: Condition<'a>,
}

impl SqlFragment for Join<'_> {
    fn write_sql(&self, builder: &mut SqlBuilder<'_>) -> Result<()> {
        builder.push_str(self.join_type.as_sql());
        builder.push_identifier(self.table.name());
        builder.push_str(" ON ");
        self.on.write_sql(builder)
    }
}

/// A SELECT statement builder.
///
/// ```rust
/// use oxide_sqlbuilder::builder::{Select, Statement};
/// use oxide_sqlbuilder::dialect::GenericDialect;
/// use oxide_sqlbuilder::schema::{Column, ColumnOption, Table, TableOption};
///
/// let users = Table::new(
///     "users",
///     TableOption::new(),
///     vec![
///         Column::integer("id", ColumnOption::new()),
///         Column::text("name", ColumnOption::new()),
///     ],
/// );
/// let (sql, params) = Select::new()
///     .columns(&[users.c("id")?, users.c("name")?])
///     .from(&users)
///     .where_clause(users.c("id")?.eq(1))
///     .build_with(&GenericDialect::new())?;
///
/// assert_eq!(
///     sql,
///     r#"SELECT "users"."id", "users"."name" FROM "users" WHERE "users"."id"=?"#
/// );
/// assert_eq!(params.len(), 1);
/// # Ok::<(), oxide_sqlbuilder::BuildError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Select<'a> {
    distinct: bool,
    columns: Vec<&'a Column>,
    from: Option<&'a Table>,
    joins: Vec<Join<'a>>,
    where_clause: Option<Condition<'a>>,
    group_by: Vec<&'a Column>,
    having: Option<Condition<'a>>,
    order_by: Vec<OrderBy<'a>>,
    limit: u64,
    offset: u64,
}

impl<'a> Select<'a> {
    /// Creates a new SELECT builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds DISTINCT.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Replaces the projection. An empty projection selects `*`.
    #[must_use]
    pub fn columns(mut self, columns: &[&'a Column]) -> Self {
        self.columns = columns.to_vec();
        self
    }

    /// Specifies the table to select from.
    #[must_use]
    pub const fn from(mut self, table: &'a Table) -> Self {
        self.from = Some(table);
        self
    }

    /// Adds an INNER JOIN.
    #[must_use]
    pub fn join(mut self, table: &'a Table, on: Condition<'a>) -> Self {
        self.joins.push(Join {
            join_type: JoinType::Inner,
            table,
            on,
        });
        self
    }

    /// Adds a LEFT JOIN.
    #[must_use]
    pub fn left_join(mut self, table: &'a Table, on: Condition<'a>) -> Self {
        self.joins.push(Join {
            join_type: JoinType::Left,
            table,
            on,
        });
        self
    }

    /// Sets the WHERE clause, replacing any previous one.
    #[must_use]
    pub fn where_clause(mut self, condition: Condition<'a>) -> Self {
        self.where_clause = Some(condition);
        self
    }

    /// Replaces the GROUP BY columns.
    #[must_use]
    pub fn group_by(mut self, columns: &[&'a Column]) -> Self {
        self.group_by = columns.to_vec();
        self
    }

    /// Sets the HAVING clause.
    #[must_use]
    pub fn having(mut self, condition: Condition<'a>) -> Self {
        self.having = Some(condition);
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

impl Statement for Select<'_> {
    const KIND: &'static str = "SELECT";

    fn write_statement(&self, builder: &mut SqlBuilder<'_>) -> Result<()> {
        let table = self.from.ok_or(BuildError::MissingTable { slot: "from" })?;

        builder.push_str("SELECT ");
        if self.distinct {
            builder.push_str("DISTINCT ");
        }
        if self.columns.is_empty() {
            builder.push_str("*");
        } else {
            builder.push_items(&self.columns, ", ")?;
        }

        builder.push_str(" FROM ");
        builder.push_identifier(table.name());
        for join in &self.joins {
            join.write_sql(builder)?;
        }

        if let Some(ref condition) = self.where_clause {
            builder.push_str(" WHERE ");
            condition.write_sql(builder)?;
        }
        if !self.group_by.is_empty() {
            builder.push_str(" GROUP BY ");
            builder.push_items(&self.group_by, ", ")?;
        }
        if let Some(ref condition) = self.having {
            builder.push_str(" HAVING ");
            condition.write_sql(builder)?;
        }
        order::write_order_by(&self.order_by, builder)?;
        order::write_limit_offset(self.limit, self.offset, builder);
        Ok(())
    }
}
