//! ORDER BY terms shared by UPDATE and SELECT.

use super::{SqlBuilder, SqlFragment};
use crate::error::Result;
use crate::schema::Column;
use crate::value::SqlValue;

/// Order direction for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (ASC)
    #[default]
    Asc,
    /// Descending order (DESC)
    Desc,
}

impl OrderDirection {
    /// Picks the direction from a descending flag.
    #[must_use]
    pub const fn from_desc(desc: bool) -> Self {
        if desc { Self::Desc } else { Self::Asc }
    }

    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One ORDER BY term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderBy<'a> {
    /// Column to order by
    pub column: &'a Column,
    /// Order direction
    pub direction: OrderDirection,
}

impl<'a> OrderBy<'a> {
    /// Creates an ascending term.
    #[must_use]
    pub const fn asc(column: &'a Column) -> Self {
        Self {
            column,
            direction: OrderDirection::Asc,
        }
    }

    /// Creates a descending term.
    #[must_use]
    pub const fn desc(column: &'a Column) -> Self {
        Self {
            column,
            direction: OrderDirection::Desc,
        }
    }

    /// Expands one `order_by(desc, columns)` call into terms.
    pub(crate) fn terms(desc: bool, columns: &[&'a Column]) -> Vec<Self> {
        let direction = OrderDirection::from_desc(desc);
        columns
            .iter()
            .map(|&column| Self { column, direction })
            .collect()
    }
}

impl SqlFragment for OrderBy<'_> {
    fn write_sql(&self, builder: &mut SqlBuilder<'_>) -> Result<()> {
        self.column.write_sql(builder)?;
        builder.push_str(" ");
        builder.push_str(self.direction.as_sql());
        Ok(())
    }
}

/// Writes ` ORDER BY a ASC, b DESC` when `terms` is non-empty.
pub(crate) fn write_order_by(terms: &[OrderBy<'_>], builder: &mut SqlBuilder<'_>) -> Result<()> {
    if terms.is_empty() {
        return Ok(());
    }
    builder.push_str(" ORDER BY ");
    builder.push_items(terms, ", ")
}

/// Writes ` LIMIT ?` and ` OFFSET ?`; zero means unset.
pub(crate) fn write_limit_offset(limit: u64, offset: u64, builder: &mut SqlBuilder<'_>) {
    if limit > 0 {
        builder.push_str(" LIMIT ");
        builder.push_value(SqlValue::UInt(limit));
    }
    if offset > 0 {
        builder.push_str(" OFFSET ");
        builder.push_value(SqlValue::UInt(offset));
    }
}
