//! DELETE statement builder.

use super::{SqlBuilder, SqlFragment, Statement};
use crate::condition::Condition;
use crate::error::{BuildError, Result};
use crate::schema::Table;

/// A DELETE statement builder.
///
/// Without a WHERE clause every row of the table is deleted.
#[derive(Debug, Clone, Default)]
pub struct Delete<'a> {
    from: Option<&'a Table>,
    where_clause: Option<Condition<'a>>,
}

impl<'a> Delete<'a> {
    /// Creates a new DELETE builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Specifies the table to delete from.
    #[must_use]
    pub const fn from(mut self, table: &'a Table) -> Self {
        self.from = Some(table);
        self
    }

    /// Sets the WHERE clause, replacing any previous one.
    #[must_use]
    pub fn where_clause(mut self, condition: Condition<'a>) -> Self {
        self.where_clause = Some(condition);
        self
    }
}

impl Statement for Delete<'_> {
    const KIND: &'static str = "DELETE";

    fn write_statement(&self, builder: &mut SqlBuilder<'_>) -> Result<()> {
        let table = self.from.ok_or(BuildError::MissingTable { slot: "from" })?;
        builder.push_str("DELETE FROM ");
        builder.push_identifier(table.name());
        if let Some(ref condition) = self.where_clause {
            builder.push_str(" WHERE ");
            condition.write_sql(builder)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;
    use crate::schema::{Column, ColumnOption, TableOption};

    fn users() -> Table {
        Table::new(
            "users",
            TableOption::new(),
            vec![
                Column::integer("id", ColumnOption::new().primary_key()),
                Column::boolean("active", ColumnOption::new()),
            ],
        )
    }

    #[test]
    fn test_delete_all() {
        let users = users();
        let (sql, params) = Delete::new()
            .from(&users)
            .build_with(&GenericDialect::new())
            .unwrap();
        assert_eq!(sql, r#"DELETE FROM "users""#);
        assert!(params.is_empty());
    }

    #[test]
    fn test_delete_with_where() {
        let users = users();
        let (sql, params) = Delete::new()
            .from(&users)
            .where_clause(users.c("active").unwrap().eq(false))
            .build_with(&GenericDialect::numbered())
            .unwrap();
        assert_eq!(sql, r#"DELETE FROM "users" WHERE "users"."active"=$1"#);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_missing_from() {
        let err = Delete::new().build_with(&GenericDialect::new()).unwrap_err();
        assert_eq!(err, BuildError::MissingTable { slot: "from" });
    }
}
