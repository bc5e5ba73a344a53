//! INSERT statement builder.

use super::{SqlBuilder, Statement};
use crate::error::{BuildError, Result};
use crate::literal::Literal;
use crate::schema::{Column, Table};

/// An INSERT statement builder.
///
/// Columns and values are paired by position. Without an explicit column
/// list the table's columns are used in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Insert<'a> {
    into: Option<&'a Table>,
    columns: Vec<&'a Column>,
    values: Vec<Literal>,
}

impl<'a> Insert<'a> {
    /// Creates a new INSERT builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Specifies the table to insert into.
    #[must_use]
    pub const fn into_table(mut self, table: &'a Table) -> Self {
        self.into = Some(table);
        self
    }

    /// Replaces the column list.
    #[must_use]
    pub fn columns(mut self, columns: &[&'a Column]) -> Self {
        self.columns = columns.to_vec();
        self
    }

    /// Replaces the value list.
    #[must_use]
    pub fn values<V: Into<Literal>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a column together with its value.
    #[must_use]
    pub fn set(mut self, column: &'a Column, value: impl Into<Literal>) -> Self {
        self.columns.push(column);
        self.values.push(value.into());
        self
    }
}

impl Statement for Insert<'_> {
    const KIND: &'static str = "INSERT";

    fn write_statement(&self, builder: &mut SqlBuilder<'_>) -> Result<()> {
        let table = self.into.ok_or(BuildError::MissingTable { slot: "into" })?;

        let columns: Vec<&Column> = if self.columns.is_empty() {
            table.columns().iter().collect()
        } else {
            self.columns.clone()
        };

        if columns.len() != self.values.len() {
            return Err(BuildError::ValueCountMismatch {
                expected: columns.len(),
                actual: self.values.len(),
            });
        }
        for (column, value) in columns.iter().zip(&self.values) {
            column.check(value)?;
        }

        builder.push_str("INSERT INTO ");
        builder.push_identifier(table.name());
        builder.push_str(" ( ");
        builder.push_identifiers(columns.iter().map(|&c| c.name()), ", ");
        builder.push_str(" ) VALUES ( ");
        builder.push_items(&self.values, ", ")?;
        builder.push_str(" )");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::*;
    use crate::dialect::GenericDialect;
    use crate::schema::{ColumnOption, ColumnType, TableOption};
    use crate::value::{SqlValue, ValueKind};

    fn person() -> Table {
        Table::new(
            "PERSON",
            TableOption::new(),
            vec![
                Column::integer("id", ColumnOption::new().primary_key()),
                Column::text("name", ColumnOption::new()),
                Column::date("birth", ColumnOption::new()),
            ],
        )
    }

    #[test]
    fn test_simple_insert() {
        let person = person();
        let birth = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(1992, 7, 25, 0, 0, 0)
            .unwrap();
        let (sql, params) = Insert::new()
            .into_table(&person)
            .set(person.c("name").unwrap(), "Kurisu Makise")
            .set(person.c("birth").unwrap(), birth)
            .build_with(&GenericDialect::new())
            .unwrap();

        assert_eq!(sql, r#"INSERT INTO "PERSON" ( "name", "birth" ) VALUES ( ?, ? )"#);
        assert_eq!(
            params,
            vec![
                SqlValue::Text(String::from("Kurisu Makise")),
                SqlValue::Timestamp(birth)
            ]
        );
    }

    #[test]
    fn test_insert_without_columns() {
        let person = person();
        let insert = Insert::new().into_table(&person).values([
            Literal::wrap(1),
            Literal::wrap("Okabe"),
            Literal::wrap(None::<i64>),
        ]);
        let dialect = GenericDialect::numbered();

        let first = insert.build_with(&dialect).unwrap();
        assert_eq!(
            first.0,
            r#"INSERT INTO "PERSON" ( "id", "name", "birth" ) VALUES ( $1, $2, $3 )"#
        );
        assert_eq!(first.1.len(), 3);

        // Building does not store the implicit column list.
        let second = insert.build_with(&dialect).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_table() {
        let person = person();
        let err = Insert::new()
            .set(person.c("id").unwrap(), 1)
            .build_with(&GenericDialect::new())
            .unwrap_err();
        assert_eq!(err, BuildError::MissingTable { slot: "into" });
        assert_eq!(err.to_string(), "into is nil");
    }

    #[test]
    fn test_count_mismatch() {
        let person = person();
        let err = Insert::new()
            .into_table(&person)
            .columns(&[person.c("id").unwrap(), person.c("name").unwrap()])
            .values([1])
            .build_with(&GenericDialect::new())
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::ValueCountMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_type_mismatch() {
        let person = person();
        let err = Insert::new()
            .into_table(&person)
            .set(person.c("id").unwrap(), "one")
            .build_with(&GenericDialect::new())
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::TypeMismatch {
                column: String::from("id"),
                column_type: ColumnType::Integer,
                value_kind: ValueKind::Text,
            }
        );
    }

    #[test]
    fn test_insert_sql_injection_prevention() {
        let person = person();
        let malicious = "'; DROP TABLE PERSON; --";
        let (sql, params) = Insert::new()
            .into_table(&person)
            .set(person.c("name").unwrap(), malicious)
            .build_with(&GenericDialect::new())
            .unwrap();

        assert_eq!(sql, r#"INSERT INTO "PERSON" ( "name" ) VALUES ( ? )"#);
        assert!(matches!(&params[0], SqlValue::Text(s) if s == malicious));
    }

    #[test]
    fn test_inline_value() {
        let person = person();
        let (sql, params) = Insert::new()
            .into_table(&person)
            .set(person.c("id").unwrap(), Literal::inline(7))
            .set(person.c("name").unwrap(), "x")
            .build_with(&GenericDialect::new())
            .unwrap();
        assert_eq!(sql, r#"INSERT INTO "PERSON" ( "id", "name" ) VALUES ( 7, ? )"#);
        assert_eq!(params.len(), 1);
    }
}
