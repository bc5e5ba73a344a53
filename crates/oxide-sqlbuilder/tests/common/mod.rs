#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, TimeZone};
use oxide_sqlbuilder::dialect::Dialect;
use oxide_sqlbuilder::error::DialectError;
use oxide_sqlbuilder::schema::{Column, ColumnOption, ColumnType, Table, TableOption};
use oxide_sqlbuilder::value::SqlValue;
use sqlx::sqlite::{SqliteArguments, SqlitePool, SqlitePoolOptions, SqliteQueryResult};
use sqlx::Sqlite;

/// PERSON(id INTEGER PRIMARY KEY, name TEXT UNIQUE DEFAULT 'no_name', birth DATE)
pub fn person() -> Table {
    Table::new(
        "PERSON",
        TableOption::new(),
        vec![
            Column::integer("id", ColumnOption::new().primary_key()),
            Column::text("name", ColumnOption::new().unique().default_value("no_name")),
            Column::date("birth", ColumnOption::new()),
        ],
    )
}

pub fn date(year: i32, month: u32, day: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .unwrap()
}

pub async fn create_test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test pool")
}

/// Binds a built argument to a sqlx query.
pub fn bind_param<'q>(
    query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    value: SqlValue,
) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(b),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::UInt(u) => query.bind(i64::try_from(u).expect("unsigned argument fits in i64")),
        SqlValue::Float(f) => query.bind(f),
        SqlValue::Text(s) => query.bind(s),
        SqlValue::Bytes(b) => query.bind(b),
        SqlValue::Timestamp(t) => query.bind(t),
    }
}

/// Executes a built `(sql, args)` pair.
pub async fn execute(pool: &SqlitePool, built: (String, Vec<SqlValue>)) -> SqliteQueryResult {
    let (sql, params) = built;
    let mut query = sqlx::query(&sql);
    for param in params {
        query = bind_param(query, param);
    }
    query
        .execute(pool)
        .await
        .unwrap_or_else(|e| panic!("Failed to execute: {sql}\nError: {e}"))
}

/// Runs a built query and returns the first column of each row as text.
pub async fn fetch_strings(pool: &SqlitePool, built: (String, Vec<SqlValue>)) -> Vec<String> {
    use sqlx::Row;

    let (sql, params) = built;
    let mut query = sqlx::query(&sql);
    for param in params {
        query = bind_param(query, param);
    }
    let rows = query
        .fetch_all(pool)
        .await
        .unwrap_or_else(|e| panic!("Failed to fetch: {sql}\nError: {e}"));
    rows.iter().map(|row| row.get::<String, _>(0)).collect()
}

/// A dialect that writes identifiers bare and can terminate statements.
pub struct PlainDialect {
    pub terminated: bool,
}

impl Dialect for PlainDialect {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn query_suffix(&self) -> &'static str {
        if self.terminated { ";" } else { "" }
    }

    fn bind_variable(&self, _position: usize) -> String {
        String::from("?")
    }

    fn quote_identifier(&self, name: &str) -> String {
        String::from(name)
    }

    fn column_type_to_string(&self, column: &Column) -> Result<String, DialectError> {
        match column.column_type() {
            ColumnType::Integer => Ok(String::from("INT")),
            ColumnType::Text => Ok(String::from("TEXT")),
            ColumnType::Date => Ok(String::from("TIMESTAMP")),
            _ => Err(DialectError::UnknownColumnType {
                column: String::from(column.name()),
            }),
        }
    }

    fn column_option_to_string(&self, option: &ColumnOption) -> Result<String, DialectError> {
        Ok(if option.primary_key {
            String::from("PRIMARY KEY")
        } else {
            String::new()
        })
    }

    fn table_option_to_string(&self, _option: &TableOption) -> Result<String, DialectError> {
        Ok(String::new())
    }
}
