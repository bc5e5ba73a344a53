//! Column metadata and type acceptance.

use core::fmt;

use crate::builder::{SqlBuilder, SqlFragment};
use crate::error::{BuildError, Result};
use crate::literal::Literal;
use crate::value::{SqlValue, ToSqlValue, ValueKind};

/// The closed set of column type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Signed or unsigned integers.
    Integer,
    /// Text.
    Text,
    /// Dates and timestamps.
    Date,
    /// Floating point numbers.
    Float,
    /// Booleans.
    Boolean,
    /// Binary data.
    Bytes,
}

impl ColumnType {
    /// Returns whether a value of `kind` may be stored in this column type.
    ///
    /// NULL is accepted by every type; NOT NULL is enforced by the database.
    #[must_use]
    pub const fn accepts(self, kind: ValueKind) -> bool {
        matches!(
            (self, kind),
            (_, ValueKind::Null)
                | (Self::Integer, ValueKind::Int | ValueKind::UInt)
                | (Self::Text, ValueKind::Text)
                | (Self::Date, ValueKind::Timestamp)
                | (Self::Float, ValueKind::Float)
                | (Self::Boolean, ValueKind::Bool)
                | (Self::Bytes, ValueKind::Bytes)
        )
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Text => "text",
            Self::Date => "date",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Bytes => "bytes",
        };
        f.write_str(name)
    }
}

/// Column options.
///
/// `None` fields are unset: a column with `default: None` has no DEFAULT
/// clause, while `Some(SqlValue::Text(String::new()))` defaults to `''`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnOption {
    /// PRIMARY KEY.
    pub primary_key: bool,
    /// AUTOINCREMENT.
    pub auto_increment: bool,
    /// NOT NULL.
    pub not_null: bool,
    /// UNIQUE.
    pub unique: bool,
    /// Maximum length, for dialects with sized types.
    pub size: Option<u32>,
    /// DEFAULT value.
    pub default: Option<SqlValue>,
    /// Native type overriding the one derived from the column type.
    pub sql_type: Option<String>,
}

impl ColumnOption {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the column as PRIMARY KEY.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Marks the column as AUTOINCREMENT.
    #[must_use]
    pub const fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Marks the column as NOT NULL.
    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Marks the column as UNIQUE.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Sets the maximum length.
    #[must_use]
    pub const fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the DEFAULT value.
    #[must_use]
    pub fn default_value<T: ToSqlValue>(mut self, value: T) -> Self {
        self.default = Some(value.to_sql_value());
        self
    }

    /// Overrides the native column type.
    #[must_use]
    pub fn sql_type(mut self, sql_type: impl Into<String>) -> Self {
        self.sql_type = Some(sql_type.into());
        self
    }
}

/// A column of a [`Table`](super::Table).
///
/// Columns are created detached and get their table name when passed to
/// [`Table::new`](super::Table::new).
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    table: String,
    column_type: ColumnType,
    option: ColumnOption,
}

impl Column {
    /// Creates a column.
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: ColumnType, option: ColumnOption) -> Self {
        Self {
            name: name.into(),
            table: String::new(),
            column_type,
            option,
        }
    }

    /// Creates an integer column.
    #[must_use]
    pub fn integer(name: impl Into<String>, option: ColumnOption) -> Self {
        Self::new(name, ColumnType::Integer, option)
    }

    /// Creates a text column.
    #[must_use]
    pub fn text(name: impl Into<String>, option: ColumnOption) -> Self {
        Self::new(name, ColumnType::Text, option)
    }

    /// Creates a date column.
    #[must_use]
    pub fn date(name: impl Into<String>, option: ColumnOption) -> Self {
        Self::new(name, ColumnType::Date, option)
    }

    /// Creates a float column.
    #[must_use]
    pub fn float(name: impl Into<String>, option: ColumnOption) -> Self {
        Self::new(name, ColumnType::Float, option)
    }

    /// Creates a boolean column.
    #[must_use]
    pub fn boolean(name: impl Into<String>, option: ColumnOption) -> Self {
        Self::new(name, ColumnType::Boolean, option)
    }

    /// Creates a bytes column.
    #[must_use]
    pub fn bytes(name: impl Into<String>, option: ColumnOption) -> Self {
        Self::new(name, ColumnType::Bytes, option)
    }

    pub(super) fn attach(&mut self, table: &str) {
        self.table = String::from(table);
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the owning table (empty while detached).
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Returns the type tag.
    #[must_use]
    pub const fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// Returns the options.
    #[must_use]
    pub const fn option(&self) -> &ColumnOption {
        &self.option
    }

    /// Returns whether `literal` may be stored in this column.
    #[must_use]
    pub const fn accepts(&self, literal: &Literal) -> bool {
        self.column_type.accepts(literal.kind())
    }

    /// Checks `value` against the column type.
    pub(crate) fn check_value(&self, value: &SqlValue) -> Result<()> {
        if self.column_type.accepts(value.kind()) {
            Ok(())
        } else {
            Err(BuildError::TypeMismatch {
                column: self.name.clone(),
                column_type: self.column_type,
                value_kind: value.kind(),
            })
        }
    }

    /// Checks `literal` against the column type.
    pub(crate) fn check(&self, literal: &Literal) -> Result<()> {
        self.check_value(literal.raw())
    }
}

/// Columns write themselves table-qualified: `"PERSON"."name"`.
impl SqlFragment for Column {
    fn write_sql(&self, builder: &mut SqlBuilder<'_>) -> Result<()> {
        if !self.table.is_empty() {
            builder.push_identifier(&self.table);
            builder.push_str(".");
        }
        builder.push_identifier(&self.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_type_acceptance() {
        let int = Column::integer("id", ColumnOption::new());
        assert!(int.accepts(&Literal::wrap(1_i32)));
        assert!(int.accepts(&Literal::wrap(1_u64)));
        assert!(!int.accepts(&Literal::wrap(1.5_f64)));
        assert!(!int.accepts(&Literal::wrap("1")));

        let date = Column::date("birth", ColumnOption::new());
        assert!(date.accepts(&Literal::wrap(Utc::now())));
        assert!(!date.accepts(&Literal::wrap("1992-07-25")));

        let bytes = Column::bytes("blob", ColumnOption::new());
        assert!(bytes.accepts(&Literal::wrap(vec![0x11_u8])));
        assert!(!bytes.accepts(&Literal::wrap("text")));

        assert!(Column::float("f", ColumnOption::new()).accepts(&Literal::wrap(1_f32)));
        assert!(Column::boolean("b", ColumnOption::new()).accepts(&Literal::wrap(false)));
        assert!(Column::text("t", ColumnOption::new()).accepts(&Literal::wrap("")));
    }

    #[test]
    fn test_nil_is_accepted_by_every_type() {
        let nil = Literal::wrap(None::<i32>);
        for column_type in [
            ColumnType::Integer,
            ColumnType::Text,
            ColumnType::Date,
            ColumnType::Float,
            ColumnType::Boolean,
            ColumnType::Bytes,
        ] {
            assert!(Column::new("c", column_type, ColumnOption::new()).accepts(&nil));
        }
    }

    #[test]
    fn test_check_reports_column_and_kind() {
        let column = Column::integer("age", ColumnOption::new());
        let err = column.check(&Literal::wrap("old")).unwrap_err();
        assert_eq!(
            err,
            BuildError::TypeMismatch {
                column: String::from("age"),
                column_type: ColumnType::Integer,
                value_kind: ValueKind::Text,
            }
        );
    }

    #[test]
    fn test_option_builder() {
        let option = ColumnOption::new().primary_key().size(10).sql_type("CHAR(10)");
        assert!(option.primary_key);
        assert!(!option.unique);
        assert_eq!(option.size, Some(10));
        assert_eq!(option.default, None);
        assert_eq!(option.sql_type.as_deref(), Some("CHAR(10)"));
    }
}
