//! Generic SQL dialect.

use super::Dialect;
use crate::error::DialectError;
use crate::schema::{Column, ColumnOption, ColumnType, TableOption};
use crate::value::SqlValue;

/// Bind-variable style.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `?` for every argument.
    #[default]
    Question,
    /// `$1`, `$2`, ... by position.
    Numbered,
}

/// A generic SQL dialect using ANSI SQL standards.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect {
    placeholder: Placeholder,
}

impl GenericDialect {
    /// Creates a new generic dialect with `?` placeholders.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            placeholder: Placeholder::Question,
        }
    }

    /// Creates a generic dialect with `$n` placeholders.
    #[must_use]
    pub const fn numbered() -> Self {
        Self {
            placeholder: Placeholder::Numbered,
        }
    }

    /// Returns the placeholder style.
    #[must_use]
    pub const fn placeholder(&self) -> Placeholder {
        self.placeholder
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn bind_variable(&self, position: usize) -> String {
        match self.placeholder {
            Placeholder::Question => String::from("?"),
            Placeholder::Numbered => format!("${position}"),
        }
    }

    fn column_type_to_string(&self, column: &Column) -> Result<String, DialectError> {
        let option = column.option();
        if let Some(ref sql_type) = option.sql_type {
            return Ok(sql_type.clone());
        }
        let sql_type = match column.column_type() {
            ColumnType::Integer => String::from("INTEGER"),
            ColumnType::Text => match option.size {
                Some(size) => format!("VARCHAR({size})"),
                None => String::from("TEXT"),
            },
            ColumnType::Date => String::from("DATE"),
            ColumnType::Float => String::from("REAL"),
            ColumnType::Boolean => String::from("BOOLEAN"),
            ColumnType::Bytes => String::from("BLOB"),
        };
        Ok(sql_type)
    }

    fn column_option_to_string(&self, option: &ColumnOption) -> Result<String, DialectError> {
        let mut parts: Vec<String> = vec![];
        if option.primary_key {
            parts.push(String::from("PRIMARY KEY"));
        }
        if option.auto_increment {
            if !option.primary_key {
                return Err(DialectError::UnsupportedOption(String::from(
                    "AUTOINCREMENT without PRIMARY KEY",
                )));
            }
            parts.push(String::from("AUTOINCREMENT"));
        }
        if option.not_null {
            parts.push(String::from("NOT NULL"));
        }
        if option.unique {
            parts.push(String::from("UNIQUE"));
        }
        if let Some(ref default) = option.default {
            if matches!(default, SqlValue::Float(f) if !f.is_finite()) {
                return Err(DialectError::UnsupportedOption(String::from(
                    "non-finite DEFAULT",
                )));
            }
            parts.push(format!("DEFAULT {}", self.quote_field(default)));
        }
        Ok(parts.join(" "))
    }

    fn table_option_to_string(&self, option: &TableOption) -> Result<String, DialectError> {
        let mut groups = Vec::with_capacity(option.unique.len());
        for group in &option.unique {
            if group.is_empty() {
                return Err(DialectError::UnsupportedOption(String::from(
                    "UNIQUE with no columns",
                )));
            }
            let cols: Vec<String> = group.iter().map(|c| self.quote_identifier(c)).collect();
            groups.push(format!("UNIQUE({})", cols.join(", ")));
        }
        Ok(groups.join(", "))
    }
}
