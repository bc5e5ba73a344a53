//! Error types for statement building.

use thiserror::Error;

use crate::schema::ColumnType;
use crate::value::ValueKind;

/// Errors that can occur while building a statement.
///
/// A build either returns a complete `(sql, args)` pair or one of these;
/// partial output is never handed back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The statement has no target table.
    ///
    /// `slot` names the clause that needed it (`into`, `table` or `from`).
    #[error("{slot} is nil")]
    MissingTable {
        /// The clause missing its table.
        slot: &'static str,
    },

    /// `build()` was called before a process-wide dialect was installed.
    #[error("no dialect selected")]
    NoDialect,

    /// The process-wide dialect was already installed.
    #[error("dialect already selected")]
    DialectAlreadySet,

    /// A column lookup by name failed.
    #[error("table {table} has no column {column}")]
    UnknownColumn {
        /// Table name.
        table: String,
        /// Requested column name.
        column: String,
    },

    /// The number of values differs from the number of columns.
    #[error("{expected} values needed, but got {actual}")]
    ValueCountMismatch {
        /// Number of columns.
        expected: usize,
        /// Number of values.
        actual: usize,
    },

    /// A literal's kind is not accepted by the column type.
    #[error("{column_type} column {column} does not accept {value_kind}")]
    TypeMismatch {
        /// Column name.
        column: String,
        /// Declared column type.
        column_type: ColumnType,
        /// Kind of the offending value.
        value_kind: ValueKind,
    },

    /// An UPDATE statement without any SET assignment.
    #[error("length of sets is 0")]
    EmptySet,

    /// A CREATE TABLE for a table without columns.
    #[error("table {0} has no columns")]
    NoColumns(String),

    /// An IN / NOT IN condition with no values.
    #[error("IN condition on {0} has no values")]
    EmptyInList(String),

    /// An AND / OR group with no conditions.
    #[error("empty {0} condition group")]
    EmptyCondition(&'static str),

    /// The dialect could not render part of the statement.
    #[error(transparent)]
    Dialect(#[from] DialectError),
}

/// Errors raised by a [`Dialect`](crate::dialect::Dialect) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialectError {
    /// Neither the column type nor an explicit override maps to a native type.
    #[error("dialects: unknown column type for {column}")]
    UnknownColumnType {
        /// Column name.
        column: String,
    },

    /// The dialect cannot express a column or table option.
    #[error("dialects: unsupported option: {0}")]
    UnsupportedOption(String),
}

/// Broad classification of a [`BuildError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing table, missing dialect or unknown column.
    Configuration,
    /// Count, type or cardinality violations in the statement itself.
    Validation,
    /// Failures surfaced by the dialect.
    Dialect,
}

impl BuildError {
    /// Returns the broad classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingTable { .. }
            | Self::NoDialect
            | Self::DialectAlreadySet
            | Self::UnknownColumn { .. } => ErrorKind::Configuration,
            Self::ValueCountMismatch { .. }
            | Self::TypeMismatch { .. }
            | Self::EmptySet
            | Self::NoColumns(_)
            | Self::EmptyInList(_)
            | Self::EmptyCondition(_) => ErrorKind::Validation,
            Self::Dialect(_) => ErrorKind::Dialect,
        }
    }
}

/// Result type for statement building.
pub type Result<T> = std::result::Result<T, BuildError>;
