//! Literals: one value plus the way it is written into a statement.

use crate::builder::{SqlBuilder, SqlFragment};
use crate::error::Result;
use crate::value::{SqlValue, TIMESTAMP_FORMAT, ToSqlValue, ValueKind};

/// A value wrapped for serialization.
///
/// Bound literals become a placeholder plus a positional argument. Inline
/// literals are written verbatim using [`Literal::text_form`].
///
/// **Warning**: inline text is not escaped. Only use inline literals for
/// values known at build time, never for user input.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    value: SqlValue,
    bound: bool,
}

impl Literal {
    /// Creates a literal with an explicit mode.
    #[must_use]
    pub const fn new(value: SqlValue, bound: bool) -> Self {
        Self { value, bound }
    }

    /// Wraps a value as a bound literal.
    #[must_use]
    pub fn wrap<T: ToSqlValue>(value: T) -> Self {
        Self::new(value.to_sql_value(), true)
    }

    /// Wraps a value as an inline literal.
    #[must_use]
    pub fn inline<T: ToSqlValue>(value: T) -> Self {
        Self::new(value.to_sql_value(), false)
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn raw(&self) -> &SqlValue {
        &self.value
    }

    /// Returns the kind of the wrapped value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Returns true when the literal is written as a placeholder.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.bound
    }

    /// Returns true when the wrapped value is NULL.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.value.is_null()
    }

    /// Renders the value as plain text.
    ///
    /// Floats always carry ten fractional digits and timestamps are written
    /// in their own offset as `YYYY-MM-DD HH:MM:SS`. Bytes are read as UTF-8;
    /// invalid sequences become U+FFFD, so this form is lossy for binary
    /// data. Bind such values instead of inlining them.
    #[must_use]
    pub fn text_form(&self) -> String {
        match &self.value {
            SqlValue::Null => String::from("NULL"),
            SqlValue::Int(n) => n.to_string(),
            SqlValue::UInt(n) => n.to_string(),
            SqlValue::Float(f) => format!("{f:.10}"),
            SqlValue::Bool(b) => b.to_string(),
            SqlValue::Text(s) => s.clone(),
            SqlValue::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
            SqlValue::Timestamp(t) => t.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

impl<T: ToSqlValue> From<T> for Literal {
    fn from(value: T) -> Self {
        Self::wrap(value)
    }
}

impl SqlFragment for Literal {
    fn write_sql(&self, builder: &mut SqlBuilder<'_>) -> Result<()> {
        if self.bound {
            builder.push_value(self.value.clone());
        } else {
            builder.push_str(&self.text_form());
        }
        Ok(())
    }
}
