//! The accumulator statements serialize into.

use crate::dialect::Dialect;
use crate::error::Result;
use crate::value::SqlValue;

/// Something that can write itself into a [`SqlBuilder`].
pub trait SqlFragment {
    /// Appends this fragment's text and arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment is invalid for the dialect or fails
    /// type acceptance.
    fn write_sql(&self, builder: &mut SqlBuilder<'_>) -> Result<()>;
}

impl<T: SqlFragment + ?Sized> SqlFragment for &T {
    fn write_sql(&self, builder: &mut SqlBuilder<'_>) -> Result<()> {
        (**self).write_sql(builder)
    }
}

/// Append-only SQL text plus ordered bind arguments.
///
/// A builder lives for exactly one serialization. Text and arguments are
/// never retracted; a caller that gets an error back from a fragment must
/// drop the builder rather than finish it.
pub struct SqlBuilder<'d> {
    dialect: &'d dyn Dialect,
    sql: String,
    args: Vec<SqlValue>,
}

impl<'d> SqlBuilder<'d> {
    /// Creates an empty builder for `dialect`.
    #[must_use]
    pub fn new(dialect: &'d dyn Dialect) -> Self {
        Self {
            dialect,
            sql: String::new(),
            args: vec![],
        }
    }

    /// Returns the dialect this builder renders for.
    #[must_use]
    pub fn dialect(&self) -> &'d dyn Dialect {
        self.dialect
    }

    /// Appends raw text.
    pub fn push_str(&mut self, fragment: &str) {
        self.sql.push_str(fragment);
    }

    /// Appends a quoted identifier.
    pub fn push_identifier(&mut self, name: &str) {
        let quoted = self.dialect.quote_identifier(name);
        self.sql.push_str(&quoted);
    }

    /// Appends quoted identifiers joined by `separator`.
    pub fn push_identifiers<'n>(&mut self, names: impl IntoIterator<Item = &'n str>, separator: &str) {
        for (i, name) in names.into_iter().enumerate() {
            if i > 0 {
                self.sql.push_str(separator);
            }
            self.push_identifier(name);
        }
    }

    /// Registers `value` as the next argument and appends its placeholder.
    pub fn push_value(&mut self, value: SqlValue) {
        self.args.push(value);
        let placeholder = self.dialect.bind_variable(self.args.len());
        self.sql.push_str(&placeholder);
    }

    /// Appends a fragment.
    ///
    /// # Errors
    ///
    /// Propagates the fragment's error.
    pub fn push_item<F: SqlFragment + ?Sized>(&mut self, item: &F) -> Result<()> {
        item.write_sql(self)
    }

    /// Appends fragments joined by `separator`.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first fragment error.
    pub fn push_items<F: SqlFragment>(&mut self, items: &[F], separator: &str) -> Result<()> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(separator);
            }
            item.write_sql(self)?;
        }
        Ok(())
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the arguments registered so far.
    #[must_use]
    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }

    /// Appends the dialect's query suffix and returns the SQL and arguments.
    #[must_use]
    pub fn finish(mut self) -> (String, Vec<SqlValue>) {
        self.sql.push_str(self.dialect.query_suffix());
        (self.sql, self.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;
    use crate::error::BuildError;

    struct Failing;

    impl SqlFragment for Failing {
        fn write_sql(&self, builder: &mut SqlBuilder<'_>) -> Result<()> {
            builder.push_str("broken");
            Err(BuildError::EmptySet)
        }
    }

    struct Value(i64);

    impl SqlFragment for Value {
        fn write_sql(&self, builder: &mut SqlBuilder<'_>) -> Result<()> {
            builder.push_value(SqlValue::Int(self.0));
            Ok(())
        }
    }

    #[test]
    fn test_placeholders_follow_argument_order() {
        let dialect = GenericDialect::numbered();
        let mut builder = SqlBuilder::new(&dialect);
        builder.push_str("VALUES ( ");
        builder
            .push_items(&[Value(1), Value(2), Value(3)], ", ")
            .unwrap();
        builder.push_str(" )");
        let (sql, args) = builder.finish();
        assert_eq!(sql, "VALUES ( $1, $2, $3 )");
        assert_eq!(args, vec![SqlValue::Int(1), SqlValue::Int(2), SqlValue::Int(3)]);
    }

    #[test]
    fn test_push_items_stops_at_first_error() {
        let dialect = GenericDialect::new();
        let mut builder = SqlBuilder::new(&dialect);
        let items: Vec<&dyn SqlFragment> = vec![&Value(1), &Failing, &Value(2)];
        let err = builder.push_items(&items, ", ").unwrap_err();
        assert_eq!(err, BuildError::EmptySet);
        // Nothing after the failing fragment was written.
        assert_eq!(builder.sql(), "?, broken");
        assert_eq!(builder.args().len(), 1);
    }

    #[test]
    fn test_identifiers() {
        let dialect = GenericDialect::new();
        let mut builder = SqlBuilder::new(&dialect);
        builder.push_identifiers(["id", "name"], ", ");
        assert_eq!(builder.sql(), r#""id", "name""#);
    }
}
