//! Condition trees for WHERE, HAVING and JOIN ... ON clauses.
//!
//! Conditions are created from columns and combined with AND, OR and NOT:
//!
//! ```rust
//! use oxide_sqlbuilder::builder::SqlBuilder;
//! use oxide_sqlbuilder::dialect::GenericDialect;
//! use oxide_sqlbuilder::schema::{Column, ColumnOption, Table, TableOption};
//!
//! let users = Table::new(
//!     "users",
//!     TableOption::new(),
//!     vec![
//!         Column::integer("age", ColumnOption::new()),
//!         Column::boolean("active", ColumnOption::new()),
//!     ],
//! );
//! let age = users.c("age")?;
//! let active = users.c("active")?;
//!
//! let cond = active.eq(true).and(age.gt(18).or(age.is_null()));
//!
//! let dialect = GenericDialect::new();
//! let mut builder = SqlBuilder::new(&dialect);
//! builder.push_item(&cond)?;
//! let (sql, params) = builder.finish();
//! assert_eq!(
//!     sql,
//!     r#""users"."active"=? AND ( "users"."age">? OR "users"."age" IS NULL )"#
//! );
//! assert_eq!(params.len(), 2);
//! # Ok::<(), oxide_sqlbuilder::BuildError>(())
//! ```
//!
//! Conditions are pure syntax; nothing is evaluated locally. Literal
//! operands are checked against the column type when the condition is
//! written.

use crate::builder::{SqlBuilder, SqlFragment};
use crate::error::{BuildError, Result};
use crate::literal::Literal;
use crate::schema::Column;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Equal (=)
    Eq,
    /// Not equal (<>)
    NotEq,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    GtEq,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    LtEq,
    /// Pattern match (LIKE)
    Like,
    /// Negated pattern match (NOT LIKE)
    NotLike,
}

impl CompareOp {
    /// Returns the operator as written between its operands.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Like => " LIKE ",
            Self::NotLike => " NOT LIKE ",
        }
    }
}

#[derive(Debug, Clone)]
enum Operand<'a> {
    Literal(Literal),
    Column(&'a Column),
}

#[derive(Debug, Clone)]
enum Node<'a> {
    Compare {
        column: &'a Column,
        op: CompareOp,
        operand: Operand<'a>,
    },
    Between {
        column: &'a Column,
        low: Literal,
        high: Literal,
        negated: bool,
    },
    In {
        column: &'a Column,
        values: Vec<Literal>,
        negated: bool,
    },
    IsNull {
        column: &'a Column,
        negated: bool,
    },
    And(Vec<Node<'a>>),
    Or(Vec<Node<'a>>),
    Not(Box<Node<'a>>),
}

/// A boolean expression over columns and literals.
#[derive(Debug, Clone)]
pub struct Condition<'a> {
    node: Node<'a>,
}

impl<'a> Condition<'a> {
    const fn from_node(node: Node<'a>) -> Self {
        Self { node }
    }

    /// Combines this condition with another using AND.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self.node {
            Node::And(mut nodes) => {
                nodes.push(other.node);
                Self::from_node(Node::And(nodes))
            }
            node => Self::from_node(Node::And(vec![node, other.node])),
        }
    }

    /// Combines this condition with another using OR.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self.node {
            Node::Or(mut nodes) => {
                nodes.push(other.node);
                Self::from_node(Node::Or(nodes))
            }
            node => Self::from_node(Node::Or(vec![node, other.node])),
        }
    }

    /// Negates this condition with NOT.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        not(self)
    }
}

/// Joins `conditions` with AND.
///
/// An empty group fails when written.
#[must_use]
pub fn and<'a>(conditions: impl IntoIterator<Item = Condition<'a>>) -> Condition<'a> {
    Condition::from_node(Node::And(conditions.into_iter().map(|c| c.node).collect()))
}

/// Joins `conditions` with OR.
///
/// An empty group fails when written.
#[must_use]
pub fn or<'a>(conditions: impl IntoIterator<Item = Condition<'a>>) -> Condition<'a> {
    Condition::from_node(Node::Or(conditions.into_iter().map(|c| c.node).collect()))
}

/// Negates `condition`.
#[must_use]
pub fn not(condition: Condition<'_>) -> Condition<'_> {
    Condition::from_node(Node::Not(Box::new(condition.node)))
}

impl SqlFragment for Condition<'_> {
    fn write_sql(&self, builder: &mut SqlBuilder<'_>) -> Result<()> {
        write_node(&self.node, builder)
    }
}

fn write_node(node: &Node<'_>, builder: &mut SqlBuilder<'_>) -> Result<()> {
    match node {
        Node::Compare {
            column,
            op,
            operand,
        } => {
            if let Operand::Literal(literal) = operand {
                column.check(literal)?;
            }
            column.write_sql(builder)?;
            builder.push_str(op.as_sql());
            match operand {
                Operand::Literal(literal) => literal.write_sql(builder),
                Operand::Column(other) => other.write_sql(builder),
            }
        }
        Node::Between {
            column,
            low,
            high,
            negated,
        } => {
            column.check(low)?;
            column.check(high)?;
            column.write_sql(builder)?;
            builder.push_str(if *negated { " NOT BETWEEN " } else { " BETWEEN " });
            low.write_sql(builder)?;
            builder.push_str(" AND ");
            high.write_sql(builder)
        }
        Node::In {
            column,
            values,
            negated,
        } => {
            if values.is_empty() {
                return Err(BuildError::EmptyInList(String::from(column.name())));
            }
            for value in values {
                column.check(value)?;
            }
            column.write_sql(builder)?;
            builder.push_str(if *negated { " NOT IN ( " } else { " IN ( " });
            builder.push_items(values, ", ")?;
            builder.push_str(" )");
            Ok(())
        }
        Node::IsNull { column, negated } => {
            column.write_sql(builder)?;
            builder.push_str(if *negated { " IS NOT NULL" } else { " IS NULL" });
            Ok(())
        }
        Node::And(nodes) => write_group(nodes, "AND", builder),
        Node::Or(nodes) => write_group(nodes, "OR", builder),
        Node::Not(inner) => {
            builder.push_str("NOT ( ");
            write_node(inner, builder)?;
            builder.push_str(" )");
            Ok(())
        }
    }
}

fn write_group(nodes: &[Node<'_>], connector: &'static str, builder: &mut SqlBuilder<'_>) -> Result<()> {
    if nodes.is_empty() {
        return Err(BuildError::EmptyCondition(connector));
    }
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            builder.push_str(" ");
            builder.push_str(connector);
            builder.push_str(" ");
        }
        // Nested groups are parenthesized so precedence survives.
        if matches!(node, Node::And(_) | Node::Or(_)) {
            builder.push_str("( ");
            write_node(node, builder)?;
            builder.push_str(" )");
        } else {
            write_node(node, builder)?;
        }
    }
    Ok(())
}

/// Condition constructors.
impl Column {
    /// Creates a comparison against a value.
    #[must_use]
    pub fn compare(&self, op: CompareOp, value: impl Into<Literal>) -> Condition<'_> {
        Condition::from_node(Node::Compare {
            column: self,
            op,
            operand: Operand::Literal(value.into()),
        })
    }

    /// Creates a comparison against another column.
    #[must_use]
    pub fn compare_column<'a>(&'a self, op: CompareOp, other: &'a Self) -> Condition<'a> {
        Condition::from_node(Node::Compare {
            column: self,
            op,
            operand: Operand::Column(other),
        })
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(&self, value: impl Into<Literal>) -> Condition<'_> {
        self.compare(CompareOp::Eq, value)
    }

    /// Creates an equality expression between two columns.
    #[must_use]
    pub fn eq_column<'a>(&'a self, other: &'a Self) -> Condition<'a> {
        self.compare_column(CompareOp::Eq, other)
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn not_eq(&self, value: impl Into<Literal>) -> Condition<'_> {
        self.compare(CompareOp::NotEq, value)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(&self, value: impl Into<Literal>) -> Condition<'_> {
        self.compare(CompareOp::Gt, value)
    }

    /// Creates a greater-than-or-equal expression.
    #[must_use]
    pub fn gt_eq(&self, value: impl Into<Literal>) -> Condition<'_> {
        self.compare(CompareOp::GtEq, value)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(&self, value: impl Into<Literal>) -> Condition<'_> {
        self.compare(CompareOp::Lt, value)
    }

    /// Creates a less-than-or-equal expression.
    #[must_use]
    pub fn lt_eq(&self, value: impl Into<Literal>) -> Condition<'_> {
        self.compare(CompareOp::LtEq, value)
    }

    /// Creates a LIKE expression.
    #[must_use]
    pub fn like(&self, pattern: impl Into<Literal>) -> Condition<'_> {
        self.compare(CompareOp::Like, pattern)
    }

    /// Creates a NOT LIKE expression.
    #[must_use]
    pub fn not_like(&self, pattern: impl Into<Literal>) -> Condition<'_> {
        self.compare(CompareOp::NotLike, pattern)
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(&self, low: impl Into<Literal>, high: impl Into<Literal>) -> Condition<'_> {
        Condition::from_node(Node::Between {
            column: self,
            low: low.into(),
            high: high.into(),
            negated: false,
        })
    }

    /// Creates a NOT BETWEEN expression.
    #[must_use]
    pub fn not_between(&self, low: impl Into<Literal>, high: impl Into<Literal>) -> Condition<'_> {
        Condition::from_node(Node::Between {
            column: self,
            low: low.into(),
            high: high.into(),
            negated: true,
        })
    }

    /// Creates an IN expression.
    #[must_use]
    pub fn in_list<V: Into<Literal>>(&self, values: impl IntoIterator<Item = V>) -> Condition<'_> {
        Condition::from_node(Node::In {
            column: self,
            values: values.into_iter().map(Into::into).collect(),
            negated: false,
        })
    }

    /// Creates a NOT IN expression.
    #[must_use]
    pub fn not_in_list<V: Into<Literal>>(
        &self,
        values: impl IntoIterator<Item = V>,
    ) -> Condition<'_> {
        Condition::from_node(Node::In {
            column: self,
            values: values.into_iter().map(Into::into).collect(),
            negated: true,
        })
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(&self) -> Condition<'_> {
        Condition::from_node(Node::IsNull {
            column: self,
            negated: false,
        })
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(&self) -> Condition<'_> {
        Condition::from_node(Node::IsNull {
            column: self,
            negated: true,
        })
    }
}
