//! Filter item operators
//!
//! Wire names are kebab-case strings. Unrecognized names deserialize to
//! [`Operator::Other`] instead of failing, so an unknown operator
//! degrades to a pass at evaluation time rather than rejecting the
//! whole tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Comparison operator of a filter item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    /// Equality on the text form of the field (case-insensitive)
    Is,
    /// Inequality on the text form of the field
    IsNot,
    /// Substring match on scalars, query-token membership on arrays
    Contains,
    /// Negation of `Contains`
    DoesNotContain,
    /// Numeric comparison against the query
    MoreThan,
    /// Numeric comparison against the query
    LessThan,
    /// Any operator name this engine does not recognize
    Other(String),
}

impl Operator {
    /// Returns the wire name of this operator
    pub fn as_str(&self) -> &str {
        match self {
            Operator::Is => "is",
            Operator::IsNot => "is-not",
            Operator::Contains => "contains",
            Operator::DoesNotContain => "does-not-contain",
            Operator::MoreThan => "more-than",
            Operator::LessThan => "less-than",
            Operator::Other(name) => name,
        }
    }

    /// Returns true if this is one of the numeric operators
    pub fn is_numeric(&self) -> bool {
        matches!(self, Operator::MoreThan | Operator::LessThan)
    }
}

impl From<String> for Operator {
    fn from(name: String) -> Self {
        match name.as_str() {
            "is" => Operator::Is,
            "is-not" => Operator::IsNot,
            "contains" => Operator::Contains,
            "does-not-contain" => Operator::DoesNotContain,
            "more-than" => Operator::MoreThan,
            "less-than" => Operator::LessThan,
            _ => Operator::Other(name),
        }
    }
}

impl From<Operator> for String {
    fn from(operator: Operator) -> Self {
        operator.as_str().to_string()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
