//! TQL comparison operators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use tcex_core::AppError;

/// Comparison operator of a TQL predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TqlOperator {
    /// Exact equality.
    Eq,
    /// Not equal.
    Neq,
    /// Greater than.
    Gt,
    /// Less than.
    Lt,
    /// Greater than or equal.
    Geq,
    /// Less than or equal.
    Leq,
    /// List membership.
    In,
    /// List non-membership.
    NotIn,
    /// Wildcard pattern match.
    Like,
    /// Substring match.
    Contains,
    /// Negated substring match.
    NotContains,
    /// Prefix match.
    StartsWith,
    /// Negated prefix match.
    NotStartsWith,
    /// Suffix match.
    EndsWith,
    /// Negated suffix match.
    NotEndsWith,
}

impl TqlOperator {
    /// Every operator, in declaration order.
    pub const ALL: [TqlOperator; 15] = [
        Self::Eq,
        Self::Neq,
        Self::Gt,
        Self::Lt,
        Self::Geq,
        Self::Leq,
        Self::In,
        Self::NotIn,
        Self::Like,
        Self::Contains,
        Self::NotContains,
        Self::StartsWith,
        Self::NotStartsWith,
        Self::EndsWith,
        Self::NotEndsWith,
    ];

    /// Return the token written into the rendered expression.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Neq => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Geq => ">=",
            Self::Leq => "<=",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::Like => "like",
            Self::Contains => "CONTAINS",
            Self::NotContains => "NOT CONTAINS",
            Self::StartsWith => "STARTSWITH",
            Self::NotStartsWith => "NOT STARTSWITH",
            Self::EndsWith => "ENDSWITH",
            Self::NotEndsWith => "NOT ENDSWITH",
        }
    }

    /// Return the snake_case variant name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Neq => "neq",
            Self::Gt => "gt",
            Self::Lt => "lt",
            Self::Geq => "geq",
            Self::Leq => "leq",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::Like => "like",
            Self::Contains => "contains",
            Self::NotContains => "not_contains",
            Self::StartsWith => "starts_with",
            Self::NotStartsWith => "not_starts_with",
            Self::EndsWith => "ends_with",
            Self::NotEndsWith => "not_ends_with",
        }
    }

    /// Whether the operator takes a list value.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }

    /// Whether the operator is a textual pattern match.
    pub fn is_pattern(&self) -> bool {
        matches!(
            self,
            Self::Like
                | Self::Contains
                | Self::NotContains
                | Self::StartsWith
                | Self::NotStartsWith
                | Self::EndsWith
                | Self::NotEndsWith
        )
    }

    /// Whether the operator compares by ordering.
    pub fn is_ordering(&self) -> bool {
        matches!(self, Self::Gt | Self::Lt | Self::Geq | Self::Leq)
    }
}

impl fmt::Display for TqlOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TqlOperator {
    type Err = AppError;

    /// Accepts the variant name (`eq`, `NOT_IN`, `startswith`) or the wire token (`>=`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let squashed: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '_' | ' ' | '-'))
            .collect::<String>()
            .to_lowercase();

        Self::ALL
            .into_iter()
            .find(|op| {
                op.as_str() == trimmed
                    || op.name().replace('_', "") == squashed
                    || op.as_str().replace(' ', "").to_lowercase() == squashed
            })
            .or(match squashed.as_str() {
                "ne" => Some(Self::Neq),
                "ge" | "gte" => Some(Self::Geq),
                "le" | "lte" => Some(Self::Leq),
                _ => None,
            })
            .ok_or_else(|| AppError::validation(format!("Invalid TQL operator: '{s}'")))
    }
}
