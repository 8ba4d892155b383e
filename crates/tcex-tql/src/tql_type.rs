//! Value types of TQL predicates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::operator::TqlOperator;

/// The declared type of a predicate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TqlType {
    /// `true` / `false`, rendered bare.
    Boolean,
    /// Whole numbers, rendered bare.
    Integer,
    /// Text, rendered double-quoted.
    String,
    /// A nested expression over a related resource type, rendered double-quoted.
    SubQuery,
}

impl TqlType {
    /// Whether `operator` can ever be valid for this type.
    ///
    /// Only combinations that are always rejected by the platform are
    /// refused here; everything else is left for the server to judge.
    pub fn supports(&self, operator: TqlOperator) -> bool {
        match self {
            Self::Boolean => matches!(operator, TqlOperator::Eq | TqlOperator::Neq),
            Self::Integer => !operator.is_pattern(),
            Self::String => true,
            Self::SubQuery => operator == TqlOperator::Eq,
        }
    }

    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::String => "string",
            Self::SubQuery => "sub_query",
        }
    }
}

impl fmt::Display for TqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_rejects_everything_but_equality() {
        let allowed: Vec<_> = TqlOperator::ALL
            .into_iter()
            .filter(|op| TqlType::Boolean.supports(*op))
            .collect();
        assert_eq!(allowed, vec![TqlOperator::Eq, TqlOperator::Neq]);
    }

    #[test]
    fn test_integer_rejects_patterns() {
        assert!(TqlType::Integer.supports(TqlOperator::Geq));
        assert!(TqlType::Integer.supports(TqlOperator::In));
        assert!(!TqlType::Integer.supports(TqlOperator::Contains));
        assert!(!TqlType::Integer.supports(TqlOperator::Like));
    }

    #[test]
    fn test_string_and_sub_query() {
        assert!(TqlOperator::ALL.iter().all(|op| TqlType::String.supports(*op)));
        assert!(TqlType::SubQuery.supports(TqlOperator::Eq));
        assert!(!TqlType::SubQuery.supports(TqlOperator::Neq));
    }
}
