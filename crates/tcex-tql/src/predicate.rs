//! A single `keyword operator value` condition.

use crate::operator::TqlOperator;
use crate::tql::Tql;
use crate::tql_type::TqlType;
use crate::value::TqlValue;

/// One filter condition held by a [`Tql`] builder.
///
/// Predicates are validated when the builder accepts them and are not
/// mutated afterwards, with one exception: a sub-query predicate keeps its
/// child builder open so that the child can be refined until the parent
/// renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    keyword: String,
    operator: TqlOperator,
    value: TqlValue,
    value_type: TqlType,
}

impl Predicate {
    pub(crate) fn new(
        keyword: String,
        operator: TqlOperator,
        value: TqlValue,
        value_type: TqlType,
    ) -> Self {
        Self {
            keyword,
            operator,
            value,
            value_type,
        }
    }

    /// The field keyword, e.g. `summary` or `hasTag`.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The comparison operator.
    pub fn operator(&self) -> TqlOperator {
        self.operator
    }

    /// The value.
    pub fn value(&self) -> &TqlValue {
        &self.value
    }

    /// The declared value type.
    pub fn value_type(&self) -> TqlType {
        self.value_type
    }

    /// The nested builder of a sub-query predicate.
    pub fn sub_query(&self) -> Option<&Tql> {
        match &self.value {
            TqlValue::SubQuery(tql) => Some(tql),
            _ => None,
        }
    }

    pub(crate) fn sub_query_mut(&mut self) -> Option<&mut Tql> {
        match &mut self.value {
            TqlValue::SubQuery(tql) => Some(tql),
            _ => None,
        }
    }

    /// Render the clause, e.g. `id = 5`.
    pub fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.keyword,
            self.operator.as_str(),
            self.value.render()
        )
    }
}
