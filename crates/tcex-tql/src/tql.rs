//! The TQL expression builder.

use std::fmt;

use tracing::trace;

use tcex_core::{AppError, AppResult};

use crate::operator::TqlOperator;
use crate::predicate::Predicate;
use crate::tql_type::TqlType;
use crate::value::TqlValue;

/// Logical keyword placed between rendered predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TqlJoin {
    /// Every predicate must hold.
    #[default]
    And,
    /// Any predicate may hold. Reserved: rejected by [`Tql::set_join`].
    Or,
}

impl TqlJoin {
    /// The separator written between clauses.
    pub fn separator(&self) -> &'static str {
        match self {
            Self::And => " and ",
            Self::Or => " or ",
        }
    }
}

/// An ordered list of predicates rendered into one TQL expression.
///
/// Rendering never mutates the builder, so it can be repeated and
/// interleaved with further [`add_filter`](Self::add_filter) calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tql {
    filters: Vec<Predicate>,
    join: TqlJoin,
}

impl Tql {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate after checking it is well formed.
    ///
    /// Rejected with a validation error when the keyword is blank, the value
    /// does not match `value_type`, a list is paired with a non-list
    /// operator (or the reverse), or the operator can never apply to
    /// `value_type`.
    pub fn add_filter(
        &mut self,
        keyword: impl Into<String>,
        operator: TqlOperator,
        value: impl Into<TqlValue>,
        value_type: TqlType,
    ) -> AppResult<()> {
        let keyword = keyword.into();
        let value = value.into();

        validate_keyword(&keyword)?;
        if !value.matches_type(value_type) {
            return Err(AppError::validation(format!(
                "Value for '{keyword}' is a {} but the field type is {value_type}",
                value.kind_name()
            )));
        }
        if value.is_list() != operator.is_list() {
            return Err(AppError::validation(format!(
                "Operator '{operator}' on '{keyword}' cannot take a {} value",
                value.kind_name()
            )));
        }
        if !value_type.supports(operator) {
            return Err(AppError::validation(format!(
                "Operator '{operator}' is not valid for {value_type} field '{keyword}'"
            )));
        }

        trace!(keyword = %keyword, operator = %operator, "Adding TQL filter");
        self.filters
            .push(Predicate::new(keyword, operator, value, value_type));
        Ok(())
    }

    /// Append a sub-query predicate and return its empty child builder.
    pub fn add_sub_query(&mut self, keyword: impl Into<String>) -> AppResult<&mut Tql> {
        let keyword = keyword.into();
        validate_keyword(&keyword)?;
        Ok(self.push_sub_query(keyword))
    }

    pub(crate) fn push_sub_query(&mut self, keyword: impl Into<String>) -> &mut Tql {
        self.filters.push(Predicate::new(
            keyword.into(),
            TqlOperator::Eq,
            TqlValue::SubQuery(Box::default()),
            TqlType::SubQuery,
        ));
        match self.filters.last_mut().and_then(Predicate::sub_query_mut) {
            Some(child) => child,
            None => unreachable!("a sub-query predicate was just appended"),
        }
    }

    /// Set the logical keyword placed between clauses.
    ///
    /// The server reads every expression as a conjunction, so only
    /// [`TqlJoin::And`] is accepted.
    pub fn set_join(&mut self, join: TqlJoin) -> AppResult<()> {
        if join != TqlJoin::And {
            return Err(AppError::validation(format!(
                "TQL join {join:?} is not supported; clauses are always joined with 'and'"
            )));
        }
        self.join = join;
        Ok(())
    }

    /// The logical keyword placed between clauses.
    pub fn join(&self) -> TqlJoin {
        self.join
    }

    /// The accumulated predicates, in insertion order.
    pub fn filters(&self) -> &[Predicate] {
        &self.filters
    }

    /// Number of predicates.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether no predicate has been added.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Remove every predicate.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Render every predicate, in insertion order, joined by the logical keyword.
    ///
    /// An empty builder renders to the empty string.
    pub fn render(&self) -> String {
        self.filters
            .iter()
            .map(Predicate::render)
            .collect::<Vec<_>>()
            .join(self.join.separator())
    }
}

impl fmt::Display for Tql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn validate_keyword(keyword: &str) -> AppResult<()> {
    if keyword.is_empty() || keyword.chars().any(|c| c.is_whitespace() || c == '"') {
        return Err(AppError::validation(format!(
            "Invalid TQL keyword: '{keyword}'"
        )));
    }
    Ok(())
}
