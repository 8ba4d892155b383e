//! Predicate values and their literal rendering.

use chrono::{DateTime, Utc};

use tcex_core::utils::format_tc;

use crate::tql::Tql;
use crate::tql_type::TqlType;

/// A predicate value.
///
/// List variants only appear with the `In` / `NotIn` operators.
#[derive(Debug, Clone, PartialEq)]
pub enum TqlValue {
    /// A boolean literal.
    Boolean(bool),
    /// An integer literal.
    Integer(i64),
    /// A text value.
    String(String),
    /// A list of integers.
    IntegerList(Vec<i64>),
    /// A list of text values.
    StringList(Vec<String>),
    /// A nested expression, resolved when the owning builder renders.
    SubQuery(Box<Tql>),
}

impl TqlValue {
    /// Whether the value is one of the list variants.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::IntegerList(_) | Self::StringList(_))
    }

    /// Whether the runtime variant agrees with the declared type.
    pub fn matches_type(&self, value_type: TqlType) -> bool {
        matches!(
            (self, value_type),
            (Self::Boolean(_), TqlType::Boolean)
                | (Self::Integer(_) | Self::IntegerList(_), TqlType::Integer)
                | (Self::String(_) | Self::StringList(_), TqlType::String)
                | (Self::SubQuery(_), TqlType::SubQuery)
        )
    }

    /// A short description of the runtime variant for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::String(_) => "string",
            Self::IntegerList(_) => "integer list",
            Self::StringList(_) => "string list",
            Self::SubQuery(_) => "sub-query",
        }
    }

    /// Render the value as it appears on the right-hand side of a clause.
    pub fn render(&self) -> String {
        match self {
            Self::Boolean(b) => b.to_string(),
            Self::Integer(i) => i.to_string(),
            Self::String(s) => quote(s),
            Self::IntegerList(items) => {
                let items: Vec<String> = items.iter().map(i64::to_string).collect();
                format!("({})", items.join(","))
            }
            Self::StringList(items) => {
                let items: Vec<String> = items.iter().map(|s| quote(s)).collect();
                format!("({})", items.join(","))
            }
            Self::SubQuery(tql) => quote(&tql.render()),
        }
    }
}

/// Wrap text in double quotes, escaping backslashes and double quotes.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

impl From<bool> for TqlValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for TqlValue {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for TqlValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for TqlValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for TqlValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<Vec<i64>> for TqlValue {
    fn from(value: Vec<i64>) -> Self {
        Self::IntegerList(value)
    }
}

impl From<Vec<String>> for TqlValue {
    fn from(value: Vec<String>) -> Self {
        Self::StringList(value)
    }
}

impl From<Vec<&str>> for TqlValue {
    fn from(value: Vec<&str>) -> Self {
        Self::StringList(value.into_iter().map(str::to_string).collect())
    }
}

impl From<DateTime<Utc>> for TqlValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::String(format_tc(&value))
    }
}

impl From<Tql> for TqlValue {
    fn from(value: Tql) -> Self {
        Self::SubQuery(Box::new(value))
    }
}
