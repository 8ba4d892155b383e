//! Static field tables describing what each resource type can be filtered on.

use serde::Serialize;
use std::fmt;

use crate::resource::ResourceKind;
use crate::tql_type::TqlType;

/// The value type of a filterable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Boolean,
    Integer,
    String,
    /// A timestamp. Input is coerced and sent as a `%Y-%m-%dT%H:%M:%S` string.
    Date,
}

impl FieldType {
    /// The TQL type the field is rendered as.
    pub fn tql_type(&self) -> TqlType {
        match self {
            Self::Boolean => TqlType::Boolean,
            Self::Integer => TqlType::Integer,
            Self::String | Self::Date => TqlType::String,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filterable field: its wire keyword and the typed-filter method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub keyword: &'static str,
    pub method: &'static str,
    pub field_type: FieldType,
}

/// A `has<Relation>` sub-query keyword and the resource type it filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelationSpec {
    pub keyword: &'static str,
    pub method: &'static str,
    pub target: ResourceKind,
}

/// Everything the filter layer knows about one resource type.
#[derive(Debug, Serialize)]
pub struct ResourceSpec {
    pub kind: ResourceKind,
    pub fields: &'static [FieldSpec],
    pub relations: &'static [RelationSpec],
}

impl ResourceSpec {
    /// The collection endpoint.
    pub fn endpoint(&self) -> &'static str {
        self.kind.endpoint()
    }

    /// Find a field by wire keyword (`dateAdded`) or method name (`date_added`).
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields
            .iter()
            .find(|f| f.keyword == name || method_name(f.method) == name)
    }

    /// Find a relation by wire keyword (`hasTag`) or method name (`has_tag`).
    pub fn relation(&self, name: &str) -> Option<&'static RelationSpec> {
        self.relations
            .iter()
            .find(|r| r.keyword == name || r.method == name)
    }
}

/// Strip the raw-identifier prefix used for fields such as `r#type`.
fn method_name(method: &str) -> &str {
    method.strip_prefix("r#").unwrap_or(method)
}
