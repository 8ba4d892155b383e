//! Resource-bound views over a [`Tql`] builder.

use tracing::trace;

use tcex_core::utils::{any_to_datetime, format_tc, from_epoch};
use tcex_core::{AppError, AppResult};

use crate::field::{FieldSpec, FieldType, ResourceSpec};
use crate::operator::TqlOperator;
use crate::registry;
use crate::resource::ResourceKind;
use crate::tql::Tql;
use crate::value::TqlValue;

/// A typed filter generated for one resource type.
pub trait TypedFilter<'a>: Sized {
    /// The resource type the filter targets.
    const KIND: ResourceKind;

    /// Wrap `tql` so that every call on the filter adds to it.
    fn from_tql(tql: &'a mut Tql) -> Self;
}

/// A [`Tql`] builder bound to one resource type.
///
/// Every predicate is checked against the resource's field table before it is
/// added. Sub-query children returned by [`has`](Self::has) borrow the parent,
/// so the parent cannot render until the child is done.
#[derive(Debug)]
pub struct ResourceFilter<'a> {
    spec: &'static ResourceSpec,
    tql: &'a mut Tql,
}

impl<'a> ResourceFilter<'a> {
    /// Bind `tql` to `kind`.
    pub fn new(kind: ResourceKind, tql: &'a mut Tql) -> AppResult<Self> {
        Ok(Self::with_spec(registry::spec(kind)?, tql))
    }

    pub(crate) fn with_spec(spec: &'static ResourceSpec, tql: &'a mut Tql) -> Self {
        Self { spec, tql }
    }

    pub fn kind(&self) -> ResourceKind {
        self.spec.kind
    }

    pub fn spec(&self) -> &'static ResourceSpec {
        self.spec
    }

    pub fn endpoint(&self) -> &'static str {
        self.spec.endpoint()
    }

    /// Add `keyword operator value`, where `keyword` is a field of this
    /// resource type given by wire keyword or method name.
    ///
    /// Date fields accept any input [`any_to_datetime`] understands, or epoch
    /// seconds, and are sent as `%Y-%m-%dT%H:%M:%S`.
    pub fn add(
        &mut self,
        keyword: &str,
        operator: TqlOperator,
        value: impl Into<TqlValue>,
    ) -> AppResult<&mut Self> {
        let field = self.lookup_field(keyword)?;
        let value = coerce(field, value.into())?;
        self.tql
            .add_filter(field.keyword, operator, value, field.field_type.tql_type())?;
        Ok(self)
    }

    /// Start a sub-query over the resource type related through `relation`
    /// (`hasTag` or `has_tag`).
    pub fn has(&mut self, relation: &str) -> AppResult<ResourceFilter<'_>> {
        let relation = self.spec.relation(relation).ok_or_else(|| {
            AppError::validation(format!(
                "'{relation}' is not a relation of {}",
                self.spec.kind
            ))
        })?;
        let target = registry::spec(relation.target)?;
        trace!(relation = relation.keyword, target = %relation.target, "Opening sub-query");
        Ok(ResourceFilter::with_spec(
            target,
            self.tql.push_sub_query(relation.keyword),
        ))
    }

    pub(crate) fn push_sub_query(&mut self, keyword: &'static str) -> &mut Tql {
        self.tql.push_sub_query(keyword)
    }

    /// Render the underlying builder.
    pub fn render(&self) -> String {
        self.tql.render()
    }

    pub fn tql(&self) -> &Tql {
        self.tql
    }

    fn lookup_field(&self, keyword: &str) -> AppResult<&'static FieldSpec> {
        self.spec.field(keyword).ok_or_else(|| {
            AppError::validation(format!(
                "'{keyword}' is not a filterable field of {}",
                self.spec.kind
            ))
        })
    }
}

fn coerce(field: &FieldSpec, value: TqlValue) -> AppResult<TqlValue> {
    if field.field_type != FieldType::Date {
        return Ok(value);
    }
    let coerced = match value {
        TqlValue::String(s) => TqlValue::String(format_tc(&any_to_datetime(&s)?)),
        TqlValue::Integer(epoch) => TqlValue::String(format_tc(&from_epoch(epoch)?)),
        TqlValue::StringList(items) => TqlValue::StringList(
            items
                .iter()
                .map(|s| any_to_datetime(s).map(|dt| format_tc(&dt)))
                .collect::<AppResult<_>>()?,
        ),
        TqlValue::IntegerList(items) => TqlValue::StringList(
            items
                .iter()
                .map(|epoch| from_epoch(*epoch).map(|dt| format_tc(&dt)))
                .collect::<AppResult<_>>()?,
        ),
        other => {
            return Err(AppError::validation(format!(
                "Date field '{}' cannot take a {} value",
                field.keyword,
                other.kind_name()
            )));
        }
    };
    Ok(coerced)
}

/// Generate a resource's field table and its typed filter.
///
/// ```ignore
/// define_filter! {
///     TagFilter => Tags {
///         fields {
///             name: "name" => String,
///             last_used: "lastUsed" => Date,
///         }
///         relations {
///             has_case: "hasCase" => CaseFilter,
///         }
///     }
/// }
/// ```
macro_rules! define_filter {
    (
        $(#[$meta:meta])*
        $name:ident => $kind:ident {
            fields {
                $( $method:ident : $keyword:literal => $ftype:ident ),* $(,)?
            }
            relations {
                $( $rel_method:ident : $rel_keyword:literal => $target:ident ),* $(,)?
            }
        }
    ) => {
        pub(crate) static SPEC: $crate::field::ResourceSpec = $crate::field::ResourceSpec {
            kind: $crate::resource::ResourceKind::$kind,
            fields: &[
                $(
                    $crate::field::FieldSpec {
                        keyword: $keyword,
                        method: stringify!($method),
                        field_type: $crate::field::FieldType::$ftype,
                    },
                )*
            ],
            relations: &[
                $(
                    $crate::field::RelationSpec {
                        keyword: $rel_keyword,
                        method: stringify!($rel_method),
                        target: <$crate::resources::$target<'static>
                            as $crate::filter::TypedFilter<'static>>::KIND,
                    },
                )*
            ],
        };

        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<'a> {
            inner: $crate::filter::ResourceFilter<'a>,
        }

        impl<'a> $crate::filter::TypedFilter<'a> for $name<'a> {
            const KIND: $crate::resource::ResourceKind = $crate::resource::ResourceKind::$kind;

            fn from_tql(tql: &'a mut $crate::tql::Tql) -> Self {
                Self {
                    inner: $crate::filter::ResourceFilter::with_spec(&SPEC, tql),
                }
            }
        }

        impl<'a> $name<'a> {
            $(
                #[doc = concat!("Filter on the `", $keyword, "` keyword.")]
                pub fn $method(
                    &mut self,
                    operator: $crate::operator::TqlOperator,
                    value: impl Into<$crate::value::TqlValue>,
                ) -> tcex_core::AppResult<&mut Self> {
                    self.inner.add($keyword, operator, value)?;
                    Ok(self)
                }
            )*

            $(
                #[doc = concat!("Open a `", $rel_keyword, "` sub-query.")]
                pub fn $rel_method(&mut self) -> $crate::resources::$target<'_> {
                    $crate::filter::TypedFilter::from_tql(self.inner.push_sub_query($rel_keyword))
                }
            )*

            /// The untyped view, for keywords chosen at runtime.
            pub fn as_filter(&mut self) -> &mut $crate::filter::ResourceFilter<'a> {
                &mut self.inner
            }

            /// Render the underlying builder.
            pub fn render(&self) -> String {
                self.inner.render()
            }
        }
    };
}

pub(crate) use define_filter;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tql_type::TqlType;

    #[test]
    fn test_unknown_keyword_rejected() {
        let mut tql = Tql::new();
        let mut filter = ResourceFilter::new(ResourceKind::Tags, &mut tql).unwrap();
        let err = filter.add("bogus", TqlOperator::Eq, 1).unwrap_err();
        assert!(err.is_validation());
        assert!(filter.has("hasWidget").is_err());
        assert!(tql.is_empty());
    }

    #[test]
    fn test_add_uses_wire_keyword() {
        let mut tql = Tql::new();
        let mut filter = ResourceFilter::new(ResourceKind::Tags, &mut tql).unwrap();
        filter.add("owner_name", TqlOperator::Eq, "Acme").unwrap();
        assert_eq!(filter.render(), r#"ownerName = "Acme""#);
    }

    #[test]
    fn test_date_coercion() {
        let mut tql = Tql::new();
        let mut filter = ResourceFilter::new(ResourceKind::Indicators, &mut tql).unwrap();
        filter
            .add("dateAdded", TqlOperator::Gt, "2024-01-02T03:04:05Z")
            .unwrap();
        filter.add("lastModified", TqlOperator::Lt, 1704164645).unwrap();
        assert_eq!(
            tql.render(),
            r#"dateAdded > "2024-01-02T03:04:05" and lastModified < "2024-01-02T03:04:05""#
        );
        assert_eq!(tql.filters()[1].value_type(), TqlType::String);
    }

    #[test]
    fn test_date_rejects_garbage() {
        let mut tql = Tql::new();
        let mut filter = ResourceFilter::new(ResourceKind::Indicators, &mut tql).unwrap();
        assert!(filter.add("dateAdded", TqlOperator::Gt, "not a date").is_err());
        assert!(filter.add("dateAdded", TqlOperator::Gt, true).is_err());
    }

    #[test]
    fn test_has_by_name() {
        let mut tql = Tql::new();
        let mut filter = ResourceFilter::new(ResourceKind::Indicators, &mut tql).unwrap();
        let mut tags = filter.has("has_tag").unwrap();
        assert_eq!(tags.kind(), ResourceKind::Tags);
        tags.add("name", TqlOperator::StartsWith, "APT").unwrap();
        assert_eq!(tql.render(), r#"hasTag = "name STARTSWITH \"APT\"""#);
    }
}
