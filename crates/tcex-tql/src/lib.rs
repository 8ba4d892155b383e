//! # tcex-tql
//!
//! Threat Query Language (TQL) support for the TcEx SDK.
//!
//! - [`Tql`] accumulates typed predicates and renders them into the
//!   platform's textual grammar (`keyword operator value`, joined by
//!   ` and `).
//! - [`ResourceFilter`] binds a builder to one resource type and validates
//!   every filter call against that type's field table.
//! - The typed filters in [`resources`] (`TagFilter`, `IndicatorFilter`, …)
//!   are generated from those tables and expose one method per filterable
//!   field plus one `has_<relation>()` accessor per related resource type.
//!
//! ```ignore
//! use tcex_tql::{Tql, TqlOperator, TypedFilter};
//! use tcex_tql::resources::IndicatorFilter;
//!
//! let mut tql = Tql::new();
//! let mut indicators = IndicatorFilter::from_tql(&mut tql);
//! indicators.summary(TqlOperator::Eq, "1.1.1.1")?;
//! indicators.has_tag().name(TqlOperator::Eq, "Example-Tag")?;
//! assert_eq!(
//!     tql.render(),
//!     r#"summary = "1.1.1.1" and hasTag = "name = \"Example-Tag\"""#
//! );
//! ```

pub mod field;
pub mod filter;
pub mod operator;
pub mod predicate;
pub mod registry;
pub mod resource;
pub mod resources;
pub mod tql;
pub mod tql_type;
pub mod value;

pub use field::{FieldSpec, FieldType, RelationSpec, ResourceSpec};
pub use filter::{ResourceFilter, TypedFilter};
pub use operator::TqlOperator;
pub use predicate::Predicate;
pub use resource::ResourceKind;
pub use tql::{Tql, TqlJoin};
pub use tql_type::TqlType;
pub use value::TqlValue;
