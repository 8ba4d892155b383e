//! Typed entity models for every v3 resource.
//!
//! All fields are optional and camelCase on the wire. Unknown fields in a
//! server response are ignored.

pub mod case_management;
pub mod security;
pub mod threat_intelligence;

use serde_json::Value;

use tcex_core::AppResult;
use tcex_tql::ResourceKind;

use crate::resource::decode;

pub use case_management::{Artifact, ArtifactType, Case, Note, Task, WorkflowEvent, WorkflowTemplate};
pub use security::SystemRole;
pub use threat_intelligence::{
    Attribute, Group, Indicator, SecurityLabel, Tag, Victim, VictimAsset,
};

/// Implement [`Resource`](crate::resource::Resource) for an entity with an
/// `id: Option<i64>` field.
macro_rules! impl_resource {
    ($($entity:ident => $kind:ident, $filter:ident;)*) => {
        $(
            impl $crate::resource::Resource for $entity {
                const KIND: tcex_tql::ResourceKind = tcex_tql::ResourceKind::$kind;
                type Filter<'a> = tcex_tql::resources::$filter<'a>;

                fn id(&self) -> Option<i64> {
                    self.id
                }
            }
        )*

        /// Any entity, for callers that pick the resource type at runtime.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Entity {
            $( $entity($entity), )*
        }

        impl Entity {
            pub fn kind(&self) -> ResourceKind {
                match self {
                    $( Self::$entity(_) => ResourceKind::$kind, )*
                }
            }

            pub fn id(&self) -> Option<i64> {
                match self {
                    $( Self::$entity(e) => e.id, )*
                }
            }

            /// Serialize back to the wire representation.
            pub fn to_value(&self) -> AppResult<Value> {
                let value = match self {
                    $( Self::$entity(e) => serde_json::to_value(e)?, )*
                };
                Ok(value)
            }
        }

        /// Decode a server record of type `kind` into the matching entity.
        pub fn entity_from_value(kind: ResourceKind, value: Value) -> AppResult<Entity> {
            match kind {
                $( ResourceKind::$kind => Ok(Entity::$entity(decode(value, kind.display_name())?)), )*
            }
        }
    };
}

impl_resource! {
    Artifact => Artifacts, ArtifactFilter;
    ArtifactType => ArtifactTypes, ArtifactTypeFilter;
    Case => Cases, CaseFilter;
    Group => Groups, GroupFilter;
    Attribute => IndicatorAttributes, IndicatorAttributeFilter;
    Indicator => Indicators, IndicatorFilter;
    Note => Notes, NoteFilter;
    SecurityLabel => SecurityLabels, SecurityLabelFilter;
    SystemRole => SystemRoles, SystemRoleFilter;
    Tag => Tags, TagFilter;
    Task => Tasks, TaskFilter;
    Victim => Victims, VictimFilter;
    VictimAsset => VictimAssets, VictimAssetFilter;
    WorkflowEvent => WorkflowEvents, WorkflowEventFilter;
    WorkflowTemplate => WorkflowTemplates, WorkflowTemplateFilter;
}
