//! Field tables and typed filters, one module per resource type.

use crate::field::ResourceSpec;

pub mod artifact;
pub mod artifact_type;
pub mod case;
pub mod group;
pub mod indicator;
pub mod indicator_attribute;
pub mod note;
pub mod security_label;
pub mod system_role;
pub mod tag;
pub mod task;
pub mod victim;
pub mod victim_asset;
pub mod workflow_event;
pub mod workflow_template;

pub use artifact::ArtifactFilter;
pub use artifact_type::ArtifactTypeFilter;
pub use case::CaseFilter;
pub use group::GroupFilter;
pub use indicator::IndicatorFilter;
pub use indicator_attribute::IndicatorAttributeFilter;
pub use note::NoteFilter;
pub use security_label::SecurityLabelFilter;
pub use system_role::SystemRoleFilter;
pub use tag::TagFilter;
pub use task::TaskFilter;
pub use victim::VictimFilter;
pub use victim_asset::VictimAssetFilter;
pub use workflow_event::WorkflowEventFilter;
pub use workflow_template::WorkflowTemplateFilter;

/// Every field table, fed to the registry.
pub(crate) static ALL: &[&ResourceSpec] = &[
    &artifact::SPEC,
    &artifact_type::SPEC,
    &case::SPEC,
    &group::SPEC,
    &indicator::SPEC,
    &indicator_attribute::SPEC,
    &note::SPEC,
    &security_label::SPEC,
    &system_role::SPEC,
    &tag::SPEC,
    &task::SPEC,
    &victim::SPEC,
    &victim_asset::SPEC,
    &workflow_event::SPEC,
    &workflow_template::SPEC,
];
