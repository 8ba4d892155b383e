//! Artifact type definitions.

use crate::filter::define_filter;

define_filter! {
    /// Filter for `/v3/artifactTypes`.
    ArtifactTypeFilter => ArtifactTypes {
        fields {
            active: "active" => Boolean,
            data_type: "dataType" => String,
            description: "description" => String,
            id: "id" => Integer,
            intel_type: "intelType" => String,
            managed: "managed" => Boolean,
            name: "name" => String,
        }
        relations {}
    }
}
