//! Tags.

use crate::filter::define_filter;

define_filter! {
    /// Filter for `/v3/tags`.
    TagFilter => Tags {
        fields {
            associated_case: "associatedCase" => Integer,
            associated_group: "associatedGroup" => Integer,
            associated_indicator: "associatedIndicator" => Integer,
            associated_victim: "associatedVictim" => Integer,
            case_id: "caseId" => Integer,
            description: "description" => String,
            id: "id" => Integer,
            last_used: "lastUsed" => Date,
            name: "name" => String,
            owner: "owner" => Integer,
            owner_name: "ownerName" => String,
            summary: "summary" => String,
        }
        relations {
            has_case: "hasCase" => CaseFilter,
            has_group: "hasGroup" => GroupFilter,
            has_indicator: "hasIndicator" => IndicatorFilter,
            has_victim: "hasVictim" => VictimFilter,
        }
    }
}
