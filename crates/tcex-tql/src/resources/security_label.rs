//! Security labels.

use crate::filter::define_filter;

define_filter! {
    /// Filter for `/v3/securityLabels`.
    SecurityLabelFilter => SecurityLabels {
        fields {
            color: "color" => String,
            date_added: "dateAdded" => Date,
            description: "description" => String,
            id: "id" => Integer,
            name: "name" => String,
            owner: "owner" => Integer,
            owner_name: "ownerName" => String,
        }
        relations {
            has_group: "hasGroup" => GroupFilter,
            has_indicator: "hasIndicator" => IndicatorFilter,
            has_victim: "hasVictim" => VictimFilter,
        }
    }
}
