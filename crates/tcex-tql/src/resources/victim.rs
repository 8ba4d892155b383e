//! Victims.

use crate::filter::define_filter;

define_filter! {
    /// Filter for `/v3/victims`.
    VictimFilter => Victims {
        fields {
            asset_name: "assetName" => String,
            asset_type: "assetType" => String,
            attribute: "attribute" => String,
            date_added: "dateAdded" => Date,
            description: "description" => String,
            id: "id" => Integer,
            name: "name" => String,
            nationality: "nationality" => String,
            org: "org" => String,
            owner: "owner" => Integer,
            owner_name: "ownerName" => String,
            security_label: "securityLabel" => String,
            suborg: "suborg" => String,
            summary: "summary" => String,
            tag: "tag" => String,
            work_location: "workLocation" => String,
        }
        relations {
            has_attribute: "hasAttribute" => IndicatorAttributeFilter,
            has_group: "hasGroup" => GroupFilter,
            has_indicator: "hasIndicator" => IndicatorFilter,
            has_security_label: "hasSecurityLabel" => SecurityLabelFilter,
            has_tag: "hasTag" => TagFilter,
            has_victim_asset: "hasVictimAsset" => VictimAssetFilter,
        }
    }
}
