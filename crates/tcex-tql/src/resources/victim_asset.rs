//! Victim assets (email addresses, phone numbers, social network handles, …).

use crate::filter::define_filter;

define_filter! {
    /// Filter for `/v3/victimAssets`.
    VictimAssetFilter => VictimAssets {
        fields {
            asset: "asset" => String,
            id: "id" => Integer,
            r#type: "type" => String,
            victim_id: "victimId" => Integer,
        }
        relations {
            has_group: "hasGroup" => GroupFilter,
            has_indicator: "hasIndicator" => IndicatorFilter,
            has_victim: "hasVictim" => VictimFilter,
        }
    }
}
