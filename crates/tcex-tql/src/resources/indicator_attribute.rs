//! Attributes. Indicator, group, victim and case attributes share this table.

use crate::filter::define_filter;

define_filter! {
    /// Filter for `/v3/indicatorAttributes`.
    IndicatorAttributeFilter => IndicatorAttributes {
        fields {
            created_by: "createdBy" => String,
            date_added: "dateAdded" => Date,
            date_val: "dateVal" => Date,
            default: "default" => Boolean,
            displayed: "displayed" => Boolean,
            id: "id" => Integer,
            indicator_id: "indicatorId" => Integer,
            int_val: "intVal" => Integer,
            last_modified: "lastModified" => Date,
            max_size: "maxSize" => Integer,
            owner: "owner" => Integer,
            owner_name: "ownerName" => String,
            pinned: "pinned" => Boolean,
            source: "source" => String,
            text: "text" => String,
            r#type: "type" => Integer,
            type_name: "typeName" => String,
            user: "user" => String,
        }
        relations {
            has_indicator: "hasIndicator" => IndicatorFilter,
            has_security_label: "hasSecurityLabel" => SecurityLabelFilter,
        }
    }
}
