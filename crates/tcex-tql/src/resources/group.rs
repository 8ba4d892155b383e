//! Groups.

use crate::filter::define_filter;

define_filter! {
    /// Filter for `/v3/groups`.
    GroupFilter => Groups {
        fields {
            associated_indicator: "associatedIndicator" => Integer,
            attribute: "attribute" => String,
            date_added: "dateAdded" => Date,
            document_date_added: "documentDateAdded" => Date,
            document_filename: "documentFilename" => String,
            email_from: "emailFrom" => String,
            email_subject: "emailSubject" => String,
            event_date: "eventDate" => Date,
            id: "id" => Integer,
            last_modified: "lastModified" => Date,
            owner: "owner" => Integer,
            owner_name: "ownerName" => String,
            security_label: "securityLabel" => String,
            status: "status" => String,
            summary: "summary" => String,
            tag: "tag" => String,
            task_due_date: "taskDueDate" => Date,
            r#type: "type" => Integer,
            type_name: "typeName" => String,
            up_vote_count: "upVoteCount" => Integer,
            xid: "xid" => String,
        }
        relations {
            has_artifact: "hasArtifact" => ArtifactFilter,
            has_attribute: "hasAttribute" => IndicatorAttributeFilter,
            has_case: "hasCase" => CaseFilter,
            has_group: "hasGroup" => GroupFilter,
            has_indicator: "hasIndicator" => IndicatorFilter,
            has_security_label: "hasSecurityLabel" => SecurityLabelFilter,
            has_tag: "hasTag" => TagFilter,
            has_victim: "hasVictim" => VictimFilter,
            has_victim_asset: "hasVictimAsset" => VictimAssetFilter,
        }
    }
}
