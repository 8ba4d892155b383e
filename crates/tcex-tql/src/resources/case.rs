//! Cases.

use crate::filter::define_filter;

define_filter! {
    /// Filter for `/v3/cases`.
    CaseFilter => Cases {
        fields {
            assigned_to_user_or_group: "assignedToUserOrGroup" => String,
            case_close_time: "caseCloseTime" => Date,
            case_detection_time: "caseDetectionTime" => Date,
            case_occurrence_time: "caseOccurrenceTime" => Date,
            case_open_time: "caseOpenTime" => Date,
            created_by_id: "createdById" => Integer,
            date_added: "dateAdded" => Date,
            description: "description" => String,
            id: "id" => Integer,
            last_updated: "lastUpdated" => Date,
            name: "name" => String,
            owner_name: "ownerName" => String,
            resolution: "resolution" => String,
            severity: "severity" => String,
            status: "status" => String,
            tag: "tag" => String,
            target_id: "targetId" => Integer,
            target_type: "targetType" => String,
            workflow_template_name: "workflowTemplateName" => String,
            xid: "xid" => String,
        }
        relations {
            has_artifact: "hasArtifact" => ArtifactFilter,
            has_group: "hasGroup" => GroupFilter,
            has_indicator: "hasIndicator" => IndicatorFilter,
            has_note: "hasNote" => NoteFilter,
            has_tag: "hasTag" => TagFilter,
            has_task: "hasTask" => TaskFilter,
            has_workflow_template: "hasWorkflowTemplate" => WorkflowTemplateFilter,
        }
    }
}
