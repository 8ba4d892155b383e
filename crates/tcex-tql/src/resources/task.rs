//! Case tasks.

use crate::filter::define_filter;

define_filter! {
    /// Filter for `/v3/tasks`.
    TaskFilter => Tasks {
        fields {
            assignee_name: "assigneeName" => String,
            case_id: "caseId" => Integer,
            case_severity: "caseSeverity" => String,
            completed_by: "completedBy" => String,
            completed_date: "completedDate" => Date,
            description: "description" => String,
            due_date: "dueDate" => Date,
            id: "id" => Integer,
            name: "name" => String,
            owner: "owner" => String,
            required: "required" => Boolean,
            status: "status" => String,
            target_id: "targetId" => Integer,
            target_type: "targetType" => String,
            workflow_phase: "workflowPhase" => Integer,
            workflow_step: "workflowStep" => Integer,
            xid: "xid" => String,
        }
        relations {
            has_artifact: "hasArtifact" => ArtifactFilter,
            has_case: "hasCase" => CaseFilter,
            has_note: "hasNote" => NoteFilter,
        }
    }
}
