//! Case workflow (timeline) events.

use crate::filter::define_filter;

define_filter! {
    /// Filter for `/v3/workflowEvents`.
    WorkflowEventFilter => WorkflowEvents {
        fields {
            case_id: "caseId" => Integer,
            date_added: "dateAdded" => Date,
            deleted: "deleted" => Boolean,
            deleted_reason: "deletedReason" => String,
            event_date: "eventDate" => Date,
            id: "id" => Integer,
            link: "link" => String,
            summary: "summary" => String,
            system_generated: "systemGenerated" => Boolean,
            user_name: "userName" => String,
        }
        relations {
            has_case: "hasCase" => CaseFilter,
            has_note: "hasNote" => NoteFilter,
        }
    }
}
