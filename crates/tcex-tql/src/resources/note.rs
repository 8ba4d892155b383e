//! Case notes.

use crate::filter::define_filter;

define_filter! {
    /// Filter for `/v3/notes`.
    NoteFilter => Notes {
        fields {
            artifact_id: "artifactId" => Integer,
            author: "author" => String,
            case_id: "caseId" => Integer,
            date_added: "dateAdded" => Date,
            id: "id" => Integer,
            last_modified: "lastModified" => Date,
            summary: "summary" => String,
            task_id: "taskId" => Integer,
            workflow_event_id: "workflowEventId" => Integer,
        }
        relations {
            has_artifact: "hasArtifact" => ArtifactFilter,
            has_case: "hasCase" => CaseFilter,
            has_task: "hasTask" => TaskFilter,
        }
    }
}
