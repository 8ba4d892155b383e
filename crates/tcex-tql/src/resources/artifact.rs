//! Case artifacts.

use crate::filter::define_filter;

define_filter! {
    /// Filter for `/v3/artifacts`.
    ArtifactFilter => Artifacts {
        fields {
            analytics_score: "analyticsScore" => Integer,
            case_id: "caseId" => Integer,
            date_added: "dateAdded" => Date,
            id: "id" => Integer,
            indicator_active: "indicatorActive" => Boolean,
            note_id: "noteId" => Integer,
            source: "source" => String,
            summary: "summary" => String,
            task_id: "taskId" => Integer,
            r#type: "type" => String,
            type_name: "typeName" => String,
        }
        relations {
            has_case: "hasCase" => CaseFilter,
            has_group: "hasGroup" => GroupFilter,
            has_indicator: "hasIndicator" => IndicatorFilter,
            has_note: "hasNote" => NoteFilter,
            has_task: "hasTask" => TaskFilter,
        }
    }
}
