use crate::filter::define_filter;

define_filter! {
    /// Filter for `/v3/workflowTemplates`.
    WorkflowTemplateFilter => WorkflowTemplates {
        fields {
            active: "active" => Boolean,
            description: "description" => String,
            id: "id" => Integer,
            name: "name" => String,
            target_type: "targetType" => String,
            version: "version" => Integer,
        }
        relations {
            has_case: "hasCase" => CaseFilter,
        }
    }
}
