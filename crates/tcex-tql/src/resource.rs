//! Resource types exposed by the v3 API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use tcex_core::AppError;

/// A filterable resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Case artifacts.
    Artifacts,
    /// Artifact type definitions.
    ArtifactTypes,
    /// Cases.
    Cases,
    /// Groups (adversaries, incidents, reports, …).
    Groups,
    /// Attributes attached to indicators.
    IndicatorAttributes,
    /// Indicators (addresses, hosts, files, …).
    Indicators,
    /// Case notes.
    Notes,
    /// Security labels.
    SecurityLabels,
    /// System roles.
    SystemRoles,
    /// Tags.
    Tags,
    /// Case tasks.
    Tasks,
    /// Victims.
    Victims,
    /// Victim assets.
    VictimAssets,
    /// Case workflow events.
    WorkflowEvents,
    /// Case workflow templates.
    WorkflowTemplates,
}

impl ResourceKind {
    /// Every resource type.
    pub const ALL: [ResourceKind; 15] = [
        Self::Artifacts,
        Self::ArtifactTypes,
        Self::Cases,
        Self::Groups,
        Self::IndicatorAttributes,
        Self::Indicators,
        Self::Notes,
        Self::SecurityLabels,
        Self::SystemRoles,
        Self::Tags,
        Self::Tasks,
        Self::Victims,
        Self::VictimAssets,
        Self::WorkflowEvents,
        Self::WorkflowTemplates,
    ];

    /// The collection endpoint below the REST base path.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Artifacts => "/v3/artifacts",
            Self::ArtifactTypes => "/v3/artifactTypes",
            Self::Cases => "/v3/cases",
            Self::Groups => "/v3/groups",
            Self::IndicatorAttributes => "/v3/indicatorAttributes",
            Self::Indicators => "/v3/indicators",
            Self::Notes => "/v3/notes",
            Self::SecurityLabels => "/v3/securityLabels",
            Self::SystemRoles => "/v3/security/systemRoles",
            Self::Tags => "/v3/tags",
            Self::Tasks => "/v3/tasks",
            Self::Victims => "/v3/victims",
            Self::VictimAssets => "/v3/victimAssets",
            Self::WorkflowEvents => "/v3/workflowEvents",
            Self::WorkflowTemplates => "/v3/workflowTemplates",
        }
    }

    /// Return the snake_case plural name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Artifacts => "artifacts",
            Self::ArtifactTypes => "artifact_types",
            Self::Cases => "cases",
            Self::Groups => "groups",
            Self::IndicatorAttributes => "indicator_attributes",
            Self::Indicators => "indicators",
            Self::Notes => "notes",
            Self::SecurityLabels => "security_labels",
            Self::SystemRoles => "system_roles",
            Self::Tags => "tags",
            Self::Tasks => "tasks",
            Self::Victims => "victims",
            Self::VictimAssets => "victim_assets",
            Self::WorkflowEvents => "workflow_events",
            Self::WorkflowTemplates => "workflow_templates",
        }
    }

    /// Human-readable singular name, as used in entity `type` fields.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Artifacts => "Artifact",
            Self::ArtifactTypes => "Artifact Type",
            Self::Cases => "Case",
            Self::Groups => "Group",
            Self::IndicatorAttributes => "Indicator Attribute",
            Self::Indicators => "Indicator",
            Self::Notes => "Note",
            Self::SecurityLabels => "Security Label",
            Self::SystemRoles => "System Role",
            Self::Tags => "Tag",
            Self::Tasks => "Task",
            Self::Victims => "Victim",
            Self::VictimAssets => "Victim Asset",
            Self::WorkflowEvents => "Workflow Event",
            Self::WorkflowTemplates => "Workflow Template",
        }
    }

    fn squashed_singular(&self) -> String {
        squash(self.display_name())
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = AppError;

    /// Accepts singular or plural names with any of `_`, `-`, space, or
    /// camelCase separators: `workflow_event`, `WorkflowEvents`,
    /// `workflow event` all resolve to [`ResourceKind::WorkflowEvents`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed = squash(s);
        let singular = squashed.strip_suffix('s').unwrap_or(&squashed);
        if singular == "attribute" {
            return Ok(Self::IndicatorAttributes);
        }
        Self::ALL
            .into_iter()
            .find(|kind| {
                let name = kind.squashed_singular();
                name == squashed || name == singular
            })
            .ok_or_else(|| AppError::validation(format!("Unknown resource type: '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_spellings() {
        for input in ["workflow_event", "workflowevent", "workflow event", "WorkflowEvents"] {
            assert_eq!(
                input.parse::<ResourceKind>().unwrap(),
                ResourceKind::WorkflowEvents
            );
        }
        assert_eq!("tags".parse::<ResourceKind>().unwrap(), ResourceKind::Tags);
        assert_eq!("Case".parse::<ResourceKind>().unwrap(), ResourceKind::Cases);
        assert_eq!(
            "attributes".parse::<ResourceKind>().unwrap(),
            ResourceKind::IndicatorAttributes
        );
        assert!("widgets".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_round_trip_names() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.as_str().parse::<ResourceKind>().unwrap(), kind);
            assert!(kind.endpoint().starts_with("/v3/"));
        }
    }
}
