//! Heuristic type classification
//!
//! Maps a type name to one of a fixed set of visual groups by ordered
//! keyword matching on the lower-cased local name.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::context::local_name;

/// Visual group of a node. Closed set; unknown or absent types fall into
/// [`NodeGroup::Other`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NodeGroup {
    Business,
    Application,
    Technology,
    Data,
    Motivation,
    Compliance,
    Actors,
    Processes,
    Components,
    #[default]
    Other,
}

impl fmt::Display for NodeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeGroup::Business => "Business",
            NodeGroup::Application => "Application",
            NodeGroup::Technology => "Technology",
            NodeGroup::Data => "Data",
            NodeGroup::Motivation => "Motivation",
            NodeGroup::Compliance => "Compliance",
            NodeGroup::Actors => "Actors",
            NodeGroup::Processes => "Processes",
            NodeGroup::Components => "Components",
            NodeGroup::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// Keyword rules in priority order. The first rule whose keyword list
/// matches wins, so a type like "BusinessProcess" classifies as Business,
/// not Processes. Reordering this table changes classifications.
const GROUP_RULES: &[(NodeGroup, &[&str])] = &[
    (NodeGroup::Business, &["business"]),
    (NodeGroup::Application, &["application"]),
    (NodeGroup::Technology, &["technology", "system", "artifact", "node"]),
    (NodeGroup::Data, &["data", "object"]),
    (NodeGroup::Motivation, &["goal", "principle", "requirement"]),
    (NodeGroup::Compliance, &["compliance", "constraint"]),
    (NodeGroup::Actors, &["person", "actor", "role"]),
    (NodeGroup::Processes, &["process", "function", "service"]),
    (NodeGroup::Components, &["component", "module"]),
];

/// Classify a (possibly absent) type name into its visual group.
pub fn node_group(type_name: Option<&str>) -> NodeGroup {
    let Some(type_name) = type_name else {
        return NodeGroup::Other;
    };

    let local = local_name(type_name).to_lowercase();
    for (group, keywords) in GROUP_RULES {
        if keywords.iter().any(|k| local.contains(k)) {
            return *group;
        }
    }

    NodeGroup::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_type_is_other() {
        assert_eq!(node_group(None), NodeGroup::Other);
        assert_eq!(node_group(Some("Widget")), NodeGroup::Other);
    }

    #[test]
    fn test_groups_by_keyword() {
        assert_eq!(node_group(Some("ApplicationComponent")), NodeGroup::Application);
        assert_eq!(node_group(Some("TechnologyService")), NodeGroup::Technology);
        assert_eq!(node_group(Some("SystemSoftware")), NodeGroup::Technology);
        assert_eq!(node_group(Some("DataObject")), NodeGroup::Data);
        assert_eq!(node_group(Some("Goal")), NodeGroup::Motivation);
        assert_eq!(node_group(Some("Requirement")), NodeGroup::Motivation);
        assert_eq!(node_group(Some("Constraint")), NodeGroup::Compliance);
        assert_eq!(node_group(Some("Person")), NodeGroup::Actors);
        assert_eq!(node_group(Some("Function")), NodeGroup::Processes);
        assert_eq!(node_group(Some("Module")), NodeGroup::Components);
    }

    #[test]
    fn test_priority_order() {
        // "business" (rule 1) beats "process" (rule 8)
        assert_eq!(node_group(Some("BusinessProcess")), NodeGroup::Business);
        // "application" (rule 2) beats "component" (rule 9)
        assert_eq!(node_group(Some("ApplicationComponent")), NodeGroup::Application);
        // "compliance" (rule 6) beats "process" (rule 8)
        assert_eq!(node_group(Some("ComplianceProcess")), NodeGroup::Compliance);
    }

    #[test]
    fn test_classifies_on_local_name() {
        assert_eq!(
            node_group(Some("http://www.opengroup.org/xsd/archimate#BusinessActor")),
            NodeGroup::Business
        );
        assert_eq!(node_group(Some("archimate:ApplicationService")), NodeGroup::Application);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(node_group(Some("BUSINESSROLE")), NodeGroup::Business);
        assert_eq!(node_group(Some("dataobject")), NodeGroup::Data);
    }

    #[test]
    fn test_group_serializes_to_name() {
        assert_eq!(
            serde_json::to_value(NodeGroup::Business).unwrap(),
            serde_json::json!("Business")
        );
        assert_eq!(NodeGroup::Motivation.to_string(), "Motivation");
    }
}
