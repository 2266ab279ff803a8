//! Graph data model
//!
//! The node/edge/metadata structures handed to the rendering layer, plus
//! their JSON and CSV serializations. All records are built fresh per
//! pipeline invocation and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::classify::NodeGroup;
use crate::error::GraphError;

/// One node of the visualization graph.
///
/// Arbitrary domain-specific item attributes survive in `extra` and are
/// flattened into the serialized record, so the detail view can show them
/// without bespoke mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub label: String,
    /// Local name of the item's type, absent when the item carried none.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default)]
    pub group: NodeGroup,
    #[serde(default)]
    pub description: String,
    /// The type exactly as it appeared in the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_type: Option<String>,
    /// The type expanded against the document's prefix table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded_type: Option<String>,
    /// Pass-through attributes from the source item.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One edge of the visualization graph.
///
/// Edges are not deduplicated: several edges between the same pair with
/// different labels are legal and meaningful.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub edge_type: String,
    /// Id of the relationship item this edge was expanded from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_id: Option<String>,
    /// Source property name, for edges inferred from item properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

/// Run metadata attached to every processed graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetadata {
    pub source: String,
    pub format: String,
    pub total_nodes: usize,
    pub total_edges: usize,
    /// The resolved prefix table as (prefix, IRI base) pairs.
    pub prefixes: Vec<(String, String)>,
    pub processed_at: DateTime<Utc>,
}

/// The final artifact handed to the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessedGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub metadata: GraphMetadata,
}

impl ProcessedGraph {
    /// Serialize to the JSON shape consumed by the viewer.
    pub fn to_json_string(&self, pretty: bool) -> Result<String, GraphError> {
        if pretty {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(serde_json::to_string(self)?)
        }
    }

    /// Serialize to the viewer's CSV export layout: a NODES section and an
    /// EDGES section, all fields quoted.
    pub fn to_csv(&self) -> String {
        let nodes_csv = self
            .nodes
            .iter()
            .map(|node| {
                format!(
                    "{},{},{},{},{}",
                    csv_field(&node.id),
                    csv_field(&node.label),
                    csv_field(node.node_type.as_deref().unwrap_or("")),
                    csv_field(&node.group.to_string()),
                    csv_field(&node.description),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let edges_csv = self
            .edges
            .iter()
            .map(|edge| {
                format!(
                    "{},{},{},{}",
                    csv_field(&edge.from),
                    csv_field(&edge.to),
                    csv_field(&edge.label),
                    csv_field(&edge.edge_type),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "NODES\nid,label,type,group,description\n{}\n\nEDGES\nfrom,to,label,type\n{}",
            nodes_csv, edges_csv
        )
    }
}

/// Quote a CSV field, doubling embedded quotes.
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_node() -> Node {
        Node {
            id: "ex:a".to_string(),
            label: "Node A".to_string(),
            node_type: Some("BusinessActor".to_string()),
            group: NodeGroup::Business,
            description: "An actor".to_string(),
            original_type: Some("archimate:BusinessActor".to_string()),
            expanded_type: Some("http://example.org/archimate/BusinessActor".to_string()),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_node_serializes_camel_case() {
        let mut node = sample_node();
        node.extra.insert("owner".to_string(), json!("alice"));

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "BusinessActor");
        assert_eq!(value["group"], "Business");
        assert_eq!(value["originalType"], "archimate:BusinessActor");
        assert_eq!(value["owner"], "alice");
    }

    #[test]
    fn test_node_round_trips() {
        let mut node = sample_node();
        node.extra.insert("owner".to_string(), json!("alice"));

        let encoded = serde_json::to_string(&node).unwrap();
        let decoded: Node = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, node);
    }

    #[test]
    fn test_node_defaults_on_deserialize() {
        let node: Node = serde_json::from_value(json!({
            "id": "n1",
            "label": "Plain"
        }))
        .unwrap();
        assert_eq!(node.group, NodeGroup::Other);
        assert_eq!(node.node_type, None);
        assert_eq!(node.description, "");
    }

    #[test]
    fn test_edge_omits_absent_options() {
        let edge = Edge {
            from: "a".to_string(),
            to: "b".to_string(),
            label: "uses".to_string(),
            edge_type: "relationship".to_string(),
            relationship_id: None,
            property: Some("uses".to_string()),
        };
        let value = serde_json::to_value(&edge).unwrap();
        assert_eq!(value["type"], "relationship");
        assert_eq!(value["property"], "uses");
        assert!(value.get("relationshipId").is_none());
    }

    #[test]
    fn test_to_csv_layout_and_quoting() {
        let mut node = sample_node();
        node.description = "says \"hi\"".to_string();
        let graph = ProcessedGraph {
            nodes: vec![node],
            edges: vec![Edge {
                from: "ex:a".to_string(),
                to: "ex:b".to_string(),
                label: "uses".to_string(),
                edge_type: "relationship".to_string(),
                relationship_id: None,
                property: None,
            }],
            metadata: GraphMetadata {
                source: "JSON-LD".to_string(),
                format: "Custom JSON-LD".to_string(),
                total_nodes: 1,
                total_edges: 1,
                prefixes: vec![],
                processed_at: Utc::now(),
            },
        };

        let csv = graph.to_csv();
        assert!(csv.starts_with("NODES\nid,label,type,group,description\n"));
        assert!(csv.contains("\"says \"\"hi\"\"\""));
        assert!(csv.contains("\nEDGES\nfrom,to,label,type\n"));
        assert!(csv.contains("\"ex:a\",\"ex:b\",\"uses\",\"relationship\""));
    }
}
