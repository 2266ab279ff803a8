//! Relationship extraction
//!
//! Two independent strategies whose outputs are concatenated before
//! assembly: implicit inference from item properties that reference known
//! node ids, and expansion of explicit relationship/association items.

use serde_json::Value;

use crate::context::local_name;
use crate::extract::{item_id, item_type, NodeIndex};
use crate::model::Edge;
use crate::vocab::{
    INFERRED_EDGE_TYPE, NARRATIVE_PROPS, RELATES_KEYS, RELATION_TYPE_MARKERS, RESERVED_KEYS,
};

/// Infer edges from item properties whose values reference known node ids.
///
/// Property values are resolved recursively: arrays element-wise, objects
/// through their `@id`, strings directly. A resolved string that matches a
/// node id yields an edge labeled with the property's local name.
pub fn infer_property_edges(items: &[Value], index: &NodeIndex) -> Vec<Edge> {
    let mut edges = Vec::new();

    for item in items {
        let Some(obj) = item.as_object() else {
            continue;
        };
        let Some(source_id) = item_id(obj) else {
            continue;
        };

        for (property, value) in obj {
            if RESERVED_KEYS.contains(&property.as_str()) {
                continue;
            }
            collect_reference_edges(source_id, property, value, index, &mut edges);
        }
    }

    edges
}

/// Recursive resolution of one property value into reference edges.
fn collect_reference_edges(
    source_id: &str,
    property: &str,
    value: &Value,
    index: &NodeIndex,
    edges: &mut Vec<Edge>,
) {
    let property_local = local_name(property);

    // Narrative properties never represent relationships, even when their
    // value happens to match a node id.
    if NARRATIVE_PROPS.contains(&property_local.to_lowercase().as_str()) {
        return;
    }

    let target = match value {
        Value::Array(members) => {
            for member in members {
                collect_reference_edges(source_id, property, member, index, edges);
            }
            return;
        }
        Value::Object(obj) => obj.get("@id").and_then(Value::as_str),
        Value::String(s) => Some(s.as_str()),
        _ => None,
    };

    if let Some(target) = target {
        if index.contains_key(target) {
            edges.push(Edge {
                from: source_id.to_string(),
                to: target.to_string(),
                label: property_local.to_string(),
                edge_type: INFERRED_EDGE_TYPE.to_string(),
                relationship_id: None,
                property: Some(property.to_string()),
            });
        }
    }
}

/// Expand explicit relationship/association items into edges.
///
/// An item qualifies when its type's local name contains one of the
/// relationship markers. A `relatesTo` list of two or more members yields
/// the complete set of pairwise edges over the members, so the edge count
/// is quadratic in the member count; pathological documents pay that cost
/// rather than being truncated. A single-valued `relatesTo` yields one edge
/// from the relationship item itself to the member, and only when the
/// relationship item was extracted as a node in its own right.
pub fn expand_relationship_items(items: &[Value], index: &NodeIndex) -> Vec<Edge> {
    let mut edges = Vec::new();

    for item in items {
        let Some(obj) = item.as_object() else {
            continue;
        };
        let Some(raw_type) = item_type(obj) else {
            continue;
        };

        let type_local = local_name(raw_type);
        let lowered = type_local.to_lowercase();
        if !RELATION_TYPE_MARKERS.iter().any(|m| lowered.contains(m)) {
            continue;
        }

        let id = item_id(obj);
        // Vacuous membership values fall through to the next alias.
        let Some(relates) = RELATES_KEYS
            .iter()
            .filter_map(|key| obj.get(*key))
            .find(|v| match v {
                Value::Null => false,
                Value::String(s) => !s.is_empty(),
                _ => true,
            })
        else {
            continue;
        };

        let label = obj
            .get("name")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(type_local);

        match relates {
            Value::Array(members) => {
                let member_ids: Vec<&str> = members.iter().filter_map(member_id).collect();
                for i in 0..member_ids.len() {
                    for j in (i + 1)..member_ids.len() {
                        edges.push(Edge {
                            from: member_ids[i].to_string(),
                            to: member_ids[j].to_string(),
                            label: label.to_string(),
                            edge_type: type_local.to_string(),
                            relationship_id: id.map(str::to_string),
                            property: None,
                        });
                    }
                }
            }
            single => {
                let (Some(id), Some(target)) = (id, member_id(single)) else {
                    continue;
                };
                // The relationship item must itself be a known node for the
                // single-member form; the pairwise form has no such guard.
                if index.contains_key(id) {
                    edges.push(Edge {
                        from: id.to_string(),
                        to: target.to_string(),
                        label: label.to_string(),
                        edge_type: type_local.to_string(),
                        relationship_id: None,
                        property: None,
                    });
                }
            }
        }
    }

    edges
}

/// Resolve one relationship member to a node id: a plain string, or a
/// `{"@id": ...}` reference object.
fn member_id(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        Value::Object(obj) => obj.get("@id").and_then(Value::as_str),
        _ => None,
    }
}
