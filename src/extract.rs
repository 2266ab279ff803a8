//! Node extraction from graph items
//!
//! Walks the document's item sequence, builds the node list, and populates
//! the node index consumed by relationship extraction and assembly.

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::classify::node_group;
use crate::context::{local_name, ContextResolver};
use crate::model::Node;
use crate::vocab::RESERVED_KEYS;

/// Node id → position in the extracted node list.
pub type NodeIndex = HashMap<String, usize>;

/// Resolve an item's id: `@id` first, then `id`, skipping empty strings.
pub fn item_id(item: &Map<String, Value>) -> Option<&str> {
    ["@id", "id"]
        .iter()
        .find_map(|key| item.get(*key).and_then(Value::as_str).filter(|id| !id.is_empty()))
}

/// Resolve an item's type: `@type` first, then `type`. A type given as an
/// array contributes its first string entry.
pub fn item_type(item: &Map<String, Value>) -> Option<&str> {
    ["@type", "type"].iter().find_map(|key| match item.get(*key) {
        Some(Value::String(t)) if !t.is_empty() => Some(t.as_str()),
        Some(Value::Array(arr)) => arr.iter().find_map(Value::as_str),
        _ => None,
    })
}

/// Extract nodes from the document's item sequence.
///
/// Items that are not objects, or have no resolvable id, are skipped.
/// When two items share an id the first occurrence wins and later ones are
/// dropped, so ids are unique across the returned list.
pub fn extract_nodes(resolver: &ContextResolver, items: &[Value]) -> (Vec<Node>, NodeIndex) {
    let mut nodes: Vec<Node> = Vec::new();
    let mut index = NodeIndex::new();

    for item in items {
        let Some(obj) = item.as_object() else {
            continue;
        };
        let Some(id) = item_id(obj) else {
            continue;
        };
        if index.contains_key(id) {
            continue;
        }

        let raw_type = item_type(obj);
        let node_type = raw_type.map(|t| local_name(t).to_string());

        let label = ["name", "label", "title"]
            .iter()
            .find_map(|key| obj.get(*key).and_then(Value::as_str).filter(|s| !s.is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| local_name(id).to_string());

        // A non-string description is carried through as its JSON text
        // rather than dropped; only null, absent, or empty descriptions
        // fall back to the synthesized text.
        let description = match obj.get("description") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(value) if !value.is_null() && !value.is_string() => value.to_string(),
            _ => format!("{} entity", node_type.as_deref().unwrap_or("undefined")),
        };

        let mut extra = Map::new();
        for (key, value) in obj {
            if !RESERVED_KEYS.contains(&key.as_str()) {
                extra.insert(key.clone(), value.clone());
            }
        }

        let node = Node {
            id: id.to_string(),
            label,
            group: node_group(raw_type),
            node_type,
            description,
            original_type: raw_type.map(str::to_string),
            expanded_type: raw_type.map(|t| resolver.expand_iri(t)),
            extra,
        };

        index.insert(node.id.clone(), nodes.len());
        nodes.push(node);
    }

    (nodes, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::NodeGroup;
    use serde_json::json;

    fn extract(items: Vec<Value>) -> (Vec<Node>, NodeIndex) {
        extract_nodes(&ContextResolver::new(), &items)
    }

    #[test]
    fn test_skips_items_without_id() {
        let (nodes, index) = extract(vec![
            json!("not an object"),
            json!({"name": "anonymous"}),
            json!({"@id": "", "name": "empty id"}),
            json!({"@id": "ex:a", "name": "kept"}),
        ]);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].id, "ex:a");
        assert!(index.contains_key("ex:a"));
    }

    #[test]
    fn test_label_fallback_chain() {
        let (nodes, _) = extract(vec![
            json!({"@id": "ex:a", "name": "by name", "label": "by label"}),
            json!({"@id": "ex:b", "label": "by label"}),
            json!({"@id": "ex:c", "title": "by title"}),
            json!({"@id": "http://example.org/ns/d"}),
        ]);
        assert_eq!(nodes[0].label, "by name");
        assert_eq!(nodes[1].label, "by label");
        assert_eq!(nodes[2].label, "by title");
        // Falls back to the id's local name
        assert_eq!(nodes[3].label, "d");
    }

    #[test]
    fn test_type_fields_and_group() {
        let mut resolver = ContextResolver::new();
        resolver.process_context(Some(&json!({"archimate": "http://example.org/archimate"})));

        let items = vec![json!({
            "@id": "ex:a",
            "@type": "archimate:BusinessActor"
        })];
        let (nodes, _) = extract_nodes(&resolver, &items);

        let node = &nodes[0];
        assert_eq!(node.node_type.as_deref(), Some("BusinessActor"));
        assert_eq!(node.group, NodeGroup::Business);
        assert_eq!(node.original_type.as_deref(), Some("archimate:BusinessActor"));
        assert_eq!(
            node.expanded_type.as_deref(),
            Some("http://example.org/archimate/BusinessActor")
        );
        assert_eq!(node.description, "BusinessActor entity");
    }

    #[test]
    fn test_missing_type() {
        let (nodes, _) = extract(vec![json!({"@id": "ex:a"})]);
        assert_eq!(nodes[0].node_type, None);
        assert_eq!(nodes[0].group, NodeGroup::Other);
        assert_eq!(nodes[0].description, "undefined entity");
    }

    #[test]
    fn test_type_array_uses_first_entry() {
        let (nodes, _) = extract(vec![json!({
            "@id": "ex:a",
            "@type": ["DataObject", "Thing"]
        })]);
        assert_eq!(nodes[0].node_type.as_deref(), Some("DataObject"));
        assert_eq!(nodes[0].group, NodeGroup::Data);
    }

    #[test]
    fn test_pass_through_attributes() {
        let (nodes, _) = extract(vec![json!({
            "@id": "ex:a",
            "@type": "Person",
            "name": "Alice",
            "description": "kept as field",
            "department": "R&D",
            "seniority": 7
        })]);

        let node = &nodes[0];
        assert_eq!(node.extra.get("department"), Some(&json!("R&D")));
        assert_eq!(node.extra.get("seniority"), Some(&json!(7)));
        // Reserved keys never land in extra
        for key in ["@id", "@type", "name", "description"] {
            assert!(!node.extra.contains_key(key), "{} leaked into extra", key);
        }
        assert_eq!(node.description, "kept as field");
    }

    #[test]
    fn test_non_string_description_carried_through() {
        let (nodes, _) = extract(vec![
            json!({"@id": "ex:a", "description": 42}),
            json!({"@id": "ex:b", "description": {"en": "hello"}}),
            json!({"@id": "ex:c", "description": ""}),
            json!({"@id": "ex:d", "description": null}),
        ]);
        assert_eq!(nodes[0].description, "42");
        assert_eq!(nodes[1].description, "{\"en\":\"hello\"}");
        assert_eq!(nodes[2].description, "undefined entity");
        assert_eq!(nodes[3].description, "undefined entity");
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let (nodes, index) = extract(vec![
            json!({"@id": "ex:a", "name": "first"}),
            json!({"@id": "ex:a", "name": "second"}),
            json!({"@id": "ex:b"}),
        ]);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].label, "first");
        assert_eq!(index.get("ex:a"), Some(&0));
        assert_eq!(index.get("ex:b"), Some(&1));
    }

    #[test]
    fn test_plain_id_key_accepted() {
        let (nodes, _) = extract(vec![json!({"id": "n1", "type": "Service"})]);
        assert_eq!(nodes[0].id, "n1");
        assert_eq!(nodes[0].group, NodeGroup::Processes);
    }
}
