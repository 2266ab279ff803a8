//! Pipeline assembly
//!
//! The single entry point of the extraction pipeline: runs context
//! resolution, node extraction, and both relationship strategies, filters
//! the results against the node index, and packages them with run metadata.
//! Plain node/edge documents bypass the pipeline and are validated as-is.

use chrono::Utc;
use serde_json::{Map, Value};

use crate::context::ContextResolver;
use crate::detect::detect_format;
use crate::error::GraphError;
use crate::extract::extract_nodes;
use crate::model::{Edge, GraphMetadata, Node, ProcessedGraph};
use crate::relate::{expand_relationship_items, infer_property_edges};
use crate::vocab::{DIRECT_FORMAT, DIRECT_SOURCE, JSONLD_SOURCE};

/// Process one in-memory document into a [`ProcessedGraph`].
///
/// Documents carrying `@context` and/or `@graph` run the JSON-LD pipeline.
/// Anything else must be a plain mapping with `nodes` and `edges` arrays,
/// which is used as-is after structural validation.
pub fn process_document(document: &Value) -> Result<ProcessedGraph, GraphError> {
    let Some(obj) = document.as_object() else {
        return Err(GraphError::MalformedDocument(
            "document must be a JSON object".to_string(),
        ));
    };

    let graph = if obj.contains_key("@context") || obj.contains_key("@graph") {
        process_jsonld(document, obj)
    } else {
        process_plain(obj)?
    };

    validate_graph(&graph)?;
    Ok(graph)
}

/// The JSON-LD extraction pipeline proper. Extraction favors silent skip
/// over failure; the only hard errors come from final validation.
fn process_jsonld(document: &Value, obj: &Map<String, Value>) -> ProcessedGraph {
    let mut resolver = ContextResolver::new();
    resolver.process_context(obj.get("@context"));

    let items: &[Value] = match obj.get("@graph") {
        Some(Value::Array(graph)) => graph,
        _ => std::slice::from_ref(document),
    };

    let (nodes, index) = extract_nodes(&resolver, items);

    let mut edges = infer_property_edges(items, &index);
    edges.extend(expand_relationship_items(items, &index));

    let nodes: Vec<Node> = nodes
        .into_iter()
        .filter(|node| index.contains_key(&node.id))
        .collect();
    let edges: Vec<Edge> = edges
        .into_iter()
        .filter(|edge| {
            index.contains_key(&edge.from) && index.contains_key(&edge.to) && edge.from != edge.to
        })
        .collect();

    let metadata = GraphMetadata {
        source: JSONLD_SOURCE.to_string(),
        format: detect_format(document).to_string(),
        total_nodes: nodes.len(),
        total_edges: edges.len(),
        prefixes: resolver.prefixes().to_vec(),
        processed_at: Utc::now(),
    };

    ProcessedGraph {
        nodes,
        edges,
        metadata,
    }
}

/// The bypass path for plain node/edge documents.
fn process_plain(obj: &Map<String, Value>) -> Result<ProcessedGraph, GraphError> {
    let nodes = plain_array(obj, "nodes")?;
    let edges = plain_array(obj, "edges")?;

    let nodes: Vec<Node> = nodes
        .iter()
        .map(|value| {
            require_string_fields(value, &["id", "label"], "node")?;
            serde_json::from_value(value.clone())
                .map_err(|e| GraphError::InvalidStructure(format!("bad node record: {}", e)))
        })
        .collect::<Result<_, _>>()?;

    let edges: Vec<Edge> = edges
        .iter()
        .map(|value| {
            require_string_fields(value, &["from", "to"], "edge")?;
            serde_json::from_value(value.clone())
                .map_err(|e| GraphError::InvalidStructure(format!("bad edge record: {}", e)))
        })
        .collect::<Result<_, _>>()?;

    let metadata = GraphMetadata {
        source: DIRECT_SOURCE.to_string(),
        format: DIRECT_FORMAT.to_string(),
        total_nodes: nodes.len(),
        total_edges: edges.len(),
        prefixes: Vec::new(),
        processed_at: Utc::now(),
    };

    Ok(ProcessedGraph {
        nodes,
        edges,
        metadata,
    })
}

fn plain_array<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a Vec<Value>, GraphError> {
    match obj.get(key) {
        Some(Value::Array(values)) => Ok(values),
        Some(_) => Err(GraphError::MalformedDocument(format!(
            "'{}' must be an array",
            key
        ))),
        None => Err(GraphError::MalformedDocument(format!(
            "missing '{}' array",
            key
        ))),
    }
}

fn require_string_fields(value: &Value, fields: &[&str], kind: &str) -> Result<(), GraphError> {
    for field in fields {
        let ok = value
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty());
        if !ok {
            return Err(GraphError::InvalidStructure(format!(
                "every {} must have a non-empty '{}'",
                kind, field
            )));
        }
    }
    Ok(())
}

/// Structural validation of a final graph, applied to both pipeline paths.
/// A violation rejects the whole document rather than rendering it partially.
pub fn validate_graph(graph: &ProcessedGraph) -> Result<(), GraphError> {
    for node in &graph.nodes {
        if node.id.is_empty() || node.label.is_empty() {
            return Err(GraphError::InvalidStructure(format!(
                "node '{}' lacks an id or label",
                node.id
            )));
        }
    }
    for edge in &graph.edges {
        if edge.from.is_empty() || edge.to.is_empty() {
            return Err(GraphError::InvalidStructure(format!(
                "edge '{}' -> '{}' lacks an endpoint",
                edge.from, edge.to
            )));
        }
    }
    Ok(())
}
