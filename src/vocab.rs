//! Reserved keys and marker vocabularies for graph extraction

/// Keys consumed by node construction. Everything else on an item is a
/// pass-through attribute, and a relationship candidate for inference.
/// `description` is carried as a dedicated node field, never an edge source.
pub const RESERVED_KEYS: &[&str] = &[
    "@id",
    "@type",
    "id",
    "type",
    "name",
    "label",
    "title",
    "description",
];

/// Properties that hold narrative text. They never produce edges, even when
/// their value happens to match a node id.
pub const NARRATIVE_PROPS: &[&str] = &["description", "comment", "documentation"];

/// Type-name fragments that mark an item as an explicit relationship object.
pub const RELATION_TYPE_MARKERS: &[&str] = &["association", "relationship", "compliance"];

/// Accepted spellings of the relationship membership field, in lookup order.
pub const RELATES_KEYS: &[&str] = &["relatesTo", "relates", "connects", "links"];

/// Metadata `source` value for graphs produced by the JSON-LD pipeline.
pub const JSONLD_SOURCE: &str = "JSON-LD";

/// Metadata `source` value for plain node/edge documents used as-is.
pub const DIRECT_SOURCE: &str = "direct";

/// Metadata `format` value for plain node/edge documents.
pub const DIRECT_FORMAT: &str = "Node/Edge JSON";

/// Edge type for edges inferred from item properties.
pub const INFERRED_EDGE_TYPE: &str = "relationship";
