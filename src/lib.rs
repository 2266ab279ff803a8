//! JSON-LD Visualization Graph Extraction
//!
//! This library turns an arbitrary JSON-LD-shaped document (or a plain
//! nodes/edges document) into a deduplicated, type-classified,
//! referentially-valid visualization graph for a node/edge viewer.
//!
//! # Pipeline
//!
//! 1. The document's `@context` is parsed into a prefix table used for
//!    compact-IRI expansion and label shortening
//! 2. Every `@graph` item with a resolvable id becomes a [`Node`], typed and
//!    classified into a fixed set of visual groups
//! 3. Edges come from two additive strategies: item properties whose values
//!    reference known node ids, and explicit relationship/association items
//!    expanded pairwise
//! 4. Assembly drops edges with missing endpoints or self-loops and attaches
//!    run metadata (detected dialect, counts, prefix table, timestamp)
//!
//! Extraction favors silent skip over failure: items without ids are
//! dropped, unknown prefixes pass through unexpanded, missing types fall
//! into the `Other` group. Hard errors are reserved for documents the
//! viewer cannot use at all.
//!
//! # Usage
//!
//! ```ignore
//! use jsonld_vizgraph::process_document;
//!
//! let document: serde_json::Value = serde_json::from_str(input)?;
//! let graph = process_document(&document)?;
//!
//! println!("{}", graph.to_json_string(true)?);
//! ```

pub mod assemble;
pub mod classify;
pub mod context;
pub mod detect;
pub mod error;
pub mod extract;
pub mod load;
pub mod model;
pub mod relate;
pub mod vocab;

// Re-export main types for convenience
pub use crate::assemble::{process_document, validate_graph};
pub use crate::classify::{node_group, NodeGroup};
pub use crate::context::{local_name, ContextResolver};
pub use crate::detect::{detect_format, DocumentFormat};
pub use crate::error::GraphError;
pub use crate::extract::{extract_nodes, NodeIndex};
pub use crate::load::{load_document, DocumentSource};
pub use crate::model::{Edge, GraphMetadata, Node, ProcessedGraph};
