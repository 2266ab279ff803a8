//! Error types for graph extraction

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    /// The document cannot be used at all: not a JSON object, or a plain
    /// node/edge document without `nodes`/`edges` arrays.
    #[error("Malformed graph document: {0}")]
    MalformedDocument(String),

    /// The produced graph violates the structural contract: a node without
    /// an id or label, or an edge without both endpoints.
    #[error("Invalid graph structure: {0}")]
    InvalidStructure(String),

    #[error("Failed to load document from {path}: {reason}")]
    LoadError { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
