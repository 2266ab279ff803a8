//! Document acquisition
//!
//! Loads a JSON document from a local file or an HTTP(S) URL and parses it
//! into a `serde_json::Value` ready for the pipeline.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use url::Url;

use crate::error::GraphError;

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Local JSON file.
    File(PathBuf),
    /// Remote document fetched over HTTP(S).
    Url(String),
}

impl DocumentSource {
    /// Classify a source string: `http://`/`https://` means URL, anything
    /// else is a filesystem path.
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            DocumentSource::Url(source.to_string())
        } else {
            DocumentSource::File(PathBuf::from(source))
        }
    }

    /// Human-readable source location for error messages.
    pub fn display(&self) -> String {
        match self {
            DocumentSource::File(path) => path.display().to_string(),
            DocumentSource::Url(url) => url.clone(),
        }
    }

    /// Load and parse the document.
    pub fn load(&self) -> Result<Value, GraphError> {
        let content = match self {
            DocumentSource::File(path) => {
                fs::read_to_string(path).map_err(|e| GraphError::LoadError {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?
            }
            DocumentSource::Url(url) => fetch_url(url)?,
        };

        serde_json::from_str(&content).map_err(|e| GraphError::LoadError {
            path: self.display(),
            reason: format!("not valid JSON: {}", e),
        })
    }
}

/// Load a document from a path or URL string.
pub fn load_document(source: &str) -> Result<Value, GraphError> {
    DocumentSource::parse(source).load()
}

fn fetch_url(url: &str) -> Result<String, GraphError> {
    let parsed = Url::parse(url).map_err(|e| GraphError::LoadError {
        path: url.to_string(),
        reason: format!("invalid URL: {}", e),
    })?;

    reqwest::blocking::get(parsed)
        .map_err(|e| GraphError::LoadError {
            path: url.to_string(),
            reason: format!("HTTP request failed: {}", e),
        })?
        .text()
        .map_err(|e| GraphError::LoadError {
            path: url.to_string(),
            reason: format!("Failed to read response: {}", e),
        })
}
