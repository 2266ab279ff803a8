//! Document dialect detection
//!
//! Classifies the overall document by inspecting `@context`. The result is
//! display-only metadata; it never changes extraction behavior.

use serde_json::Value;
use std::fmt;

/// Recognized JSON-LD dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Generic,
    ArchiMate,
    SchemaOrg,
    RdfOwl,
    Custom,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentFormat::Generic => "Generic JSON-LD",
            DocumentFormat::ArchiMate => "ArchiMate JSON-LD",
            DocumentFormat::SchemaOrg => "Schema.org JSON-LD",
            DocumentFormat::RdfOwl => "RDF/OWL JSON-LD",
            DocumentFormat::Custom => "Custom JSON-LD",
        };
        write!(f, "{}", name)
    }
}

/// Detect the document's dialect from its `@context`.
///
/// Checked in order: no context at all, ArchiMate markers, Schema.org
/// markers, RDF/OWL prefixes. "archimate" is tested before "schema" so a
/// context carrying both classifies as ArchiMate.
pub fn detect_format(document: &Value) -> DocumentFormat {
    let Some(context) = document.get("@context") else {
        return DocumentFormat::Generic;
    };

    match context {
        Value::Object(map) => {
            let has_marker = |needle: &str| {
                map.keys().any(|k| k.to_lowercase().contains(needle))
                    || map
                        .values()
                        .any(|v| v.as_str().is_some_and(|s| s.to_lowercase().contains(needle)))
            };

            if has_marker("archimate") {
                DocumentFormat::ArchiMate
            } else if map.keys().any(|k| k.to_lowercase().contains("schema"))
                || map
                    .values()
                    .any(|v| v.as_str().is_some_and(|s| s.to_lowercase().contains("schema.org")))
            {
                DocumentFormat::SchemaOrg
            } else if map.contains_key("owl") || map.contains_key("rdf") {
                DocumentFormat::RdfOwl
            } else {
                DocumentFormat::Custom
            }
        }
        Value::String(s) if s.to_lowercase().contains("schema.org") => DocumentFormat::SchemaOrg,
        _ => DocumentFormat::Custom,
    }
}
