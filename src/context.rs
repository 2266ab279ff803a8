//! JSON-LD context resolution
//!
//! Parses a document's `@context` into a prefix table and a term-definition
//! table, and provides compact-IRI expansion and IRI shortening for the
//! rest of the pipeline.

use serde_json::Value;
use std::collections::HashMap;

/// Prefix and term tables built from one document's `@context`.
///
/// A resolver is scoped to a single pipeline invocation; processing a new
/// document starts from a fresh resolver.
#[derive(Debug, Default)]
pub struct ContextResolver {
    /// Prefix → IRI base, in document order.
    prefixes: Vec<(String, String)>,
    /// Complex term mappings (context entries whose value is an object).
    terms: HashMap<String, Value>,
}

impl ContextResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the tables from a document's `@context`.
    ///
    /// String-valued entries become prefix mappings, object-valued entries
    /// become term definitions, `@vocab` and `@base` are ignored. An absent
    /// or non-object context is a no-op, never an error.
    pub fn process_context(&mut self, context: Option<&Value>) {
        let Some(Value::Object(map)) = context else {
            return;
        };

        for (key, value) in map {
            if key == "@vocab" || key == "@base" {
                continue;
            }
            match value {
                Value::String(iri) => self.prefixes.push((key.clone(), iri.clone())),
                Value::Object(_) => {
                    self.terms.insert(key.clone(), value.clone());
                }
                _ => {}
            }
        }
    }

    /// Look up the IRI base registered for a prefix.
    pub fn prefix(&self, prefix: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, iri)| iri.as_str())
    }

    /// The prefix table as (prefix, IRI base) pairs in document order.
    pub fn prefixes(&self) -> &[(String, String)] {
        &self.prefixes
    }

    /// Look up a complex term definition by name.
    pub fn term(&self, name: &str) -> Option<&Value> {
        self.terms.get(name)
    }

    /// Expand a compact IRI against the prefix table.
    ///
    /// `"archimate:BusinessRole"` becomes
    /// `"http://www.opengroup.org/xsd/archimate/BusinessRole"`. Terms that
    /// are already full IRIs, or whose prefix is unknown, pass through
    /// unchanged. Expansion is best-effort and never fails.
    pub fn expand_iri(&self, term: &str) -> String {
        if term.contains("http://") || term.contains("https://") {
            return term.to_string();
        }

        if let Some((prefix, local)) = term.split_once(':') {
            if !local.is_empty() {
                if let Some(base) = self.prefix(prefix) {
                    return if local.starts_with('/') {
                        format!("{}{}", base, local)
                    } else {
                        format!("{}/{}", base, local)
                    };
                }
            }
        }

        term.to_string()
    }
}

/// The short, human-readable tail of an IRI or compact term.
///
/// Compact terms (`"archimate:BusinessRole"`) yield the part after the last
/// `:`; full IRIs yield the last path segment, then the last fragment
/// (`"http://ex.org/ns#Widget"` → `"Widget"`). Used for labels, type names,
/// grouping, and edge labels throughout the pipeline.
pub fn local_name(iri: &str) -> &str {
    if iri.contains(':') && !iri.contains("http") {
        return iri.rsplit(':').next().unwrap_or(iri);
    }

    let segment = iri.rsplit('/').next().unwrap_or(iri);
    segment.rsplit('#').next().unwrap_or(segment)
}
