//! YAML loading for configuration files.
//!
//! A file parses into a sequence of document objects. Entries the document
//! model cannot use are skipped here; structural complaints about them are
//! the schema validator's job.

use anyhow::{Context, Result};
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

use crate::models::ConfigDocument;

/// Read and parse one configuration file.
pub fn parse_file(path: &Path) -> Result<Vec<ConfigDocument>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_content(&content)
}

/// Parse configuration content (for callers that already hold the text).
pub fn parse_content(content: &str) -> Result<Vec<ConfigDocument>> {
    let root: Value = serde_yaml::from_str(content).context("Invalid YAML")?;
    Ok(documents_from_value(root))
}

/// Extract document objects from an already-parsed YAML value.
///
/// Anything other than a sequence of single-key mappings with recognized
/// discriminators yields fewer documents, never an error.
pub fn documents_from_value(root: Value) -> Vec<ConfigDocument> {
    let root = strip_tags(root);
    let Value::Sequence(entries) = root else {
        debug!("config root is not a sequence, no documents extracted");
        return Vec::new();
    };

    let mut documents = Vec::new();
    for entry in entries {
        match ConfigDocument::from_value(entry) {
            Some(document) => documents.push(document),
            None => debug!("skipping unrecognized document entry"),
        }
    }
    documents
}

/// Replace tagged values (e.g. `!encrypted/pkcs1-oaep` scalars) with their
/// underlying value so the rest of the pipeline sees plain YAML.
pub fn strip_tags(value: Value) -> Value {
    match value {
        Value::Tagged(tagged) => strip_tags(tagged.value),
        Value::Sequence(entries) => Value::Sequence(entries.into_iter().map(strip_tags).collect()),
        Value::Mapping(mapping) => Value::Mapping(
            mapping
                .into_iter()
                .map(|(key, val)| (strip_tags(key), strip_tags(val)))
                .collect(),
        ),
        other => other,
    }
}
