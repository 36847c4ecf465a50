//! Top-level document objects and their discriminator keys.
//!
//! A configuration file is a YAML sequence of single-key mappings; the key
//! names the kind of object being declared. Only the kinds the consistency
//! checks inspect get typed payloads, the rest are carried as raw values so
//! schema validation can still see them.

use serde::Deserialize;
use serde_yaml::Value;
use tracing::debug;

use super::job::Job;
use super::nodeset::Nodeset;

/// Discriminator key of a document object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Job,
    Nodeset,
    Pipeline,
    Pragma,
    Project,
    ProjectTemplate,
    Queue,
    Secret,
    Semaphore,
}

impl DocumentKind {
    /// All recognized discriminator keys.
    pub const ALL: [DocumentKind; 9] = [
        DocumentKind::Job,
        DocumentKind::Nodeset,
        DocumentKind::Pipeline,
        DocumentKind::Pragma,
        DocumentKind::Project,
        DocumentKind::ProjectTemplate,
        DocumentKind::Queue,
        DocumentKind::Secret,
        DocumentKind::Semaphore,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DocumentKind::Job => "job",
            DocumentKind::Nodeset => "nodeset",
            DocumentKind::Pipeline => "pipeline",
            DocumentKind::Pragma => "pragma",
            DocumentKind::Project => "project",
            DocumentKind::ProjectTemplate => "project-template",
            DocumentKind::Queue => "queue",
            DocumentKind::Secret => "secret",
            DocumentKind::Semaphore => "semaphore",
        }
    }

    pub fn from_key(key: &str) -> Option<DocumentKind> {
        DocumentKind::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A declared semaphore. Only the name participates in the checks.
#[derive(Debug, Clone, Deserialize)]
pub struct Semaphore {
    #[serde(default)]
    pub name: Option<String>,
}

/// A declared secret. Only the name participates in the checks.
#[derive(Debug, Clone, Deserialize)]
pub struct Secret {
    #[serde(default)]
    pub name: Option<String>,
}

/// One document object, keyed by its discriminator.
#[derive(Debug, Clone)]
pub enum ConfigDocument {
    Job(Job),
    Nodeset(Nodeset),
    Semaphore(Semaphore),
    Secret(Secret),
    /// Kinds the consistency checks never inspect.
    Other { kind: DocumentKind, value: Value },
}

impl ConfigDocument {
    pub fn kind(&self) -> DocumentKind {
        match self {
            ConfigDocument::Job(_) => DocumentKind::Job,
            ConfigDocument::Nodeset(_) => DocumentKind::Nodeset,
            ConfigDocument::Semaphore(_) => DocumentKind::Semaphore,
            ConfigDocument::Secret(_) => DocumentKind::Secret,
            ConfigDocument::Other { kind, .. } => *kind,
        }
    }

    /// Decode a top-level sequence entry into a document object.
    ///
    /// Returns `None` for entries that are not single-key mappings with a
    /// recognized discriminator, or whose payload does not decode; such
    /// entries are the schema validator's problem, not the checkers'.
    pub fn from_value(entry: Value) -> Option<ConfigDocument> {
        let Value::Mapping(mapping) = entry else {
            return None;
        };
        let (key, payload) = mapping.into_iter().next()?;
        let Value::String(key) = key else {
            return None;
        };
        let kind = DocumentKind::from_key(&key)?;

        let decoded = match kind {
            DocumentKind::Job => serde_yaml::from_value(payload).map(ConfigDocument::Job),
            DocumentKind::Nodeset => serde_yaml::from_value(payload).map(ConfigDocument::Nodeset),
            DocumentKind::Semaphore => {
                serde_yaml::from_value(payload).map(ConfigDocument::Semaphore)
            }
            DocumentKind::Secret => serde_yaml::from_value(payload).map(ConfigDocument::Secret),
            _ => Ok(ConfigDocument::Other {
                kind,
                value: payload,
            }),
        };

        match decoded {
            Ok(document) => Some(document),
            Err(err) => {
                debug!(kind = %kind, %err, "skipping malformed document payload");
                None
            }
        }
    }

    pub fn as_job(&self) -> Option<&Job> {
        match self {
            ConfigDocument::Job(job) => Some(job),
            _ => None,
        }
    }

    pub fn as_nodeset(&self) -> Option<&Nodeset> {
        match self {
            ConfigDocument::Nodeset(nodeset) => Some(nodeset),
            _ => None,
        }
    }

    pub fn as_secret(&self) -> Option<&Secret> {
        match self {
            ConfigDocument::Secret(secret) => Some(secret),
            _ => None,
        }
    }
}
