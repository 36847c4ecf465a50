//! JSON-schema validation of configuration documents.

use jsonschema::{Draft, Validator};
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The schema shipped inside the binary, used when no `--schema` is given.
const BUNDLED_SCHEMA: &str = include_str!("../schemas/ci-schema.json");

/// One structural violation found in a configuration file.
#[derive(Debug, Clone)]
pub struct SchemaViolation {
    pub file: PathBuf,
    pub message: String,
    pub instance_path: String,
    pub schema_path: String,
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} (at {})",
            self.file.display(),
            self.message,
            self.instance_path
        )
    }
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to read schema file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Schema file {path} is not valid JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid schema: {0}")]
    Compile(String),
}

/// A compiled schema ready to validate parsed configuration files.
pub struct SchemaStore {
    validator: Validator,
}

impl SchemaStore {
    /// Compile the bundled default schema.
    pub fn bundled() -> Result<SchemaStore, SchemaError> {
        let schema: JsonValue = serde_json::from_str(BUNDLED_SCHEMA)
            .map_err(|err| SchemaError::Compile(format!("bundled schema: {err}")))?;
        SchemaStore::compile(&schema)
    }

    /// Load and compile a schema from a JSON file.
    pub fn load(path: &Path) -> Result<SchemaStore, SchemaError> {
        let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let schema: JsonValue =
            serde_json::from_str(&content).map_err(|source| SchemaError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        SchemaStore::compile(&schema)
    }

    fn compile(schema: &JsonValue) -> Result<SchemaStore, SchemaError> {
        let validator = jsonschema::options()
            .with_draft(Draft::Draft201909)
            .build(schema)
            .map_err(|err| SchemaError::Compile(err.to_string()))?;
        Ok(SchemaStore { validator })
    }

    /// Validate one file's parsed YAML against the schema.
    ///
    /// The value is expected to be tag-stripped already; a value that cannot
    /// be represented as JSON yields a single violation for the whole file.
    pub fn validate(&self, file: &Path, document: &serde_yaml::Value) -> Vec<SchemaViolation> {
        let json = match serde_json::to_value(document) {
            Ok(json) => json,
            Err(err) => {
                return vec![SchemaViolation {
                    file: file.to_path_buf(),
                    message: format!("not representable as JSON: {err}"),
                    instance_path: String::from("/"),
                    schema_path: String::from("/"),
                }];
            }
        };

        self.validator
            .iter_errors(&json)
            .map(|error| SchemaViolation {
                file: file.to_path_buf(),
                message: error.to_string(),
                instance_path: error.instance_path.to_string(),
                schema_path: error.schema_path.to_string(),
            })
            .collect()
    }
}
