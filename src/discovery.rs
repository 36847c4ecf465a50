//! Configuration file discovery.
//!
//! `.yaml` is the canonical extension; `.yml` files are collected separately
//! so the report can flag them, and they are not parsed.

use anyhow::Result;
use glob::glob;
use std::path::PathBuf;
use tracing::debug;

pub const CANONICAL_EXTENSION: &str = "yaml";
pub const SUSPECT_EXTENSION: &str = "yml";

/// Configuration files found under the requested paths, bucketed by
/// extension and sorted for deterministic reports.
#[derive(Debug, Default)]
pub struct DiscoveredFiles {
    pub canonical: Vec<PathBuf>,
    pub suspect: Vec<PathBuf>,
}

/// Classify every file or directory argument.
///
/// Directories are searched recursively for both extensions; arguments that
/// are neither a file nor a directory are skipped.
pub fn discover(paths: &[PathBuf]) -> Result<DiscoveredFiles> {
    let mut found = DiscoveredFiles::default();

    for path in paths {
        if path.is_file() {
            classify(path.clone(), &mut found);
        } else if path.is_dir() {
            for extension in [CANONICAL_EXTENSION, SUSPECT_EXTENSION] {
                let pattern = format!("{}/**/*.{extension}", path.display());
                for entry in glob(&pattern)? {
                    match entry {
                        Ok(file) => classify(file, &mut found),
                        Err(err) => debug!(%err, "skipping unreadable path"),
                    }
                }
            }
        } else {
            debug!(path = %path.display(), "skipping path that is neither file nor directory");
        }
    }

    found.canonical.sort();
    found.suspect.sort();
    Ok(found)
}

fn classify(file: PathBuf, found: &mut DiscoveredFiles) {
    match file.extension().and_then(|ext| ext.to_str()) {
        Some(CANONICAL_EXTENSION) => found.canonical.push(file),
        Some(SUSPECT_EXTENSION) => found.suspect.push(file),
        _ => debug!(path = %file.display(), "skipping file without a config extension"),
    }
}
