//! Playbook path existence check.

use std::path::Path;

use crate::models::{Job, Phase};

/// Collect every playbook path referenced by the job's phase fields that
/// does not exist on disk, relative to the current working directory.
///
/// Paths come back in phase order (pre-run, run, post-run, cleanup-run) and
/// source order within a phase; a path referenced twice appears twice. An
/// inaccessible path counts as missing.
pub fn check_playbook_paths(job: &Job) -> Vec<String> {
    let mut invalid_paths = Vec::new();

    for phase in Phase::ALL {
        let Some(field) = job.phase(phase) else {
            continue;
        };
        for entry in field.entries() {
            let Some(path) = entry.path_ref() else {
                continue;
            };
            if !Path::new(path).exists() {
                invalid_paths.push(path.to_string());
            }
        }
    }

    invalid_paths
}
