//! Duplicate job detection across files.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::models::Job;

/// Find job names declared in more than one file.
///
/// A name repeated within a single file counts once for that file, so only
/// cross-file duplication is flagged. Jobs without a usable name are ignored.
pub fn check_duplicate_jobs(jobs_by_file: &BTreeMap<PathBuf, Vec<Job>>) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    let mut duplicated = BTreeSet::new();

    for jobs in jobs_by_file.values() {
        let file_names: BTreeSet<&str> = jobs.iter().filter_map(Job::name).collect();
        for name in file_names {
            if !seen.insert(name.to_string()) {
                duplicated.insert(name.to_string());
            }
        }
    }

    duplicated
}
