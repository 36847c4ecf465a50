//! Dangling secret reference detection.

use std::collections::BTreeSet;

use crate::models::{Job, Secret, SecretRef};

/// Find secret names referenced by jobs that no declaration resolves.
///
/// A job's `secrets` attribute may be a bare name, an object whose `secret`
/// key carries the name, or a list mixing both; references without a usable
/// name are skipped.
pub fn check_dangling_secrets(secrets: &[Secret], jobs: &[Job]) -> BTreeSet<String> {
    let known: BTreeSet<&str> = secrets.iter().filter_map(|s| s.name.as_deref()).collect();

    let mut dangling = BTreeSet::new();
    for job in jobs {
        let Some(references) = &job.secrets else {
            continue;
        };
        for reference in references.entries() {
            let Some(name) = reference.secret_name() else {
                continue;
            };
            if !known.contains(name) {
                dangling.insert(name.to_string());
            }
        }
    }

    dangling
}
