//! Job-level vs run-phase semaphore conflict detection.

use std::collections::BTreeSet;

use crate::models::{Job, Phase, StringOrList};

/// Find semaphore names declared on a job and again on one of that same
/// job's run phases.
///
/// The comparison is scoped per job: a job-level set is intersected with the
/// union of the semaphores on that job's own `run` entries, and the per-job
/// intersections are unioned across all jobs. Semaphores shared between
/// different jobs are normal and never flagged. Jobs without a usable name
/// are skipped.
pub fn check_duplicate_semaphores(jobs: &[Job]) -> BTreeSet<String> {
    let mut conflicting = BTreeSet::new();

    for job in jobs {
        if job.name().is_none() {
            continue;
        }

        let job_semaphores: BTreeSet<&str> = job
            .semaphores
            .as_ref()
            .map(StringOrList::names)
            .unwrap_or(&[])
            .iter()
            .map(String::as_str)
            .collect();
        if job_semaphores.is_empty() {
            continue;
        }

        let Some(run) = job.phase(Phase::Run) else {
            continue;
        };
        for entry in run.entries() {
            for name in entry.semaphores() {
                if job_semaphores.contains(name.as_str()) {
                    conflicting.insert(name.clone());
                }
            }
        }
    }

    conflicting
}
