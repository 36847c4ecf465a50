//! The lint command: discovery, parsing, validation, checks, report.

use anyhow::{Context, Result};
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

use crate::checker;
use crate::discovery;
use crate::models::{ConfigDocument, Job, Nodeset, Secret};
use crate::parser;
use crate::report::LintReport;
use crate::schema::SchemaStore;

/// Options for one lint run, straight from the CLI.
#[derive(Debug)]
pub struct LintOptions {
    pub paths: Vec<PathBuf>,
    pub schema: Option<PathBuf>,
    pub check_playbook_paths: bool,
    pub ignore_warnings: bool,
    pub warnings_as_errors: bool,
}

/// Run the linter. Returns whether the run passed; rendering happens here,
/// the exit code is the caller's decision.
pub fn execute(options: LintOptions) -> Result<bool> {
    let store = match &options.schema {
        Some(path) => SchemaStore::load(path)
            .with_context(|| format!("Failed to load schema from {}", path.display()))?,
        None => SchemaStore::bundled().context("Failed to compile the bundled schema")?,
    };

    let files = discovery::discover(&options.paths)?;
    println!(
        "{}",
        format!(
            "Linting {} configuration file(s)",
            files.canonical.len()
        )
        .cyan()
        .bold()
    );

    let mut report = LintReport {
        suspect_files: files.suspect.clone(),
        playbook_paths_checked: options.check_playbook_paths,
        ..Default::default()
    };

    // Parse once per file; schema validation and the semantic checks share
    // the same parsed value.
    let mut jobs_by_file: BTreeMap<PathBuf, Vec<Job>> = BTreeMap::new();
    let mut nodesets: Vec<Nodeset> = Vec::new();
    let mut secrets: Vec<Secret> = Vec::new();

    for file in &files.canonical {
        println!("{}", file.display());
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read config file: {}", file.display()))?;

        let value: serde_yaml::Value = match serde_yaml::from_str(&content) {
            Ok(value) => parser::strip_tags(value),
            Err(err) => {
                report
                    .yaml_errors
                    .push(format!("{}: {err}", file.display()));
                continue;
            }
        };

        report
            .schema_violations
            .extend(store.validate(file, &value));

        let documents = parser::documents_from_value(value);
        debug!(file = %file.display(), count = documents.len(), "parsed documents");

        let mut file_jobs = Vec::new();
        for document in documents {
            match document {
                ConfigDocument::Job(job) => file_jobs.push(job),
                ConfigDocument::Nodeset(nodeset) => nodesets.push(nodeset),
                ConfigDocument::Secret(secret) => secrets.push(secret),
                _ => {}
            }
        }
        jobs_by_file.insert(file.clone(), file_jobs);
    }

    let all_jobs: Vec<Job> = jobs_by_file.values().flatten().cloned().collect();

    if options.check_playbook_paths {
        for job in &all_jobs {
            report
                .invalid_playbook_paths
                .extend(checker::check_playbook_paths(job));
        }
    }

    report.duplicate_jobs = checker::check_duplicate_jobs(&jobs_by_file)
        .into_iter()
        .collect();
    report.dangling_nodesets = checker::check_dangling_nodesets(&nodesets, &all_jobs)
        .into_iter()
        .collect();
    report.dangling_secrets = checker::check_dangling_secrets(&secrets, &all_jobs)
        .into_iter()
        .collect();
    report.duplicate_semaphores = checker::check_duplicate_semaphores(&all_jobs)
        .into_iter()
        .collect();

    report.render(options.warnings_as_errors, options.ignore_warnings);
    Ok(report.passed(options.warnings_as_errors))
}
