//! Consistency checks driven through the library API
//!
//! These tests parse real files from a fixture tree and feed the grouped
//! documents to the checkers directly, the way the lint command does.

use serial_test::serial;
use std::collections::BTreeMap;
use std::path::PathBuf;

use weft::checker;
use weft::discovery;
use weft::models::{ConfigDocument, Job, Nodeset, Secret};
use weft::parser;

use super::helpers::*;

struct GroupedDocuments {
    jobs_by_file: BTreeMap<PathBuf, Vec<Job>>,
    jobs: Vec<Job>,
    nodesets: Vec<Nodeset>,
    secrets: Vec<Secret>,
}

fn load(root: &std::path::Path) -> GroupedDocuments {
    let files = discovery::discover(&[root.to_path_buf()]).expect("discovery should succeed");

    let mut grouped = GroupedDocuments {
        jobs_by_file: BTreeMap::new(),
        jobs: Vec::new(),
        nodesets: Vec::new(),
        secrets: Vec::new(),
    };
    for file in &files.canonical {
        let documents = parser::parse_file(file).expect("fixture files should parse");
        let mut file_jobs = Vec::new();
        for document in documents {
            match document {
                ConfigDocument::Job(job) => file_jobs.push(job),
                ConfigDocument::Nodeset(nodeset) => grouped.nodesets.push(nodeset),
                ConfigDocument::Secret(secret) => grouped.secrets.push(secret),
                _ => {}
            }
        }
        grouped.jobs.extend(file_jobs.iter().cloned());
        grouped.jobs_by_file.insert(file.clone(), file_jobs);
    }
    grouped
}

#[test]
fn test_clean_fixture_has_no_findings() {
    let fixture = clean_fixture();
    let grouped = load(fixture.path());

    assert!(checker::check_duplicate_jobs(&grouped.jobs_by_file).is_empty());
    assert!(checker::check_dangling_nodesets(&grouped.nodesets, &grouped.jobs).is_empty());
    assert!(checker::check_dangling_secrets(&grouped.secrets, &grouped.jobs).is_empty());
    assert!(checker::check_duplicate_semaphores(&grouped.jobs).is_empty());
}

#[test]
fn test_findings_across_files() {
    let fixture = clean_fixture();
    write_file(
        fixture.path(),
        "ci/extra.yaml",
        concat!(
            "- job:\n",
            "    name: build\n",
            "    nodeset: phantom-pool\n",
            "    secrets: missing-key\n",
        ),
    );
    let grouped = load(fixture.path());

    let duplicates = checker::check_duplicate_jobs(&grouped.jobs_by_file);
    assert!(duplicates.contains("build"));
    assert_eq!(duplicates.len(), 1);

    let nodesets = checker::check_dangling_nodesets(&grouped.nodesets, &grouped.jobs);
    assert!(nodesets.contains("phantom-pool"));
    assert_eq!(nodesets.len(), 1);

    let secrets = checker::check_dangling_secrets(&grouped.secrets, &grouped.jobs);
    assert!(secrets.contains("missing-key"));
    assert_eq!(secrets.len(), 1);
}

#[test]
#[serial]
fn test_playbook_paths_from_parsed_files() {
    let fixture = clean_fixture();
    write_file(
        fixture.path(),
        "ci/broken.yaml",
        concat!(
            "- job:\n",
            "    name: deploy\n",
            "    pre-run: playbooks/absent.yaml\n",
            "    run:\n",
            "      - name: playbooks/also-absent.yaml\n",
        ),
    );
    let grouped = load(fixture.path());

    let missing: Vec<String> = in_dir(fixture.path(), || {
        grouped
            .jobs
            .iter()
            .flat_map(|job| checker::check_playbook_paths(job))
            .collect()
    });
    assert_eq!(missing, ["playbooks/absent.yaml", "playbooks/also-absent.yaml"]);
}

#[test]
fn test_checkers_are_idempotent() {
    let fixture = clean_fixture();
    write_file(
        fixture.path(),
        "ci/extra.yaml",
        "- job:\n    name: build\n    nodeset: phantom-pool\n",
    );
    let grouped = load(fixture.path());

    let first = checker::check_dangling_nodesets(&grouped.nodesets, &grouped.jobs);
    let second = checker::check_dangling_nodesets(&grouped.nodesets, &grouped.jobs);
    assert_eq!(first, second);

    let first = checker::check_duplicate_jobs(&grouped.jobs_by_file);
    let second = checker::check_duplicate_jobs(&grouped.jobs_by_file);
    assert_eq!(first, second);
}
