//! End-to-end lint runs over fixture trees

use serial_test::serial;

use weft::commands::lint;

use super::helpers::*;

#[test]
#[serial]
fn test_clean_tree_passes() {
    let fixture = clean_fixture();
    let passed = in_dir(fixture.path(), || {
        lint::execute(lint_options()).expect("lint should run")
    });
    assert!(passed);
}

#[test]
#[serial]
fn test_duplicate_job_is_a_warning() {
    let fixture = clean_fixture();
    write_file(
        fixture.path(),
        "ci/more-jobs.yaml",
        concat!(
            "- job:\n",
            "    name: build\n",
            "    run: playbooks/build.yaml\n",
        ),
    );

    // Warnings alone do not fail the run.
    let passed = in_dir(fixture.path(), || {
        lint::execute(lint_options()).expect("lint should run")
    });
    assert!(passed);

    // Unless warnings are escalated.
    let passed = in_dir(fixture.path(), || {
        let mut options = lint_options();
        options.warnings_as_errors = true;
        lint::execute(options).expect("lint should run")
    });
    assert!(!passed);
}

#[test]
#[serial]
fn test_missing_playbook_fails_when_checked() {
    let fixture = clean_fixture();
    write_file(
        fixture.path(),
        "ci/broken.yaml",
        concat!(
            "- job:\n",
            "    name: deploy\n",
            "    run: playbooks/does-not-exist.yaml\n",
        ),
    );

    let passed = in_dir(fixture.path(), || {
        lint::execute(lint_options()).expect("lint should run")
    });
    assert!(!passed);

    // Without the flag the same tree passes.
    let passed = in_dir(fixture.path(), || {
        let mut options = lint_options();
        options.check_playbook_paths = false;
        lint::execute(options).expect("lint should run")
    });
    assert!(passed);
}

#[test]
#[serial]
fn test_dangling_nodeset_respects_warning_flags() {
    let fixture = clean_fixture();
    write_file(
        fixture.path(),
        "ci/dangling.yaml",
        concat!(
            "- job:\n",
            "    name: test\n",
            "    run: playbooks/build.yaml\n",
            "    nodeset: phantom-pool\n",
        ),
    );

    let passed = in_dir(fixture.path(), || {
        let mut options = lint_options();
        options.ignore_warnings = true;
        lint::execute(options).expect("lint should run")
    });
    assert!(passed);

    let passed = in_dir(fixture.path(), || {
        let mut options = lint_options();
        options.warnings_as_errors = true;
        lint::execute(options).expect("lint should run")
    });
    assert!(!passed);
}

#[test]
#[serial]
fn test_duplicate_semaphore_is_an_error() {
    let fixture = clean_fixture();
    write_file(
        fixture.path(),
        "ci/semaphores.yaml",
        concat!(
            "- semaphore:\n",
            "    name: ci-lock\n",
            "- job:\n",
            "    name: gated\n",
            "    semaphores: ci-lock\n",
            "    run:\n",
            "      - name: playbooks/build.yaml\n",
            "        semaphores: ci-lock\n",
        ),
    );

    let passed = in_dir(fixture.path(), || {
        lint::execute(lint_options()).expect("lint should run")
    });
    assert!(!passed);
}

#[test]
#[serial]
fn test_suspect_extension_is_a_warning() {
    let fixture = clean_fixture();
    write_file(fixture.path(), "ci/legacy.yml", "- job:\n    name: old\n");

    let passed = in_dir(fixture.path(), || {
        lint::execute(lint_options()).expect("lint should run")
    });
    assert!(passed);

    let passed = in_dir(fixture.path(), || {
        let mut options = lint_options();
        options.warnings_as_errors = true;
        lint::execute(options).expect("lint should run")
    });
    assert!(!passed);
}

#[test]
#[serial]
fn test_unparseable_yaml_is_an_error() {
    let fixture = clean_fixture();
    write_file(fixture.path(), "ci/garbage.yaml", "{- foo = bar}\n");

    let passed = in_dir(fixture.path(), || {
        lint::execute(lint_options()).expect("lint should run")
    });
    assert!(!passed);
}

#[test]
#[serial]
fn test_empty_tree_passes() {
    let fixture = tempfile::TempDir::new().expect("Failed to create temp dir");
    let passed = in_dir(fixture.path(), || {
        lint::execute(lint_options()).expect("lint should run")
    });
    assert!(passed);
}
