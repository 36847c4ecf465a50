//! Schema validation over files on disk

use serial_test::serial;
use std::path::Path;

use weft::commands::lint;
use weft::schema::SchemaStore;

use super::helpers::*;

#[test]
#[serial]
fn test_structural_violation_fails_the_run() {
    let fixture = clean_fixture();
    write_file(
        fixture.path(),
        "ci/badly-typed.yaml",
        concat!(
            "- job:\n",
            "    name: 42\n",
            "    run: playbooks/build.yaml\n",
        ),
    );

    let passed = in_dir(fixture.path(), || {
        lint::execute(lint_options()).expect("lint should run")
    });
    assert!(!passed);
}

#[test]
#[serial]
fn test_custom_schema_file() {
    let fixture = clean_fixture();
    // A schema that accepts any sequence: the tree lints clean under it.
    let schema_path = write_file(fixture.path(), "loose-schema.json", "{\"type\": \"array\"}");

    let passed = in_dir(fixture.path(), || {
        let mut options = lint_options();
        options.schema = Some(schema_path.clone());
        lint::execute(options).expect("lint should run")
    });
    assert!(passed);
}

#[test]
#[serial]
fn test_unreadable_schema_is_fatal() {
    let fixture = clean_fixture();
    let result = in_dir(fixture.path(), || {
        let mut options = lint_options();
        options.schema = Some(fixture.path().join("absent-schema.json"));
        lint::execute(options)
    });
    assert!(result.is_err());
}

#[test]
fn test_bundled_schema_accepts_fixture_files() {
    let fixture = clean_fixture();
    let store = SchemaStore::bundled().expect("bundled schema should compile");

    for file in ["ci/jobs.yaml", "ci/resources.yaml"] {
        let content =
            std::fs::read_to_string(fixture.path().join(file)).expect("Failed to read fixture");
        let value: serde_yaml::Value = serde_yaml::from_str(&content).expect("valid YAML");
        let violations = store.validate(Path::new(file), &value);
        assert!(
            violations.is_empty(),
            "unexpected violations in {file}: {violations:?}"
        );
    }
}
