//! Integration test: run the `jsv` binary and check exit codes and output.

use std::path::Path;
use std::process::{Command, Output};

fn jsv(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jsv"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("jsv binary should run")
}

fn setup() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("schemas")).unwrap();
    std::fs::write(
        dir.path().join("schemas/server.schema.json"),
        r#"{
            "type": "object",
            "required": ["host", "port"],
            "properties": {
                "host": {"type": "string", "format": "hostname"},
                "port": {"type": "integer", "minimum": 1, "maximum": 65535}
            },
            "additionalProperties": false
        }"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("ok.yaml"), "host: db.internal\nport: 5432\n").unwrap();
    std::fs::write(dir.path().join("bad.json"), r#"{"host": "db", "port": 0, "tls": true}"#).unwrap();
    dir
}

#[test]
fn test_valid_instance_exits_zero() {
    let dir = setup();
    let out = jsv(&["validate", "--schema", "schemas/server.schema.json", "ok.yaml"], dir.path());
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("OK: ok.yaml"), "{stdout}");
}

#[test]
fn test_invalid_instance_exits_one_and_lists_errors() {
    let dir = setup();
    let out = jsv(
        &["validate", "--catalog", "schemas", "--name", "server", "ok.yaml", "bad.json"],
        dir.path(),
    );
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("FAIL: bad.json"), "{stdout}");
    assert!(stdout.contains("  - Value must be greater than or equal to 1."), "{stdout}");
    assert!(stdout.contains("  - Additional property \"tls\" isn't allowed."), "{stdout}");
    assert!(stdout.contains("1/2 instance(s) valid"), "{stdout}");
}

#[test]
fn test_json_output() {
    let dir = setup();
    let out = jsv(
        &["validate", "--schema", "schemas/server.schema.json", "--format", "json", "bad.json"],
        dir.path(),
    );
    assert_eq!(out.status.code(), Some(1));
    let reports: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(reports[0]["valid"], false);
    assert_eq!(reports[0]["errors"].as_array().unwrap().len(), 2);
}

#[test]
fn test_missing_instance_exits_two() {
    let dir = setup();
    let out = jsv(&["validate", "--schema", "schemas/server.schema.json", "nope.json"], dir.path());
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_compile_subcommand() {
    let dir = setup();
    let out = jsv(&["compile", "schemas/server.schema.json"], dir.path());
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("[properties, required, type]"), "{stdout}");

    std::fs::write(dir.path().join("broken.schema.json"), r#"{"required": "host"}"#).unwrap();
    let out = jsv(&["compile", "broken.schema.json"], dir.path());
    assert_eq!(out.status.code(), Some(1));
}
