//! Integration tests for the `validate` action

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("yamlctl");
    path
}

fn run_yamlctl(args: &[&str], stdin_data: &str) -> (String, String, bool) {
    let binary = binary_path();

    let mut child = Command::new(&binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn yamlctl");

    if let Some(mut stdin) = child.stdin.take() {
        // Ignore write errors: the child may exit before draining stdin.
        let _ = stdin.write_all(stdin_data.as_bytes());
    }

    let output = child.wait_with_output().expect("Failed to wait on child");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

#[test]
fn test_validate_valid_yaml() {
    let (stdout, stderr, success) = run_yamlctl(&["validate"], "a:\n  b: 1\n");
    assert!(success, "stderr: {}", stderr);
    assert_eq!(stdout, "true\n");
}

#[test]
fn test_validate_empty_input_is_valid() {
    let (stdout, stderr, success) = run_yamlctl(&["validate"], "");
    assert!(success, "stderr: {}", stderr);
    assert_eq!(stdout, "true\n");
}

#[test]
fn test_validate_malformed_yaml_prints_false_exit_zero() {
    let (stdout, stderr, success) = run_yamlctl(&["validate"], "a: [unclosed\n");
    assert!(success, "stderr: {}", stderr);
    assert_eq!(stdout, "false\n");
}

#[test]
fn test_validate_details_prints_diagnostic() {
    let (stdout, stderr, success) = run_yamlctl(&["validate", "-d"], "a: [unclosed\n");
    assert!(success, "stderr: {}", stderr);
    assert_ne!(stdout, "false\n");
    assert!(!stdout.trim().is_empty());
}

#[test]
fn test_validate_non_mapping_root_is_invalid() {
    let (stdout, stderr, success) = run_yamlctl(&["validate"], "- a\n- b\n");
    assert!(success, "stderr: {}", stderr);
    assert_eq!(stdout, "false\n");
}

#[test]
fn test_validate_multi_document_stream_is_invalid() {
    let (stdout, stderr, success) = run_yamlctl(&["validate"], "a: 1\n---\nb: 2\n");
    assert!(success, "stderr: {}", stderr);
    assert_eq!(stdout, "false\n");
}

#[test]
fn test_validate_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.yaml");
    std::fs::write(&path, "a: 1\n").unwrap();

    let (stdout, stderr, success) =
        run_yamlctl(&["-f", path.to_str().unwrap(), "validate"], "");
    assert!(success, "stderr: {}", stderr);
    assert_eq!(stdout, "true\n");
}

#[test]
fn test_validate_alias() {
    let (stdout, stderr, success) = run_yamlctl(&["v"], "a: 1\n");
    assert!(success, "stderr: {}", stderr);
    assert_eq!(stdout, "true\n");
}
