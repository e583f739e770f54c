//! Integration tests for the `expand` action

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use indoc::indoc;

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

const SAMPLE: &str = indoc! {"
    name: bob
    details:
      age: 30
      motto: less < more
"};

#[test]
fn test_expand_inline_text() {
    let (stdout, stderr, success) = run_yamlctl(
        &["expand", "--text", "{{name}} is {{details.age}}\n"],
        SAMPLE,
    );
    assert!(success, "stderr: {}", stderr);
    assert_eq!(stdout, "bob is 30\n");
}

#[test]
fn test_expand_text_mode_does_not_escape() {
    let (stdout, stderr, success) =
        run_yamlctl(&["expand", "--text", "{{details.motto}}"], SAMPLE);
    assert!(success, "stderr: {}", stderr);
    assert_eq!(stdout, "less < more");
}

#[test]
fn test_expand_html_mode_escapes() {
    let (stdout, stderr, success) = run_yamlctl(
        &["expand", "--text", "{{details.motto}}", "-o", "html"],
        SAMPLE,
    );
    assert!(success, "stderr: {}", stderr);
    assert_eq!(stdout, "less &lt; more");
}

#[test]
fn test_expand_template_files_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.tmpl");
    let second = dir.path().join("second.tmpl");
    std::fs::write(&first, "hello {{name}}\n").unwrap();
    std::fs::write(&second, "age {{details.age}}\n").unwrap();

    let (stdout, stderr, success) = run_yamlctl(
        &[
            "expand",
            "-t",
            first.to_str().unwrap(),
            "-t",
            second.to_str().unwrap(),
        ],
        SAMPLE,
    );
    assert!(success, "stderr: {}", stderr);
    assert_eq!(stdout, "hello bob\nage 30\n");
}

#[test]
fn test_expand_requires_template_or_text() {
    let (_, stderr, success) = run_yamlctl(&["expand"], SAMPLE);
    assert!(!success);
    assert!(stderr.contains("--template or --text"));
}

#[test]
fn test_expand_rejects_both_template_and_text() {
    let dir = tempfile::tempdir().unwrap();
    let tmpl = dir.path().join("t.tmpl");
    std::fs::write(&tmpl, "x").unwrap();

    let (_, stderr, success) = run_yamlctl(
        &["expand", "-t", tmpl.to_str().unwrap(), "--text", "y"],
        SAMPLE,
    );
    assert!(!success);
    assert!(stderr.contains("Only one of"));
}

#[test]
fn test_expand_missing_template_file() {
    let (_, stderr, success) =
        run_yamlctl(&["expand", "-t", "/nonexistent/path.tmpl"], SAMPLE);
    assert!(!success);
    assert!(stderr.contains("Template file"));
}

#[test]
fn test_expand_invalid_output_mode() {
    let (_, stderr, success) =
        run_yamlctl(&["expand", "--text", "x", "-o", "pdf"], SAMPLE);
    assert!(!success);
    assert!(stderr.contains("Invalid output format 'pdf'"));
}
