//! `voltpad --compile` run as a real process

use crate::common::mock_compiler::MockCompiler;
use std::process::Command;
use voltpad::catalog::HELLO;

fn voltpad() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_voltpad"));
    command.env("RUST_LOG", "off");
    command
}

#[test]
fn test_headless_compile_writes_cpp() {
    let mock = MockCompiler::translating("int main() { return 0; }");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("hello.volt");
    std::fs::write(&input, HELLO).unwrap();

    let output = voltpad()
        .arg("--url")
        .arg(mock.url())
        .arg("--compile")
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let expected = dir.path().join("hello.cpp");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!(
        "Successfully compiled '{}' to '{}'",
        input.display(),
        expected.display()
    )));
    assert_eq!(
        std::fs::read_to_string(&expected).unwrap(),
        "int main() { return 0; }"
    );
    assert_eq!(mock.requests(), vec![HELLO.to_string()]);
}

#[test]
fn test_headless_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.volt");

    let output = voltpad().arg("--compile").arg(&input).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("Error: File '{}' not found", input.display())));
}

#[test]
fn test_headless_rejection_exits_nonzero() {
    let mock = MockCompiler::rejecting("Syntax Error: Expected ')'");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.volt");
    let target = dir.path().join("out.cpp");
    std::fs::write(&input, "print(1;").unwrap();

    let output = voltpad()
        .arg("--url")
        .arg(mock.url())
        .arg("--compile")
        .arg(&input)
        .arg("--output")
        .arg(&target)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Syntax Error: Expected ')'"));
    assert!(!target.exists());
}

#[test]
fn test_dump_config_reflects_flags() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"theme": "light"}"#).unwrap();

    let output = voltpad()
        .arg("--config")
        .arg(&config)
        .arg("--url")
        .arg("http://compiler.test/compile")
        .arg("--dump-config")
        .output()
        .unwrap();

    assert!(output.status.success());
    let dumped: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(dumped["theme"], "light");
    assert_eq!(dumped["compiler"]["url"], "http://compiler.test/compile");
    assert_eq!(dumped["editor"]["default_example"], "hello");
}
