//! Integration tests
//!
//! Library-level inference on realistic documents, and the CLI end to end:
//! sample file → parse → infer → stdout / output file.

use assert_cmd::Command;
use json_shape::{infer_schema, unify, InferenceConfig, SchemaInferrer, SharedValue};
use predicates::prelude::*;
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

fn sample_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn json_shape() -> Command {
    Command::cargo_bin("json-shape").unwrap()
}

// ============================================================================
// Library Tests
// ============================================================================

#[test]
fn test_infer_api_response() {
    let response = json!({
        "data": [
            {"id": 1, "email": "a@example.com", "created": "2024-01-15T10:00:00Z"},
            {"id": 2, "email": "b@example.com", "created": "2024-02-01T08:30:00Z", "avatar": "https://cdn.example.com/b.png"}
        ],
        "next": null,
        "total": 2
    });

    let schema = infer_schema(&response);

    assert_eq!(
        schema.to_json(),
        json!({
            "type": "object",
            "properties": {
                "data": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "integer"},
                            "email": {"type": "string", "format": "email"},
                            "created": {"type": "string", "format": "date-time"},
                            "avatar": {"type": "string", "format": "uri"}
                        },
                        "required": ["id", "email", "created", "avatar"]
                    }
                },
                "next": {"type": "null"},
                "total": {"type": "integer"}
            },
            "required": ["data", "next", "total"]
        })
    );
}

#[test]
fn test_inference_is_thread_safe() {
    let inferrer = SchemaInferrer::new();
    let value = json!({"items": [1, 2, {"k": "2024-01-15"}]});
    let expected = inferrer.infer(&value);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| inferrer.infer(&value)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_unify_across_samples() {
    let a = infer_schema(&json!({"id": 1}));
    let b = infer_schema(&json!({"id": 2, "name": "x"}));

    assert_eq!(
        unify(vec![a, b]).to_json(),
        json!({
            "type": "object",
            "properties": {"id": {"type": "integer"}, "name": {"type": "string"}},
            "required": ["id", "name"]
        })
    );
}

#[test]
fn test_cyclic_graph_with_config() {
    let config = InferenceConfig::from_yaml_str("formats:\n  uri: false\n").unwrap();
    let inferrer = SchemaInferrer::from_config(&config);

    let root = SharedValue::object();
    root.insert("home", SharedValue::String("https://example.com".to_string()));
    let children = SharedValue::array();
    children.push(root.clone());
    root.insert("children", children);

    let schema = inferrer.infer(&root);
    assert_eq!(
        schema.to_json(),
        json!({
            "type": "object",
            "properties": {
                "home": {"type": "string"},
                "children": {"type": "array", "items": {"type": "object"}}
            },
            "required": ["home", "children"]
        })
    );
    root.clear();
}

// ============================================================================
// CLI Tests
// ============================================================================

#[test]
fn test_cli_infer_pretty() {
    let file = sample_file(r#"{"name": "Alice", "age": 30}"#);

    json_shape()
        .arg("infer")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"object\""))
        .stdout(predicate::str::contains("\"required\""));
}

#[test]
fn test_cli_infer_compact_output() {
    let file = sample_file(r#"[1, "x"]"#);

    let output = json_shape()
        .args(["--format", "json", "infer"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let schema: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        schema,
        json!({"type": "array", "items": {"anyOf": [{"type": "integer"}, {"type": "string"}]}})
    );
}

#[test]
fn test_cli_reads_stdin() {
    json_shape()
        .args(["infer", "-", "--format", "json"])
        .write_stdin("\"2024-01-15\"")
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"type\":\"string\",\"format\":\"date\"}\n"));
}

#[test]
fn test_cli_no_formats() {
    json_shape()
        .args(["infer", "-", "--format", "json", "--no-formats"])
        .write_stdin("\"user@example.com\"")
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"type\":\"string\"}\n"));
}

#[test]
fn test_cli_config_file() {
    let config = sample_file("max_depth: 1\n");
    let file = sample_file(r#"{"nested": {"a": 1}}"#);

    let output = json_shape()
        .arg("infer")
        .arg(file.path())
        .arg("--config")
        .arg(config.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let schema: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(schema["properties"]["nested"], json!({"type": "object"}));
}

#[test]
fn test_cli_output_file() {
    let file = sample_file("[]");
    let out = NamedTempFile::new().unwrap();

    json_shape()
        .arg("infer")
        .arg(file.path())
        .arg("--output")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(out.path()).unwrap()).unwrap();
    assert_eq!(written, json!({"type": "array", "items": {}}));
}

#[test]
fn test_cli_unify() {
    let a = sample_file(r#"{"a": 1}"#);
    let b = sample_file(r#"{"a": 2, "b": "x"}"#);

    let output = json_shape()
        .args(["--format", "json", "unify"])
        .arg(a.path())
        .arg(b.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let schema: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(schema["required"], json!(["a", "b"]));
}

#[test]
fn test_cli_missing_file() {
    json_shape()
        .args(["infer", "/nonexistent/sample.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Cannot read sample"));
}

#[test]
fn test_cli_malformed_json_variants() {
    let test_cases = vec![
        (r#"{"invalid": json}"#, "unquoted value"),
        (r#"{"incomplete":"#, "incomplete string"),
        (r#"{"trailing":,"#, "trailing comma"),
        (r#"{invalid: "json"}"#, "unquoted key"),
        (r#"{"nested": {"broken": json}}"#, "nested broken JSON"),
    ];

    for (invalid_json, description) in test_cases {
        println!("Testing: {description}");
        let file = sample_file(invalid_json);

        json_shape()
            .arg("infer")
            .arg(file.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid JSON input"))
            .stderr(predicate::str::contains("panicked").not());
    }
}

#[test]
fn test_cli_invalid_config() {
    let config = sample_file("max_depth: 0\n");
    let file = sample_file("{}");

    json_shape()
        .arg("infer")
        .arg(file.path())
        .arg("-C")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_depth"));
}
