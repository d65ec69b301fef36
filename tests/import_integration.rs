//! Integration tests for the import pipeline
//!
//! These drive the compiled binary against temporary directories:
//! - Importing profiles into records and a registry
//! - Per-document skips, the missing-source failure and write failures
//! - Category files from the curated table
//! - Translation of imported metadata
//! - A full build from a config file

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn agentreg_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_agentreg"))
}

/// Run agentreg in `dir` with logs and user config isolated under it
fn run_agentreg(dir: &Path, args: &[&str]) -> Output {
    Command::new(agentreg_binary())
        .current_dir(dir)
        .env("XDG_DATA_HOME", dir.join(".data"))
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("AGENTREG_CONFIG")
        .env_remove("AGENTREG_DIR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .args(args)
        .output()
        .expect("Failed to execute agentreg")
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn write_profile(dir: &Path, file: &str, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(file), content).unwrap();
}

const BUG_HUNTER: &str = "---\nname: Bug Hunter\ndescription: Finds bugs and SQL errors\ntools: grep, sql\n---\n\nInvestigates failures.\n";

fn import(dir: &Path) -> Output {
    run_agentreg(
        dir,
        &["import", "--source", "profiles", "--output", "agents", "--registry", "registry.json"],
    )
}

#[test]
fn test_import_writes_records_and_registry() {
    let temp = TempDir::new().unwrap();
    let profiles = temp.path().join("profiles");
    write_profile(&profiles, "bug-hunter.md", BUG_HUNTER);
    write_profile(
        &profiles,
        "writer.md",
        "---\nname: docs_writer\ndescription: \"Keeps the README current\"\n---\nWrites docs.",
    );
    write_profile(&profiles, "README.md", "# Collection readme");
    write_profile(&profiles, "broken.md", "No header at all");
    write_profile(&profiles, "nameless.md", "---\nname: ???\n---\nbody");

    let output = import(temp.path());
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ bug-hunter (debugging)"));
    assert!(stdout.contains("✓ docs-writer (documentation)"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("✗"));
    assert!(stderr.contains("broken.md"));
    assert!(stderr.contains("no header"));
    assert!(stderr.contains("empty id"));
    assert!(!stderr.contains("README.md"));

    let registry = read_json(&temp.path().join("registry.json"));
    assert_eq!(registry["version"], "1.0.0");
    assert_eq!(registry["totalAgents"], 2);
    assert_eq!(registry["agents"]["bug-hunter"]["category"], "debugging");
    assert_eq!(registry["agents"]["docs-writer"]["category"], "documentation");
    assert_eq!(registry["categories"]["data"]["icon"], "📊");
    assert_eq!(registry["stats"]["topAgents"].as_array().unwrap().len(), 2);

    let agent_dir = temp.path().join("agents").join("community").join("bug-hunter");
    let metadata = read_json(&agent_dir.join("metadata.json"));
    assert_eq!(metadata["id"], "bug-hunter");
    assert_eq!(metadata["category"], "debugging");
    assert_eq!(metadata["tags"], serde_json::json!(["grep", "sql"]));
    assert_eq!(metadata["longDescription"]["en"], "Investigates failures.");
    assert_eq!(metadata["versions"]["1.0.0"]["files"]["agent"], "agent.md");

    let copy = fs::read_to_string(agent_dir.join("agent.md")).unwrap();
    assert_eq!(copy, BUG_HUNTER);
}

#[test]
fn test_import_missing_source_fails_early() {
    let temp = TempDir::new().unwrap();

    let output = import(temp.path());
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Source directory not found"));
    assert!(!temp.path().join("registry.json").exists());
    assert!(!temp.path().join("agents").exists());
}

#[test]
fn test_import_unreadable_document_is_skipped() {
    let temp = TempDir::new().unwrap();
    let profiles = temp.path().join("profiles");
    write_profile(&profiles, "ok.md", BUG_HUNTER);
    fs::write(profiles.join("bad.md"), [0xff, 0xfe, 0x00, 0x2d]).unwrap();

    let output = import(temp.path());
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad.md (unreadable)"));

    let registry = read_json(&temp.path().join("registry.json"));
    assert_eq!(registry["totalAgents"], 1);
    assert!(temp.path().join("agents/community/bug-hunter/metadata.json").exists());
}

#[test]
fn test_import_empty_header_is_no_header() {
    let temp = TempDir::new().unwrap();
    let profiles = temp.path().join("profiles");
    write_profile(&profiles, "blank.md", "---\n---\nBody only");
    write_profile(&profiles, "ok.md", BUG_HUNTER);

    let output = import(temp.path());
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("blank.md (no header)"));
}

#[test]
fn test_import_write_failure_aborts() {
    let temp = TempDir::new().unwrap();
    let profiles = temp.path().join("profiles");
    write_profile(&profiles, "ok.md", BUG_HUNTER);
    fs::write(temp.path().join("agents"), "not a directory").unwrap();

    let output = import(temp.path());
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to create output directory"));
    assert!(!temp.path().join("registry.json").exists());
}

#[test]
fn test_import_colliding_ids_last_write_wins() {
    let temp = TempDir::new().unwrap();
    let profiles = temp.path().join("profiles");
    write_profile(&profiles, "a.md", "---\nname: A/B!\ndescription: first\n---\n");
    write_profile(&profiles, "b.md", "---\nname: ab\ndescription: second\n---\n");

    let output = import(temp.path());
    assert!(output.status.success());

    let registry = read_json(&temp.path().join("registry.json"));
    assert_eq!(registry["totalAgents"], 1);
    assert_eq!(registry["agents"]["ab"]["description"]["en"], "second");

    let metadata = read_json(&temp.path().join("agents/community/ab/metadata.json"));
    assert_eq!(metadata["description"]["en"], "second");
}

#[test]
fn test_categories_follow_curated_table() {
    let temp = TempDir::new().unwrap();
    let profiles = temp.path().join("profiles");
    write_profile(&profiles, "debugger.md", "---\nname: debugger\ndescription: Debugs\n---\n");
    write_profile(&profiles, "tdd.md", "---\nname: tdd-orchestrator\ndescription: Drives TDD\n---\n");
    write_profile(&profiles, "reviewer.md", "---\nname: code-reviewer\ndescription: Reviews code\n---\n");
    write_profile(&profiles, "painter.md", "---\nname: painter\ndescription: Paints\n---\n");
    assert!(import(temp.path()).status.success());

    let run = |out: &str| {
        let output = run_agentreg(
            temp.path(),
            &["categories", "--registry", "registry.json", "--out-dir", out, "--seed", "7"],
        );
        assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    };
    run("first");
    run("second");

    let testing = read_json(&temp.path().join("first/testing-debugging.json"));
    assert_eq!(testing["category"], "testing-debugging");
    assert_eq!(testing["name"]["en"], "Testing & Debugging");
    assert_eq!(testing["totalAgents"], 2);

    let agents = testing["agents"].as_array().unwrap();
    let downloads: Vec<u64> = agents.iter().map(|a| a["downloads"].as_u64().unwrap()).collect();
    assert!(downloads.windows(2).all(|w| w[0] >= w[1]));
    for agent in agents {
        let rating = agent["rating"].as_f64().unwrap();
        assert!((3.0..=5.0).contains(&rating));
        assert!((50..=2000).contains(&agent["downloads"].as_u64().unwrap()));
    }

    let quality = read_json(&temp.path().join("first/code-quality.json"));
    assert_eq!(quality["totalAgents"], 1);

    // Not in any curated list, and empty curated categories get no file
    assert!(!temp.path().join("first/core-architecture.json").exists());
    let files: Vec<_> = fs::read_dir(temp.path().join("first")).unwrap().collect();
    assert_eq!(files.len(), 2);

    let again = read_json(&temp.path().join("second/testing-debugging.json"));
    assert_eq!(again["agents"], testing["agents"]);
}

#[test]
fn test_categories_without_registry_fails() {
    let temp = TempDir::new().unwrap();
    let output = run_agentreg(temp.path(), &["categories", "--registry", "missing.json"]);
    assert!(!output.status.success());
}

#[test]
fn test_translate_fills_names() {
    let temp = TempDir::new().unwrap();
    let profiles = temp.path().join("profiles");
    write_profile(&profiles, "rust.md", "---\nname: rust-pro\ndescription: Writes Rust\n---\nSafe code.");
    assert!(import(temp.path()).status.success());

    let output = run_agentreg(temp.path(), &["translate", "--output", "agents"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let metadata = read_json(&temp.path().join("agents/community/rust-pro/metadata.json"));
    assert_eq!(metadata["name"]["en"], "rust-pro");
    assert_eq!(metadata["name"]["zh"], "Rust 专家");
    assert_eq!(metadata["name"]["ja"], "Rust プロ");
    assert_eq!(metadata["description"]["ja"], "Writes Rust");
}

#[test]
fn test_build_uses_config_file() {
    let temp = TempDir::new().unwrap();
    write_profile(&temp.path().join("in"), "debugger.md", "---\nname: debugger\ndescription: Debugs\n---\n");
    fs::write(
        temp.path().join("agentreg.yaml"),
        "paths:\n  source: in\n  output: out\n  registry: out/registry.json\n  categories: out/index\nimport:\n  collection: curated\n",
    )
    .unwrap();

    let output = run_agentreg(temp.path(), &["build", "--seed", "1"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    assert!(temp.path().join("out/curated/debugger/metadata.json").exists());
    assert!(temp.path().join("out/registry.json").exists());
    assert!(temp.path().join("out/index/testing-debugging.json").exists());
}
