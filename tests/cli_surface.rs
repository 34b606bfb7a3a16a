//! Contract tests for the `fundfish` binary surface.
//!
//! These run the real binary against a temp workspace root with the
//! Supabase credentials scrubbed from the environment, so provisioning
//! exercises the degraded (template-fallback) path deterministically.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_fundfish(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fundfish"))
        .args(args)
        .arg("--workspace-root")
        .arg(root)
        .env_remove("SUPABASE_URL")
        .env_remove("SUPABASE_SERVICE_ROLE_KEY")
        .env_remove("FUNDFISH_WORKSPACE_ROOT")
        .output()
        .expect("run fundfish")
}

fn stdout_json(out: &Output) -> serde_json::Value {
    let text = String::from_utf8_lossy(&out.stdout);
    serde_json::from_str(text.trim()).unwrap_or_else(|e| {
        panic!("expected JSON envelope, got {:?} ({})", text, e);
    })
}

#[test]
fn version_prints_crate_version() {
    let tmp = TempDir::new().unwrap();
    let out = run_fundfish(tmp.path(), &["version"]);
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert_eq!(text.trim(), format!("v{}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn create_test_provisions_synthetic_org() {
    let tmp = TempDir::new().unwrap();
    let out = run_fundfish(tmp.path(), &["provision", "--create-test"]);
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let envelope = stdout_json(&out);
    assert_eq!(envelope["cmd"], "provision");
    assert_eq!(envelope["status"], "ok");
    assert_eq!(envelope["org_id"], "test-org-001");
    assert_eq!(envelope["synced"], true);
    assert_eq!(envelope["org_name"], "Test Nonprofit Organization");

    let ws = tmp.path().join("test-org-001");
    assert!(ws.join("PROFILE.md").is_file());
    assert!(ws.join("memory/sessions").is_dir());
}

#[test]
fn provision_without_credentials_degrades_but_succeeds() {
    let tmp = TempDir::new().unwrap();
    let out = run_fundfish(tmp.path(), &["provision", "acme-food-bank"]);
    assert!(out.status.success());

    let envelope = stdout_json(&out);
    assert_eq!(envelope["status"], "degraded");
    assert_eq!(envelope["synced"], false);
    assert!(
        envelope["sync_reason"]
            .as_str()
            .unwrap()
            .contains("not configured")
    );
    assert!(tmp.path().join("acme-food-bank/DECISIONS.md").is_file());
}

#[test]
fn provision_rejects_missing_and_conflicting_args() {
    let tmp = TempDir::new().unwrap();
    let out = run_fundfish(tmp.path(), &["provision"]);
    assert!(!out.status.success());

    let out = run_fundfish(tmp.path(), &["provision", "org", "--create-test"]);
    assert!(!out.status.success());
}

#[test]
fn provision_rejects_traversal_org_id() {
    let tmp = TempDir::new().unwrap();
    let out = run_fundfish(tmp.path(), &["provision", "../escape"]);
    assert!(!out.status.success());
    assert!(!tmp.path().join("../escape").join("PROFILE.md").exists());
}

#[test]
fn list_reports_provisioned_workspaces_as_json() {
    let tmp = TempDir::new().unwrap();
    run_fundfish(tmp.path(), &["provision", "--create-test"]);
    run_fundfish(tmp.path(), &["provision", "org-two"]);

    let out = run_fundfish(tmp.path(), &["list", "--format", "json"]);
    assert!(out.status.success());
    let envelope = stdout_json(&out);
    let ids: Vec<&str> = envelope["workspaces"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["org_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["org-two", "test-org-001"]);
}

#[test]
fn cleanup_runs_and_reports_empty_summary_on_fresh_workspace() {
    let tmp = TempDir::new().unwrap();
    run_fundfish(tmp.path(), &["provision", "--create-test"]);

    let out = run_fundfish(tmp.path(), &["cleanup", "test-org-001"]);
    assert!(out.status.success());
    let envelope = stdout_json(&out);
    assert_eq!(envelope["cmd"], "cleanup");
    assert_eq!(envelope["status"], "ok");
    assert_eq!(envelope["moved"].as_array().unwrap().len(), 0);
    assert_eq!(envelope["failed"].as_array().unwrap().len(), 0);
}

#[test]
fn capabilities_manifest_names_all_subsystems() {
    let tmp = TempDir::new().unwrap();
    let out = run_fundfish(tmp.path(), &["capabilities"]);
    assert!(out.status.success());

    let manifest: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&out.stdout).trim()).unwrap();
    let names: Vec<&str> = manifest["subsystems"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    for expected in ["scaffold", "profile", "journal", "retention", "registry", "provision"] {
        assert!(names.contains(&expected), "missing subsystem {}", expected);
    }
}
