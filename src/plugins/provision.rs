//! Full provisioning flow.
//!
//! resolve → ensure skeleton → synchronize profile → write the initial
//! memory entry and decision line. Initialization and journaling failures
//! surface to the caller; a dead or empty org config source only degrades
//! the profile step.

use crate::core::config::Config;
use crate::core::error::FundfishError;
use crate::core::orgsource::{FixtureOrgSource, OrgConfig, OrgConfigSource};
use crate::core::time;
use crate::core::workspace::Workspace;
use crate::plugins::{journal, profile, scaffold};
use serde::Serialize;
use std::path::PathBuf;

/// Identifier used by `provision --create-test`.
pub const TEST_ORG_ID: &str = "test-org-001";

/// Outcome of one provisioning run.
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionSummary {
    pub org_id: String,
    pub path: PathBuf,
    /// True when this run created the workspace, false when it repaired or
    /// refreshed an existing one.
    pub created: bool,
    /// True when `PROFILE.md` reflects the external source.
    pub synced: bool,
    pub org_name: Option<String>,
    /// Degradation reason when `synced` is false.
    pub sync_reason: Option<String>,
}

/// Provision (or re-provision) the workspace for `org_id`.
///
/// Idempotent from the caller's perspective: re-running refreshes the
/// profile and repairs missing structure, but the initial journal and
/// decision entries are only written when the workspace is first created.
pub fn provision(
    config: &Config,
    source: &dyn OrgConfigSource,
    org_id: &str,
) -> Result<ProvisionSummary, FundfishError> {
    let workspace = Workspace::resolve(org_id, &config.workspace_root)?;
    let ensure_report = scaffold::ensure(&workspace)?;
    let created = ensure_report.freshly_created();

    let outcome = profile::sync(&workspace, source)?;

    if created {
        let today = time::today();
        journal::append_memory(
            &workspace,
            today,
            &format!("Workspace provisioned for organization '{}'.", org_id),
        )?;
        journal::append_decision(
            &workspace,
            today,
            &format!(
                "Provisioned workspace for '{}' (profile {}).",
                org_id,
                if outcome.synced {
                    "synchronized from org database"
                } else {
                    "initialized from template"
                }
            ),
        )?;
    }

    Ok(ProvisionSummary {
        org_id: workspace.org_id.clone(),
        path: workspace.root.clone(),
        created,
        synced: outcome.synced,
        org_name: outcome.org_name,
        sync_reason: outcome.reason,
    })
}

/// Provision a synthetic organization, bypassing the external source.
pub fn provision_test_org(config: &Config) -> Result<ProvisionSummary, FundfishError> {
    let source = FixtureOrgSource::with_orgs([test_org_config()]);
    provision(config, &source, TEST_ORG_ID)
}

fn test_org_config() -> OrgConfig {
    OrgConfig {
        org_id: TEST_ORG_ID.to_string(),
        name: "Test Nonprofit Organization".to_string(),
        mission: Some("Exercise the workspace lifecycle end to end.".to_string()),
        focus_areas: vec!["testing".to_string(), "provisioning".to_string()],
        website: None,
        contact_email: None,
        ein: None,
        annual_budget: None,
    }
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "provision",
        "version": "0.1.0",
        "description": "End-to-end workspace provisioning flow",
        "commands": [
            { "name": "provision", "parameters": ["org_id"] },
            { "name": "create_test", "parameters": [] }
        ],
        "storage": ["<workspace_root>/<org_id>/"]
    })
}
