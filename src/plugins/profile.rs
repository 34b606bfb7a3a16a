//! Profile synchronization.
//!
//! Renders the externally-sourced organization configuration into the
//! workspace's `PROFILE.md`. Overwrite policy: the whole document is managed
//! and rewritten on every sync — free-form notes belong in `memory/`, and
//! `STYLE.md`/`TOOLS.md` are never touched here. A failing or unreachable
//! source degrades to rewriting the embedded template; it never fails the
//! provisioning flow.

use crate::core::assets;
use crate::core::error::FundfishError;
use crate::core::orgsource::{OrgConfig, OrgConfigSource};
use crate::core::time;
use crate::core::workspace::Workspace;
use serde::Serialize;
use std::fs;

/// Result of one synchronization attempt.
#[derive(Debug, Clone, Serialize)]
pub struct SyncOutcome {
    /// True when `PROFILE.md` now reflects the external source.
    pub synced: bool,
    /// Organization display name, when synced.
    pub org_name: Option<String>,
    /// Why the sync degraded, when it did.
    pub reason: Option<String>,
}

/// Synchronize `PROFILE.md` from the org config source.
///
/// Only filesystem write failures propagate as errors; source-side failures
/// (`NotFound`, `SourceUnavailable`) produce a degraded `SyncOutcome`.
pub fn sync(
    workspace: &Workspace,
    source: &dyn OrgConfigSource,
) -> Result<SyncOutcome, FundfishError> {
    match source.fetch(&workspace.org_id) {
        Ok(org) => {
            fs::write(workspace.profile_path(), render_profile(&org))?;
            Ok(SyncOutcome {
                synced: true,
                org_name: Some(org.name),
                reason: None,
            })
        }
        Err(err) if err.is_source_degradation() => {
            fs::write(workspace.profile_path(), assets::TEMPLATE_PROFILE)?;
            Ok(SyncOutcome {
                synced: false,
                org_name: None,
                reason: Some(err.to_string()),
            })
        }
        Err(err) => Err(err),
    }
}

fn render_profile(org: &OrgConfig) -> String {
    let mut doc = String::new();
    doc.push_str("# Organization Profile\n\n");
    doc.push_str(&format!(
        "> Synchronized from the organization database at {}.\n\n",
        time::now_rfc3339()
    ));

    doc.push_str("## Identity\n\n");
    doc.push_str(&format!("- **Name:** {}\n", org.name));
    doc.push_str(&format!("- **Org ID:** {}\n", org.org_id));
    if let Some(ein) = &org.ein {
        doc.push_str(&format!("- **EIN:** {}\n", ein));
    }
    if let Some(website) = &org.website {
        doc.push_str(&format!("- **Website:** {}\n", website));
    }
    if let Some(contact) = &org.contact_email {
        doc.push_str(&format!("- **Contact:** {}\n", contact));
    }
    if let Some(budget) = &org.annual_budget {
        doc.push_str(&format!("- **Annual budget:** {}\n", budget));
    }

    doc.push_str("\n## Mission\n\n");
    match &org.mission {
        Some(mission) => doc.push_str(&format!("{}\n", mission.trim())),
        None => doc.push_str("_No mission statement on file._\n"),
    }

    doc.push_str("\n## Focus Areas\n\n");
    if org.focus_areas.is_empty() {
        doc.push_str("- (none recorded)\n");
    } else {
        for area in &org.focus_areas {
            doc.push_str(&format!("- {}\n", area));
        }
    }

    doc
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "profile",
        "version": "0.1.0",
        "description": "PROFILE.md synchronization from the org config source",
        "commands": [
            { "name": "sync", "parameters": ["org_id"] }
        ],
        "storage": ["<workspace>/PROFILE.md"]
    })
}
