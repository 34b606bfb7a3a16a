//! Workspace skeleton creation and repair.
//!
//! `ensure` is the precondition for every other operation against a
//! workspace: synchronization, journaling, and retention all assume the
//! directory skeleton exists, and they get that guarantee by running
//! `ensure` first.
//!
//! - **Idempotent**: safe to run any number of times
//! - **Never overwrites**: existing documents are left untouched
//! - **Self-repairing**: an individually deleted subdirectory or document
//!   is recreated without disturbing the rest

use crate::core::assets;
use crate::core::error::FundfishError;
use crate::core::workspace::{WORKSPACE_DOCUMENTS, WORKSPACE_SUBDIRS, Workspace};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// What `ensure` actually touched. Empty vectors mean the workspace was
/// already fully initialized.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EnsureReport {
    /// True when the workspace root itself had to be created, i.e. the
    /// organization had no workspace before this invocation.
    pub created_root: bool,
    pub created_dirs: Vec<PathBuf>,
    pub created_documents: Vec<PathBuf>,
}

impl EnsureReport {
    pub fn freshly_created(&self) -> bool {
        self.created_root
    }
}

/// Create or repair the on-disk skeleton for a workspace.
///
/// Each directory and document is created independently; a failure surfaces
/// as `IoError` without corrupting pieces already in place.
pub fn ensure(workspace: &Workspace) -> Result<EnsureReport, FundfishError> {
    let mut report = EnsureReport::default();

    if !workspace.root.exists() {
        fs::create_dir_all(&workspace.root)?;
        report.created_root = true;
        report.created_dirs.push(workspace.root.clone());
    }

    for rel in WORKSPACE_SUBDIRS {
        let dir = workspace.root.join(rel);
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
            report.created_dirs.push(dir);
        }
    }

    for rel in WORKSPACE_DOCUMENTS {
        let dest = workspace.root.join(rel);
        if dest.exists() {
            continue;
        }
        let template = assets::get_template(rel).ok_or_else(|| {
            FundfishError::ValidationError(format!("missing embedded template: {}", rel))
        })?;
        fs::write(&dest, template)?;
        report.created_documents.push(dest);
    }

    Ok(report)
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "scaffold",
        "version": "0.1.0",
        "description": "Idempotent workspace skeleton creation and repair",
        "commands": [
            { "name": "ensure", "parameters": ["org_id"] }
        ],
        "storage": ["<workspace>/"]
    })
}
