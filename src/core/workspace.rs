//! Workspace handle and path resolution.
//!
//! A `Workspace` is the per-organization state tree the agent runtime reads
//! and writes: profile/style/tools/decisions documents, the daily memory
//! journal, grant-tracking areas, proposals, and the archive. Resolution
//! from `(org_id, workspace_root)` is deterministic and pure; every valid
//! identifier maps to exactly one path and no identifier can escape the
//! root.

use crate::core::error::FundfishError;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Subdirectories that make up an initialized workspace skeleton, relative
/// to the workspace root. Order is creation order (parents first).
pub const WORKSPACE_SUBDIRS: &[&str] = &[
    "memory",
    "memory/sessions",
    "memory/briefs",
    "grants",
    "grants/saved",
    "grants/applied",
    "proposals",
    "documents/extracted",
    "archive/sessions",
    "archive/memory",
];

/// Core documents scaffolded from embedded templates, relative to the
/// workspace root. Never overwritten once present.
pub const WORKSPACE_DOCUMENTS: &[&str] = &["PROFILE.md", "STYLE.md", "TOOLS.md", "DECISIONS.md"];

/// Handle to one organization's workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Organization identifier (also the directory name under the root).
    pub org_id: String,
    /// Absolute path to the workspace root directory.
    pub root: PathBuf,
}

impl Workspace {
    /// Resolve the workspace location for `org_id` under `workspace_root`.
    ///
    /// Pure function, no I/O. Fails with `InvalidArgument` for identifiers
    /// that are empty or could resolve outside the root.
    pub fn resolve(org_id: &str, workspace_root: &Path) -> Result<Workspace, FundfishError> {
        validate_org_id(org_id)?;
        Ok(Workspace {
            org_id: org_id.to_string(),
            root: workspace_root.join(org_id),
        })
    }

    /// Handle for a directory already known to sit directly under the root.
    /// Used by the registry, which trusts the directory name as-is.
    pub(crate) fn unchecked(org_id: String, root: PathBuf) -> Workspace {
        Workspace { org_id, root }
    }

    pub fn profile_path(&self) -> PathBuf {
        self.root.join("PROFILE.md")
    }

    pub fn decisions_path(&self) -> PathBuf {
        self.root.join("DECISIONS.md")
    }

    pub fn memory_dir(&self) -> PathBuf {
        self.root.join("memory")
    }

    pub fn sessions_dir(&self) -> PathBuf {
        self.root.join("memory").join("sessions")
    }

    pub fn archive_sessions_dir(&self) -> PathBuf {
        self.root.join("archive").join("sessions")
    }

    pub fn archive_memory_dir(&self) -> PathBuf {
        self.root.join("archive").join("memory")
    }

    /// Daily memory file for a calendar date: `memory/<YYYY-MM-DD>.md`.
    pub fn daily_memory_path(&self, date: NaiveDate) -> PathBuf {
        self.memory_dir()
            .join(format!("{}.md", date.format("%Y-%m-%d")))
    }
}

fn validate_org_id(org_id: &str) -> Result<(), FundfishError> {
    if org_id.is_empty() {
        return Err(FundfishError::InvalidArgument(
            "org_id must not be empty".to_string(),
        ));
    }
    if org_id.contains('/') || org_id.contains('\\') || org_id.contains("..") {
        return Err(FundfishError::InvalidArgument(format!(
            "org_id must not contain path separators or '..': {}",
            org_id
        )));
    }
    if org_id.starts_with('.') {
        return Err(FundfishError::InvalidArgument(format!(
            "org_id must not start with '.': {}",
            org_id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_deterministic() {
        let root = Path::new("/var/fundfish/workspaces");
        let a = Workspace::resolve("acme-food-bank", root).unwrap();
        let b = Workspace::resolve("acme-food-bank", root).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.root, root.join("acme-food-bank"));
        assert_eq!(a.org_id, "acme-food-bank");
    }

    #[test]
    fn malformed_org_ids_are_rejected() {
        let root = Path::new("/ws");
        for bad in ["", "a/b", "a\\b", "..", "foo..bar", ".hidden"] {
            let err = Workspace::resolve(bad, root).unwrap_err();
            assert!(
                matches!(err, FundfishError::InvalidArgument(_)),
                "expected InvalidArgument for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn daily_memory_path_uses_iso_date() {
        let ws = Workspace::resolve("org", Path::new("/ws")).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(
            ws.daily_memory_path(date),
            PathBuf::from("/ws/org/memory/2025-03-07.md")
        );
    }

    #[test]
    fn layout_constants_cover_all_areas() {
        assert!(WORKSPACE_SUBDIRS.contains(&"archive/memory"));
        assert!(WORKSPACE_SUBDIRS.contains(&"grants/applied"));
        assert_eq!(WORKSPACE_DOCUMENTS.len(), 4);
    }
}
