//! Workspace enumeration.
//!
//! Listing is structural: every immediate subdirectory of the workspace
//! root is reported as a workspace, whether or not it is well-formed.
//! The returned iterator is lazy and finite; calling `list_all` again
//! restarts the scan.

use crate::core::error::FundfishError;
use crate::core::workspace::Workspace;
use std::fs;
use std::path::Path;

/// Enumerate all workspaces under `workspace_root`.
///
/// A missing root means no workspaces have ever been provisioned; that is
/// an empty listing, not an error.
pub fn list_all(
    workspace_root: &Path,
) -> Result<impl Iterator<Item = Workspace> + use<>, FundfishError> {
    let entries = match fs::read_dir(workspace_root) {
        Ok(entries) => Some(entries),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(FundfishError::IoError(e)),
    };
    Ok(entries.into_iter().flatten().filter_map(|entry| {
        let entry = entry.ok()?;
        let path = entry.path();
        if !path.is_dir() {
            return None;
        }
        let org_id = entry.file_name().to_str()?.to_string();
        Some(Workspace::unchecked(org_id, path))
    }))
}

/// Collected, name-sorted listing for stable CLI output.
pub fn list_sorted(workspace_root: &Path) -> Result<Vec<Workspace>, FundfishError> {
    let mut all: Vec<Workspace> = list_all(workspace_root)?.collect();
    all.sort_by(|a, b| a.org_id.cmp(&b.org_id));
    Ok(all)
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "registry",
        "version": "0.1.0",
        "description": "Structural enumeration of provisioned workspaces",
        "commands": [
            { "name": "list", "parameters": [] }
        ],
        "storage": []
    })
}
