//! Age- and count-based retention.
//!
//! Two independent passes, order-insensitive relative to each other:
//!
//! 1. Session artifacts in `memory/sessions/` strictly older than 30 days
//!    (by modification time) move to `archive/sessions/`.
//! 2. Daily memory files in `memory/` beyond the 90 most recent (by the
//!    date encoded in the filename) move to `archive/memory/`.
//!
//! Archiving is move-semantics: content is preserved byte-for-byte and the
//! live copy disappears. Nothing is ever deleted. A single file's move
//! failure is recorded and skipped; cleanup always runs to completion and
//! reports partial success.

use crate::core::error::FundfishError;
use crate::core::workspace::Workspace;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Session artifacts older than this are archived. The boundary is strict:
/// an artifact aged exactly 30 days stays live.
pub const SESSION_MAX_AGE: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Maximum number of live daily memory files after cleanup.
pub const DAILY_FILE_CAP: usize = 90;

/// One file that could not be moved.
#[derive(Debug, Clone, Serialize)]
pub struct MoveFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Partial-success summary of one cleanup pass over a workspace.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanupReport {
    /// Live paths that were relocated into the archive.
    pub moved: Vec<PathBuf>,
    /// Paths whose move failed, with the reason. Never aborts the run.
    pub failed: Vec<MoveFailure>,
}

impl CleanupReport {
    pub fn failure_lines(&self) -> Vec<String> {
        self.failed
            .iter()
            .map(|f| format!("{}: {}", f.path.display(), f.error))
            .collect()
    }
}

/// Enforce retention policy against a workspace as of `now`.
///
/// `now` is a parameter rather than read from the clock so boundary
/// behavior is deterministic under test.
pub fn cleanup(workspace: &Workspace, now: SystemTime) -> Result<CleanupReport, FundfishError> {
    let mut report = CleanupReport::default();
    archive_stale_sessions(workspace, now, &mut report)?;
    cap_daily_files(workspace, &mut report)?;
    Ok(report)
}

fn archive_stale_sessions(
    workspace: &Workspace,
    now: SystemTime,
    report: &mut CleanupReport,
) -> Result<(), FundfishError> {
    let sessions = workspace.sessions_dir();
    if !sessions.is_dir() {
        return Ok(());
    }
    let archive = workspace.archive_sessions_dir();
    fs::create_dir_all(&archive)?;

    for entry in fs::read_dir(&sessions)? {
        let entry = entry?;
        let path = entry.path();
        let modified = match entry.metadata().and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(e) => {
                report.failed.push(MoveFailure {
                    path,
                    error: format!("cannot stat: {}", e),
                });
                continue;
            }
        };
        // Future-dated or exactly-at-threshold artifacts stay live.
        let age = match now.duration_since(modified) {
            Ok(age) => age,
            Err(_) => continue,
        };
        if age > SESSION_MAX_AGE {
            move_into(&path, &archive, report);
        }
    }
    Ok(())
}

fn cap_daily_files(workspace: &Workspace, report: &mut CleanupReport) -> Result<(), FundfishError> {
    let memory = workspace.memory_dir();
    if !memory.is_dir() {
        return Ok(());
    }

    let mut daily: Vec<(NaiveDate, PathBuf)> = Vec::new();
    for entry in fs::read_dir(&memory)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(date) = daily_file_date(&path) {
            daily.push((date, path));
        }
    }
    if daily.len() <= DAILY_FILE_CAP {
        return Ok(());
    }

    // Newest first; everything past the cap goes to the archive.
    daily.sort_by(|a, b| b.0.cmp(&a.0));
    let archive = workspace.archive_memory_dir();
    fs::create_dir_all(&archive)?;
    for (_, path) in daily.into_iter().skip(DAILY_FILE_CAP) {
        move_into(&path, &archive, report);
    }
    Ok(())
}

/// Parse `YYYY-MM-DD` from a daily memory filename. Anything else in
/// `memory/` (stray notes, subdirectories) is not subject to the cap.
fn daily_file_date(path: &Path) -> Option<NaiveDate> {
    if path.extension()?.to_str()? != "md" {
        return None;
    }
    NaiveDate::parse_from_str(path.file_stem()?.to_str()?, "%Y-%m-%d").ok()
}

fn move_into(path: &Path, archive_dir: &Path, report: &mut CleanupReport) {
    let Some(name) = path.file_name() else {
        report.failed.push(MoveFailure {
            path: path.to_path_buf(),
            error: "no filename component".to_string(),
        });
        return;
    };
    let dest = archive_dir.join(name);
    match fs::rename(path, &dest) {
        Ok(()) => report.moved.push(path.to_path_buf()),
        Err(e) => report.failed.push(MoveFailure {
            path: path.to_path_buf(),
            error: e.to_string(),
        }),
    }
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "retention",
        "version": "0.1.0",
        "description": "Age- and count-based archiving of memory state",
        "commands": [
            { "name": "cleanup", "parameters": ["org_id"] }
        ],
        "storage": ["<workspace>/archive/sessions/", "<workspace>/archive/memory/"]
    })
}
