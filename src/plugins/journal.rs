//! Memory and decision journaling.
//!
//! Both operations are pure appends: no read-modify-write of unrelated
//! content, so a concurrent reader can at worst see a torn tail, never a
//! lost earlier entry. Serialization across processes is the caller's
//! problem (single-writer contract per workspace).

use crate::core::error::FundfishError;
use crate::core::workspace::Workspace;
use chrono::NaiveDate;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Append a journal entry to the daily memory file `memory/<date>.md`,
/// creating it with a header when it is the first entry for that date.
/// Returns the path written.
pub fn append_memory(
    workspace: &Workspace,
    date: NaiveDate,
    text: &str,
) -> Result<PathBuf, FundfishError> {
    let path = workspace.daily_memory_path(date);
    let is_new = !path.exists();
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    if is_new {
        writeln!(file, "# Memory Log — {}\n", date.format("%Y-%m-%d"))?;
    }
    writeln!(file, "- {}", text.trim())?;
    file.flush()?;
    Ok(path)
}

/// Append a dated decision line to `DECISIONS.md`.
pub fn append_decision(
    workspace: &Workspace,
    date: NaiveDate,
    text: &str,
) -> Result<(), FundfishError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(workspace.decisions_path())?;
    writeln!(file, "- [{}] {}", date.format("%Y-%m-%d"), text.trim())?;
    file.flush()?;
    Ok(())
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "journal",
        "version": "0.1.0",
        "description": "Append-only daily memory and decision logging",
        "commands": [
            { "name": "append_memory", "parameters": ["org_id", "date", "text"] },
            { "name": "append_decision", "parameters": ["org_id", "date", "text"] }
        ],
        "storage": ["<workspace>/memory/<date>.md", "<workspace>/DECISIONS.md"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::scaffold;
    use std::fs;
    use tempfile::tempdir;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn first_entry_writes_header_later_entries_append() {
        let tmp = tempdir().unwrap();
        let ws = Workspace::resolve("org", tmp.path()).unwrap();
        scaffold::ensure(&ws).unwrap();

        let d = date("2025-06-01");
        append_memory(&ws, d, "first").unwrap();
        append_memory(&ws, d, "second").unwrap();

        let content = fs::read_to_string(ws.daily_memory_path(d)).unwrap();
        assert!(content.starts_with("# Memory Log — 2025-06-01"));
        assert_eq!(content.matches("# Memory Log").count(), 1);
        assert!(content.contains("- first\n"));
        assert!(content.ends_with("- second\n"));
    }

    #[test]
    fn entries_partition_by_calendar_day() {
        let tmp = tempdir().unwrap();
        let ws = Workspace::resolve("org", tmp.path()).unwrap();
        scaffold::ensure(&ws).unwrap();

        append_memory(&ws, date("2025-06-01"), "day one").unwrap();
        append_memory(&ws, date("2025-06-02"), "day two").unwrap();

        assert!(ws.daily_memory_path(date("2025-06-01")).exists());
        assert!(ws.daily_memory_path(date("2025-06-02")).exists());
    }

    #[test]
    fn decisions_accumulate_chronologically() {
        let tmp = tempdir().unwrap();
        let ws = Workspace::resolve("org", tmp.path()).unwrap();
        scaffold::ensure(&ws).unwrap();
        let template = fs::read_to_string(ws.decisions_path()).unwrap();

        append_decision(&ws, date("2025-06-01"), "target the Acme RFP").unwrap();
        append_decision(&ws, date("2025-06-03"), "skip the Beta grant cycle").unwrap();

        let content = fs::read_to_string(ws.decisions_path()).unwrap();
        // Template preamble stays; decisions append after it in order.
        assert!(content.starts_with(&template));
        let first = content.find("[2025-06-01] target the Acme RFP").unwrap();
        let second = content.find("[2025-06-03] skip the Beta grant cycle").unwrap();
        assert!(first < second);
    }
}
