//! Shared timestamp/event helpers for deterministic envelopes.

use chrono::{NaiveDate, Utc};
use serde_json::Value as JsonValue;
use ulid::Ulid;

/// Returns unix-epoch seconds with `Z` suffix (e.g. `1771220592Z`).
pub fn now_epoch_z() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("{}Z", secs)
}

/// Today's calendar date in UTC. Daily memory files are partitioned by this.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Current wall-clock instant in RFC 3339, seconds precision.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

pub fn new_event_id() -> String {
    Ulid::new().to_string()
}

/// Standard command response envelope shape used across CLI surfaces.
pub fn command_envelope(cmd: &str, status: &str, extra: JsonValue) -> JsonValue {
    let mut base = serde_json::json!({
        "envelope_version": "1.0.0",
        "ts": now_epoch_z(),
        "event_id": new_event_id(),
        "cmd": cmd,
        "status": status
    });
    if let (Some(base_obj), Some(extra_obj)) = (base.as_object_mut(), extra.as_object()) {
        for (k, v) in extra_obj {
            base_obj.insert(k.clone(), v.clone());
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_epoch_z_format() {
        let result = now_epoch_z();
        assert!(result.ends_with('Z'));
        let numeric_part = result.trim_end_matches('Z');
        assert!(numeric_part.parse::<u64>().is_ok());
    }

    #[test]
    fn test_new_event_id_is_unique() {
        let id1 = new_event_id();
        let id2 = new_event_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_today_round_trips_through_display() {
        let d = today();
        let parsed = d.format("%Y-%m-%d").to_string().parse::<NaiveDate>();
        assert_eq!(parsed, Ok(d));
    }

    #[test]
    fn test_command_envelope_basic() {
        let envelope = command_envelope("provision", "ok", serde_json::json!({}));
        assert_eq!(envelope["cmd"], "provision");
        assert_eq!(envelope["status"], "ok");
        assert!(envelope["ts"].is_string());
        assert!(envelope["event_id"].is_string());
        assert_eq!(envelope["envelope_version"], "1.0.0");
    }

    #[test]
    fn test_command_envelope_with_extra() {
        let extra = serde_json::json!({"org_id": "test-org-001", "synced": false});
        let envelope = command_envelope("provision", "ok", extra);
        assert_eq!(envelope["org_id"], "test-org-001");
        assert_eq!(envelope["synced"], false);
    }
}
