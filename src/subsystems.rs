//! Subsystem registration — centralizes the plugin manifest.
//!
//! Adding a new subsystem: append one entry to `SUBSYSTEMS`.

use crate::plugins::{journal, profile, provision, registry, retention, scaffold};

pub(crate) struct Subsystem {
    pub name: &'static str,
    pub schema: fn() -> serde_json::Value,
}

/// All subsystems, in lifecycle order.
pub(crate) const SUBSYSTEMS: &[Subsystem] = &[
    Subsystem { name: "scaffold", schema: scaffold::schema },
    Subsystem { name: "profile", schema: profile::schema },
    Subsystem { name: "journal", schema: journal::schema },
    Subsystem { name: "retention", schema: retention::schema },
    Subsystem { name: "registry", schema: registry::schema },
    Subsystem { name: "provision", schema: provision::schema },
];

/// Machine-readable capability manifest for the `capabilities` command.
pub(crate) fn manifest() -> serde_json::Value {
    serde_json::json!({
        "subsystems": SUBSYSTEMS
            .iter()
            .map(|s| (s.schema)())
            .collect::<Vec<_>>()
    })
}
