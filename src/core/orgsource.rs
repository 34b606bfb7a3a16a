//! Organization configuration source.
//!
//! The org database is an external collaborator behind a narrow interface:
//! one fetch-by-identifier call. Two implementations exist — a PostgREST
//! client against the Supabase `organizations` table, and an in-memory
//! fixture so fallback behavior is exercised deterministically in tests and
//! in the `--create-test` flow.

use crate::core::error::FundfishError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Bounded timeout on the external fetch; expiry is treated the same as
/// source-unavailable and triggers the template fallback.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Immutable snapshot of an organization's descriptive configuration.
///
/// Not persisted independently; it exists only long enough to render
/// `PROFILE.md`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgConfig {
    pub org_id: String,
    pub name: String,
    #[serde(default)]
    pub mission: Option<String>,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub ein: Option<String>,
    #[serde(default)]
    pub annual_budget: Option<String>,
}

/// Narrow interface to wherever organization metadata lives.
pub trait OrgConfigSource {
    /// Fetch the configuration for one organization.
    ///
    /// `NotFound` means the source answered and has no such org;
    /// `SourceUnavailable` means the source could not answer at all.
    /// Both are recovered by the profile-template fallback upstream.
    fn fetch(&self, org_id: &str) -> Result<OrgConfig, FundfishError>;
}

/// PostgREST client for the Supabase `organizations` table.
pub struct SupabaseOrgSource {
    base_url: String,
    service_role_key: String,
    http: ureq::Agent,
}

impl SupabaseOrgSource {
    pub fn new(base_url: &str, service_role_key: &str) -> SupabaseOrgSource {
        SupabaseOrgSource {
            base_url: base_url.trim_end_matches('/').to_string(),
            service_role_key: service_role_key.to_string(),
            http: ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build(),
        }
    }
}

impl OrgConfigSource for SupabaseOrgSource {
    fn fetch(&self, org_id: &str) -> Result<OrgConfig, FundfishError> {
        let url = format!(
            "{}/rest/v1/organizations?org_id=eq.{}&limit=1",
            self.base_url, org_id
        );
        let response = self
            .http
            .get(&url)
            .set("apikey", &self.service_role_key)
            .set(
                "Authorization",
                &format!("Bearer {}", self.service_role_key),
            )
            .set("Accept", "application/json")
            .call();

        let response = match response {
            Ok(r) => r,
            Err(ureq::Error::Status(404, _)) => {
                return Err(FundfishError::NotFound(format!(
                    "organizations endpoint has no entry for '{}'",
                    org_id
                )));
            }
            Err(ureq::Error::Status(code, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                return Err(FundfishError::SourceUnavailable(format!(
                    "org config endpoint returned HTTP {}: {}",
                    code,
                    crate::core::output::compact_line(&body, 120)
                )));
            }
            Err(ureq::Error::Transport(t)) => {
                return Err(FundfishError::SourceUnavailable(format!(
                    "transport error reaching org config endpoint: {}",
                    t
                )));
            }
        };

        // PostgREST answers row filters with a JSON array; empty means no
        // matching organization.
        let mut rows: Vec<OrgConfig> = response.into_json().map_err(|e| {
            FundfishError::SourceUnavailable(format!("malformed org config response: {}", e))
        })?;
        match rows.pop() {
            Some(cfg) => Ok(cfg),
            None => Err(FundfishError::NotFound(format!(
                "no organization configured with org_id '{}'",
                org_id
            ))),
        }
    }
}

/// In-memory source for tests and synthetic provisioning.
#[derive(Debug, Default)]
pub struct FixtureOrgSource {
    orgs: HashMap<String, OrgConfig>,
}

impl FixtureOrgSource {
    /// Source that knows the given organizations.
    pub fn with_orgs(orgs: impl IntoIterator<Item = OrgConfig>) -> FixtureOrgSource {
        FixtureOrgSource {
            orgs: orgs
                .into_iter()
                .map(|o| (o.org_id.clone(), o))
                .collect(),
        }
    }

    /// Source that answers `NotFound` for every identifier.
    pub fn empty() -> FixtureOrgSource {
        FixtureOrgSource::default()
    }
}

impl OrgConfigSource for FixtureOrgSource {
    fn fetch(&self, org_id: &str) -> Result<OrgConfig, FundfishError> {
        self.orgs.get(org_id).cloned().ok_or_else(|| {
            FundfishError::NotFound(format!("no fixture organization '{}'", org_id))
        })
    }
}

/// Source that always fails as unreachable. Exercises the degraded path the
/// same way a dead network or missing credentials would.
pub struct UnavailableOrgSource;

impl OrgConfigSource for UnavailableOrgSource {
    fn fetch(&self, _org_id: &str) -> Result<OrgConfig, FundfishError> {
        Err(FundfishError::SourceUnavailable(
            "org config source not configured".to_string(),
        ))
    }
}
