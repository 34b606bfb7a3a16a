//! Explicit runtime configuration for the workspace core.
//!
//! Configuration is resolved once at startup and passed into components by
//! value; no component reads the environment on its own. This keeps every
//! operation testable against a synthetic root and a fixture org source.

use crate::core::orgsource::SupabaseOrgSource;
use std::env;
use std::path::PathBuf;

/// Default location for per-organization workspaces.
pub const DEFAULT_WORKSPACE_ROOT: &str = "/var/fundfish/workspaces";

/// Environment keys recognized at startup.
pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
pub const ENV_SUPABASE_SERVICE_ROLE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";
pub const ENV_WORKSPACE_ROOT: &str = "FUNDFISH_WORKSPACE_ROOT";

/// Runtime configuration snapshot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory under which all workspaces live.
    pub workspace_root: PathBuf,
    /// Supabase project endpoint, if configured.
    pub supabase_url: Option<String>,
    /// Service-role credential for the organizations table, if configured.
    pub supabase_service_role_key: Option<String>,
}

impl Config {
    /// Build configuration from the process environment.
    ///
    /// Missing credentials are not an error: provisioning degrades to
    /// template-fallback profile synchronization without them.
    pub fn from_env() -> Config {
        Config {
            workspace_root: env::var(ENV_WORKSPACE_ROOT)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_WORKSPACE_ROOT)),
            supabase_url: env::var(ENV_SUPABASE_URL).ok().filter(|v| !v.is_empty()),
            supabase_service_role_key: env::var(ENV_SUPABASE_SERVICE_ROLE_KEY)
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }

    /// Configuration rooted at an explicit directory, no remote source.
    /// Intended for tests and `--create-test` flows.
    pub fn with_root(workspace_root: impl Into<PathBuf>) -> Config {
        Config {
            workspace_root: workspace_root.into(),
            supabase_url: None,
            supabase_service_role_key: None,
        }
    }

    /// Apply a CLI-level root override on top of env-sourced config.
    pub fn override_root(mut self, root: Option<PathBuf>) -> Config {
        if let Some(root) = root {
            self.workspace_root = root;
        }
        self
    }

    /// Construct the network-backed org source when both credentials are
    /// present. `None` means ProfileSynchronizer runs in fallback mode.
    pub fn org_source(&self) -> Option<SupabaseOrgSource> {
        match (&self.supabase_url, &self.supabase_service_role_key) {
            (Some(url), Some(key)) => Some(SupabaseOrgSource::new(url, key)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_root_has_no_remote_source() {
        let cfg = Config::with_root("/tmp/ws");
        assert_eq!(cfg.workspace_root, PathBuf::from("/tmp/ws"));
        assert!(cfg.org_source().is_none());
    }

    #[test]
    fn override_root_replaces_only_when_present() {
        let cfg = Config::with_root("/a").override_root(None);
        assert_eq!(cfg.workspace_root, PathBuf::from("/a"));
        let cfg = Config::with_root("/a").override_root(Some(PathBuf::from("/b")));
        assert_eq!(cfg.workspace_root, PathBuf::from("/b"));
    }
}
