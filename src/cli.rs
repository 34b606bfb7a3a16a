//! CLI struct definitions for the fundfish command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "fundfish",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fundfish workspace core: provisions and maintains the per-organization state trees the grant-writing agent runtime works in. 🐟",
    disable_version_flag = true
)]
pub(crate) struct Cli {
    /// Override the configured workspace root for any command.
    #[clap(long, global = true)]
    pub workspace_root: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Provision (or repair) an organization's workspace.
    Provision(ProvisionCli),
    /// List all workspaces under the workspace root.
    List(ListCli),
    /// Run retention cleanup for one organization's workspace.
    Cleanup(CleanupCli),
    /// Print the machine-readable subsystem manifest.
    Capabilities(CapabilitiesCli),
    /// Print version information.
    Version,
}

#[derive(clap::Args, Debug)]
pub(crate) struct ProvisionCli {
    /// Organization identifier to provision.
    #[clap(required_unless_present = "create_test", conflicts_with = "create_test")]
    pub org_id: Option<String>,
    /// Provision a synthetic test organization, bypassing the org database.
    #[clap(long)]
    pub create_test: bool,
}

#[derive(clap::Args, Debug)]
pub(crate) struct ListCli {
    /// Output format: 'text' or 'json'.
    #[clap(long, default_value = "text")]
    pub format: String,
}

#[derive(clap::Args, Debug)]
pub(crate) struct CleanupCli {
    /// Organization identifier to clean up.
    pub org_id: String,
}

#[derive(clap::Args, Debug)]
pub(crate) struct CapabilitiesCli {
    /// Output format: 'json' or 'text'.
    #[clap(long, default_value = "json")]
    pub format: String,
}
