//! Fundfish workspace core.
//!
//! **A local-first lifecycle manager for per-organization agent workspaces.**
//!
//! Each nonprofit the agent runtime works for gets one workspace: a
//! file-system state tree holding its profile, style and tooling notes, an
//! append-only memory journal, grant-tracking areas, proposals, and an
//! archive. This crate owns that tree's lifecycle — nothing else.
//!
//! # Core Principles
//!
//! - **Idempotent provisioning**: `ensure` creates what is missing and
//!   never overwrites what exists; re-running is always safe
//! - **Degrade, don't fail**: an unreachable org database falls back to the
//!   embedded profile template and provisioning still succeeds
//! - **Append-only memory**: journal and decision writes never rewrite
//!   earlier content
//! - **Archive, never delete**: retention moves aged state into `archive/`
//!   with content preserved byte-for-byte
//!
//! # Lifecycle
//!
//! ```bash
//! # Provision a workspace (profile synced from the org database when
//! # SUPABASE_URL / SUPABASE_SERVICE_ROLE_KEY are configured)
//! fundfish provision acme-food-bank
//!
//! # Provision a synthetic organization for testing
//! fundfish provision --create-test
//!
//! # Enumerate workspaces
//! fundfish list
//!
//! # Archive sessions older than 30 days and daily files beyond the 90
//! # most recent
//! fundfish cleanup acme-food-bank
//! ```
//!
//! # Crate Structure
//!
//! - [`core`]: error taxonomy, configuration, path resolution, the org
//!   config source interface, embedded templates
//! - [`plugins`]: lifecycle subsystems (scaffold, profile, journal,
//!   retention, registry, provision)

pub mod core;
pub mod plugins;

mod cli;
mod subsystems;

use crate::cli::{Cli, Command};
use crate::core::config::Config;
use crate::core::error::FundfishError;
use crate::core::orgsource::UnavailableOrgSource;
use crate::core::{output, time, workspace::Workspace};
use crate::plugins::{provision, registry, retention, scaffold};
use clap::Parser;
use colored::Colorize;
use std::time::SystemTime;

fn run_provision(config: &Config, args: cli::ProvisionCli) -> Result<(), FundfishError> {
    let summary = if args.create_test {
        provision::provision_test_org(config)?
    } else {
        // org_id presence is enforced by clap when --create-test is absent.
        let org_id = args.org_id.ok_or_else(|| {
            FundfishError::InvalidArgument("org_id is required without --create-test".to_string())
        })?;
        match config.org_source() {
            Some(source) => provision::provision(config, &source, &org_id)?,
            None => provision::provision(config, &UnavailableOrgSource, &org_id)?,
        }
    };

    let status = if summary.synced { "ok" } else { "degraded" };
    println!(
        "{}",
        time::command_envelope(
            "provision",
            status,
            serde_json::to_value(&summary).unwrap_or_default()
        )
    );
    Ok(())
}

fn run_list(config: &Config, args: cli::ListCli) -> Result<(), FundfishError> {
    let workspaces = registry::list_sorted(&config.workspace_root)?;
    if args.format == "json" {
        let items: Vec<serde_json::Value> = workspaces
            .iter()
            .map(|w| serde_json::json!({ "org_id": w.org_id, "path": w.root }))
            .collect();
        println!(
            "{}",
            time::command_envelope("list", "ok", serde_json::json!({ "workspaces": items }))
        );
        return Ok(());
    }

    if workspaces.is_empty() {
        println!(
            "No workspaces under {}",
            config.workspace_root.display()
        );
        return Ok(());
    }
    println!(
        "{} workspace(s) under {}:",
        workspaces.len(),
        config.workspace_root.display()
    );
    for ws in &workspaces {
        println!("  {}  {}", ws.org_id.bold(), ws.root.display());
    }
    Ok(())
}

fn run_cleanup(config: &Config, args: cli::CleanupCli) -> Result<(), FundfishError> {
    let workspace = Workspace::resolve(&args.org_id, &config.workspace_root)?;
    // Skeleton existence is a precondition for retention; ensure is
    // idempotent so this is free on an initialized workspace.
    scaffold::ensure(&workspace)?;
    let report = retention::cleanup(&workspace, SystemTime::now())?;

    let status = if report.failed.is_empty() { "ok" } else { "partial" };
    println!(
        "{}",
        time::command_envelope(
            "cleanup",
            status,
            serde_json::to_value(&report).unwrap_or_default()
        )
    );
    if !report.failed.is_empty() {
        eprintln!(
            "cleanup skipped {} file(s): {}",
            report.failed.len(),
            output::preview_skipped(&report.failure_lines(), 3)
        );
    }
    Ok(())
}

fn run_capabilities(args: cli::CapabilitiesCli) {
    let manifest = subsystems::manifest();
    if args.format == "text" {
        for sub in manifest["subsystems"].as_array().into_iter().flatten() {
            println!(
                "{}  {}",
                sub["name"].as_str().unwrap_or("?").bold(),
                sub["description"].as_str().unwrap_or("")
            );
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&manifest).unwrap_or_default());
    }
}

pub fn run() -> Result<(), FundfishError> {
    let cli = Cli::parse();
    let config = Config::from_env().override_root(cli.workspace_root);

    match cli.command {
        Command::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Provision(args) => run_provision(&config, args),
        Command::List(args) => run_list(&config, args),
        Command::Cleanup(args) => run_cleanup(&config, args),
        Command::Capabilities(args) => {
            run_capabilities(args);
            Ok(())
        }
    }
}
