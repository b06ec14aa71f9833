//! ---
//! vl_section: "05-external-interfaces"
//! vl_subsection: "binary"
//! vl_type: "source"
//! vl_scope: "code"
//! vl_description: "Control CLI for reading and synchronising version literals."
//! vl_version: "v0.0.0-prealpha"
//! vl_owner: "tbd"
//! ---
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use clap::Args;
use verlit_common::config::DEFAULT_CONFIG_FILE;
use verlit_common::{AppConfig, LoadedAppConfig, MissingLiteral, ResolvedTarget};
use verlit_logging::{log_sync_event, vl_error, LogContext, SyncOutcome};
use verlit_versioning::VersionLiteral;

use crate::fsio::{read_document, write_document};

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Configuration file listing the targets.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Version to write instead of the configured canonical one.
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,
    /// Report what would change without writing.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Configuration file listing the targets.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Load configuration, preferring `VERLIT_CONFIG`, then `--config`, then `./verlit.toml`.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedAppConfig> {
    let mut candidates = Vec::new();
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("configuration file {} does not exist", path.display());
        }
        candidates.push(path.to_path_buf());
    }
    candidates.push(PathBuf::from(DEFAULT_CONFIG_FILE));
    AppConfig::load_with_source(&candidates)
}

fn skip_missing(config: &AppConfig, target: &ResolvedTarget) -> bool {
    !target.required || config.on_missing == MissingLiteral::Skip
}

/// Write the canonical version into every configured target.
pub fn sync(args: SyncArgs, loaded: &LoadedAppConfig) -> Result<()> {
    let config = &loaded.config;
    config.require_targets()?;
    let version = args
        .version
        .or_else(|| config.version.clone())
        .ok_or_else(|| anyhow!("no version to sync: pass --version or set `version` in the config"))?;
    let targets = loaded.resolved_targets()?;

    let mut faults = 0usize;
    for target in &targets {
        let path = target.path.display().to_string();
        let ctx = LogContext::new()
            .with_target(&target.name)
            .with_file(&path)
            .with_policy(target.policy.as_ref());
        let outcome = match sync_target(config, target, &version, args.dry_run) {
            Ok(outcome) => outcome,
            Err(err) => {
                let message = format!("{err:#}");
                log_sync_event(Some(&ctx), "sync.target", &message, SyncOutcome::Fault);
                SyncOutcome::Fault
            }
        };
        if outcome != SyncOutcome::Fault {
            log_sync_event(Some(&ctx), "sync.target", &version, outcome);
        } else {
            faults += 1;
        }
        println!("{}\t{}\t{}", target.name, outcome.as_str(), path);
    }

    if faults > 0 {
        bail!("{} of {} targets failed to sync", faults, targets.len());
    }
    Ok(())
}

fn sync_target(
    config: &AppConfig,
    target: &ResolvedTarget,
    version: &str,
    dry_run: bool,
) -> Result<SyncOutcome> {
    let text = read_document(&target.path)?;
    let replacement = VersionLiteral::new(target.policy).replace(&text, version)?;
    if !replacement.matched {
        if skip_missing(config, target) {
            return Ok(SyncOutcome::Skipped);
        }
        bail!(
            "no version literal matching {} in {}",
            target.policy.describe(),
            target.path.display()
        );
    }
    if !replacement.changed(&text) {
        return Ok(SyncOutcome::Unchanged);
    }
    if dry_run {
        return Ok(SyncOutcome::WouldUpdate);
    }
    write_document(&target.path, &replacement.text)?;
    Ok(SyncOutcome::Updated)
}

/// What `check` found in one target.
enum Probe {
    Found(String),
    Missing,
    Unreadable,
}

/// Verify every configured target carries the same version.
pub fn check(loaded: &LoadedAppConfig) -> Result<()> {
    let config = &loaded.config;
    config.require_targets()?;
    let targets = loaded.resolved_targets()?;
    let canonical = config.canonical_version()?.map(|v| v.to_string());

    let mut found: Vec<(&ResolvedTarget, Probe)> = Vec::with_capacity(targets.len());
    for target in &targets {
        let probe = match read_document(&target.path) {
            Ok(text) => match VersionLiteral::new(target.policy).find(&text) {
                Some(version) => Probe::Found(version.to_string()),
                None => Probe::Missing,
            },
            Err(err) => {
                let path = target.path.display().to_string();
                let ctx = LogContext::new()
                    .with_target(&target.name)
                    .with_file(&path)
                    .with_policy(target.policy.as_ref());
                vl_error!(context = ctx, "{err:#}");
                Probe::Unreadable
            }
        };
        found.push((target, probe));
    }

    let expected = canonical.or_else(|| {
        found.iter().find_map(|(_, probe)| match probe {
            Probe::Found(version) => Some(version.clone()),
            _ => None,
        })
    });
    let mut failed = 0usize;
    for (target, probe) in &found {
        let (status, version) = match probe {
            Probe::Found(version) if Some(version) == expected.as_ref() => ("ok", version.as_str()),
            Probe::Found(version) => {
                failed += 1;
                ("mismatch", version.as_str())
            }
            Probe::Missing if skip_missing(config, target) => ("skipped", "-"),
            Probe::Missing => {
                failed += 1;
                ("missing", "-")
            }
            Probe::Unreadable => {
                failed += 1;
                ("fault", "-")
            }
        };
        println!(
            "{}\t{}\t{}\t{}",
            target.name,
            status,
            version,
            target.path.display()
        );
    }

    if failed > 0 {
        bail!(
            "{} of {} targets out of sync with {}",
            failed,
            targets.len(),
            expected.as_deref().unwrap_or("<none>")
        );
    }
    if let Some(expected) = &expected {
        tracing::info!(version = %expected, targets = targets.len(), "all targets in sync");
    }
    Ok(())
}
