//! ---
//! vl_section: "05-external-interfaces"
//! vl_subsection: "binary"
//! vl_type: "source"
//! vl_scope: "code"
//! vl_description: "Control CLI for reading and synchronising version literals."
//! vl_version: "v0.0.0-prealpha"
//! vl_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use serde::Serialize;
use verlit_logging::{vl_error, vl_info, vl_warn, LogContext};
use verlit_versioning::{bump_version, Component, DigitPolicy, VersionLiteral};

use crate::fsio::{read_document, write_document};

/// Options shared by the single-file commands.
#[derive(Debug, Args)]
pub struct FileOptions {
    /// File containing the version literal.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Digits allowed per version component.
    #[arg(long, value_name = "single|multi", default_value_t = DigitPolicy::Multi)]
    pub policy: DigitPolicy,
}

#[derive(Debug, Args)]
pub struct ReadArgs {
    #[command(flatten)]
    pub target: FileOptions,
    /// Emit a JSON object instead of the bare version.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct WriteArgs {
    #[command(flatten)]
    pub target: FileOptions,
    /// New version, e.g. `1.28.0`.
    #[arg(value_name = "VERSION")]
    pub version: String,
    /// Leave the file untouched instead of failing when no literal exists.
    #[arg(long)]
    pub allow_missing: bool,
    /// Report what would change without writing.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct BumpArgs {
    #[command(flatten)]
    pub target: FileOptions,
    /// Component to increment.
    #[arg(value_name = "major|minor|patch")]
    pub component: Component,
    /// Print the next version without writing.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
struct ReadOutput<'a> {
    file: String,
    version: &'a str,
    policy: DigitPolicy,
}

/// Print the version literal found in a file.
pub fn read(args: ReadArgs) -> Result<()> {
    let FileOptions { file, policy } = args.target;
    let text = read_document(&file)?;
    let version = VersionLiteral::new(policy)
        .read(&text)
        .with_context(|| format!("cannot read version from {}", file.display()))?;
    if args.json {
        let output = ReadOutput {
            file: file.display().to_string(),
            version: &version,
            policy,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{version}");
    }
    Ok(())
}

/// Rewrite the version literal in a file.
pub fn write(args: WriteArgs) -> Result<()> {
    let FileOptions { file, policy } = args.target;
    let path = file.display().to_string();
    let ctx = LogContext::new()
        .with_file(&path)
        .with_policy(policy.as_ref());
    let text = read_document(&file)?;
    let replacement = VersionLiteral::new(policy)
        .replace(&text, &args.version)
        .with_context(|| format!("cannot write version to {}", path))?;

    if !replacement.matched {
        if args.allow_missing {
            vl_warn!(context = ctx, "no version literal; file left unchanged");
            return Ok(());
        }
        vl_error!(context = ctx, "no version literal; refusing to write {}", args.version);
        return Err(anyhow!(
            "no version literal matching {} in {}",
            policy.describe(),
            path
        ));
    }
    if replacement.changed(&text) && !args.dry_run {
        write_document(&file, &replacement.text)?;
    }
    let previous = replacement
        .previous
        .map(|v| v.to_string())
        .unwrap_or_default();
    vl_info!(
        context = ctx,
        "version {} -> {}{}",
        previous,
        args.version,
        if args.dry_run { " (dry run)" } else { "" }
    );
    println!("{previous} -> {}", args.version);
    Ok(())
}

/// Increment one component of a file's version literal.
pub fn bump(args: BumpArgs) -> Result<()> {
    let FileOptions { file, policy } = args.target;
    let path = file.display().to_string();
    let literal = VersionLiteral::new(policy);
    let text = read_document(&file)?;
    let current = literal
        .read(&text)
        .with_context(|| format!("cannot read version from {}", path))?;
    let next = bump_version(&current, args.component, policy)
        .with_context(|| format!("cannot bump {} of {}", args.component, current))?;
    if !args.dry_run {
        let updated = literal.write_strict(&text, &next)?;
        write_document(&file, &updated)?;
    }
    let ctx = LogContext::new()
        .with_file(&path)
        .with_policy(policy.as_ref());
    vl_info!(context = ctx, "bumped {} {} -> {}", args.component, current, next);
    println!("{next}");
    Ok(())
}
