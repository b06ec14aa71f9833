//! ---
//! vl_section: "05-external-interfaces"
//! vl_subsection: "binary"
//! vl_type: "source"
//! vl_scope: "code"
//! vl_description: "Control CLI for reading and synchronising version literals."
//! vl_version: "v0.0.0-prealpha"
//! vl_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;
use tracing::debug;
use verlit_logging::{vl_debug, LogContext};
use verlit_versioning::{DigitPolicy, VersionLiteral};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Directory to search.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
    /// Maximum directory depth to descend.
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
    /// Digits allowed per version component.
    #[arg(long, value_name = "single|multi", default_value_t = DigitPolicy::Multi)]
    pub policy: DigitPolicy,
    /// Emit a JSON array instead of tab-separated lines.
    #[arg(long)]
    pub json: bool,
}

/// A file that carries a version literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub path: PathBuf,
    pub version: String,
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.') || name == "target")
            .unwrap_or(false)
}

/// Walk `root` and collect every file whose text contains a version literal.
///
/// Hidden entries, `target/` directories and non UTF-8 files are skipped.
pub fn find_literals(root: &Path, max_depth: Option<usize>, policy: DigitPolicy) -> Vec<Finding> {
    let literal = VersionLiteral::new(policy);
    let mut walker = WalkDir::new(root).sort_by_file_name();
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }
    walker
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let path = entry.into_path();
            match fs::read_to_string(&path) {
                Ok(text) => literal.find(&text).map(|version| Finding {
                    path,
                    version: version.to_string(),
                }),
                Err(err) => {
                    let file = path.display().to_string();
                    let policy = literal.policy();
                    let ctx = LogContext::new()
                        .with_file(&file)
                        .with_policy(policy.as_ref());
                    vl_debug!(context = ctx, "skipping unreadable file: {}", err);
                    None
                }
            }
        })
        .collect()
}

/// List files under a directory that contain a version literal.
pub fn run(args: ScanArgs) -> Result<()> {
    if !args.dir.is_dir() {
        bail!("{} is not a directory", args.dir.display());
    }
    let findings = find_literals(&args.dir, args.max_depth, args.policy);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
    } else {
        for finding in &findings {
            println!("{}\t{}", finding.version, finding.path.display());
        }
    }
    debug!(count = findings.len(), dir = %args.dir.display(), "scan complete");
    Ok(())
}
