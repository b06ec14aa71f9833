//! ---
//! vl_section: "05-external-interfaces"
//! vl_subsection: "binary"
//! vl_type: "source"
//! vl_scope: "code"
//! vl_description: "Control CLI for reading and synchronising version literals."
//! vl_version: "v0.0.0-prealpha"
//! vl_owner: "tbd"
//! ---
use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use verlit_common::{init_tracing, LogGuard, LoggingConfig};
use verlit_versioning::semver::VersionInfo;

mod document;
mod fsio;
mod scan;
mod sync;

#[derive(Debug, Parser)]
#[command(
    author,
    disable_version_flag = true,
    about = "Read, bump and synchronise \"version\": (a, b, c), literals",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print extended version information and exit"
    )]
    version: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Print the version literal found in a file")]
    Read(document::ReadArgs),
    #[command(about = "Rewrite the version literal in a file")]
    Write(document::WriteArgs),
    #[command(about = "Increment one component of a file's version literal")]
    Bump(document::BumpArgs),
    #[command(about = "Write the canonical version into every configured target")]
    Sync(sync::SyncArgs),
    #[command(about = "Verify every configured target carries the same version")]
    Check(sync::CheckArgs),
    #[command(about = "List files under a directory that contain a version literal")]
    Scan(scan::ScanArgs),
}

fn version_info() -> VersionInfo {
    let profile = option_env!("VERGEN_CARGO_DEBUG").map(|debug| {
        if debug == "true" {
            "debug"
        } else {
            "release"
        }
    });
    VersionInfo::from_env(
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA"),
        option_env!("VERGEN_BUILD_TIMESTAMP"),
        option_env!("VERGEN_CARGO_TARGET_TRIPLE"),
        profile,
    )
}

fn start(logging: &LoggingConfig) -> Result<LogGuard> {
    let guard = init_tracing("verlitctl", logging)?;
    tracing::debug!(version = %version_info().cli_string(), "verlitctl starting");
    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", version_info().extended());
        return Ok(());
    }
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Read(args) => {
            let _guard = start(&LoggingConfig::default())?;
            document::read(args)?;
        }
        Commands::Write(args) => {
            let _guard = start(&LoggingConfig::default())?;
            document::write(args)?;
        }
        Commands::Bump(args) => {
            let _guard = start(&LoggingConfig::default())?;
            document::bump(args)?;
        }
        Commands::Sync(args) => {
            let loaded = sync::load_config(args.config.as_deref())?;
            let _guard = start(&loaded.config.logging)?;
            sync::sync(args, &loaded)?;
        }
        Commands::Check(args) => {
            let loaded = sync::load_config(args.config.as_deref())?;
            let _guard = start(&loaded.config.logging)?;
            sync::check(&loaded)?;
        }
        Commands::Scan(args) => {
            let _guard = start(&LoggingConfig::default())?;
            scan::run(args)?;
        }
    }
    Ok(())
}
