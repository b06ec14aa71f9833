//! ---
//! vl_section: "01-core-functionality"
//! vl_subsection: "module"
//! vl_type: "source"
//! vl_scope: "code"
//! vl_description: "Shared primitives and utilities for verlit tooling."
//! vl_version: "v0.0.0-prealpha"
//! vl_owner: "tbd"
//! ---
//! Shared primitives for the verlit workspace.
//! This crate exposes configuration loading and tracing setup consumed by the
//! control CLI.

pub mod config;
pub mod logging;

pub use config::{
    AppConfig, LoadedAppConfig, LoggingConfig, MissingLiteral, ResolvedTarget, TargetConfig,
};
pub use logging::{init_tracing, LogFormat, LogGuard};
