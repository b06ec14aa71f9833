//! ---
//! vl_section: "01-core-functionality"
//! vl_subsection: "module"
//! vl_type: "source"
//! vl_scope: "code"
//! vl_description: "Shared primitives and utilities for verlit tooling."
//! vl_version: "v0.0.0-prealpha"
//! vl_owner: "tbd"
//! ---
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;
use path_absolutize::Absolutize;
use serde::{Deserialize, Serialize};
use tracing::debug;
use verlit_versioning::{DigitPolicy, VersionTriple};

use crate::logging::LogFormat;

/// File name probed in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "verlit.toml";

fn default_required() -> bool {
    true
}

/// Primary configuration object for version synchronisation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Canonical version written by `sync` and enforced by `check`.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub policy: DigitPolicy,
    #[serde(default)]
    pub on_missing: MissingLiteral,
    #[serde(default)]
    pub targets: IndexMap<String, TargetConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Metadata describing where an [`AppConfig`] was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedAppConfig {
    pub config: AppConfig,
    pub source: PathBuf,
}

impl LoadedAppConfig {
    /// Absolute directory relative target paths are resolved against.
    pub fn base_dir(&self) -> Result<PathBuf> {
        let source = self.source.absolutize().with_context(|| {
            format!("unable to resolve config path {}", self.source.display())
        })?;
        Ok(source
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/")))
    }

    /// Targets with paths resolved and policies defaulted.
    pub fn resolved_targets(&self) -> Result<Vec<ResolvedTarget>> {
        self.config.resolve_targets(&self.base_dir()?)
    }
}

impl AppConfig {
    pub const ENV_CONFIG_PATH: &'static str = "VERLIT_CONFIG";

    /// Load configuration from disk, respecting the `VERLIT_CONFIG` override.
    pub fn load<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        Ok(Self::load_with_source(candidates)?.config)
    }

    /// Load configuration from disk together with the effective source path.
    pub fn load_with_source<P: AsRef<Path>>(candidates: &[P]) -> Result<LoadedAppConfig> {
        if let Ok(env_path) = std::env::var(Self::ENV_CONFIG_PATH) {
            if !env_path.trim().is_empty() {
                let path = PathBuf::from(env_path);
                let config = Self::from_path(&path)?;
                return Ok(LoadedAppConfig {
                    config,
                    source: path,
                });
            }
        }

        for candidate in candidates {
            if candidate.as_ref().exists() {
                let path = candidate.as_ref().to_path_buf();
                let config = Self::from_path(&path)?;
                return Ok(LoadedAppConfig {
                    config,
                    source: path,
                });
            }
        }

        Err(anyhow!(
            "no configuration files found. inspected: {}",
            candidates
                .iter()
                .map(|p| p.as_ref().display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }

    fn from_path(path: &Path) -> Result<Self> {
        debug!(config_path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        let config = toml::from_str::<AppConfig>(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Canonical version parsed under the configured policy.
    pub fn canonical_version(&self) -> Result<Option<VersionTriple>> {
        self.version
            .as_deref()
            .map(|raw| {
                VersionTriple::parse(raw, self.policy)
                    .with_context(|| "invalid canonical version".to_string())
            })
            .transpose()
    }

    /// Validate structural invariants.
    pub fn validate(&self) -> Result<()> {
        self.canonical_version()?;
        let mut seen = HashSet::new();
        for (name, target) in &self.targets {
            target.validate(name)?;
            if !seen.insert(target.path.clone()) {
                return Err(anyhow!(
                    "target '{}' repeats path {}",
                    name,
                    target.path.display()
                ));
            }
            if let Some(version) = &self.version {
                VersionTriple::parse(version, target.policy.unwrap_or(self.policy))
                    .with_context(|| format!("canonical version does not fit target '{name}'"))?;
            }
        }
        Ok(())
    }

    /// Fail unless at least one target is declared.
    pub fn require_targets(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(anyhow!("configuration must declare at least one target"));
        }
        Ok(())
    }

    /// Resolve target paths against `base` and apply the default policy.
    pub fn resolve_targets(&self, base: &Path) -> Result<Vec<ResolvedTarget>> {
        self.targets
            .iter()
            .map(|(name, target)| {
                let path = target
                    .path
                    .absolutize_from(base)
                    .with_context(|| format!("unable to resolve path for target '{name}'"))?
                    .into_owned();
                Ok(ResolvedTarget {
                    name: name.clone(),
                    path,
                    policy: target.policy.unwrap_or(self.policy),
                    required: target.required,
                })
            })
            .collect()
    }
}

impl std::str::FromStr for AppConfig {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        let config: AppConfig =
            toml::from_str(content).with_context(|| "failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }
}

/// Behaviour when a target carries no version literal.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingLiteral {
    #[default]
    Error,
    Skip,
}

/// A file whose version literal is kept in sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub policy: Option<DigitPolicy>,
    /// Optional targets are skipped when their literal is missing, whatever
    /// `on_missing` says.
    #[serde(default = "default_required")]
    pub required: bool,
}

impl TargetConfig {
    pub fn validate(&self, name: &str) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(anyhow!("target '{}' must declare a path", name));
        }
        Ok(())
    }
}

/// Target after path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub name: String,
    pub path: PathBuf,
    pub policy: DigitPolicy,
    pub required: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default)]
    pub file_prefix: Option<String>,
}
