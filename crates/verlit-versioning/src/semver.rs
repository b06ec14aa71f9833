//! ---
//! vl_section: "02-version-literal"
//! vl_subsection: "module"
//! vl_type: "source"
//! vl_scope: "code"
//! vl_description: "Version literal extraction, rewriting and build metadata."
//! vl_version: "v0.0.0-prealpha"
//! vl_owner: "tbd"
//! ---
use serde::Serialize;

/// Compile-time version metadata captured via `vergen` in the binary build script.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    /// Tool semantic version.
    pub semver: String,
    /// Git commit hash captured at build time.
    pub git_sha: String,
    /// Build timestamp from the compilation environment.
    pub build_timestamp: String,
    /// Target triple used for the build.
    pub target: String,
    /// Cargo profile used during compilation.
    pub profile: String,
}

impl VersionInfo {
    /// Construct from explicit values, substituting `UNKNOWN` for missing ones.
    ///
    /// The `option_env!` lookups must happen in the crate whose build script
    /// emits them, so binaries call this with their own environment.
    #[must_use]
    pub fn from_env(
        semver: &str,
        git_sha: Option<&str>,
        build_timestamp: Option<&str>,
        target: Option<&str>,
        profile: Option<&str>,
    ) -> Self {
        let known = |value: Option<&str>| value.unwrap_or("UNKNOWN").to_owned();
        Self {
            semver: semver.to_owned(),
            git_sha: known(git_sha),
            build_timestamp: known(build_timestamp),
            target: known(target),
            profile: known(profile),
        }
    }

    /// Returns a concise CLI string combining semantic version and git hash.
    #[must_use]
    pub fn cli_string(&self) -> String {
        format!("{} ({})", self.semver, self.git_sha)
    }

    /// Human readable banner used in logging surfaces.
    #[must_use]
    pub fn banner(&self) -> String {
        format!("verlit v{} (git {})", self.semver, self.git_sha)
    }

    /// Extended string containing build metadata suitable for `--version` flags.
    #[must_use]
    pub fn extended(&self) -> String {
        format!(
            "{banner}\nBuilt: {built}\nTarget: {target}\nProfile: {profile}",
            banner = self.banner(),
            built = self.build_timestamp,
            target = self.target,
            profile = self.profile
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extended_contains_semver() {
        let info = VersionInfo::from_env("0.3.1", Some("abc123"), None, None, None);
        let extended = info.extended();
        assert!(extended.contains("0.3.1"));
        assert!(extended.contains("abc123"));
        assert!(extended.contains("Built: UNKNOWN"));
    }

    #[test]
    fn serializes_for_machine_output() {
        let info = VersionInfo::from_env("1.0.0", None, None, Some("x86_64"), Some("release"));
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["target"], "x86_64");
        assert_eq!(json["git_sha"], "UNKNOWN");
    }
}
