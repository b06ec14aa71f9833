//! ---
//! vl_section: "02-version-literal"
//! vl_subsection: "module"
//! vl_type: "source"
//! vl_scope: "code"
//! vl_description: "Version literal extraction, rewriting and build metadata."
//! vl_version: "v0.0.0-prealpha"
//! vl_owner: "tbd"
//! ---
use semver::Version;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::error::{Result, VersionError};
use crate::literal::{DigitPolicy, VersionTriple};

/// Version component to increment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Component {
    /// Increment major, reset minor and patch.
    Major,
    /// Increment minor, reset patch.
    Minor,
    /// Increment patch.
    Patch,
}

fn numeric(component: &str) -> Result<u64> {
    component.parse::<u64>().map_err(|_| VersionError::Overflow {
        component: component.to_owned(),
    })
}

fn incremented(component: &str) -> Result<u64> {
    numeric(component)?
        .checked_add(1)
        .ok_or_else(|| VersionError::Overflow {
            component: component.to_owned(),
        })
}

/// Increment one component of a dot-joined version.
///
/// Lower components reset to zero. The result is re-validated against
/// `policy`, so bumping `1.2.9` under [`DigitPolicy::Single`] fails rather than
/// producing a literal the single-digit matcher cannot read back.
pub fn bump_version(current: &str, component: Component, policy: DigitPolicy) -> Result<String> {
    let triple = VersionTriple::parse(current, policy)?;
    let major = numeric(triple.major())?;
    let minor = numeric(triple.minor())?;
    let next = match component {
        Component::Major => Version::new(incremented(triple.major())?, 0, 0),
        Component::Minor => Version::new(major, incremented(triple.minor())?, 0),
        Component::Patch => Version::new(major, minor, incremented(triple.patch())?),
    };
    let rendered = next.to_string();
    VersionTriple::parse(&rendered, policy)?;
    Ok(rendered)
}
