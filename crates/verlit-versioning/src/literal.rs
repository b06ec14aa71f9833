//! ---
//! vl_section: "02-version-literal"
//! vl_subsection: "module"
//! vl_type: "source"
//! vl_scope: "code"
//! vl_description: "Version literal extraction, rewriting and build metadata."
//! vl_version: "v0.0.0-prealpha"
//! vl_owner: "tbd"
//! ---
//! Extraction and rewriting of `"version": (a, b, c),` literals.
//!
//! Only the first literal in a document is ever read or replaced. Patterns are
//! compiled once per process and every call performs a fresh search.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};
use tracing::debug;

use crate::error::{Result, VersionError};

const MULTI_PATTERN: &str = r#""version": \(([0-9]+), ([0-9]+), ([0-9]+)\),"#;
const SINGLE_PATTERN: &str = r#""version": \(([0-9]), ([0-9]), ([0-9])\),"#;

static MULTI_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(MULTI_PATTERN).expect("multi-digit literal pattern compiles"));
static SINGLE_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(SINGLE_PATTERN).expect("single-digit literal pattern compiles"));

/// How many digits a single version component may span.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DigitPolicy {
    /// Exactly one digit per component, e.g. `(1, 2, 3)`.
    Single,
    /// One or more digits per component, e.g. `(12, 345, 6)`.
    #[default]
    Multi,
}

impl DigitPolicy {
    fn regex(self) -> &'static Regex {
        match self {
            DigitPolicy::Single => &SINGLE_DIGIT,
            DigitPolicy::Multi => &MULTI_DIGIT,
        }
    }

    /// Readable description of the literal this policy matches.
    pub fn describe(self) -> &'static str {
        match self {
            DigitPolicy::Single => r#""version": (<d>, <d>, <d>),"#,
            DigitPolicy::Multi => r#""version": (<d+>, <d+>, <d+>),"#,
        }
    }
}

impl fmt::Display for DigitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Three verbatim digit runs making up a version.
///
/// Components are kept as written so that a literal such as `(1, 02, 3)` is
/// reproduced exactly when written back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionTriple {
    major: String,
    minor: String,
    patch: String,
}

impl VersionTriple {
    /// Parse a dot-joined version, enforcing the digit policy.
    pub fn parse(input: &str, policy: DigitPolicy) -> Result<Self> {
        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionError::MalformedVersion {
                input: input.to_owned(),
                reason: format!("expected 3 dot-separated components, found {}", parts.len()),
            });
        }
        for part in &parts {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VersionError::MalformedVersion {
                    input: input.to_owned(),
                    reason: format!("component '{part}' is not a non-negative integer"),
                });
            }
            if policy == DigitPolicy::Single && part.len() > 1 {
                return Err(VersionError::ComponentTooWide {
                    input: input.to_owned(),
                    component: (*part).to_owned(),
                });
            }
        }
        Ok(Self {
            major: parts[0].to_owned(),
            minor: parts[1].to_owned(),
            patch: parts[2].to_owned(),
        })
    }

    /// Major component as written.
    pub fn major(&self) -> &str {
        &self.major
    }

    /// Minor component as written.
    pub fn minor(&self) -> &str {
        &self.minor
    }

    /// Patch component as written.
    pub fn patch(&self) -> &str {
        &self.patch
    }

    /// Render the embedded form, `"version": (a, b, c),`.
    pub fn to_literal(&self) -> String {
        format!(
            "\"version\": ({}, {}, {}),",
            self.major, self.minor, self.patch
        )
    }

    pub(crate) fn from_parts(major: String, minor: String, patch: String) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for VersionTriple {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, DigitPolicy::Multi)
    }
}

/// Outcome of a replacement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Resulting document text. Equal to the input when nothing matched.
    pub text: String,
    /// Whether a literal was found and replaced.
    pub matched: bool,
    /// Version that was present before the replacement.
    pub previous: Option<VersionTriple>,
}

impl Replacement {
    /// True when the document text differs from the input.
    pub fn changed(&self, original: &str) -> bool {
        self.text != original
    }
}

/// Compiled matcher for a version literal under a given digit policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionLiteral {
    policy: DigitPolicy,
}

impl VersionLiteral {
    /// Matcher for the given policy.
    pub fn new(policy: DigitPolicy) -> Self {
        Self { policy }
    }

    /// Policy this matcher enforces.
    pub fn policy(&self) -> DigitPolicy {
        self.policy
    }

    /// Locate the first literal and return its components.
    pub fn find(&self, text: &str) -> Option<VersionTriple> {
        let (_, [major, minor, patch]) = self.policy.regex().captures(text)?.extract();
        Some(VersionTriple::from_parts(
            major.to_owned(),
            minor.to_owned(),
            patch.to_owned(),
        ))
    }

    /// Return the first literal's version joined by `.`.
    pub fn read(&self, text: &str) -> Result<String> {
        match self.find(text) {
            Some(version) => {
                debug!(policy = %self.policy, version = %version, "version literal found");
                Ok(version.to_string())
            }
            None => {
                debug!(policy = %self.policy, "version literal missing");
                Err(self.not_found())
            }
        }
    }

    /// Replace the first literal with `version`, reporting whether it matched.
    pub fn replace(&self, text: &str, version: &str) -> Result<Replacement> {
        let next = VersionTriple::parse(version, self.policy)?;
        let Some(caps) = self.policy.regex().captures(text) else {
            debug!(policy = %self.policy, "no literal to replace");
            return Ok(Replacement {
                text: text.to_owned(),
                matched: false,
                previous: None,
            });
        };
        let whole = caps.get_match();
        let (_, [major, minor, patch]) = caps.extract();
        let previous =
            VersionTriple::from_parts(major.to_owned(), minor.to_owned(), patch.to_owned());
        let mut out = String::with_capacity(text.len() + 8);
        out.push_str(&text[..whole.start()]);
        out.push_str(&next.to_literal());
        out.push_str(&text[whole.end()..]);
        debug!(policy = %self.policy, from = %previous, to = %next, "version literal rewritten");
        Ok(Replacement {
            text: out,
            matched: true,
            previous: Some(previous),
        })
    }

    /// Rewrite the first literal, leaving the text unchanged when none exists.
    pub fn write(&self, text: &str, version: &str) -> Result<String> {
        Ok(self.replace(text, version)?.text)
    }

    /// Rewrite the first literal, failing when none exists.
    pub fn write_strict(&self, text: &str, version: &str) -> Result<String> {
        let replacement = self.replace(text, version)?;
        if !replacement.matched {
            return Err(self.not_found());
        }
        Ok(replacement.text)
    }

    fn not_found(&self) -> VersionError {
        VersionError::LiteralNotFound {
            pattern: self.policy.describe(),
        }
    }
}

/// Read the first multi-digit version literal from `text`.
pub fn read_version(text: &str) -> Result<String> {
    VersionLiteral::default().read(text)
}

/// Rewrite the first multi-digit version literal; no-op when absent.
pub fn write_version(text: &str, version: &str) -> Result<String> {
    VersionLiteral::default().write(text, version)
}

/// Rewrite the first multi-digit version literal; error when absent.
pub fn write_version_strict(text: &str, version: &str) -> Result<String> {
    VersionLiteral::default().write_strict(text, version)
}

/// Rewrite the first multi-digit version literal and report what happened.
pub fn replace_version(text: &str, version: &str) -> Result<Replacement> {
    VersionLiteral::default().replace(text, version)
}
