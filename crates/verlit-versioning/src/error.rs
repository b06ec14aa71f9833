//! ---
//! vl_section: "02-version-literal"
//! vl_subsection: "module"
//! vl_type: "source"
//! vl_scope: "code"
//! vl_description: "Version literal extraction, rewriting and build metadata."
//! vl_version: "v0.0.0-prealpha"
//! vl_owner: "tbd"
//! ---
use thiserror::Error;

/// Convenience alias for transformer results.
pub type Result<T> = std::result::Result<T, VersionError>;

/// Failures raised while reading or rewriting a version literal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The document does not contain a `"version": (a, b, c),` literal.
    #[error("no version literal found matching {pattern}")]
    LiteralNotFound {
        /// Human readable form of the pattern that was searched for.
        pattern: &'static str,
    },
    /// The supplied version string is not `<digits>.<digits>.<digits>`.
    #[error("malformed version '{input}': {reason}")]
    MalformedVersion {
        /// Version string as supplied by the caller.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
    /// A component has more digits than the active policy permits.
    #[error("version component '{component}' in '{input}' exceeds a single digit")]
    ComponentTooWide {
        /// Version string as supplied by the caller.
        input: String,
        /// Offending component.
        component: String,
    },
    /// A component overflowed while incrementing.
    #[error("version component '{component}' cannot be incremented")]
    Overflow {
        /// Offending component.
        component: String,
    },
}
