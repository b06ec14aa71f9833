//! ---
//! vl_section: "02-version-literal"
//! vl_subsection: "module"
//! vl_type: "source"
//! vl_scope: "code"
//! vl_description: "Version literal extraction, rewriting and build metadata."
//! vl_version: "v0.0.0-prealpha"
//! vl_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Core crate exposing the version literal transformer, component bumping and
//! build metadata for the `verlitctl` binary.
//!
//! The transformer is pure: callers hand in document text and receive text
//! back. All filesystem access lives in the callers.

pub mod bump;
pub mod error;
pub mod literal;
pub mod semver;

pub use bump::{bump_version, Component};
pub use error::{Result, VersionError};
pub use literal::{
    read_version, replace_version, write_version, write_version_strict, DigitPolicy,
    Replacement, VersionLiteral, VersionTriple,
};
