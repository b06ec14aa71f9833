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
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Read a document as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("unable to read {}", path.display()))
}

/// Replace a document's contents through a sibling temp file and rename.
///
/// The original file's permissions carry over to the replacement.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(path)
        .with_context(|| format!("unable to stat {}", path.display()))?
        .permissions();
    let mut staged = NamedTempFile::new_in(parent)
        .with_context(|| format!("unable to stage a write in {}", parent.display()))?;
    staged
        .write_all(contents.as_bytes())
        .with_context(|| format!("unable to stage contents for {}", path.display()))?;
    staged.as_file().set_permissions(permissions)?;
    staged
        .persist(path)
        .with_context(|| format!("unable to replace {}", path.display()))?;
    Ok(())
}
