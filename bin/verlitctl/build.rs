//! ---
//! vl_section: "05-external-interfaces"
//! vl_subsection: "binary"
//! vl_type: "source"
//! vl_scope: "code"
//! vl_description: "Build script capturing version metadata for verlitctl."
//! vl_version: "v0.0.0-prealpha"
//! vl_owner: "tbd"
//! ---
use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Outside a git checkout vergen emits placeholder values instead of failing.
    EmitBuilder::builder()
        .all_build()
        .all_cargo()
        .all_git()
        .emit()?;
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
