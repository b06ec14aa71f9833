//! ---
//! vl_section: "05-external-interfaces"
//! vl_subsection: "integration-tests"
//! vl_type: "source"
//! vl_scope: "code"
//! vl_description: "Control CLI for reading and synchronising version literals."
//! vl_version: "v0.0.0-prealpha"
//! vl_owner: "tbd"
//! ---
use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::tempdir;

const INIT_PY: &str = "bl_info = {\n    \"name\": \"ND\",\n    \"version\": (1, 27, 0),\n    \"blender\": (3, 0, 0),\n}\n";

fn verlitctl(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("verlitctl").unwrap();
    cmd.current_dir(cwd)
        .env_remove("VERLIT_CONFIG")
        .env("VERLIT_LOG", "error");
    cmd
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

#[test]
fn read_prints_dotted_version() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("__init__.py"), INIT_PY).unwrap();
    verlitctl(dir.path())
        .args(["read", "__init__.py"])
        .assert()
        .success()
        .stdout("1.27.0\n");
}

#[test]
fn read_json_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("__init__.py"), INIT_PY).unwrap();
    let assert = verlitctl(dir.path())
        .args(["read", "__init__.py", "--json"])
        .assert()
        .success();
    assert!(stdout_of(&assert).contains("\"version\":\"1.27.0\""));
}

#[test]
fn read_fails_without_literal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("plain.py"), "print('hi')\n").unwrap();
    let assert = verlitctl(dir.path())
        .args(["read", "plain.py"])
        .assert()
        .failure();
    assert!(stderr_of(&assert).contains("no version literal found"));
}

#[test]
fn write_rewrites_in_place() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("__init__.py");
    fs::write(&file, INIT_PY).unwrap();
    verlitctl(dir.path())
        .args(["write", "__init__.py", "1.28.2"])
        .assert()
        .success()
        .stdout("1.27.0 -> 1.28.2\n");
    let updated = fs::read_to_string(&file).unwrap();
    assert!(updated.contains("\"version\": (1, 28, 2),"));
    assert!(updated.contains("\"blender\": (3, 0, 0),"));
}

#[test]
fn write_dry_run_leaves_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("__init__.py");
    fs::write(&file, INIT_PY).unwrap();
    verlitctl(dir.path())
        .args(["write", "__init__.py", "2.0.0", "--dry-run"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&file).unwrap(), INIT_PY);
}

#[test]
fn write_missing_literal_needs_opt_in() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("plain.py"), "x = 1\n").unwrap();
    verlitctl(dir.path())
        .args(["write", "plain.py", "1.0.0"])
        .assert()
        .failure();
    verlitctl(dir.path())
        .args(["write", "plain.py", "1.0.0", "--allow-missing"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(dir.path().join("plain.py")).unwrap(), "x = 1\n");
}

#[test]
fn write_rejects_malformed_version() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("__init__.py"), INIT_PY).unwrap();
    let assert = verlitctl(dir.path())
        .args(["write", "__init__.py", "1.2"])
        .assert()
        .failure();
    assert!(stderr_of(&assert).contains("malformed version"));
}

#[test]
fn single_policy_rejects_wide_version() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("__init__.py"), "\"version\": (1, 2, 3),").unwrap();
    let assert = verlitctl(dir.path())
        .args(["write", "__init__.py", "1.10.0", "--policy", "single"])
        .assert()
        .failure();
    assert!(stderr_of(&assert).contains("exceeds a single digit"));
}

#[test]
fn bump_minor_resets_patch() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("__init__.py");
    fs::write(&file, INIT_PY.replace("(1, 27, 0)", "(1, 27, 4)")).unwrap();
    verlitctl(dir.path())
        .args(["bump", "__init__.py", "minor"])
        .assert()
        .success()
        .stdout("1.28.0\n");
    assert!(fs::read_to_string(&file)
        .unwrap()
        .contains("\"version\": (1, 28, 0),"));
}

#[test]
fn sync_and_check_round_trip() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("addon")).unwrap();
    fs::write(root.join("addon/__init__.py"), INIT_PY).unwrap();
    fs::write(root.join("manifest.py"), "meta = {\"version\": (1, 26, 9),}\n").unwrap();
    fs::write(root.join("notes.py"), "# nothing here\n").unwrap();
    fs::write(
        root.join("verlit.toml"),
        r#"
version = "1.28.0"

[targets.addon]
path = "addon/__init__.py"

[targets.manifest]
path = "manifest.py"

[targets.notes]
path = "notes.py"
required = false
"#,
    )
    .unwrap();

    let assert = verlitctl(root).arg("check").assert().failure();
    assert!(stdout_of(&assert).contains("addon\tmismatch\t1.27.0"));

    let assert = verlitctl(root).arg("sync").assert().success();
    let out = stdout_of(&assert);
    assert!(out.contains("addon\tupdated"));
    assert!(out.contains("notes\tskipped"));

    let assert = verlitctl(root).arg("check").assert().success();
    assert!(stdout_of(&assert).contains("manifest\tok\t1.28.0"));

    let assert = verlitctl(root).arg("sync").assert().success();
    assert!(stdout_of(&assert).contains("addon\tunchanged"));
}

#[test]
fn sync_fails_on_required_missing_literal() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("a.py"), "\"version\": (0, 1, 0),").unwrap();
    fs::write(root.join("b.py"), "nothing").unwrap();
    fs::write(
        root.join("release.toml"),
        "[targets.a]\npath = \"a.py\"\n[targets.b]\npath = \"b.py\"\n",
    )
    .unwrap();
    let assert = verlitctl(root)
        .args(["sync", "--config", "release.toml", "--version", "0.2.0"])
        .assert()
        .failure();
    assert!(stdout_of(&assert).contains("b\tfault"));
    // Other targets are still processed.
    assert_eq!(
        fs::read_to_string(root.join("a.py")).unwrap(),
        "\"version\": (0, 2, 0),"
    );
}

#[test]
fn bump_dry_run_leaves_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("__init__.py");
    fs::write(&file, INIT_PY).unwrap();
    verlitctl(dir.path())
        .args(["bump", "__init__.py", "major", "--dry-run"])
        .assert()
        .success()
        .stdout("2.0.0\n");
    assert_eq!(fs::read_to_string(&file).unwrap(), INIT_PY);
}

#[test]
fn sync_dry_run_reports_without_writing() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("__init__.py"), INIT_PY).unwrap();
    fs::write(
        root.join("verlit.toml"),
        "version = \"1.28.0\"\n[targets.addon]\npath = \"__init__.py\"\n",
    )
    .unwrap();
    let assert = verlitctl(root)
        .args(["sync", "--dry-run"])
        .assert()
        .success();
    assert!(stdout_of(&assert).contains("addon\twould-update"));
    assert_eq!(fs::read_to_string(root.join("__init__.py")).unwrap(), INIT_PY);
}

#[test]
fn on_missing_skip_applies_to_sync_and_check() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("a.py"), "\"version\": (0, 1, 0),").unwrap();
    fs::write(root.join("b.py"), "nothing").unwrap();
    fs::write(
        root.join("verlit.toml"),
        "on_missing = \"skip\"\n[targets.a]\npath = \"a.py\"\n[targets.b]\npath = \"b.py\"\n",
    )
    .unwrap();

    let assert = verlitctl(root)
        .args(["sync", "--version", "0.2.0", "--dry-run"])
        .assert()
        .success();
    let out = stdout_of(&assert);
    assert!(out.contains("a\twould-update"));
    assert!(out.contains("b\tskipped"));
    assert_eq!(
        fs::read_to_string(root.join("a.py")).unwrap(),
        "\"version\": (0, 1, 0),"
    );

    let assert = verlitctl(root).arg("check").assert().success();
    let out = stdout_of(&assert);
    assert!(out.contains("a\tok\t0.1.0"));
    assert!(out.contains("b\tskipped\t-"));
}

#[test]
fn check_lists_every_target_when_one_is_unreadable() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("a.py"), "\"version\": (0, 1, 0),").unwrap();
    fs::write(root.join("c.py"), "\"version\": (0, 1, 0),").unwrap();
    fs::write(
        root.join("verlit.toml"),
        "[targets.a]\npath = \"a.py\"\n[targets.gone]\npath = \"gone.py\"\n[targets.c]\npath = \"c.py\"\n",
    )
    .unwrap();
    let assert = verlitctl(root).arg("check").assert().failure();
    let out = stdout_of(&assert);
    assert!(out.contains("a\tok\t0.1.0"));
    assert!(out.contains("gone\tfault\t-"));
    assert!(out.contains("c\tok\t0.1.0"));
    assert!(stderr_of(&assert).contains("1 of 3 targets out of sync"));
}

#[test]
fn scan_lists_files_with_literals() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("pkg")).unwrap();
    fs::write(dir.path().join("pkg/__init__.py"), INIT_PY).unwrap();
    fs::write(dir.path().join("other.py"), "pass").unwrap();
    let assert = verlitctl(dir.path()).arg("scan").assert().success();
    let out = stdout_of(&assert);
    assert!(out.contains("1.27.0\t"));
    assert!(!out.contains("other.py"));
}

#[test]
fn extended_version_flag() {
    let dir = tempdir().unwrap();
    let assert = verlitctl(dir.path()).arg("-V").assert().success();
    assert!(stdout_of(&assert).starts_with("verlit v"));
}

#[test]
fn scan_json_output() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("pkg")).unwrap();
    fs::write(dir.path().join("pkg/__init__.py"), INIT_PY).unwrap();
    fs::write(dir.path().join("other.py"), "pass").unwrap();
    let assert = verlitctl(dir.path())
        .args(["scan", ".", "--json"])
        .assert()
        .success();
    let findings: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let findings = findings.as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["version"], "1.27.0");
    assert!(findings[0]["path"]
        .as_str()
        .unwrap()
        .ends_with("__init__.py"));
}
