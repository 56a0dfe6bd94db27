//! End-to-end runs of the `escape` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const LEVEL: &str = r#"
dimensions = [6, 12]
start = [2, 2]
exit = [5, 11]

[[walls]]
type = "hline"
line = [4, 2, 8]
"#;

fn escape(cwd: &Path, args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_escape"))
		.current_dir(cwd)
		.env_remove("RUST_LOG")
		.env("XDG_CONFIG_HOME", cwd)
		.args(args)
		.output()
		.unwrap()
}

fn stdout(output: &Output) -> String {
	String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn build_validate_manifest_check_quit() {
	let tmp = TempDir::new().unwrap();
	let root = tmp.path();
	fs::create_dir_all(root.join("levels/level01")).unwrap();
	fs::write(root.join("levels/level01/level.toml"), LEVEL).unwrap();
	fs::write(root.join("escape.toml"), "[build]\npreview = false\n").unwrap();

	let built = escape(root, &["build", "levels/level01/level.toml"]);
	assert!(built.status.success(), "{built:?}");
	assert!(!stdout(&built).contains("PREVIEW"));

	let validated = escape(root, &["validate"]);
	assert!(validated.status.success(), "{validated:?}");
	assert_eq!(stdout(&validated), "✓ All levels valid\n");

	let manifest = escape(root, &["manifest"]);
	assert!(manifest.status.success(), "{manifest:?}");
	assert!(root.join("levels/manifest.vim").exists());

	let escaped = escape(root, &["check-quit", "levels/level01", "--cursor", "5:11"]);
	assert!(escaped.status.success(), "{escaped:?}");

	let blocked = escape(root, &["check-quit", "levels/level01", "--cursor", "2:2"]);
	assert_eq!(blocked.status.code(), Some(1));
	assert!(stdout(&blocked).starts_with("Quit blocked"));
}

#[test]
fn validation_failures_exit_nonzero() {
	let tmp = TempDir::new().unwrap();
	let output = escape(tmp.path(), &["validate", "levels/level42"]);
	assert_eq!(output.status.code(), Some(1));
	assert!(stdout(&output).starts_with("VALIDATION ERRORS:"));
}

#[test]
fn logs_stay_off_stdout() {
	let tmp = TempDir::new().unwrap();
	fs::create_dir(tmp.path().join("levels")).unwrap();
	let output = escape(tmp.path(), &["-v", "manifest"]);
	assert!(output.status.success(), "{output:?}");
	assert!(stdout(&output).starts_with("Written: "));
	assert!(String::from_utf8_lossy(&output.stderr).contains("wrote manifest"));
}

#[test]
fn bad_config_is_reported() {
	let tmp = TempDir::new().unwrap();
	fs::write(tmp.path().join("escape.toml"), "levels_dir = 3").unwrap();
	let output = escape(tmp.path(), &["validate"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("invalid config"));
}
