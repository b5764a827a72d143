use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

static SAVPROP_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_savprop(args: &[&str]) -> Output {
	Command::new(savprop_bin()).args(args).output().expect("savprop command executes")
}

pub(crate) fn run_savprop_json(args: &[&str]) -> serde_json::Value {
	let output = run_savprop(args);
	assert!(
		output.status.success(),
		"savprop command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn savprop_bin() -> &'static PathBuf {
	SAVPROP_BIN.get_or_init(resolve_savprop_bin)
}

fn resolve_savprop_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_savprop") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| manifest_dir.join("target"));

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "savprop.exe" } else { "savprop" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "savprop"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build savprop binary at {}", bin.display());

	bin
}
