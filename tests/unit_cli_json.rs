#![allow(missing_docs)]

mod support;

use std::process::Command;

use serde_json::Value;

#[test]
fn decode_json_output_is_valid_and_structured() {
	let path = support::temp_file("decode-json", &support::sample_list());
	let json = run_json(&["decode", path.to_str().expect("utf-8 temp path"), "--json", "--strict-layout"]);

	assert_eq!(json["compression"], "none");
	assert_eq!(json["trailing"], 0);
	let properties = json["properties"].as_array().expect("properties array");
	assert_eq!(properties.len(), 4);

	assert_eq!(properties[0]["name"], "mHealth");
	assert_eq!(properties[0]["type"], "IntProperty");
	assert_eq!(properties[0]["value"], 250);

	let counts = &properties[1]["value"];
	assert_eq!(counts["type"], "ArrayProperty");
	assert_eq!(counts["fields"]["element_type"], "IntProperty");
	assert_eq!(counts["fields"]["elements"], serde_json::json!([10, 20, 30]));

	let reference = &properties[2]["value"]["fields"]["elements"][0];
	assert_eq!(reference["level"], "Persistent_Level");

	let positions = &properties[3]["value"]["fields"];
	assert_eq!(positions["struct_type"], "Vector");
	assert_eq!(positions["elements"][1]["fields"]["z"], 6.0);
}

#[test]
fn info_reports_record_counts() {
	let path = support::temp_file("info", &support::sample_list());
	let output = Command::new(env!("CARGO_BIN_EXE_savprop"))
		.args(["info", path.to_str().expect("utf-8 temp path")])
		.output()
		.expect("command executes");

	assert!(output.status.success(), "command should succeed");
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("property_count: 4"), "unexpected output: {stdout}");
	assert!(stdout.contains("array_elements: 6"), "unexpected output: {stdout}");
	assert!(stdout.contains("  ArrayProperty: 3"), "unexpected output: {stdout}");
}

#[test]
fn decode_failure_exits_nonzero_with_message() {
	let mut raw = support::sample_list();
	raw.truncate(10);
	let path = support::temp_file("truncated", &raw);
	let output = Command::new(env!("CARGO_BIN_EXE_savprop"))
		.args(["decode", path.to_str().expect("utf-8 temp path")])
		.output()
		.expect("command executes");

	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: "));
}

fn run_json(args: &[&str]) -> Value {
	let output = Command::new(env!("CARGO_BIN_EXE_savprop")).args(args).output().expect("command executes");

	assert!(
		output.status.success(),
		"command should succeed: {}",
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
